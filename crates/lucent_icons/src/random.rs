//! Random icon selection

use rand::Rng;

use crate::registry::{IconName, IconRegistry};

/// Pick a uniformly random icon using the thread-local RNG
pub fn pick_random() -> IconName {
    pick_random_with(&mut rand::thread_rng())
}

/// Pick a uniformly random icon using `rng`.
///
/// Draws `u` uniformly from `[0, 1)` and takes index `floor(u * count)` of
/// the registry order, so a seeded RNG gives a reproducible sequence.
pub fn pick_random_with<R: Rng + ?Sized>(rng: &mut R) -> IconName {
    let names = IconRegistry::names();
    let u: f64 = rng.gen();
    let index = (u * names.len() as f64).floor() as usize;
    names[index.min(names.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_every_icon_eventually_picked() {
        let mut rng = StdRng::seed_from_u64(7);
        let picked: HashSet<IconName> = (0..1000).map(|_| pick_random_with(&mut rng)).collect();
        assert_eq!(picked.len(), IconName::COUNT);
        assert!(picked.iter().all(|name| IconRegistry::names().contains(name)));
    }

    #[test]
    fn test_seeded_selection_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let first: Vec<IconName> = (0..32).map(|_| pick_random_with(&mut a)).collect();
        let second: Vec<IconName> = (0..32).map(|_| pick_random_with(&mut b)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_thread_rng_stays_in_registry() {
        for _ in 0..100 {
            assert!(IconName::ALL.contains(&pick_random()));
        }
    }
}
