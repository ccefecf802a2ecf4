//! Icon path cache
//!
//! Memoizes built icon paths for the life of the cache. Each icon has its own
//! build-once slot, so concurrent first requests for the same icon still
//! construct exactly one path and every caller gets the same `Arc`.

use std::sync::{Arc, LazyLock, OnceLock};

use lucent_core::Path;

use crate::builder::{build_path_with, BuildOptions};
use crate::registry::{IconName, IconRegistry, IconSource};

/// Lazily populated map from icon name to its combined path
pub struct PathCache<S: IconSource = IconRegistry> {
    source: S,
    options: BuildOptions,
    slots: [OnceLock<Arc<Path>>; IconName::COUNT],
}

impl PathCache<IconRegistry> {
    /// Cache over the compiled-in Lucide icons
    pub fn new() -> Self {
        Self::with_options(BuildOptions::default())
    }

    /// Cache over the compiled-in Lucide icons with custom build options
    pub fn with_options(options: BuildOptions) -> Self {
        Self::with_source(IconRegistry, options)
    }
}

impl Default for PathCache<IconRegistry> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: IconSource> PathCache<S> {
    /// Cache over an arbitrary definition source
    pub fn with_source(source: S, options: BuildOptions) -> Self {
        Self {
            source,
            options,
            slots: std::array::from_fn(|_| OnceLock::new()),
        }
    }

    /// Combined path of `name`, building it on first request.
    ///
    /// Returns `None` if the source has no definition for `name`; that
    /// absence is not cached.
    pub fn get_path(&self, name: IconName) -> Option<Arc<Path>> {
        let slot = &self.slots[name.index()];

        if let Some(path) = slot.get() {
            tracing::trace!("Icon path cache hit: {}", name);
            return Some(Arc::clone(path));
        }

        let definition = self.source.definition(name)?;
        let path = slot.get_or_init(|| {
            let path = build_path_with(definition, &self.options);
            tracing::debug!("Built icon path {} ({} commands)", name, path.len());
            Arc::new(path)
        });

        Some(Arc::clone(path))
    }

    /// Combined path of the icon called `name`; `None` for names outside the
    /// icon set.
    pub fn get_path_by_name(&self, name: &str) -> Option<Arc<Path>> {
        match name.parse() {
            Ok(icon) => self.get_path(icon),
            Err(e) => {
                tracing::debug!("Icon path lookup failed: {}", e);
                None
            }
        }
    }

    /// Whether the path of `name` has already been built
    pub fn contains(&self, name: IconName) -> bool {
        self.slots[name.index()].get().is_some()
    }

    /// Number of built paths
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build options used for new entries
    pub fn options(&self) -> &BuildOptions {
        &self.options
    }
}

static GLOBAL_CACHE: LazyLock<PathCache> = LazyLock::new(PathCache::new);

/// Combined path of `name` from the process-wide cache
pub fn get_icon_path(name: IconName) -> Option<Arc<Path>> {
    GLOBAL_CACHE.get_path(name)
}

/// Combined path of the icon called `name` from the process-wide cache
pub fn get_icon_path_by_name(name: &str) -> Option<Arc<Path>> {
    GLOBAL_CACHE.get_path_by_name(name)
}
