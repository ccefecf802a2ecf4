//! Icon Paths Demo
//!
//! Builds every icon, prints its geometry summary, and tessellates a random
//! pick with the Lucide stroke.
//!
//! Run with: `RUST_LOG=lucent_icons=debug cargo run -p lucent_icons --example icon_paths`

use lucent_core::{tessellate_stroke, Stroke};
use lucent_icons::{get_icon_path, pick_random, IconRegistry};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    for &name in IconRegistry::names() {
        let Some(path) = get_icon_path(name) else {
            tracing::warn!("No path for {}", name);
            continue;
        };
        let bounds = path.bounds();
        println!(
            "{:<10} {:>3} commands  bounds ({:.2}, {:.2}) {:.2}x{:.2}",
            name,
            path.len(),
            bounds.x(),
            bounds.y(),
            bounds.width(),
            bounds.height()
        );
    }

    let pick = pick_random();
    if let Some(path) = get_icon_path(pick) {
        let mesh = tessellate_stroke(&path, &Stroke::lucide());
        println!(
            "Random pick: {} -> {} vertices, {} triangles",
            pick,
            mesh.vertices.len(),
            mesh.triangle_count()
        );
    }
}
