//! Lucent Core
//!
//! Geometry primitives for the Lucent icon toolkit:
//!
//! - **Geometry**: `Point`, `Size`, and `Rect` value types
//! - **Paths**: canvas-style `Path` with center arcs and rectangles kept as
//!   first-class commands
//! - **Path data**: SVG `d` attribute parsing into paths
//! - **Tessellation**: fill and stroke meshes via lyon
//!
//! # Example
//!
//! ```rust
//! use lucent_core::{tessellate_stroke, Path, Point, Stroke};
//! use std::f32::consts::TAU;
//!
//! let mut path = Path::from_svg_path_data("M12 2v2").unwrap();
//! path.add_path(&Path::new().arc(Point::new(12.0, 12.0), 4.0, 0.0, TAU, false));
//!
//! let mesh = tessellate_stroke(&path, &Stroke::lucide());
//! assert!(!mesh.is_empty());
//! ```

pub mod error;
pub mod geometry;
pub mod path;
mod path_data;
pub mod stroke;
pub mod tessellate;

pub use error::PathError;
pub use geometry::{Point, Rect, Size};
pub use path::{Path, PathCommand};
pub use stroke::{LineCap, LineJoin, Stroke};
pub use tessellate::{path_to_lyon_events, tessellate_fill, tessellate_stroke, TessellatedPath};
