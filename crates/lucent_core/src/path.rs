//! Canvas-style vector paths
//!
//! A [`Path`] is an ordered list of [`PathCommand`]s with the semantics of an
//! HTML canvas `Path2D`: besides the usual move/line/curve commands it keeps
//! center arcs and rectangles as first-class commands, so callers can inspect
//! exactly what was drawn (an icon circle stays an arc with its center and
//! radius rather than four anonymous Béziers).
//!
//! # Example
//!
//! ```rust
//! use lucent_core::{Path, Point, Rect};
//! use std::f32::consts::TAU;
//!
//! let mut icon = Path::from_svg_path_data("M12 2v20").unwrap();
//! icon.add_path(&Path::new().arc(Point::new(12.0, 12.0), 4.0, 0.0, TAU, false));
//! icon.add_path(&Path::new().rect(Rect::new(3.0, 3.0, 18.0, 18.0)));
//!
//! assert_eq!(icon.bounds(), Rect::new(3.0, 2.0, 18.0, 20.0));
//! ```

use std::f32::consts::{FRAC_PI_2, TAU};

use smallvec::SmallVec;

use crate::error::PathError;
use crate::geometry::{Point, Rect};
use crate::path_data;

/// Path command for building vector paths
#[derive(Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Move to a point, starting a new subpath
    MoveTo(Point),
    /// Line to a point
    LineTo(Point),
    /// Quadratic Bézier curve
    QuadTo { control: Point, end: Point },
    /// Cubic Bézier curve
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Canvas center arc. Joins the open subpath with a line to the arc
    /// start, or starts a new subpath there if none is open.
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        counter_clockwise: bool,
    },
    /// Closed axis-aligned rectangle subpath
    Rect(Rect),
    /// Close the current subpath
    Close,
}

/// Point on a circle at the given angle (radians, y down)
pub(crate) fn point_on_circle(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Signed sweep of a canvas arc.
///
/// Clockwise sweeps land in `[0, 2π]`, counter-clockwise ones in `[-2π, 0]`.
/// A requested sweep of a full turn or more is clamped to exactly one turn.
pub(crate) fn arc_sweep(start_angle: f32, end_angle: f32, counter_clockwise: bool) -> f32 {
    let delta = end_angle - start_angle;
    if counter_clockwise {
        if -delta >= TAU {
            -TAU
        } else {
            -(-delta).rem_euclid(TAU)
        }
    } else if delta >= TAU {
        TAU
    } else {
        delta.rem_euclid(TAU)
    }
}

/// Approximate a canvas arc with cubic Béziers of at most a quarter turn each.
///
/// Returns `(control1, control2, end)` triples starting from the arc's start
/// point.
pub(crate) fn arc_to_cubics(
    center: Point,
    radius: f32,
    start_angle: f32,
    sweep: f32,
) -> SmallVec<[(Point, Point, Point); 4]> {
    let mut curves = SmallVec::new();

    // NaN sweeps fall through to a single (degenerate) segment
    let segments = ((sweep.abs() / FRAC_PI_2).ceil() as usize).max(1);
    let step = sweep / segments as f32;
    let k = 4.0 / 3.0 * (step / 4.0).tan() * radius;

    let mut angle = start_angle;
    for _ in 0..segments {
        let next = angle + step;
        let (sin0, cos0) = angle.sin_cos();
        let (sin1, cos1) = next.sin_cos();

        let from = point_on_circle(center, radius, angle);
        let to = point_on_circle(center, radius, next);
        let control1 = Point::new(from.x - k * sin0, from.y + k * cos0);
        let control2 = Point::new(to.x + k * sin1, to.y - k * cos1);

        curves.push((control1, control2, to));
        angle = next;
    }

    curves
}

/// A vector path
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Create a path from a vector of commands
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Parse SVG path data (the `d` attribute grammar) into a path
    pub fn from_svg_path_data(data: &str) -> Result<Self, PathError> {
        let mut path = Self::new();
        path.append_svg_path_data(data)?;
        Ok(path)
    }

    /// Append parsed SVG path data to this path.
    ///
    /// On a syntax error the segments parsed before the error are kept and
    /// the error is returned.
    pub fn append_svg_path_data(&mut self, data: &str) -> Result<(), PathError> {
        path_data::parse_into(data, &mut self.commands)
    }

    /// Move to a point
    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    /// Line to a point
    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    /// Quadratic Bézier curve
    pub fn quad_to(mut self, cx: f32, cy: f32, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::QuadTo {
            control: Point::new(cx, cy),
            end: Point::new(x, y),
        });
        self
    }

    /// Cubic Bézier curve
    pub fn cubic_to(mut self, cx1: f32, cy1: f32, cx2: f32, cy2: f32, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::CubicTo {
            control1: Point::new(cx1, cy1),
            control2: Point::new(cx2, cy2),
            end: Point::new(x, y),
        });
        self
    }

    /// Canvas arc around `center`, from `start_angle` to `end_angle` (radians)
    pub fn arc(
        mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        counter_clockwise: bool,
    ) -> Self {
        self.commands.push(PathCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            counter_clockwise,
        });
        self
    }

    /// Canvas rectangle: a closed subpath through the four corners
    pub fn rect(mut self, rect: Rect) -> Self {
        self.commands.push(PathCommand::Rect(rect));
        self
    }

    /// Close the path
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Append the subpaths of `other` to this path.
    ///
    /// Subpaths stay independent: a leading arc in `other` is not joined to
    /// an open subpath of `self`.
    pub fn add_path(&mut self, other: &Path) {
        if let (
            false,
            Some(&PathCommand::Arc {
                center,
                radius,
                start_angle,
                ..
            }),
        ) = (self.commands.is_empty(), other.commands.first())
        {
            self.commands.push(PathCommand::MoveTo(point_on_circle(
                center,
                radius,
                start_angle,
            )));
        }
        self.commands.extend_from_slice(&other.commands);
    }

    /// Get the path commands
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Number of commands in the path
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the path is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Calculate the bounding rectangle of this path.
    ///
    /// Control points are included, arcs contribute the box of their full
    /// circle, and non-finite coordinates are ignored.
    pub fn bounds(&self) -> Rect {
        if self.commands.is_empty() {
            return Rect::ZERO;
        }

        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;

        let mut include = |p: Point| {
            if p.is_finite() {
                min_x = min_x.min(p.x);
                min_y = min_y.min(p.y);
                max_x = max_x.max(p.x);
                max_y = max_y.max(p.y);
            }
        };

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => include(*p),
                PathCommand::QuadTo { control, end } => {
                    include(*control);
                    include(*end);
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    include(*control1);
                    include(*control2);
                    include(*end);
                }
                PathCommand::Arc { center, radius, .. } => {
                    let r = radius.abs();
                    include(Point::new(center.x - r, center.y - r));
                    include(Point::new(center.x + r, center.y + r));
                }
                PathCommand::Rect(rect) => {
                    include(rect.origin);
                    include(Point::new(rect.x() + rect.width(), rect.y() + rect.height()));
                }
                PathCommand::Close => {}
            }
        }

        if min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite() {
            Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
        } else {
            Rect::ZERO
        }
    }
}
