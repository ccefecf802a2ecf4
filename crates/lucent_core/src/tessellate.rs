//! Path tessellation
//!
//! Converts paths into triangle meshes using lyon. Canvas arcs become cubic
//! Béziers and canvas rectangles become closed four-line subpaths before
//! tessellation. Subpaths with any non-finite coordinate are dropped, so NaN
//! geometry from malformed icon data renders as nothing.

use lyon::lyon_tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, StrokeOptions, StrokeTessellator,
    StrokeVertex, VertexBuffers,
};
use lyon::math::point;
use lyon::path::PathEvent;

use crate::geometry::Point;
use crate::path::{arc_sweep, arc_to_cubics, point_on_circle, Path, PathCommand};
use crate::stroke::{LineCap, LineJoin, Stroke};

const TOLERANCE: f32 = 0.01;

/// Tessellated path geometry
#[derive(Clone, Debug, Default)]
pub struct TessellatedPath {
    /// Vertex positions (x, y)
    pub vertices: Vec<[f32; 2]>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl TessellatedPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }

    /// Number of triangles in the mesh
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Collects lyon events one subpath at a time, discarding subpaths that
/// contain non-finite points.
struct EventWriter {
    events: Vec<PathEvent>,
    subpath: Vec<PathEvent>,
    first: Option<Point>,
    current: Point,
    finite: bool,
}

impl EventWriter {
    fn new() -> Self {
        Self {
            events: Vec::new(),
            subpath: Vec::new(),
            first: None,
            current: Point::ZERO,
            finite: true,
        }
    }

    fn track(&mut self, p: Point) {
        self.finite &= p.is_finite();
        self.current = p;
    }

    fn begin(&mut self, at: Point) {
        self.end(false);
        self.finite = true;
        self.subpath.push(PathEvent::Begin {
            at: point(at.x, at.y),
        });
        self.first = Some(at);
        self.track(at);
    }

    /// Start a subpath at the current point if none is open
    fn ensure_open(&mut self) {
        if self.first.is_none() {
            self.begin(self.current);
        }
    }

    fn line(&mut self, to: Point) {
        self.ensure_open();
        self.subpath.push(PathEvent::Line {
            from: point(self.current.x, self.current.y),
            to: point(to.x, to.y),
        });
        self.track(to);
    }

    fn quad(&mut self, control: Point, to: Point) {
        self.ensure_open();
        self.finite &= control.is_finite();
        self.subpath.push(PathEvent::Quadratic {
            from: point(self.current.x, self.current.y),
            ctrl: point(control.x, control.y),
            to: point(to.x, to.y),
        });
        self.track(to);
    }

    fn cubic(&mut self, control1: Point, control2: Point, to: Point) {
        self.ensure_open();
        self.finite &= control1.is_finite() && control2.is_finite();
        self.subpath.push(PathEvent::Cubic {
            from: point(self.current.x, self.current.y),
            ctrl1: point(control1.x, control1.y),
            ctrl2: point(control2.x, control2.y),
            to: point(to.x, to.y),
        });
        self.track(to);
    }

    fn end(&mut self, close: bool) {
        let Some(first) = self.first.take() else {
            return;
        };

        self.subpath.push(PathEvent::End {
            last: point(self.current.x, self.current.y),
            first: point(first.x, first.y),
            close,
        });

        if self.finite {
            self.events.append(&mut self.subpath);
        } else {
            tracing::trace!("Dropping subpath with non-finite coordinates");
            self.subpath.clear();
        }

        if close {
            self.current = first;
        }
    }

    fn finish(mut self) -> Vec<PathEvent> {
        self.end(false);
        self.events
    }
}

/// Convert a path into lyon path events
pub fn path_to_lyon_events(path: &Path) -> Vec<PathEvent> {
    let mut writer = EventWriter::new();

    for cmd in path.commands() {
        match cmd {
            PathCommand::MoveTo(p) => writer.begin(*p),
            PathCommand::LineTo(p) => writer.line(*p),
            PathCommand::QuadTo { control, end } => writer.quad(*control, *end),
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => writer.cubic(*control1, *control2, *end),
            PathCommand::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                counter_clockwise,
            } => {
                let start = point_on_circle(*center, *radius, *start_angle);
                if writer.first.is_none() {
                    writer.begin(start);
                } else if writer.current != start {
                    writer.line(start);
                }

                let sweep = arc_sweep(*start_angle, *end_angle, *counter_clockwise);
                for (control1, control2, end) in
                    arc_to_cubics(*center, *radius, *start_angle, sweep)
                {
                    writer.cubic(control1, control2, end);
                }
            }
            PathCommand::Rect(rect) => {
                let (x, y) = (rect.x(), rect.y());
                let (right, bottom) = (x + rect.width(), y + rect.height());
                writer.begin(Point::new(x, y));
                writer.line(Point::new(right, y));
                writer.line(Point::new(right, bottom));
                writer.line(Point::new(x, bottom));
                writer.end(true);
            }
            PathCommand::Close => writer.end(true),
        }
    }

    writer.finish()
}

/// Tessellate a path for filling
pub fn tessellate_fill(path: &Path) -> TessellatedPath {
    let events = path_to_lyon_events(path);

    if events.is_empty() {
        return TessellatedPath::new();
    }

    let mut geometry: VertexBuffers<[f32; 2], u32> = VertexBuffers::new();
    let mut tessellator = FillTessellator::new();

    let options = FillOptions::default().with_tolerance(TOLERANCE);

    let result = tessellator.tessellate(
        events.iter().cloned(),
        &options,
        &mut BuffersBuilder::new(&mut geometry, |vertex: FillVertex| {
            vertex.position().to_array()
        }),
    );

    if result.is_err() {
        tracing::warn!("Path fill tessellation failed: {:?}", result.err());
        return TessellatedPath::new();
    }

    TessellatedPath {
        vertices: geometry.vertices,
        indices: geometry.indices,
    }
}

/// Tessellate a path for stroking
pub fn tessellate_stroke(path: &Path, stroke: &Stroke) -> TessellatedPath {
    let events = path_to_lyon_events(path);

    if events.is_empty() {
        return TessellatedPath::new();
    }

    let mut geometry: VertexBuffers<[f32; 2], u32> = VertexBuffers::new();
    let mut tessellator = StrokeTessellator::new();

    let options = StrokeOptions::default()
        .with_line_width(stroke.width)
        .with_tolerance(TOLERANCE)
        .with_line_cap(match stroke.cap {
            LineCap::Butt => lyon::lyon_tessellation::LineCap::Butt,
            LineCap::Round => lyon::lyon_tessellation::LineCap::Round,
            LineCap::Square => lyon::lyon_tessellation::LineCap::Square,
        })
        .with_line_join(match stroke.join {
            LineJoin::Miter => lyon::lyon_tessellation::LineJoin::Miter,
            LineJoin::Round => lyon::lyon_tessellation::LineJoin::Round,
            LineJoin::Bevel => lyon::lyon_tessellation::LineJoin::Bevel,
        })
        .with_miter_limit(stroke.miter_limit);

    let result = tessellator.tessellate(
        events.iter().cloned(),
        &options,
        &mut BuffersBuilder::new(&mut geometry, |vertex: StrokeVertex| {
            vertex.position().to_array()
        }),
    );

    if result.is_err() {
        tracing::warn!("Path stroke tessellation failed: {:?}", result.err());
        return TessellatedPath::new();
    }

    TessellatedPath {
        vertices: geometry.vertices,
        indices: geometry.indices,
    }
}
