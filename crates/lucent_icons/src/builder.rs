//! Icon path builder
//!
//! Turns an icon's shape list into one combined [`Path`]. Shapes are unioned
//! in order; no scaling is applied, so the result lives in the 24x24 Lucide
//! view box and callers transform it when drawing.

use std::f32::consts::TAU;

use lucent_core::{Path, Point, Rect};

use crate::error::IconError;
use crate::registry::ShapeDescriptor;

/// How missing or malformed numeric attributes are treated
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AttributePolicy {
    /// Parse failures become NaN and the shape is still added. NaN geometry
    /// renders as nothing.
    #[default]
    Lenient,
    /// Shapes with missing or malformed numbers (or unparseable path data)
    /// are skipped with a warning.
    Strict,
}

/// Path builder configuration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Numeric attribute handling
    pub attribute_policy: AttributePolicy,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that skip malformed shapes instead of producing NaN geometry
    pub fn strict() -> Self {
        Self::new().with_attribute_policy(AttributePolicy::Strict)
    }

    /// Set the numeric attribute policy
    pub fn with_attribute_policy(mut self, policy: AttributePolicy) -> Self {
        self.attribute_policy = policy;
        self
    }
}

/// Build the combined path of an icon with default options
pub fn build_path(definition: &[ShapeDescriptor]) -> Path {
    build_path_with(definition, &BuildOptions::default())
}

/// Build the combined path of an icon
pub fn build_path_with(definition: &[ShapeDescriptor], options: &BuildOptions) -> Path {
    let mut combined = Path::new();

    for shape in definition {
        match build_shape(shape, options) {
            Ok(Some(path)) => combined.add_path(&path),
            Ok(None) => {}
            Err(e) => tracing::warn!("Skipping <{}>: {}", shape.kind(), e),
        }
    }

    combined
}

/// Path for a single shape. `Ok(None)` means the shape contributes nothing.
fn build_shape(shape: &ShapeDescriptor, options: &BuildOptions) -> Result<Option<Path>, IconError> {
    let strict = options.attribute_policy == AttributePolicy::Strict;

    match shape {
        ShapeDescriptor::Path { data: Some(data) } => {
            let mut path = Path::new();
            if let Err(e) = path.append_svg_path_data(data) {
                if strict {
                    return Err(e.into());
                }
                tracing::warn!("Keeping partially parsed path data {:?}: {}", data, e);
            }
            Ok(Some(path))
        }
        ShapeDescriptor::Path { data: None } => {
            tracing::trace!("Skipping <path> without path data");
            Ok(None)
        }
        ShapeDescriptor::Circle { cx, cy, r } => {
            let cx = number("circle", "cx", cx, None, strict)?;
            let cy = number("circle", "cy", cy, None, strict)?;
            let r = number("circle", "r", r, None, strict)?;
            Ok(Some(Path::new().arc(Point::new(cx, cy), r, 0.0, TAU, false)))
        }
        ShapeDescriptor::Rect {
            x,
            y,
            width,
            height,
        } => {
            let x = number("rect", "x", x, Some(0.0), strict)?;
            let y = number("rect", "y", y, Some(0.0), strict)?;
            let width = number("rect", "width", width, None, strict)?;
            let height = number("rect", "height", height, None, strict)?;
            Ok(Some(Path::new().rect(Rect::new(x, y, width, height))))
        }
        ShapeDescriptor::Other { tag } => {
            tracing::trace!("Ignoring unsupported <{}> shape", tag);
            Ok(None)
        }
    }
}

/// Parse a numeric attribute.
///
/// An absent value, or an empty one when there is a default, falls back to
/// `default`. Leniently the longest decimal prefix is read (`"12px"` is 12)
/// and text without one is NaN. Under the strict policy the whole trimmed
/// value must be a finite number.
fn number(
    element: &'static str,
    attribute: &'static str,
    value: &Option<String>,
    default: Option<f32>,
    strict: bool,
) -> Result<f32, IconError> {
    let parsed = match value.as_deref().map(str::trim) {
        None => default,
        Some("") if default.is_some() => default,
        Some(text) if strict => text.parse::<f32>().ok(),
        Some(text) => decimal_prefix(text),
    };

    match parsed {
        Some(n) if n.is_finite() || !strict => Ok(n),
        None if !strict => Ok(f32::NAN),
        _ => Err(IconError::InvalidAttribute {
            element,
            attribute,
            value: value.clone(),
        }),
    }
}

/// Longest leading decimal number of `text`: sign, digits with an optional
/// fraction, and an exponent only when it has digits.
fn decimal_prefix(text: &str) -> Option<f32> {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut mantissa_end = int_end;
    if bytes.get(int_end) == Some(&b'.') {
        let frac_end = digits_from(int_end + 1);
        if frac_end > int_end + 1 || int_end > end {
            mantissa_end = frac_end;
        }
    }
    if mantissa_end == end {
        return None;
    }
    end = mantissa_end;

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    text[..end].parse::<f32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucent_core::PathCommand;

    fn s(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    fn circle(cx: &str, cy: &str, r: &str) -> ShapeDescriptor {
        ShapeDescriptor::Circle {
            cx: s(cx),
            cy: s(cy),
            r: s(r),
        }
    }

    #[test]
    fn test_circle_becomes_full_arc() {
        let path = build_path(&[circle("12", "12", "10")]);
        assert_eq!(
            path.commands(),
            &[PathCommand::Arc {
                center: Point::new(12.0, 12.0),
                radius: 10.0,
                start_angle: 0.0,
                end_angle: TAU,
                counter_clockwise: false,
            }]
        );
    }

    #[test]
    fn test_rect_defaults_origin() {
        let path = build_path(&[ShapeDescriptor::Rect {
            x: None,
            y: None,
            width: s("18"),
            height: s("18"),
        }]);
        assert_eq!(
            path.commands(),
            &[PathCommand::Rect(Rect::new(0.0, 0.0, 18.0, 18.0))]
        );
    }

    #[test]
    fn test_rect_missing_width_is_nan() {
        let path = build_path(&[ShapeDescriptor::Rect {
            x: s("3"),
            y: s("3"),
            width: None,
            height: s("18"),
        }]);

        match path.commands() {
            [PathCommand::Rect(rect)] => {
                assert!(rect.width().is_nan());
                assert_eq!(rect.height(), 18.0);
                assert_eq!(rect.origin, Point::new(3.0, 3.0));
            }
            other => panic!("expected a single rect, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_circle_is_nan() {
        let path = build_path(&[circle("abc", "12", "10")]);
        match path.commands() {
            [PathCommand::Arc { center, radius, .. }] => {
                assert!(center.x.is_nan());
                assert_eq!(center.y, 12.0);
                assert_eq!(*radius, 10.0);
            }
            other => panic!("expected a single arc, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_kind_ignored() {
        let with_polyline = build_path(&[
            circle("12", "12", "10"),
            ShapeDescriptor::Other {
                tag: "polyline".to_string(),
            },
        ]);
        let circle_only = build_path(&[circle("12", "12", "10")]);
        assert_eq!(with_polyline, circle_only);
    }

    #[test]
    fn test_path_without_data_skipped() {
        let path = build_path(&[ShapeDescriptor::Path { data: None }]);
        assert!(path.is_empty());
    }

    #[test]
    fn test_shapes_are_unioned_in_order() {
        let path = build_path(&[
            ShapeDescriptor::Path {
                data: s("M9 18V5l12-2v13"),
            },
            circle("6", "18", "3"),
        ]);

        let commands = path.commands();
        assert_eq!(commands[0], PathCommand::MoveTo(Point::new(9.0, 18.0)));
        // The circle starts its own subpath at angle 0
        assert_eq!(
            commands[commands.len() - 2],
            PathCommand::MoveTo(Point::new(9.0, 18.0))
        );
        assert!(matches!(commands.last(), Some(PathCommand::Arc { .. })));
    }

    #[test]
    fn test_lenient_keeps_partial_path_data() {
        let path = build_path(&[ShapeDescriptor::Path {
            data: s("M10 10 L20 20 X"),
        }]);
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(Point::new(10.0, 10.0)),
                PathCommand::LineTo(Point::new(20.0, 20.0)),
            ]
        );
    }

    #[test]
    fn test_path_data_without_moveto_adds_nothing() {
        for data in ["z", "L5 5", "   "] {
            let path = build_path(&[
                circle("12", "12", "4"),
                ShapeDescriptor::Path { data: s(data) },
            ]);
            assert_eq!(path, build_path(&[circle("12", "12", "4")]), "{:?}", data);
        }
    }

    #[test]
    fn test_empty_rect_origin_defaults_to_zero() {
        let path = build_path(&[ShapeDescriptor::Rect {
            x: s(""),
            y: s("3"),
            width: s("18"),
            height: s("18"),
        }]);
        assert_eq!(
            path.commands(),
            &[PathCommand::Rect(Rect::new(0.0, 3.0, 18.0, 18.0))]
        );
    }

    #[test]
    fn test_numeric_prefix_is_read() {
        let path = build_path(&[circle("12px", "12", "10")]);
        match path.commands() {
            [PathCommand::Arc { center, .. }] => assert_eq!(*center, Point::new(12.0, 12.0)),
            other => panic!("expected a single arc, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_rejects_trailing_text() {
        let path = build_path_with(&[circle("12px", "12", "10")], &BuildOptions::strict());
        assert!(path.is_empty());
    }

    #[test]
    fn test_decimal_prefix() {
        assert_eq!(decimal_prefix("12px"), Some(12.0));
        assert_eq!(decimal_prefix("-.5em"), Some(-0.5));
        assert_eq!(decimal_prefix("3."), Some(3.0));
        assert_eq!(decimal_prefix("1e2x"), Some(100.0));
        assert_eq!(decimal_prefix("2e"), Some(2.0));
        assert_eq!(decimal_prefix("+4.25e-1"), Some(0.425));
        assert_eq!(decimal_prefix("abc"), None);
        assert_eq!(decimal_prefix("."), None);
        assert_eq!(decimal_prefix("-"), None);
        assert_eq!(decimal_prefix(""), None);
    }

    #[test]
    fn test_strict_skips_malformed_shapes() {
        let options = BuildOptions::strict();
        let path = build_path_with(
            &[
                circle("abc", "12", "10"),
                ShapeDescriptor::Rect {
                    x: None,
                    y: None,
                    width: None,
                    height: s("18"),
                },
                ShapeDescriptor::Path {
                    data: s("M10 10 L20 20 X"),
                },
                circle("12", "12", "4"),
            ],
            &options,
        );

        assert_eq!(path.len(), 1);
        assert!(matches!(
            path.commands()[0],
            PathCommand::Arc { radius, .. } if radius == 4.0
        ));
    }

    #[test]
    fn test_strict_accepts_defaults() {
        let path = build_path_with(
            &[ShapeDescriptor::Rect {
                x: None,
                y: None,
                width: s("18"),
                height: s("18"),
            }],
            &BuildOptions::strict(),
        );
        assert_eq!(
            path.commands(),
            &[PathCommand::Rect(Rect::new(0.0, 0.0, 18.0, 18.0))]
        );
    }

    #[test]
    fn test_number_parsing() {
        assert_eq!(number("rect", "x", &s(" 2.5 "), None, false), Ok(2.5));
        assert_eq!(number("rect", "x", &None, Some(0.0), true), Ok(0.0));
        assert!(number("rect", "width", &None, None, false).unwrap().is_nan());
        assert_eq!(
            number("rect", "width", &s("wide"), None, true),
            Err(IconError::InvalidAttribute {
                element: "rect",
                attribute: "width",
                value: s("wide"),
            })
        );
    }
}
