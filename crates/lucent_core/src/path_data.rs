//! SVG path data parsing
//!
//! Path data goes through lyon's SVG path parser, which resolves relative,
//! shorthand, and smooth commands and turns elliptical arcs into Béziers.
//! The resulting absolute events are then mapped onto our commands.

use lyon::extra::parser::{ParserOptions, PathParser, Source};
use lyon::path::Path as LyonPath;
use lyon::path::PathEvent;

use crate::error::PathError;
use crate::geometry::Point;
use crate::path::PathCommand;

/// Parse `data` and append the resulting commands.
///
/// Whatever was parsed before a syntax error is still appended. Data that
/// does not open with a moveto appends nothing.
pub(crate) fn parse_into(data: &str, commands: &mut Vec<PathCommand>) -> Result<(), PathError> {
    match data.trim_start().chars().next() {
        None => return Ok(()),
        Some('M' | 'm') => {}
        Some(c) => {
            return Err(PathError::PathData(format!(
                "path data must start with a moveto, found {:?}",
                c
            )))
        }
    }

    let mut builder = LyonPath::builder();
    let mut parser = PathParser::new();
    let mut source = Source::new(data.chars());

    let result = parser.parse(&ParserOptions::DEFAULT, &mut source, &mut builder);
    let parsed = builder.build();

    for event in parsed.iter() {
        match event {
            PathEvent::Begin { at } => {
                commands.push(PathCommand::MoveTo(Point::new(at.x, at.y)));
            }
            PathEvent::Line { to, .. } => {
                commands.push(PathCommand::LineTo(Point::new(to.x, to.y)));
            }
            PathEvent::Quadratic { ctrl, to, .. } => {
                commands.push(PathCommand::QuadTo {
                    control: Point::new(ctrl.x, ctrl.y),
                    end: Point::new(to.x, to.y),
                });
            }
            PathEvent::Cubic {
                ctrl1, ctrl2, to, ..
            } => {
                commands.push(PathCommand::CubicTo {
                    control1: Point::new(ctrl1.x, ctrl1.y),
                    control2: Point::new(ctrl2.x, ctrl2.y),
                    end: Point::new(to.x, to.y),
                });
            }
            PathEvent::End { close: true, .. } => {
                commands.push(PathCommand::Close);
            }
            PathEvent::End { close: false, .. } => {}
        }
    }

    result.map_err(|e| PathError::PathData(format!("{:?}", e)))
}

#[cfg(test)]
mod tests {
    use crate::{Path, PathCommand, Point};

    #[test]
    fn test_relative_vertical_line() {
        let path = Path::from_svg_path_data("M12 2v20").unwrap();
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(Point::new(12.0, 2.0)),
                PathCommand::LineTo(Point::new(12.0, 22.0)),
            ]
        );
    }

    #[test]
    fn test_implicit_relative_lines() {
        // Lucide "code" chevron
        let path = Path::from_svg_path_data("m16 18 6-6-6-6").unwrap();
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(Point::new(16.0, 18.0)),
                PathCommand::LineTo(Point::new(22.0, 12.0)),
                PathCommand::LineTo(Point::new(16.0, 6.0)),
            ]
        );
    }

    #[test]
    fn test_closed_subpath() {
        let path = Path::from_svg_path_data("M0 0 L10 0 L10 10 Z").unwrap();
        assert_eq!(path.commands().first(), Some(&PathCommand::MoveTo(Point::ZERO)));
        assert_eq!(path.commands().last(), Some(&PathCommand::Close));
    }

    #[test]
    fn test_quadratic_commands() {
        let path = Path::from_svg_path_data("M12 3q1 4 4 6.5").unwrap();
        assert_eq!(
            path.commands()[1],
            PathCommand::QuadTo {
                control: Point::new(13.0, 7.0),
                end: Point::new(16.0, 9.5),
            }
        );
    }

    #[test]
    fn test_arcs_become_curves() {
        let path = Path::from_svg_path_data("M2 9.5a5.5 5.5 0 0 1 11 0").unwrap();
        assert!(path.len() > 2);
        assert!(path
            .commands()
            .iter()
            .skip(1)
            .all(|cmd| matches!(cmd, PathCommand::QuadTo { .. } | PathCommand::CubicTo { .. })));

        let bounds = path.bounds();
        assert!((bounds.x() - 2.0).abs() < 0.01);
        assert!((bounds.x() + bounds.width() - 13.0).abs() < 0.01);
    }

    #[test]
    fn test_empty_data() {
        let path = Path::from_svg_path_data("").unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn test_syntax_error_keeps_prefix() {
        let mut path = Path::new();
        let result = path.append_svg_path_data("M10 10 L20 20 X");
        assert!(result.is_err());
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(Point::new(10.0, 10.0)),
                PathCommand::LineTo(Point::new(20.0, 20.0)),
            ]
        );
    }

    #[test]
    fn test_missing_moveto_is_rejected() {
        for data in ["z", "L5 5", "  l1 1", "10 10"] {
            let mut path = Path::new().move_to(1.0, 1.0);
            let result = path.append_svg_path_data(data);
            assert!(
                matches!(result, Err(crate::PathError::PathData(_))),
                "{:?} should be rejected",
                data
            );
            assert_eq!(path.commands(), &[PathCommand::MoveTo(Point::new(1.0, 1.0))]);
        }
    }

    #[test]
    fn test_whitespace_only_data() {
        let path = Path::from_svg_path_data("   ").unwrap();
        assert!(path.is_empty());
    }
}
