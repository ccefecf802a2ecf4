//! # Lucent Icons
//!
//! Lucide icons as cached canvas paths.
//!
//! A small, fixed set of Lucide icons is compiled in as inner-SVG markup.
//! Each icon's `<path>`, `<circle>`, and `<rect>` elements are unioned into
//! one [`lucent_core::Path`] the first time the icon is requested; later
//! requests return the same `Arc`. Other element kinds are ignored.
//!
//! Paths stay in the 24x24 Lucide view box. Scale them when drawing.
//!
//! ## Usage
//!
//! ```rust
//! use lucent_icons::{get_icon_path, pick_random, IconName};
//! use std::sync::Arc;
//!
//! let star = get_icon_path(IconName::Star).unwrap();
//! assert!(Arc::ptr_eq(&star, &get_icon_path(IconName::Star).unwrap()));
//!
//! let any = pick_random();
//! assert!(get_icon_path(any).is_some());
//! ```

pub mod builder;
pub mod cache;
pub mod error;
#[rustfmt::skip]
pub mod icons;
pub mod random;
pub mod registry;

pub use builder::{build_path, build_path_with, AttributePolicy, BuildOptions};
pub use cache::{get_icon_path, get_icon_path_by_name, PathCache};
pub use error::IconError;
pub use random::{pick_random, pick_random_with};
pub use registry::{
    parse_icon_markup, IconDefinition, IconName, IconRegistry, IconSource, ShapeDescriptor,
};

/// Default Lucide viewBox (all icons are 24x24)
pub const VIEW_BOX: (f32, f32, f32, f32) = (0.0, 0.0, 24.0, 24.0);

/// Default stroke width for Lucide icons
pub const STROKE_WIDTH: f32 = 2.0;

/// Generate a complete SVG string from icon markup
///
/// # Arguments
/// * `markup` - The inner content of the SVG
/// * `size` - The width and height of the SVG in pixels
///
/// # Example
/// ```
/// let svg = lucent_icons::to_svg(lucent_icons::icons::CODE, 24.0);
/// assert!(svg.starts_with("<svg"));
/// ```
pub fn to_svg(markup: &str, size: f32) -> String {
    to_svg_with_stroke(markup, size, STROKE_WIDTH)
}

/// Generate SVG with custom stroke width
pub fn to_svg_with_stroke(markup: &str, size: f32, stroke_width: f32) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="{stroke_width}" stroke-linecap="round" stroke-linejoin="round">{markup}</svg>"#
    )
}

/// Generate SVG with custom color (for non-currentColor usage)
pub fn to_svg_colored(markup: &str, size: f32, color: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="{color}" stroke-width="{STROKE_WIDTH}" stroke-linecap="round" stroke-linejoin="round">{markup}</svg>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_svg() {
        let svg = to_svg(icons::STAR, 24.0);
        assert!(svg.contains("viewBox=\"0 0 24 24\""));
        assert!(svg.contains("width=\"24\""));
        assert!(svg.contains("stroke-width=\"2\""));
        assert!(svg.ends_with(&format!("{}</svg>", icons::STAR)));
    }

    #[test]
    fn test_to_svg_with_stroke() {
        let svg = to_svg_with_stroke(icons::CODE, 16.0, 1.5);
        assert!(svg.contains("width=\"16\""));
        assert!(svg.contains("stroke-width=\"1.5\""));
    }

    #[test]
    fn test_to_svg_colored() {
        let svg = to_svg_colored(icons::HEART, 32.0, "#e11d48");
        assert!(svg.contains("stroke=\"#e11d48\""));
        assert!(!svg.contains("currentColor"));
    }

    #[test]
    fn test_wrapped_markup_parses_back() {
        // The full document parses like the bare markup
        let svg = to_svg(icons::MUSIC, 24.0);
        let inner = svg
            .split_once('>')
            .map(|(_, rest)| rest.trim_end_matches("</svg>"))
            .unwrap();
        assert_eq!(
            parse_icon_markup(inner).unwrap(),
            *IconRegistry::definition_of(IconName::Music).unwrap()
        );
    }
}
