//! Icon registry
//!
//! The closed set of supported icons and their shape lists. Shape lists are
//! parsed once from the Lucide markup in [`crate::icons`] and shared for the
//! life of the process.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use roxmltree::Document;

use crate::error::IconError;
use crate::icons;

/// A supported icon
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IconName {
    Star,
    Sparkles,
    Zap,
    Moon,
    Sun,
    Heart,
    Flame,
    Snowflake,
    Music,
    Code,
}

impl IconName {
    /// Every icon, in registry order
    pub const ALL: [IconName; 10] = [
        IconName::Star,
        IconName::Sparkles,
        IconName::Zap,
        IconName::Moon,
        IconName::Sun,
        IconName::Heart,
        IconName::Flame,
        IconName::Snowflake,
        IconName::Music,
        IconName::Code,
    ];

    /// Number of icons in the set
    pub const COUNT: usize = Self::ALL.len();

    /// The icon's identifier, e.g. `"Star"`
    pub const fn as_str(self) -> &'static str {
        match self {
            IconName::Star => "Star",
            IconName::Sparkles => "Sparkles",
            IconName::Zap => "Zap",
            IconName::Moon => "Moon",
            IconName::Sun => "Sun",
            IconName::Heart => "Heart",
            IconName::Flame => "Flame",
            IconName::Snowflake => "Snowflake",
            IconName::Music => "Music",
            IconName::Code => "Code",
        }
    }

    /// The icon's Lucide inner-SVG markup
    pub const fn markup(self) -> &'static str {
        match self {
            IconName::Star => icons::STAR,
            IconName::Sparkles => icons::SPARKLES,
            IconName::Zap => icons::ZAP,
            IconName::Moon => icons::MOON,
            IconName::Sun => icons::SUN,
            IconName::Heart => icons::HEART,
            IconName::Flame => icons::FLAME,
            IconName::Snowflake => icons::SNOWFLAKE,
            IconName::Music => icons::MUSIC,
            IconName::Code => icons::CODE,
        }
    }

    /// Position in [`IconName::ALL`]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconName {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| IconError::UnknownIcon(s.to_string()))
    }
}

/// One primitive drawing instruction of an icon.
///
/// Attribute values are kept as the raw markup text; the path builder decides
/// how to treat missing or malformed numbers.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeDescriptor {
    /// `<path d="...">`
    Path { data: Option<String> },
    /// `<circle cx cy r>`
    Circle {
        cx: Option<String>,
        cy: Option<String>,
        r: Option<String>,
    },
    /// `<rect x y width height>`; `x` and `y` default to 0
    Rect {
        x: Option<String>,
        y: Option<String>,
        width: Option<String>,
        height: Option<String>,
    },
    /// Any other element (`polyline`, `line`, `ellipse`, ...)
    Other { tag: String },
}

impl ShapeDescriptor {
    /// The element name this descriptor came from
    pub fn kind(&self) -> &str {
        match self {
            ShapeDescriptor::Path { .. } => "path",
            ShapeDescriptor::Circle { .. } => "circle",
            ShapeDescriptor::Rect { .. } => "rect",
            ShapeDescriptor::Other { tag } => tag,
        }
    }
}

/// Ordered shapes making up one icon
pub type IconDefinition = Vec<ShapeDescriptor>;

/// Parse Lucide inner-SVG markup into shape descriptors, keeping element
/// order.
pub fn parse_icon_markup(markup: &str) -> Result<IconDefinition, IconError> {
    let wrapped = format!("<svg>{markup}</svg>");
    let doc = Document::parse(&wrapped).map_err(|e| IconError::Markup(e.to_string()))?;

    let shapes = doc
        .root_element()
        .children()
        .filter(|node| node.is_element())
        .map(|node| {
            let attr = |name: &str| node.attribute(name).map(str::to_owned);
            match node.tag_name().name() {
                "path" => ShapeDescriptor::Path { data: attr("d") },
                "circle" => ShapeDescriptor::Circle {
                    cx: attr("cx"),
                    cy: attr("cy"),
                    r: attr("r"),
                },
                "rect" => ShapeDescriptor::Rect {
                    x: attr("x"),
                    y: attr("y"),
                    width: attr("width"),
                    height: attr("height"),
                },
                other => ShapeDescriptor::Other {
                    tag: other.to_string(),
                },
            }
        })
        .collect();

    Ok(shapes)
}

/// Source of icon definitions for a [`crate::PathCache`]
pub trait IconSource {
    /// Shape list for `name`, or `None` if this source has none
    fn definition(&self, name: IconName) -> Option<&IconDefinition>;
}

static DEFINITIONS: LazyLock<[Option<IconDefinition>; IconName::COUNT]> = LazyLock::new(|| {
    IconName::ALL.map(|name| match parse_icon_markup(name.markup()) {
        Ok(definition) => Some(definition),
        Err(e) => {
            tracing::error!("Failed to parse markup for icon {}: {}", name, e);
            None
        }
    })
});

/// The compiled-in Lucide icon set
#[derive(Clone, Copy, Debug, Default)]
pub struct IconRegistry;

impl IconRegistry {
    /// All registered names, in a fixed order
    pub fn names() -> &'static [IconName] {
        &IconName::ALL
    }

    /// Number of registered icons
    pub fn len() -> usize {
        IconName::COUNT
    }

    /// Shape list of `name`
    pub fn definition_of(name: IconName) -> Option<&'static IconDefinition> {
        DEFINITIONS[name.index()].as_ref()
    }

    /// Shape list of the icon called `name`; `None` for names outside the set
    pub fn definition_by_name(name: &str) -> Option<&'static IconDefinition> {
        name.parse().ok().and_then(Self::definition_of)
    }

    /// Raw Lucide markup of `name`
    pub fn markup(name: IconName) -> &'static str {
        name.markup()
    }
}

impl IconSource for IconRegistry {
    fn definition(&self, name: IconName) -> Option<&IconDefinition> {
        Self::definition_of(name)
    }
}
