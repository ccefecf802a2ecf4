//! Icon error types

use lucent_core::PathError;
use thiserror::Error;

/// Errors that can occur when resolving or parsing icons
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IconError {
    /// Name is not part of the icon set
    #[error("Unknown icon: {0}")]
    UnknownIcon(String),

    /// Icon markup could not be parsed
    #[error("Icon markup parsing error: {0}")]
    Markup(String),

    /// Numeric shape attribute is missing or malformed
    #[error("Invalid `{attribute}` on <{element}>: {value:?}")]
    InvalidAttribute {
        element: &'static str,
        attribute: &'static str,
        value: Option<String>,
    },

    /// Shape geometry could not be converted
    #[error(transparent)]
    Path(#[from] PathError),
}
