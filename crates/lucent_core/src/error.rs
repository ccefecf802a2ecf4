//! Path error types

use thiserror::Error;

/// Errors that can occur while building paths
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// SVG path data could not be parsed
    #[error("Path data parsing error: {0}")]
    PathData(String),
}
