//! Error handling for TopoViz-RS
//!
//! The layout computation itself is total: malformed or partial engine data
//! degrades to defaults (zero metrics, level 0, placeholder node) instead of
//! failing. Errors only arise on the descriptor acquisition surface, when a
//! payload cannot be read or parsed at all.

use thiserror::Error;

/// Main error type for TopoViz-RS operations
#[derive(Error, Debug)]
pub enum TopoVizError {
    /// Errors reading a descriptor or snapshot file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors parsing a payload as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Payload parsed as JSON but did not have the expected shape
    #[error("Malformed payload: {0}")]
    Payload(String),
}

/// Result type alias for TopoViz-RS operations
pub type Result<T> = std::result::Result<T, TopoVizError>;
