//! Error types for trellis

use thiserror::Error;

/// Errors that can occur while declaring, rendering or routing buttons
#[derive(Error, Debug)]
pub enum TrellisError {
    /// An argument failed validation (e.g. a label resolved to null)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A button with the same label is already owned by the surface
    #[error("Duplicate button label: {0}")]
    DuplicateLabel(String),

    /// No button matches the requested label or element id
    #[error("Unknown button: {0}")]
    UnknownButton(String),

    /// No preset is registered under the requested name
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// Client-side options could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Settings could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Settings file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for trellis operations
pub type Result<T> = std::result::Result<T, TrellisError>;
