//! Error types for OOXML drawing operations.
use thiserror::Error;

use crate::ooxml::drawings::AnchorId;

/// Result type for OOXML drawing operations.
pub type Result<T> = std::result::Result<T, OoxmlError>;

/// Error types for OOXML drawing operations.
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// A setter or configuration value fell outside its declared domain
    #[error("Invalid value for {field}: {value} (expected {allowed})")]
    InvalidValue {
        field: &'static str,
        value: String,
        allowed: String,
    },

    /// The anchor is not held by the drawing it was looked up in
    #[error("Anchor {0} is not attached to this drawing")]
    DetachedAnchor(AnchorId),

    /// Every axis identifier the allocator can produce has been issued
    #[error("Axis identifiers exhausted")]
    AxisIdsExhausted,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OoxmlError {
    /// Build an [`OoxmlError::InvalidValue`] from any displayable value.
    pub(crate) fn invalid_value(
        field: &'static str,
        value: impl std::fmt::Display,
        allowed: impl Into<String>,
    ) -> Self {
        OoxmlError::InvalidValue {
            field,
            value: value.to_string(),
            allowed: allowed.into(),
        }
    }
}
