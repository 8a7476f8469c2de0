//! Layout configuration error types.
//!
//! The measure/arrange passes themselves never fail. These errors come from
//! the checked constructors and parsers that build layout inputs.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("pixel size must be a finite non-negative number, got {0}")]
    InvalidPixels(f32),

    #[error("part weight must be a finite positive number, got {0}")]
    InvalidWeight(f32),

    #[error("unknown proportion kind: {0}")]
    UnknownKind(String),

    #[error("proportion {0} requires a value")]
    MissingValue(&'static str),

    #[error("invalid proportion value {value:?}: {reason}")]
    InvalidValue { value: String, reason: String },
}
