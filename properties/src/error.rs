//! Accessor error types.

use thiserror::Error;

/// Result type for accessor operations.
pub type AccessorResult<T> = Result<T, AccessorError>;

/// Errors raised by a property accessor when a target/property pair is
/// invalid or a value cannot be applied.
#[derive(Debug, Error)]
pub enum AccessorError {
    #[error("Unknown property: {property}")]
    UnknownProperty { property: String },

    #[error("Invalid value type: expected {expected}, got {actual} for {property}")]
    TypeMismatch {
        property: String,
        expected: String,
        actual: String,
    },

    #[error("Cannot modify read-only property: {property}")]
    ReadOnly { property: String },

    #[error("Range constraint violated: {property} value {value} is out of range{range_desc}")]
    OutOfRange {
        property: String,
        value: String,
        range_desc: String,
    },

    #[error("Target not found: {target}")]
    TargetNotFound { target: String },
}

impl AccessorError {
    pub fn unknown_property(property: impl Into<String>) -> Self {
        Self::UnknownProperty {
            property: property.into(),
        }
    }

    pub fn type_mismatch(
        property: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            property: property.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn read_only(property: impl Into<String>) -> Self {
        Self::ReadOnly {
            property: property.into(),
        }
    }

    pub fn out_of_range(
        property: impl Into<String>,
        value: impl Into<String>,
        range_desc: impl Into<String>,
    ) -> Self {
        Self::OutOfRange {
            property: property.into(),
            value: value.into(),
            range_desc: range_desc.into(),
        }
    }

    pub fn target_not_found(target: impl Into<String>) -> Self {
        Self::TargetNotFound {
            target: target.into(),
        }
    }
}
