//! Operation error types.

use retrace_properties::AccessorError;
use thiserror::Error;

/// Result type for operations.
pub type OperationResult<T> = Result<T, OperationError>;

/// Errors surfaced by undoable operations.
#[derive(Debug, Error)]
pub enum OperationError {
    /// An accessor write failed mid-batch. Targets before `index` have
    /// been written, targets from `index` on have not; the operation
    /// performs no rollback.
    #[error("Failed to set property {property} on target at index {index}")]
    MutationFailure {
        property: String,
        index: usize,
        #[source]
        source: AccessorError,
    },

    #[error("Mismatched batch shape: {targets} targets, {old_values} old values, {new_values} new values")]
    ShapeMismatch {
        targets: usize,
        old_values: usize,
        new_values: usize,
    },
}

impl OperationError {
    pub fn mutation_failure(property: impl Into<String>, index: usize, source: AccessorError) -> Self {
        Self::MutationFailure {
            property: property.into(),
            index,
            source,
        }
    }

    pub fn shape_mismatch(targets: usize, old_values: usize, new_values: usize) -> Self {
        Self::ShapeMismatch {
            targets,
            old_values,
            new_values,
        }
    }
}
