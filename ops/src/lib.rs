//! Retrace Ops
//!
//! Undoable editing operations for scene models.
//!
//! Responsibilities:
//! - Apply a property change across a batch of targets as one
//!   reversible unit of work (`SetPropertiesOperation`)
//! - Surface per-index accessor failures with property and index
//!   attached (`OperationError`)
//! - Report batch progress to an observer (`Progress`)
//!
//! # Module Structure
//!
//! - `set_properties` - The batch set-property operation
//! - `progress` - Progress observation
//! - `error` - Error types for operation failures

mod error;
mod progress;
mod set_properties;

pub use error::{OperationError, OperationResult};
pub use progress::{NoProgress, Progress};
pub use set_properties::SetPropertiesOperation;
