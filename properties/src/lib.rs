//! Retrace Properties
//!
//! The property capability layer: how an editor reads, writes, and
//! constrains named properties on model objects.
//!
//! Responsibilities:
//! - Define the `PropertyAccessor` capability consumed by operations
//! - Describe properties (kind, read-only, range, default) via
//!   `PropertyDescriptor` and `Schema`
//! - Provide shared validation helpers for accessor implementations
//! - Define the accessor failure vocabulary (`AccessorError`)

mod accessor;
mod descriptor;
mod error;
mod validation;

pub use accessor::PropertyAccessor;
pub use descriptor::{PropertyDescriptor, Schema};
pub use error::{AccessorError, AccessorResult};
pub use validation::{coerce_value, kinds_compatible, validate_range, validate_value};
