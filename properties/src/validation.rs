//! Value validation helpers shared by accessor implementations.

use retrace_core::{Value, ValueKind};

use crate::descriptor::PropertyDescriptor;
use crate::error::{AccessorError, AccessorResult};

/// Validate a value against a descriptor: kind compatibility, then
/// range constraints. Read-only enforcement is the write path's
/// concern, not this helper's.
pub fn validate_value(descriptor: &PropertyDescriptor, value: &Value) -> AccessorResult<()> {
    let actual = value.kind();
    if !kinds_compatible(descriptor.kind, actual) {
        return Err(AccessorError::type_mismatch(
            &descriptor.name,
            descriptor.kind.to_string(),
            actual.to_string(),
        ));
    }

    validate_range(&descriptor.name, value, &descriptor.min, &descriptor.max)
}

/// Check whether a value of kind `actual` can be stored in a property
/// of kind `expected`. Int is accepted where Float is expected (editor
/// fields routinely produce whole numbers for float properties).
pub fn kinds_compatible(expected: ValueKind, actual: ValueKind) -> bool {
    expected == actual || (expected == ValueKind::Float && actual == ValueKind::Int)
}

/// Widen a value to the declared kind where `kinds_compatible` allowed
/// a mismatch. Currently only Int-to-Float.
pub fn coerce_value(kind: ValueKind, value: &Value) -> Value {
    match (kind, value) {
        (ValueKind::Float, Value::Int(i)) => Value::Float(*i as f64),
        _ => value.clone(),
    }
}

/// Validate range constraints (min/max) for a value.
pub fn validate_range(
    property: &str,
    value: &Value,
    min: &Option<Value>,
    max: &Option<Value>,
) -> AccessorResult<()> {
    if let Some(min_val) = min {
        if !value.gte(min_val) {
            let range_desc = match max {
                Some(max_val) => format!(" [{}..{}]", min_val, max_val),
                None => format!(" [>= {}]", min_val),
            };
            return Err(AccessorError::out_of_range(
                property,
                value.to_string(),
                range_desc,
            ));
        }
    }

    if let Some(max_val) = max {
        if !value.lte(max_val) {
            let range_desc = match min {
                Some(min_val) => format!(" [{}..{}]", min_val, max_val),
                None => format!(" [<= {}]", max_val),
            };
            return Err(AccessorError::out_of_range(
                property,
                value.to_string(),
                range_desc,
            ));
        }
    }

    Ok(())
}
