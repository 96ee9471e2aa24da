//! The canonical accessor over the scene model.

use retrace_core::{ObjectId, Value};
use retrace_properties::{
    coerce_value, validate_value, AccessorError, AccessorResult, PropertyAccessor,
};

use crate::scene::SceneModel;

/// Schema-validating accessor for [`SceneModel`] objects.
///
/// Stateless; a single instance serves any number of models and
/// operations. Writes go through descriptor lookup, read-only and
/// constraint validation, and Int-to-Float coercion before reaching
/// storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneAccessor;

impl PropertyAccessor<ObjectId, SceneModel> for SceneAccessor {
    type Value = Value;

    fn get_value(&self, target: &ObjectId, property: &str, ctx: &SceneModel) -> AccessorResult<Value> {
        ctx.get_property(*target, property).cloned()
    }

    fn set_value(
        &self,
        target: &ObjectId,
        property: &str,
        value: &Value,
        ctx: &mut SceneModel,
    ) -> AccessorResult<()> {
        let descriptor = ctx
            .schema()
            .get(property)
            .ok_or_else(|| AccessorError::unknown_property(property))?;

        if descriptor.read_only {
            return Err(AccessorError::read_only(property));
        }

        validate_value(descriptor, value)?;
        let value = coerce_value(descriptor.kind, value);

        ctx.set_property(*target, property, value)
    }
}
