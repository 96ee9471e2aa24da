//! The property accessor capability.

use crate::error::AccessorResult;

/// Capability that reads and writes a named property on a target
/// object within an execution context.
///
/// `T` is the opaque target reference type and `C` the context (model,
/// document) the accessor resolves targets against. The context is
/// only assumed valid for the duration of each call; implementations
/// must not retain it.
///
/// Implementations are responsible for the validity of the
/// target/property pair: unknown targets, unknown properties, and
/// inapplicable values surface as [`AccessorError`](crate::AccessorError).
pub trait PropertyAccessor<T, C> {
    /// The value type this accessor reads and writes.
    type Value;

    /// Read the current value of `property` on `target`.
    fn get_value(&self, target: &T, property: &str, ctx: &C) -> AccessorResult<Self::Value>;

    /// Write `value` into `property` on `target`.
    fn set_value(
        &self,
        target: &T,
        property: &str,
        value: &Self::Value,
        ctx: &mut C,
    ) -> AccessorResult<()>;
}

// Accessors are typically long-lived and shared; a reference to an
// accessor is itself an accessor.
impl<T, C, A> PropertyAccessor<T, C> for &A
where
    A: PropertyAccessor<T, C> + ?Sized,
{
    type Value = A::Value;

    fn get_value(&self, target: &T, property: &str, ctx: &C) -> AccessorResult<Self::Value> {
        (**self).get_value(target, property, ctx)
    }

    fn set_value(
        &self,
        target: &T,
        property: &str,
        value: &Self::Value,
        ctx: &mut C,
    ) -> AccessorResult<()> {
        (**self).set_value(target, property, value, ctx)
    }
}
