//! The batch set-property operation.

use log::trace;
use retrace_properties::PropertyAccessor;

use crate::error::{OperationError, OperationResult};
use crate::progress::Progress;

/// An undoable unit of work that writes one property across a batch of
/// targets: new values on execute/redo, old values on undo.
///
/// The batch is three parallel lists paired by index. Index order is
/// part of the contract: writes are applied strictly in ascending
/// order, so a multi-selection edit lands as a single history entry
/// and dependent writes on the same object stay sequenced.
///
/// The operation stores no execution state and never stores the
/// context; every call receives the context afresh and is valid on its
/// own, so `redo` works without a prior `execute` in the same process.
/// Callers serialize execute/redo/undo against a given operation and
/// the shared context (single-writer discipline).
///
/// On a mid-batch accessor failure the remaining targets are skipped
/// and the error is surfaced for the whole operation; targets already
/// written are NOT rolled back. Embedders keep accessors effectively
/// infallible or compensate at the history layer.
#[derive(Debug)]
pub struct SetPropertiesOperation<T, V, A> {
    targets: Vec<T>,
    property: String,
    label: String,
    old_values: Vec<V>,
    new_values: Vec<V>,
    accessor: A,
}

impl<T, V, A> SetPropertiesOperation<T, V, A> {
    /// Create a batch operation over parallel target/value lists.
    ///
    /// Fails with [`OperationError::ShapeMismatch`] unless all three
    /// lists have the same length. Zero-length batches are legal and
    /// make every operation a no-op.
    pub fn new(
        targets: Vec<T>,
        property: impl Into<String>,
        accessor: A,
        old_values: Vec<V>,
        new_values: Vec<V>,
    ) -> OperationResult<Self> {
        if targets.len() != old_values.len() || targets.len() != new_values.len() {
            return Err(OperationError::shape_mismatch(
                targets.len(),
                old_values.len(),
                new_values.len(),
            ));
        }

        let property = property.into();
        Ok(Self {
            label: format!("Set {}", property),
            targets,
            property,
            old_values,
            new_values,
            accessor,
        })
    }

    /// Convenience constructor wrapping one target/value pair into a
    /// length-1 batch.
    pub fn single(
        target: T,
        property: impl Into<String>,
        accessor: A,
        old_value: V,
        new_value: V,
    ) -> Self {
        let property = property.into();
        Self {
            label: format!("Set {}", property),
            targets: vec![target],
            property,
            old_values: vec![old_value],
            new_values: vec![new_value],
            accessor,
        }
    }

    /// Human-readable label, derived from the property name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The property this batch mutates.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The targets of this batch, in application order.
    pub fn targets(&self) -> &[T] {
        &self.targets
    }

    /// The values applied on execute/redo, parallel to `targets`.
    pub fn new_values(&self) -> &[V] {
        &self.new_values
    }

    /// Number of targets in the batch.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns true for the zero-target batch.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Apply the new values to every target, in index order.
    pub fn execute<C>(&self, ctx: &mut C, progress: &mut dyn Progress) -> OperationResult<()>
    where
        A: PropertyAccessor<T, C, Value = V>,
    {
        trace!("execute: {} ({} targets)", self.label, self.targets.len());
        self.apply(&self.new_values, ctx, progress)
    }

    /// Apply the new values again. Identical to [`execute`](Self::execute);
    /// kept distinct because the owning history may redo an operation
    /// it never executed in this process.
    pub fn redo<C>(&self, ctx: &mut C, progress: &mut dyn Progress) -> OperationResult<()>
    where
        A: PropertyAccessor<T, C, Value = V>,
    {
        trace!("redo: {} ({} targets)", self.label, self.targets.len());
        self.apply(&self.new_values, ctx, progress)
    }

    /// Restore the old values on every target, in index order.
    pub fn undo<C>(&self, ctx: &mut C, progress: &mut dyn Progress) -> OperationResult<()>
    where
        A: PropertyAccessor<T, C, Value = V>,
    {
        trace!("undo: {} ({} targets)", self.label, self.targets.len());
        self.apply(&self.old_values, ctx, progress)
    }

    fn apply<C>(&self, values: &[V], ctx: &mut C, progress: &mut dyn Progress) -> OperationResult<()>
    where
        A: PropertyAccessor<T, C, Value = V>,
    {
        progress.begin(&self.label, self.targets.len());

        for (index, (target, value)) in self.targets.iter().zip(values).enumerate() {
            self.accessor
                .set_value(target, &self.property, value, ctx)
                .map_err(|source| OperationError::mutation_failure(&self.property, index, source))?;
            progress.worked(index + 1);
        }

        progress.end();
        Ok(())
    }
}
