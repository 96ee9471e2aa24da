//! Mid-batch failure semantics against the schema-validating accessor.

use retrace_tests::prelude::*;

/// An operation whose third value violates the opacity range, so
/// execute fails at index 2 of 5.
fn poisoned_op(ids: &[ObjectId]) -> SetPropertiesOperation<ObjectId, Value, SceneAccessor> {
    SetPropertiesOperation::new(
        ids.to_vec(),
        "opacity",
        SceneAccessor,
        vec![Value::Float(1.0); 5],
        vec![
            Value::Float(0.1),
            Value::Float(0.2),
            Value::Float(1.5),
            Value::Float(0.4),
            Value::Float(0.5),
        ],
    )
    .unwrap()
}

#[test]
fn test_failure_leaves_prefix_applied_and_suffix_untouched() {
    // GIVEN
    let (mut model, ids) = model_with_objects(5);
    let op = poisoned_op(&ids);

    // WHEN
    let err = op.execute(&mut model, &mut NoProgress).unwrap_err();

    // THEN the error names the property and the failing index
    match err {
        OperationError::MutationFailure {
            property,
            index,
            source,
        } => {
            assert_eq!(property, "opacity");
            assert_eq!(index, 2);
            assert!(matches!(source, AccessorError::OutOfRange { .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // AND indices 0..2 carry the new values, 2..5 the old
    assert_eq!(float_of(&model, ids[0], "opacity"), 0.1);
    assert_eq!(float_of(&model, ids[1], "opacity"), 0.2);
    for id in &ids[2..] {
        assert_eq!(float_of(&model, *id, "opacity"), 1.0);
    }
}

#[test]
fn test_compensating_undo_after_failed_execute() {
    // GIVEN a model left partially mutated by a failed execute
    let (mut model, ids) = model_with_objects(5);
    let op = poisoned_op(&ids);
    op.execute(&mut model, &mut NoProgress).unwrap_err();

    // WHEN the caller issues a compensating undo
    op.undo(&mut model, &mut NoProgress).unwrap();

    // THEN every object is back at its pre-execute value
    for id in &ids {
        assert_eq!(float_of(&model, *id, "opacity"), 1.0);
    }
}

#[test]
fn test_failed_operation_reports_whole_batch_as_failed() {
    // GIVEN
    let (mut model, ids) = model_with_objects(5);
    let op = poisoned_op(&ids);

    // WHEN
    let result = op.execute(&mut model, &mut NoProgress);

    // THEN no partial-success variant exists; the operation failed
    assert!(result.is_err());
}
