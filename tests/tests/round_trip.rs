//! Execute/undo/redo symmetry against the reference scene model.

use retrace_tests::prelude::*;

#[test]
fn test_execute_undo_redo_on_two_objects() {
    // GIVEN two objects with x = 1 and x = 2
    let (mut model, ids) = model_with_objects(2);
    let accessor = SceneAccessor;
    for (id, x) in ids.iter().zip([1.0, 2.0]) {
        accessor
            .set_value(id, "x", &Value::Float(x), &mut model)
            .unwrap();
    }

    let old_values: Vec<Value> = ids
        .iter()
        .map(|id| accessor.get_value(id, "x", &model).unwrap())
        .collect();

    let op = SetPropertiesOperation::new(
        ids.clone(),
        "x",
        accessor,
        old_values,
        vec![Value::Float(10.0), Value::Float(20.0)],
    )
    .unwrap();

    // WHEN
    op.execute(&mut model, &mut NoProgress).unwrap();

    // THEN
    assert_eq!(float_of(&model, ids[0], "x"), 10.0);
    assert_eq!(float_of(&model, ids[1], "x"), 20.0);

    // WHEN
    op.undo(&mut model, &mut NoProgress).unwrap();

    // THEN
    assert_eq!(float_of(&model, ids[0], "x"), 1.0);
    assert_eq!(float_of(&model, ids[1], "x"), 2.0);

    // WHEN
    op.redo(&mut model, &mut NoProgress).unwrap();

    // THEN
    assert_eq!(float_of(&model, ids[0], "x"), 10.0);
    assert_eq!(float_of(&model, ids[1], "x"), 20.0);
}

#[test]
fn test_round_trip_across_value_kinds() {
    // GIVEN
    let (mut model, ids) = model_with_objects(1);
    let id = ids[0];
    let accessor = SceneAccessor;

    let cases = [
        ("visible", Value::Bool(true), Value::Bool(false)),
        ("width", Value::Int(16), Value::Int(64)),
        ("name", Value::String("object-0".into()), Value::String("renamed".into())),
        ("position", Value::Vec3([0.0; 3]), Value::Vec3([4.0, 5.0, 6.0])),
        ("tint", Value::Rgba([1.0; 4]), Value::Rgba([0.5, 0.5, 0.5, 1.0])),
    ];

    for (property, old, new) in cases {
        let op = SetPropertiesOperation::single(id, property, accessor, old.clone(), new.clone());

        // WHEN
        op.execute(&mut model, &mut NoProgress).unwrap();

        // THEN
        assert_eq!(model.get_property(id, property).unwrap(), &new);

        // WHEN
        op.undo(&mut model, &mut NoProgress).unwrap();

        // THEN
        assert_eq!(model.get_property(id, property).unwrap(), &old);
    }
}

#[test]
fn test_redo_without_execute_matches_execute() {
    // GIVEN two identical models and two identical operations
    let (mut executed, ids_a) = model_with_objects(2);
    let (mut redone, ids_b) = model_with_objects(2);
    assert_eq!(ids_a, ids_b);

    let make_op = |ids: &[ObjectId]| {
        SetPropertiesOperation::new(
            ids.to_vec(),
            "width",
            SceneAccessor,
            vec![Value::Int(16), Value::Int(16)],
            vec![Value::Int(32), Value::Int(48)],
        )
        .unwrap()
    };

    // WHEN one model is executed and the other only redone
    make_op(&ids_a).execute(&mut executed, &mut NoProgress).unwrap();
    make_op(&ids_b).redo(&mut redone, &mut NoProgress).unwrap();

    // THEN both models agree
    for (a, b) in ids_a.iter().zip(&ids_b) {
        assert_eq!(
            executed.get_property(*a, "width").unwrap(),
            redone.get_property(*b, "width").unwrap()
        );
    }
}
