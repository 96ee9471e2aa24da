//! Shared fixtures for integration tests.

use retrace_core::{props, ObjectId, Value, ValueKind};
use retrace_model::SceneModel;
use retrace_properties::{PropertyDescriptor, Schema};

/// Schema resembling a tile-editor part: scalar, string, vector and
/// color properties with the usual constraints.
pub fn tile_schema() -> Schema {
    Schema::new()
        .define(PropertyDescriptor::new("name", ValueKind::String))
        .define(PropertyDescriptor::new("x", ValueKind::Float))
        .define(PropertyDescriptor::new("position", ValueKind::Vec3))
        .define(
            PropertyDescriptor::new("width", ValueKind::Int)
                .with_default(Value::Int(16))
                .with_range(Some(Value::Int(1)), Some(Value::Int(4096))),
        )
        .define(
            PropertyDescriptor::new("opacity", ValueKind::Float)
                .with_default(Value::Float(1.0))
                .with_range(Some(Value::Float(0.0)), Some(Value::Float(1.0))),
        )
        .define(PropertyDescriptor::new("visible", ValueKind::Bool).with_default(Value::Bool(true)))
        .define(
            PropertyDescriptor::new("tint", ValueKind::Rgba)
                .with_default(Value::Rgba([1.0, 1.0, 1.0, 1.0])),
        )
}

/// A model with `count` default-initialized objects.
pub fn model_with_objects(count: usize) -> (SceneModel, Vec<ObjectId>) {
    let mut model = SceneModel::new(tile_schema());
    let ids = (0..count)
        .map(|i| {
            model
                .create_object(props! { "name" => format!("object-{i}") })
                .expect("fixture object")
        })
        .collect();
    (model, ids)
}

/// Read a float property straight from the model.
pub fn float_of(model: &SceneModel, id: ObjectId, property: &str) -> f64 {
    model
        .get_property(id, property)
        .expect("fixture property")
        .as_float()
        .expect("float property")
}
