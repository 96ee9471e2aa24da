//! Scene object storage.

use retrace_core::{ObjectId, Properties, Value};

/// An object in the scene model.
///
/// Every object carries one value per schema property; the model fills
/// unset properties from descriptor defaults at creation.
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Unique identifier for this object.
    pub id: ObjectId,
    /// Property values, keyed by property name.
    pub properties: Properties,
}

impl SceneObject {
    /// Create a new object with the given property values.
    pub fn new(id: ObjectId, properties: Properties) -> Self {
        Self { id, properties }
    }

    /// Get a property value by name.
    pub fn get_property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Set a property value.
    pub fn set_property(&mut self, name: String, value: Value) {
        self.properties.insert(name, value);
    }
}
