//! In-memory scene model storage.

use retrace_core::{ObjectId, Properties, Value};
use retrace_properties::{
    coerce_value, validate_value, AccessorError, AccessorResult, Schema,
};
use std::collections::HashMap;

use crate::object::SceneObject;

/// ID allocator for scene objects.
#[derive(Debug)]
struct IdAllocator {
    next_object_id: u64,
}

impl IdAllocator {
    fn new() -> Self {
        Self { next_object_id: 1 }
    }

    fn alloc_object_id(&mut self) -> ObjectId {
        let id = ObjectId::new(self.next_object_id);
        self.next_object_id += 1;
        id
    }
}

/// The in-memory scene model: a schema plus the objects it governs.
///
/// The model is the execution context accessors resolve targets
/// against. Storage writes here are raw; validation against the schema
/// belongs to the accessor layer.
#[derive(Debug)]
pub struct SceneModel {
    /// Property schema shared by all objects.
    schema: Schema,
    /// Object storage.
    objects: HashMap<ObjectId, SceneObject>,
    /// ID allocator.
    id_alloc: IdAllocator,
}

impl SceneModel {
    /// Create a new empty model governed by `schema`.
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            objects: HashMap::new(),
            id_alloc: IdAllocator::new(),
        }
    }

    /// The schema shared by all objects of this model.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Create a new object. `overrides` are validated against the
    /// schema and coerced; every other property starts at its
    /// descriptor default (or the kind's zero value).
    pub fn create_object(&mut self, overrides: Properties) -> AccessorResult<ObjectId> {
        let mut properties = Properties::new();

        for (name, value) in &overrides {
            let descriptor = self
                .schema
                .get(name)
                .ok_or_else(|| AccessorError::unknown_property(name))?;
            validate_value(descriptor, value)?;
            properties.insert(name.clone(), coerce_value(descriptor.kind, value));
        }

        for descriptor in self.schema.descriptors() {
            properties
                .entry(descriptor.name.clone())
                .or_insert_with(|| descriptor.initial_value());
        }

        let id = self.id_alloc.alloc_object_id();
        self.objects.insert(id, SceneObject::new(id, properties));
        Ok(id)
    }

    /// Get an object by ID.
    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    /// Delete an object.
    pub fn delete_object(&mut self, id: ObjectId) -> AccessorResult<()> {
        self.objects
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AccessorError::target_not_found(id.to_string()))
    }

    /// Read a property value from an object.
    pub fn get_property(&self, id: ObjectId, name: &str) -> AccessorResult<&Value> {
        let object = self
            .objects
            .get(&id)
            .ok_or_else(|| AccessorError::target_not_found(id.to_string()))?;
        object
            .get_property(name)
            .ok_or_else(|| AccessorError::unknown_property(name))
    }

    /// Write a property value onto an object. Raw storage write; the
    /// accessor layer validates first.
    pub fn set_property(&mut self, id: ObjectId, name: &str, value: Value) -> AccessorResult<()> {
        let object = self
            .objects
            .get_mut(&id)
            .ok_or_else(|| AccessorError::target_not_found(id.to_string()))?;
        object.set_property(name.to_string(), value);
        Ok(())
    }

    /// Iterate over all objects.
    pub fn objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.values()
    }

    /// Number of objects in the model.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if the model holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
