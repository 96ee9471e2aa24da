//! Property definition types.

use retrace_core::{Value, ValueKind};
use std::collections::HashMap;

/// Definition of a single editable property.
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    /// Property name.
    pub name: String,
    /// Kind of value this property holds.
    pub kind: ValueKind,
    /// Whether this property rejects writes.
    pub read_only: bool,
    /// Default value applied when an object is created without one.
    pub default: Option<Value>,
    /// Minimum value constraint (for Int, Float).
    pub min: Option<Value>,
    /// Maximum value constraint (for Int, Float).
    pub max: Option<Value>,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            name: name.into(),
            kind,
            read_only: false,
            default: None,
            min: None,
            max: None,
        }
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    pub fn with_range(mut self, min: Option<Value>, max: Option<Value>) -> Self {
        // Merge rather than replace: only update if Some is provided
        if min.is_some() {
            self.min = min;
        }
        if max.is_some() {
            self.max = max;
        }
        self
    }

    /// The value a freshly created object gets for this property:
    /// the declared default, or the kind's zero value.
    pub fn initial_value(&self) -> Value {
        self.default
            .clone()
            .unwrap_or_else(|| self.kind.zero_value())
    }
}

/// The table of property descriptors shared by all objects of a model.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    descriptors: HashMap<String, PropertyDescriptor>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self {
            descriptors: HashMap::new(),
        }
    }

    /// Add a property definition. Redefining a name replaces the
    /// previous descriptor.
    pub fn define(mut self, descriptor: PropertyDescriptor) -> Self {
        self.descriptors.insert(descriptor.name.clone(), descriptor);
        self
    }

    /// Look up a descriptor by property name.
    pub fn get(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.descriptors.get(name)
    }

    /// Iterate over all descriptors.
    pub fn descriptors(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.descriptors.values()
    }

    /// Number of defined properties.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns true if no properties are defined.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
