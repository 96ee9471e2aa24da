//! Retrace Model
//!
//! The reference scene model: flat object storage governed by a
//! property schema, plus the canonical accessor implementation that
//! operations mutate it through.
//!
//! Responsibilities:
//! - Store objects and their property values (`SceneModel`, `SceneObject`)
//! - Fill schema defaults at object creation
//! - Expose the model as an accessor context (`SceneAccessor`)

mod accessor;
mod object;
mod scene;

pub use accessor::SceneAccessor;
pub use object::SceneObject;
pub use scene::SceneModel;
