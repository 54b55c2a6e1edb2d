//! Shared test helpers for template engine tests

use crate::template::context::{Context, PropertyDescriptor};

/// Scene name only, no properties
pub(super) fn profile_context() -> Context {
    Context::new("Profile")
}

/// Scene with properties in the given order
pub(super) fn context_with(name: &str, properties: &[&str]) -> Context {
    Context::new(name).with_properties(properties.iter().copied())
}

/// Scene with typed properties, as produced by the model parser
pub(super) fn typed_context() -> Context {
    Context {
        name: "Conversation".to_string(),
        properties: vec![
            PropertyDescriptor::new("id").with_type("Int"),
            PropertyDescriptor::new("title").with_type("String?"),
        ],
        ..Context::default()
    }
}
