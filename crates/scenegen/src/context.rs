//! Global context for CLI commands

use anyhow::{Result, anyhow};
use colored::Colorize;
use scenegen_core::error::ScenegenError;
use scenegen_core::model::{Model, parse_model};
use scenegen_core::project::Project;
use scenegen_core::template::PropertyDescriptor;
use std::env;
use std::path::Path;

/// Global context containing the enclosing project
pub struct Context {
    pub project: Project,
}

impl Context {
    /// Create a new context by locating scenegen.toml from the current
    /// directory upwards
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Not in a scenegen project
    /// - Config file cannot be read or parsed
    pub fn new() -> Result<Self> {
        let current_dir = env::current_dir()?;
        let project = Project::find_root(&current_dir)?.ok_or(ScenegenError::ProjectNotFound)?;

        Ok(Self { project })
    }
}

/// Read and parse a Swift model file
pub fn load_model(path: &Path) -> Result<Model> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read model file {}: {}", path.display(), e))?;
    let model = parse_model(&text)?;
    log::debug!(
        "model '{}' has {} properties",
        model.name,
        model.properties.len()
    );
    Ok(model)
}

/// Collect properties: those of `model` first, then `names` in order
pub fn collect_properties(model: Option<&Model>, names: &[String]) -> Vec<PropertyDescriptor> {
    let mut properties = model.map(Model::descriptors).unwrap_or_default();
    properties.extend(names.iter().map(|n| PropertyDescriptor::new(n.as_str())));
    properties
}

/// Print the parsed model, one property per line
pub fn print_model(model: &Model) {
    println!("{} Model '{}':", "→".cyan(), model.name);
    for property in &model.properties {
        let property_type = &property.property_type;
        let mut flags = Vec::new();
        if property_type.is_optional() {
            flags.push("optional");
        }
        if property_type.is_array() {
            flags.push("array");
        }

        if flags.is_empty() {
            println!("  - {}: {}", property.name, property_type.as_str());
        } else {
            println!(
                "  - {}: {} ({})",
                property.name,
                property_type.as_str(),
                flags.join(", ").dimmed()
            );
        }
    }
}
