use crate::output::print_json;
use anyhow::Result;
use colored::Colorize;
use scenegen_core::project::Project;
use scenegen_core::scene::{KindSource, list_scene_kinds};
use serde_json::json;
use std::env;

pub fn run(json: bool, verbose: bool) -> Result<()> {
    // Project is optional here: without one only builtin kinds exist
    let current_dir = env::current_dir()?;
    let templates_dir = Project::find_root(&current_dir)?.map(|p| p.templates_dir());

    if verbose {
        match &templates_dir {
            Some(dir) => println!("{} User templates: {}", "→".cyan(), dir.display()),
            None => println!("{} Not in a project, builtin kinds only", "→".cyan()),
        }
    }

    let kinds = list_scene_kinds(templates_dir.as_deref())?;

    if json {
        let entries: Vec<_> = kinds
            .iter()
            .map(|(name, source)| json!({ "name": name, "source": source.as_str() }))
            .collect();
        print_json(&serde_json::to_string_pretty(&json!({ "kinds": entries }))?)?;
        return Ok(());
    }

    println!("Scene kinds:");
    for (name, source) in &kinds {
        let label = match source {
            KindSource::Builtin => source.as_str().dimmed(),
            KindSource::User => source.as_str().cyan(),
        };
        println!("  {} ({})", name.bold(), label);
    }

    Ok(())
}
