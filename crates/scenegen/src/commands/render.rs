use crate::cli::RenderArgs;
use crate::context::{collect_properties, load_model};
use crate::output::print_raw;
use anyhow::{Result, anyhow};
use colored::Colorize;
use scenegen_core::error::ScenegenError;
use scenegen_core::scene::bind_model;
use scenegen_core::template::{Context, expand};
use std::fs;

pub fn run(args: RenderArgs, verbose: bool) -> Result<()> {
    let source = fs::read_to_string(&args.template)
        .map_err(|e| anyhow!("Failed to read template {}: {}", args.template.display(), e))?;

    let mut context = match &args.context {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| anyhow!("Failed to read context file {}: {}", path.display(), e))?;
            toml::from_str::<Context>(&text)
                .map_err(|e| anyhow!("Invalid context file {}: {}", path.display(), e))?
        }
        None => Context::default(),
    };

    if let Some(name) = args.name {
        context.name = name;
    }
    let model = args.model.as_deref().map(load_model).transpose()?;
    context
        .properties
        .extend(collect_properties(model.as_ref(), &args.properties));
    if let Some(model) = &model {
        context = bind_model(context, model);
    }
    context.vars.extend(args.vars);

    // stdout carries the rendered text only
    if verbose {
        eprintln!(
            "{} Rendering {} for '{}' with {} properties and {} vars",
            "→".cyan(),
            args.template.display(),
            context.name,
            context.properties.len(),
            context.vars.len()
        );
    }

    let output = expand(&source, &context)
        .map_err(|e| ScenegenError::template(args.template.display().to_string(), e))?;

    print_raw(&output)?;
    Ok(())
}
