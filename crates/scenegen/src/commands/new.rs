use crate::cli::NewArgs;
use crate::context::{Context, collect_properties, load_model, print_model};
use crate::output::print_json;
use anyhow::Result;
use chrono::Local;
use colored::Colorize;
use scenegen_core::scene::{
    bind_model, render_scene, resolve_scene_kind, scene_context, validate_identifier, write_scene,
};
use std::env;
use std::path::PathBuf;

pub fn run(args: NewArgs, verbose: bool) -> Result<()> {
    // Must be inside a project
    let ctx = Context::new()?;

    validate_identifier(&args.name)?;

    let model = args.model.as_deref().map(load_model).transpose()?;
    let properties = collect_properties(model.as_ref(), &args.properties);
    for property in &properties {
        validate_identifier(&property.name)?;
    }

    if verbose {
        println!(
            "{} Generating {} scene '{}' with {} properties",
            "→".cyan(),
            args.kind,
            args.name,
            properties.len()
        );
        if let Some(model) = &model {
            print_model(model);
        }
    }

    let templates_dir = ctx.project.templates_dir();
    let templates = resolve_scene_kind(Some(&templates_dir), &args.kind)?;
    let mut context = scene_context(&args.name, properties, &ctx.project.config, &Local::now());
    if let Some(model) = &model {
        context = bind_model(context, model);
    }
    let files = render_scene(&templates, &context)?;

    let out_dir = match args.output {
        Some(dir) => dir,
        None => env::current_dir()?,
    };
    let scene_dir = write_scene(&out_dir, &args.name, &files, args.force)?;

    let written: Vec<PathBuf> = files.iter().map(|f| scene_dir.join(&f.path)).collect();

    if args.json {
        let paths: Vec<String> = written.iter().map(|p| p.display().to_string()).collect();
        print_json(&serde_json::to_string_pretty(&paths)?)?;
        return Ok(());
    }

    for path in &written {
        println!("        {}   {}", "new file:".green(), path.display());
    }
    println!(
        "{} Generated {} scene '{}' at {}",
        "✓".green().bold(),
        templates.name,
        args.name,
        scene_dir.display()
    );

    Ok(())
}
