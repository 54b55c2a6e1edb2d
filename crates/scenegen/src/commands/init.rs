use anyhow::Result;
use colored::Colorize;
use scenegen_core::config::Config;
use scenegen_core::config::consts::CONFIG_FILE;
use scenegen_core::error::ScenegenError;
use std::env;

pub fn run(
    project: String,
    developer: String,
    company: String,
    force: bool,
    verbose: bool,
) -> Result<()> {
    let path = env::current_dir()?.join(CONFIG_FILE);

    if path.exists() && !force {
        return Err(ScenegenError::ConfigExists { path }.into());
    }

    if verbose {
        println!("{} Writing {}", "→".cyan(), path.display());
    }

    let config = Config::new(project, developer, company);
    config.to_file(&path)?;

    println!("{} Created {}", "✓".green().bold(), path.display());

    println!("\nNext steps:");
    println!("  scenegen new <SceneName>");
    println!("  scenegen kinds");

    Ok(())
}
