//! CLI command structure using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scenegen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write scenegen.toml in the current directory
    Init {
        /// Xcode project name
        #[arg(long, env = "SCENEGEN_PROJECT")]
        project: String,

        /// Developer name for file headers
        #[arg(long, env = "SCENEGEN_DEVELOPER")]
        developer: String,

        /// Company name for file headers
        #[arg(long, env = "SCENEGEN_COMPANY")]
        company: String,

        /// Overwrite an existing scenegen.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Generate a scene
    New(NewArgs),

    /// Expand a single template file and print the result
    Render(RenderArgs),

    /// List available scene kinds
    Kinds {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
pub struct NewArgs {
    /// Scene name (e.g., "UserProfile")
    pub name: String,

    /// Scene kind
    #[arg(short, long, default_value = "base")]
    pub kind: String,

    /// Property name, repeatable; appended after model properties
    #[arg(short, long = "property", value_name = "NAME")]
    pub properties: Vec<String>,

    /// Swift file with a struct or class whose properties are used
    #[arg(short, long, value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Directory to create the scene in (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Replace an existing scene directory
    #[arg(short, long)]
    pub force: bool,

    /// Print written files as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct RenderArgs {
    /// Template file to expand
    pub template: PathBuf,

    /// Scene name bound to `{{ name }}`
    #[arg(short, long)]
    pub name: Option<String>,

    /// Property name, repeatable
    #[arg(short, long = "property", value_name = "NAME")]
    pub properties: Vec<String>,

    /// Swift file with a struct or class whose properties are used
    #[arg(short, long, value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// TOML file with `name`, `[[properties]]` and `[vars]`
    #[arg(short, long, value_name = "FILE")]
    pub context: Option<PathBuf>,

    /// Extra global variable, repeatable
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub vars: Vec<(String, String)>,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no `=` found in `{}`", s))?;
    if key.is_empty() {
        return Err(format!("invalid KEY=VALUE: empty key in `{}`", s));
    }
    Ok((key.to_string(), value.to_string()))
}
