//! Scene generation - render templates and write the scene directory

use chrono::{DateTime, Datelike, TimeZone};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::kind::SceneTemplates;
use crate::config::consts::HEADER_TEMPLATE;
use crate::config::Config;
use crate::error::{Result, ScenegenError};
use crate::model::Model;
use crate::template::{expand, Context, PropertyDescriptor, Template};

/// Where an existing scene is parked while its replacement is moved in
const PARKED_SCENE: &str = ".previous";

/// A rendered file, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Path relative to the scene directory
    pub path: PathBuf,
    pub content: String,
}

/// Check that `name` can be used as a Swift type or member name
pub fn validate_identifier(name: &str) -> Result<()> {
    let invalid = |reason: &str| ScenegenError::SceneNameInvalid {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = name.chars();
    match chars.next() {
        None => return Err(invalid("name cannot be empty")),
        Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
            return Err(invalid("must start with an ASCII letter or '_'"))
        }
        Some(_) => {}
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid("may only contain ASCII letters, digits and '_'"));
    }
    Ok(())
}

/// Build the template context for a scene
///
/// Adds `project`, `developer`, `company`, `date` and `year` as global
/// scalars next to the scene name and properties.
pub fn scene_context<Tz>(
    name: &str,
    properties: Vec<PropertyDescriptor>,
    config: &Config,
    now: &DateTime<Tz>,
) -> Context
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut context = Context::new(name)
        .with_var("project", &config.project.name)
        .with_var("developer", &config.author.developer)
        .with_var("company", &config.author.company)
        .with_var(
            "date",
            now.format(&config.templates.date_format).to_string(),
        )
        .with_var("year", now.year().to_string());
    context.properties = properties;
    context
}

/// Bind the model a scene is built around as `model_name` and
/// `model_variable`
pub fn bind_model(context: Context, model: &Model) -> Context {
    context
        .with_var("model_name", &model.name)
        .with_var("model_variable", model.variable_name())
}

/// Output path of a template
///
/// A file name containing a placeholder is expanded and used as is;
/// any other file name is prefixed with the scene name.
fn output_path(template_path: &Path, context: &Context) -> Result<PathBuf> {
    let file_name = template_path.file_name().ok_or_else(|| {
        ScenegenError::SceneKindInvalid(format!(
            "template path '{}' has no file name",
            template_path.display()
        ))
    })?;

    let output_name = match file_name.to_str() {
        Some(name) if name.contains("{{") => {
            let expanded = expand(name, context)
                .map_err(|e| ScenegenError::template(template_path.display().to_string(), e))?;
            if expanded.is_empty() || expanded.contains(['/', '\\']) {
                return Err(ScenegenError::SceneKindInvalid(format!(
                    "template path '{}' expands to invalid file name '{}'",
                    template_path.display(),
                    expanded
                )));
            }
            OsString::from(expanded)
        }
        _ => {
            let mut prefixed = OsString::from(&context.name);
            prefixed.push(file_name);
            prefixed
        }
    };
    Ok(template_path.with_file_name(output_name))
}

/// Render every file of a scene kind in memory
///
/// Any template error aborts the whole scene; nothing is returned for the
/// files that did render.
pub fn render_scene(templates: &SceneTemplates, context: &Context) -> Result<Vec<RenderedFile>> {
    let header = Template::parse(&templates.header)
        .map_err(|e| ScenegenError::template(HEADER_TEMPLATE, e))?;

    templates
        .files
        .iter()
        .map(|file| -> Result<RenderedFile> {
            let template_name = file.path.display().to_string();
            let path = output_path(&file.path, context)?;
            let file_name = path
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_default();

            let body = Template::parse(&file.source)
                .map_err(|e| ScenegenError::template(&template_name, e))?;
            let file_context = context.clone().with_var("file_name", file_name);

            let mut content = header
                .expand(&file_context)
                .map_err(|e| ScenegenError::template(HEADER_TEMPLATE, e))?;
            content.push_str(
                &body
                    .expand(&file_context)
                    .map_err(|e| ScenegenError::template(&template_name, e))?,
            );

            log::debug!("rendered {} -> {}", template_name, path.display());
            Ok(RenderedFile { path, content })
        })
        .collect()
}

/// Write a rendered scene to `<out_dir>/<scene_name>/`
///
/// # Steps
/// 1. Refuse an existing target unless `overwrite`
/// 2. Write all files into a temp directory inside `out_dir`
/// 3. Park an existing target inside the temp directory and move the new
///    scene into place; the parked scene is restored if that move fails
///
/// Returns the scene directory.
pub fn write_scene(
    out_dir: &Path,
    scene_name: &str,
    files: &[RenderedFile],
    overwrite: bool,
) -> Result<PathBuf> {
    let target = out_dir.join(scene_name);
    if target.exists() && !overwrite {
        return Err(ScenegenError::SceneExists { path: target });
    }

    fs::create_dir_all(out_dir)?;
    let temp_dir = TempDir::new_in(out_dir)?;
    let staging = temp_dir.path().join(scene_name);
    fs::create_dir(&staging)?;

    for file in files {
        let dest = staging.join(&file.path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&dest, &file.content)?;
    }

    replace_dir(&staging, &target, &temp_dir.path().join(PARKED_SCENE))?;

    Ok(target)
}

/// Move `staging` to `target`, keeping any old `target` at `parked` until
/// the move has succeeded
fn replace_dir(staging: &Path, target: &Path, parked: &Path) -> io::Result<()> {
    let had_target = target.exists();
    if had_target {
        log::debug!("replacing existing scene at {}", target.display());
        fs::rename(target, parked)?;
    }

    // Rename temp to target (atomic on same filesystem)
    if let Err(e) = fs::rename(staging, target) {
        if had_target {
            fs::rename(parked, target)?;
        }
        return Err(e);
    }
    Ok(())
}
