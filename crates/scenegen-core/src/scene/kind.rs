//! Scene kind resolution for generation

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::builtin::{get_builtin_kind, BUILTIN_KINDS, HEADER};
use crate::config::consts::HEADER_TEMPLATE;
use crate::error::{Result, ScenegenError};

/// One template of a scene kind
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFile {
    /// Path relative to the scene directory; the scene name is prefixed to
    /// the file name on output
    pub path: PathBuf,
    /// Template source
    pub source: String,
}

impl SceneFile {
    pub fn new(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }
}

/// All templates making up a scene kind
#[derive(Debug, Clone, PartialEq)]
pub struct SceneTemplates {
    pub name: String,
    /// File header template, rendered at the top of every file
    pub header: String,
    pub files: Vec<SceneFile>,
}

impl SceneTemplates {
    pub fn new(name: impl Into<String>, header: impl Into<String>, files: Vec<SceneFile>) -> Self {
        Self {
            name: name.into(),
            header: header.into(),
            files,
        }
    }

    /// Replace the file with the same path, or append it
    pub fn with_override(mut self, file: SceneFile) -> Self {
        match self.files.iter_mut().find(|f| f.path == file.path) {
            Some(existing) => *existing = file,
            None => self.files.push(file),
        }
        self
    }
}

/// Where a kind comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindSource {
    Builtin,
    User,
}

impl KindSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            KindSource::Builtin => "builtin",
            KindSource::User => "user",
        }
    }
}

/// Resolve scene kind by name
///
/// Resolution order:
/// 1. User kind in `<templates_dir>/<name>/`
/// 2. Builtin kind
///
/// Returns error if the kind is found in neither location.
pub fn resolve_scene_kind(templates_dir: Option<&Path>, name: &str) -> Result<SceneTemplates> {
    if let Some(dir) = templates_dir {
        let kind_dir = dir.join(name);
        if kind_dir.is_dir() {
            log::debug!("using user scene kind at {}", kind_dir.display());
            let header = load_header(dir)?;
            return load_kind_from_dir(&kind_dir, name, header);
        }
    }

    get_builtin_kind(name).ok_or_else(|| ScenegenError::SceneKindNotFound(name.to_string()))
}

/// List available kinds: builtin first, then user kinds not shadowing a
/// builtin
pub fn list_scene_kinds(templates_dir: Option<&Path>) -> Result<Vec<(String, KindSource)>> {
    let mut kinds: Vec<(String, KindSource)> = BUILTIN_KINDS
        .iter()
        .map(|k| (k.to_string(), KindSource::Builtin))
        .collect();

    let Some(dir) = templates_dir.filter(|d| d.is_dir()) else {
        return Ok(kinds);
    };

    let mut user = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        match kinds.iter_mut().find(|(k, _)| *k == name) {
            Some(existing) => existing.1 = KindSource::User,
            None => user.push(name),
        }
    }
    user.sort();
    kinds.extend(user.into_iter().map(|k| (k, KindSource::User)));

    Ok(kinds)
}

fn load_header(templates_dir: &Path) -> Result<String> {
    let path = templates_dir.join(HEADER_TEMPLATE);
    if path.is_file() {
        return std::fs::read_to_string(&path).map_err(|e| {
            ScenegenError::SceneKindInvalid(format!(
                "Failed to read {} at {}: {}",
                HEADER_TEMPLATE,
                path.display(),
                e
            ))
        });
    }
    Ok(HEADER.to_string())
}

/// Load every regular file under `dir`, in sorted path order
fn load_kind_from_dir(dir: &Path, name: &str, header: String) -> Result<SceneTemplates> {
    let mut files = Vec::new();

    let walker = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = entry.map_err(|e| {
            ScenegenError::SceneKindInvalid(format!("Failed to walk {}: {}", dir.display(), e))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel = entry
            .path()
            .strip_prefix(dir)
            .map_err(|e| ScenegenError::Generic(e.to_string()))?
            .to_path_buf();

        let source = std::fs::read_to_string(entry.path()).map_err(|e| {
            ScenegenError::SceneKindInvalid(format!(
                "Failed to read {}: {}",
                entry.path().display(),
                e
            ))
        })?;
        files.push(SceneFile::new(rel, source));
    }

    if files.is_empty() {
        return Err(ScenegenError::SceneKindInvalid(format!(
            "scene kind '{}' at {} has no template files",
            name,
            dir.display()
        )));
    }

    Ok(SceneTemplates::new(name, header, files))
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    let hidden = entry.file_name().to_string_lossy().starts_with('.');
    if hidden {
        log::debug!("skipping hidden entry {}", entry.path().display());
    }
    hidden
}
