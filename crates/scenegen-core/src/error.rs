use std::path::PathBuf;
use thiserror::Error;

use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum ScenegenError {
    // Project errors
    #[error("PROJECT_NOT_FOUND: scenegen.toml not found in current or parent directories")]
    ProjectNotFound,

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID: failed to parse scenegen.toml: {0}")]
    ConfigInvalid(String),

    #[error("CONFIG_EXISTS: '{path}' already exists")]
    ConfigExists { path: PathBuf },

    // Scene errors
    #[error("SCENE_NAME_INVALID: '{name}': {reason}")]
    SceneNameInvalid { name: String, reason: String },

    #[error("SCENE_EXISTS: '{path}' already exists (use --force to overwrite)")]
    SceneExists { path: PathBuf },

    #[error("SCENE_KIND_NOT_FOUND: scene kind '{0}' not found")]
    SceneKindNotFound(String),

    #[error("SCENE_KIND_INVALID: {0}")]
    SceneKindInvalid(String),

    // Template errors
    #[error("TEMPLATE_FAILED: {file}: {source}")]
    Template {
        file: String,
        #[source]
        source: TemplateError,
    },

    // Model errors
    #[error("MODEL_PARSE_ERROR: {0}")]
    ModelParseError(String),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Generic(String),
}

impl ScenegenError {
    /// Attach the name of the template file that failed to expand
    pub fn template(file: impl Into<String>, source: TemplateError) -> Self {
        ScenegenError::Template {
            file: file.into(),
            source,
        }
    }
}

impl From<TemplateError> for ScenegenError {
    fn from(err: TemplateError) -> Self {
        ScenegenError::template("<inline>", err)
    }
}

pub type Result<T> = std::result::Result<T, ScenegenError>;
