//! Project configuration (`scenegen.toml`)

pub mod consts;
pub mod model;

pub use model::{AuthorConfig, Config, ProjectConfig, TemplatesConfig};
