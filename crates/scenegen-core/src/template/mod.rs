//! Template module - placeholder and loop expansion for scene scaffolding
//!
//! Templates are plain text (usually Swift source) with two constructs:
//!
//! - Scalar placeholders: `{{ name }}`, `{{ p.name }}` (spaces optional)
//! - Loop blocks: `{% for p in properties %} ... {% endfor %}`
//!
//! Everything outside these tags is copied verbatim, whitespace and line
//! breaks included. A template is parsed into a node tree up front, so a
//! structural error anywhere aborts expansion before any output exists.

pub mod context;
pub mod engine;
pub mod error;

pub use context::{Context, PropertyDescriptor};
pub use engine::{expand, ExprPath, Loop, Node, Placeholder, Template, TemplateExpander};
pub use error::TemplateError;
