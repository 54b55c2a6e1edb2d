// Core modules
pub mod config;
pub mod error;
pub mod model;
pub mod project;
pub mod scene;
pub mod template;

// Re-export commonly used types
pub use error::{Result, ScenegenError};
