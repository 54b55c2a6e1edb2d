//! Fixture files for tests

use std::path::{Path, PathBuf};

/// Minimal valid scenegen.toml
pub const SAMPLE_CONFIG: &str = r#"[project]
name = "iTool"

[author]
developer = "Tuan Truong"
company = "Framgia"
"#;

/// Swift model with a mix of plain, optional and array properties
pub const SAMPLE_MODEL: &str = r#"struct UserProfile {
    let email: String
    let phone: String?
    let tags: [String]
}
"#;

/// Context file for `scenegen render --context`
pub const SAMPLE_CONTEXT: &str = r#"name = "UserProfile"

[[properties]]
name = "email"

[[properties]]
name = "phone"

[vars]
project = "iTool"
"#;

/// Write SAMPLE_CONFIG to `<root>/scenegen.toml`
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_project_config(root: &Path) -> PathBuf {
    let path = root.join("scenegen.toml");
    std::fs::write(&path, SAMPLE_CONFIG).expect("Failed to write scenegen.toml");
    path
}

/// Write SAMPLE_MODEL to `<root>/UserProfile.swift`
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_model(root: &Path) -> PathBuf {
    let path = root.join("UserProfile.swift");
    std::fs::write(&path, SAMPLE_MODEL).expect("Failed to write model file");
    path
}
