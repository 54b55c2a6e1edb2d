//! Tests for project detection (Project::find_root)

use scenegen_core::error::ScenegenError;
use scenegen_core::project::Project;
use scenegen_testkit::write_project_config;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper: Create a temporary project with scenegen.toml
fn create_temp_project() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_project_config(temp_dir.path());
    let root = temp_dir.path().to_path_buf();

    (temp_dir, root)
}

#[test]
fn test_find_root_in_current_dir() {
    // Arrange: Create project with scenegen.toml in root
    let (_temp, project_root) = create_temp_project();

    // Act: Find root from current directory
    let project = Project::find_root(&project_root)
        .expect("find_root should succeed")
        .expect("Should find project");

    // Assert: Root and config are loaded
    assert_eq!(
        project.root.canonicalize().unwrap(),
        project_root.canonicalize().unwrap(),
        "Root should match project root"
    );
    assert_eq!(project.config.project.name, "iTool");
    assert_eq!(project.config.author.developer, "Tuan Truong");
}

#[test]
fn test_find_root_in_parent_dir() {
    // Arrange: Create project with subdirectory
    let (_temp, project_root) = create_temp_project();
    let subdir = project_root.join("iTool").join("Scenes");
    fs::create_dir_all(&subdir).expect("Failed to create subdirectory");

    // Act: Find root from subdirectory
    let project = Project::find_root(&subdir)
        .expect("find_root should succeed")
        .expect("Should find project in parent");

    // Assert: Should find project in parent, not subdirectory
    assert_eq!(
        project.root.canonicalize().unwrap(),
        project_root.canonicalize().unwrap()
    );
}

#[test]
fn test_find_root_not_found() {
    // Arrange: Create temp directory WITHOUT scenegen.toml
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    // Act
    let result = Project::find_root(temp_dir.path());

    // Assert: Should return None (not found)
    assert!(result.is_ok(), "find_root should not error");
    assert!(result.unwrap().is_none());
}

#[test]
fn test_find_root_with_invalid_config() {
    // Arrange: scenegen.toml missing the [author] table
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(
        temp_dir.path().join("scenegen.toml"),
        "[project]\nname = \"iTool\"\n",
    )
    .unwrap();

    // Act
    let result = Project::find_root(temp_dir.path());

    // Assert: A broken config is an error, not "no project"
    assert!(matches!(result, Err(ScenegenError::ConfigInvalid(_))));
}

#[test]
fn test_templates_dir_defaults_and_overrides() {
    let (_temp, project_root) = create_temp_project();
    let project = Project::load(&project_root).unwrap();
    assert_eq!(project.templates_dir(), project_root.join("templates"));

    fs::write(
        project_root.join("scenegen.toml"),
        "[project]\nname = \"iTool\"\n\n[author]\ndeveloper = \"A\"\ncompany = \"B\"\n\n[templates]\ndir = \"Tools/Templates\"\n",
    )
    .unwrap();
    let project = Project::load(&project_root).unwrap();
    assert_eq!(
        project.templates_dir(),
        project_root.join("Tools/Templates")
    );
    assert_eq!(project.config.templates.date_format, "%-m/%-d/%y");
}
