//! Builtin scene kinds

use super::kind::{SceneFile, SceneTemplates};

/// Names of the builtin kinds, in display order
pub const BUILTIN_KINDS: &[&str] = &["base", "detail", "list"];

/// Builtin file header
pub(crate) const HEADER: &str = include_str!("../../builtin_scenes/header.swift");

/// Get builtin scene kind by name
pub fn get_builtin_kind(name: &str) -> Option<SceneTemplates> {
    match name {
        "base" => Some(base_kind()),
        "detail" => Some(detail_kind()),
        "list" => Some(list_kind()),
        _ => None,
    }
}

fn base_files() -> Vec<SceneFile> {
    vec![
        SceneFile::new(
            "ViewModel.swift",
            include_str!("../../builtin_scenes/base/ViewModel.swift"),
        ),
        SceneFile::new(
            "Navigator.swift",
            include_str!("../../builtin_scenes/base/Navigator.swift"),
        ),
        SceneFile::new(
            "UseCaseType.swift",
            include_str!("../../builtin_scenes/base/UseCaseType.swift"),
        ),
        SceneFile::new(
            "UseCase.swift",
            include_str!("../../builtin_scenes/base/UseCase.swift"),
        ),
        SceneFile::new(
            "ViewController.swift",
            include_str!("../../builtin_scenes/base/ViewController.swift"),
        ),
        SceneFile::new(
            "Test/ViewModelTests.swift",
            include_str!("../../builtin_scenes/base/Test/ViewModelTests.swift"),
        ),
        SceneFile::new(
            "Test/UseCaseMock.swift",
            include_str!("../../builtin_scenes/base/Test/UseCaseMock.swift"),
        ),
        SceneFile::new(
            "Test/NavigatorMock.swift",
            include_str!("../../builtin_scenes/base/Test/NavigatorMock.swift"),
        ),
        SceneFile::new(
            "Test/ViewControllerTests.swift",
            include_str!("../../builtin_scenes/base/Test/ViewControllerTests.swift"),
        ),
    ]
}

/// Plain view-model/navigator/use-case scene
fn base_kind() -> SceneTemplates {
    SceneTemplates::new("base", HEADER, base_files())
}

/// Static table-view detail scene: one outlet and one output binding per
/// property
fn detail_kind() -> SceneTemplates {
    SceneTemplates::new("detail", HEADER, base_files())
        .with_override(SceneFile::new(
            "ViewModel.swift",
            include_str!("../../builtin_scenes/detail/ViewModel.swift"),
        ))
        .with_override(SceneFile::new(
            "ViewController.swift",
            include_str!("../../builtin_scenes/detail/ViewController.swift"),
        ))
        .with_override(SceneFile::new(
            "Test/ViewModelTests.swift",
            include_str!("../../builtin_scenes/detail/Test/ViewModelTests.swift"),
        ))
}

/// Paged table-view scene around a model, with one cell per item
///
/// Needs `model_name` and `model_variable`; the cell files are named after
/// the model rather than the scene.
fn list_kind() -> SceneTemplates {
    let files = vec![
        SceneFile::new(
            "ViewModel.swift",
            include_str!("../../builtin_scenes/list/ViewModel.swift"),
        ),
        SceneFile::new(
            "Navigator.swift",
            include_str!("../../builtin_scenes/list/Navigator.swift"),
        ),
        SceneFile::new(
            "UseCaseType.swift",
            include_str!("../../builtin_scenes/list/UseCaseType.swift"),
        ),
        SceneFile::new(
            "UseCase.swift",
            include_str!("../../builtin_scenes/list/UseCase.swift"),
        ),
        SceneFile::new(
            "ViewController.swift",
            include_str!("../../builtin_scenes/list/ViewController.swift"),
        ),
        SceneFile::new(
            "{{ model_name }}Cell.swift",
            include_str!("../../builtin_scenes/list/Cell.swift"),
        ),
        SceneFile::new(
            "Test/ViewModelTests.swift",
            include_str!("../../builtin_scenes/list/Test/ViewModelTests.swift"),
        ),
        SceneFile::new(
            "Test/UseCaseMock.swift",
            include_str!("../../builtin_scenes/list/Test/UseCaseMock.swift"),
        ),
        SceneFile::new(
            "Test/NavigatorMock.swift",
            include_str!("../../builtin_scenes/list/Test/NavigatorMock.swift"),
        ),
        SceneFile::new(
            "Test/ViewControllerTests.swift",
            include_str!("../../builtin_scenes/list/Test/ViewControllerTests.swift"),
        ),
        SceneFile::new(
            "Test/{{ name }}{{ model_name }}CellTests.swift",
            include_str!("../../builtin_scenes/list/Test/CellTests.swift"),
        ),
    ];
    SceneTemplates::new("list", HEADER, files)
}
