//! Scene scaffolding: builtin and user scene kinds, rendering and writing

mod builtin;
mod generate;
mod kind;

pub use builtin::{get_builtin_kind, BUILTIN_KINDS};
pub use generate::{
    bind_model, render_scene, scene_context, validate_identifier, write_scene, RenderedFile,
};
pub use kind::{list_scene_kinds, resolve_scene_kind, KindSource, SceneFile, SceneTemplates};
