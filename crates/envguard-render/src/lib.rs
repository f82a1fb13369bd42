//! Rendering utilities for terminals and CI surfaces (plain text, GitHub annotations).

#![forbid(unsafe_code)]

mod gha;
mod model;
mod text;

pub use gha::render_github_annotations;
pub use model::{RenderableError, RenderableReport};
pub use text::render_text;
