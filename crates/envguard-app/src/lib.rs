//! Use case orchestration for envguard.
//!
//! This crate provides the application layer: use cases that coordinate the settings, source,
//! domain, and render layers. The CLI crate depends on this; it only handles argument parsing,
//! process environment capture, and I/O.

#![forbid(unsafe_code)]

mod presets;
mod render;
mod validate;

pub use presets::list_presets;
pub use render::{render_annotations, render_text, serialize_report, write_report};
pub use validate::{ValidateInput, ValidateOutput, run_validate, verdict_exit_code};
