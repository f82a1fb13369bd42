//! Stable DTOs and IDs used across the envguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted validation report
//! - stable pseudo-keys and defaults shared by the CLI and the app layer

#![forbid(unsafe_code)]

pub mod ids;
pub mod receipt;

pub use receipt::{ErrorMap, RunMeta, SCHEMA_REPORT_V1, ToolMeta, ValidationReport};
