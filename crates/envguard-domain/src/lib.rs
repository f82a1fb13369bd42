//! Pure rule evaluation (no IO).
//!
//! Input: a resolved rule set and an [`source::EnvSource`] constructed elsewhere.
//! Output: per-key error messages + ok flag, and coverage advisories.

#![forbid(unsafe_code)]

pub mod coverage;
pub mod model;
pub mod report;
pub mod source;

mod checks;
mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{evaluate, evaluate_key};
