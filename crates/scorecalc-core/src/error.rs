//! Score error types.
//!
//! The engine itself never fails. These errors come from turning text
//! (CLI flags, score sheets) into typed engine inputs.

use thiserror::Error;

/// Errors that can occur when naming tests, variants or sections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The test name is neither `act` nor `sat`.
    #[error("unknown test: {0}")]
    UnknownTest(String),

    /// The variant name does not exist for this test.
    #[error("unknown {test} variant: {name}")]
    UnknownVariant { test: &'static str, name: String },

    /// A raw score key that the variant has no section for.
    #[error("unknown section '{key}' for {variant}")]
    UnknownSection { variant: String, key: String },
}
