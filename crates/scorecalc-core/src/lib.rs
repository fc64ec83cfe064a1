//! scorecalc-core: SAT and ACT score engine, data model, and score sheets.
//!
//! The engine (`scale`, `act`, `sat`) is a set of pure functions over raw
//! correct-answer counts. Everything else in this crate feeds it inputs or
//! records its outputs.

pub mod act;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod sat;
pub mod scale;
pub mod statistics;
