//! Testing infrastructure for dashlist integration tests.
//!
//! - `TestWorld`: isolated data directory plus fixture files, runs the CLI
//! - `fixtures`: API-shaped fixture payloads
//! - `assertions`: checks over the JSON form of a rendered list page

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::FixtureBuilder;
pub use world::{CliResult, TestWorld};
