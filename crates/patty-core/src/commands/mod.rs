//! High-level commands for patty operations.
//!
//! Public API called by the CLI frontend: each command pairs an options
//! struct with a `run` entry point taking the root explicitly.

pub mod create;
pub mod get;
pub mod list;

pub use create::{CreateCommand, CreateOptions};
pub use get::{GetCommand, GetOptions, GetReport, resolve_and_guard};
pub use list::{ListCommand, ListOptions, ListReport};
