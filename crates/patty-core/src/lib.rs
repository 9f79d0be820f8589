//! Patty Core Library
//!
//! Domain logic for organizing cloned repositories and ad-hoc working
//! directories under a single managed root: reference resolution,
//! remote existence probing, destination guarding, and inventory
//! indexing.

pub mod commands;
pub mod config;
pub mod error;
pub mod guard;
pub mod index;
pub mod remote;
pub mod resolver;

pub use config::PattyRoot;
pub use error::{Error, Result};
