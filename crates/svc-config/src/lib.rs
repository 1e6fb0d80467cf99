//! Project configuration for service manifest tooling.
//!
//! A project is a directory holding `service.toml` (plus an optional
//! `service.local.toml`) and a `res/` tree of manifests. This crate resolves
//! the layered configuration and bundles it with the project root.

pub mod config;
pub mod error;
pub mod project;
pub mod resolver;

pub use config::{ConfigLayer, DEFAULT_PORT, ProjectConfig};
pub use error::{Error, Result};
pub use project::Project;
pub use resolver::ConfigResolver;
