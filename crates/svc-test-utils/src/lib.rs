//! Shared test utilities for the service-manifest workspace.
//!
//! This crate is a dev-dependency only, never published.
//!
//! - [`project`]: [`TestProject`](project::TestProject) builder for a
//!   temporary service project with `service.toml` and a `res/` tree

pub mod project;

pub use project::{TEST_CDN, TEST_NAME, TEST_PORT, TestProject, sample_manifest};
