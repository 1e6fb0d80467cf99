//! Command implementations for svc-cli

pub mod config;
pub mod manifest;
pub mod provider;

pub use config::run_config;
pub use manifest::run_manifest;
pub use provider::run_provider_url;
