//! Filesystem access for service manifest tooling
//!
//! Provides normalized paths, atomic writes, tolerant JSON reads and
//! project root discovery.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod json;
pub mod path;
pub mod root;

pub use config::ConfigStore;
pub use constants::ResourcePath;
pub use error::{Error, Result};
pub use json::{read_json_file, write_json_file};
pub use path::NormalizedPath;
pub use root::find_root_directory;
