pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{Cli, Command};

pub use adapters::file_store::FileStore;
pub use config::toml_config::TomlConfig;
pub use crate::core::{engine::RecordEngine, Record, Schema, Summary};
pub use utils::error::{RecordError, Result};
