use crate::adapters::file_store::FileStore;
use crate::config::cli::{Cli, Command};
use crate::config::toml_config::TomlConfig;
use crate::core::engine::RecordEngine;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::io::Write;

/// Resolves the configuration file, applies command-line overrides and validates the result.
pub fn load_config(cli: &Cli) -> Result<TomlConfig> {
    let mut config = TomlConfig::resolve(cli.config.as_deref())?;

    if let Some(store) = &cli.store {
        tracing::debug!("Store path overridden to: {}", store.display());
        config = config.with_store_path(store.clone());
    }

    config.validate()?;
    Ok(config)
}

pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    // 載入並驗證配置
    let config = load_config(cli)?;
    let schema = config.schema().clone();
    let store = FileStore::new(config.store_path(), schema.clone());
    let engine = RecordEngine::new(store, schema);

    tracing::debug!(
        "Running {:?} against {}",
        cli.command,
        config.store_path().display()
    );

    match &cli.command {
        Command::Init => engine.init()?,
        Command::Add { items } => {
            engine.add(items.as_slice())?;
        }
        Command::List { json } => {
            engine.list(out, *json)?;
        }
        Command::Summary { json } => {
            engine.summary(out, *json)?;
        }
    }

    out.flush()?;
    Ok(())
}
