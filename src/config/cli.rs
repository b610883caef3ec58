use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "flatrec")]
#[command(about = "Append key=value records to a flat file, list and summarize them")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Path to a TOML configuration file (defaults to ./flatrec.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the store file path
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create the store file, discarding any existing records
    Init,
    /// Append one record built from key=value items
    Add {
        #[arg(value_name = "KEY=VALUE", allow_hyphen_values = true, trailing_var_arg = true)]
        items: Vec<String>,
    },
    /// Print every record
    List {
        /// Emit a JSON array instead of stored lines
        #[arg(long)]
        json: bool,
    },
    /// Print the record count, and the numeric total when configured
    Summary {
        #[arg(long)]
        json: bool,
    },
}
