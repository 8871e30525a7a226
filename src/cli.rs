use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::todos::VisibilityFilter;

#[derive(Debug, Parser)]
#[command(name = "todoflow", version, about = "Todo list driven by a reducer store")]
pub struct Cli {
    /// Path to config file (default: ~/.config/todoflow/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the initial visibility filter (SHOW_ALL, SHOW_ACTIVE, SHOW_COMPLETED)
    #[arg(long, global = true)]
    pub filter: Option<VisibilityFilter>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the interactive terminal UI (default)
    Run,
    /// Dispatch a JSON Lines action log and print the resulting state
    Replay {
        /// Action log path, or `-` for stdin
        input: PathBuf,
    },
}
