use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, Write};

use todoflow::cli::{Cli, Command};
use todoflow::config::Config;
use todoflow::logging::{init_file_tracing, init_stderr_tracing};
use todoflow::replay::{parse_actions, render_report, replay};
use todoflow::todos::TodoAppState;
use todoflow::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Run);

    match &command {
        Command::Run => init_file_tracing(),
        Command::Replay { .. } => init_stderr_tracing(),
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().with_context(|| {
            format!("loading config from {}", Config::config_path().display())
        })?,
    };
    if let Some(filter) = cli.filter {
        config.defaults.visibility_filter = filter;
    }

    match command {
        Command::Run => runtime::run(&config).context("running terminal UI"),
        Command::Replay { input } => {
            let actions = if input.as_os_str() == "-" {
                parse_actions(io::stdin().lock())
            } else {
                let file = File::open(&input)
                    .with_context(|| format!("opening action log {}", input.display()))?;
                parse_actions(BufReader::new(file))
            }
            .with_context(|| format!("reading action log {}", input.display()))?;

            let initial = TodoAppState {
                visibility_filter: config.defaults.visibility_filter.clone(),
                ..TodoAppState::default()
            };
            let report = replay(initial, actions);
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", render_report(&report)?)?;
            Ok(())
        }
    }
}
