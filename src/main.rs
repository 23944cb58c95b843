//! scengen CLI - scenario page generator
//!
//! Usage: scengen [COMMAND]
//!
//! Commands:
//!   generate  Generate every scenario page (default)
//!   diff      Preview which pages a run would create or change

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands, RunArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => commands::generate::cmd_generate(
            &RunArgs::default(),
            None,
            false,
            false,
            cli.json,
            cli.verbose,
        ),
        Some(Commands::Generate {
            run,
            on_missing,
            dry_run,
            strict,
        }) => commands::generate::cmd_generate(
            &run,
            on_missing,
            dry_run,
            strict,
            cli.json,
            cli.verbose,
        ),
        Some(Commands::Diff { run }) => commands::diff::cmd_diff(&run, cli.json, cli.verbose),
    }
}
