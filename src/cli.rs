use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use scengen::MissingTemplatePolicy;

/// scengen - expand scenario templates into numbered HTML pages
#[derive(Parser, Debug)]
#[command(name = "scengen")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'scengen' without a subcommand to generate with the default settings.")]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v lists every written file)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate every scenario page
    Generate {
        #[command(flatten)]
        run: RunArgs,

        /// What to do when a template is missing
        #[arg(long, value_enum)]
        on_missing: Option<MissingTemplatePolicy>,

        /// Dry run - show what would be written
        #[arg(long)]
        dry_run: bool,

        /// Exit with an error if any template was missing
        #[arg(long)]
        strict: bool,
    },

    /// Preview which pages a run would create or change
    Diff {
        #[command(flatten)]
        run: RunArgs,
    },
}

/// Options shared by every command that plans a run
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RunArgs {
    /// Config file (defaults to ./scengen.toml, then the user config)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory containing the template files
    #[arg(short, long)]
    pub templates_dir: Option<PathBuf>,

    /// Directory the scenario pages are written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Number of scenarios to generate
    #[arg(short = 'n', long)]
    pub count: Option<u32>,
}
