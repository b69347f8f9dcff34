//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

use crate::core::Category;

/// Exit status for invalid command-line usage.
pub const USAGE_EXIT_CODE: i32 = 1;

/// Import badge images into the asset catalog as imagesets
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Badge category to import
    #[arg(value_enum, default_value_t = Category::Country)]
    pub category: Category,

    /// Replace imagesets that already exist
    #[arg(short, long)]
    pub force: bool,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Print debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// Config file path (default: badge-import.toml, searched upward)
    #[arg(short = 'C', long, default_value = "badge-import.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Project root (default: config file directory, or current directory)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,
}

impl Cli {
    /// Parse arguments, exiting with status 1 on usage errors.
    ///
    /// `--help` and `--version` still exit with 0.
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(err) => {
                let code = if err.use_stderr() { USAGE_EXIT_CODE } else { 0 };
                err.print().ok();
                std::process::exit(code);
            }
        }
    }
}
