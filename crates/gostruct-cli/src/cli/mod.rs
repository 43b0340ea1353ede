use std::path::PathBuf;

use clap::Parser;
use gostruct_config::GostructConfig;

/// Top-level CLI parser for the `gostruct` binary.
#[derive(Debug, Parser)]
#[command(
    name = "gostruct",
    version,
    about = "Extract Go structs, methods and declarations as JSON"
)]
pub struct Cli {
    /// Go file or package directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Walk sub-directories
    #[arg(short, long)]
    pub recursive: bool,

    /// Parse `_test.go` files (`--include-tests=false` to skip them)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub include_tests: Option<bool>,

    /// Omit function and method bodies
    #[arg(long)]
    pub no_bodies: bool,

    /// Glob to skip, relative to PATH (repeatable)
    #[arg(short, long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Single-line JSON output
    #[arg(long)]
    pub compact: bool,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Layer the command-line flags over the loaded configuration.
    ///
    /// Flags only ever switch a setting on (or off, for `--no-bodies` and
    /// `--compact`); an absent flag keeps the configured value.
    pub fn apply(&self, config: &mut GostructConfig) {
        if self.recursive {
            config.scan.recursive = true;
        }
        if let Some(include) = self.include_tests {
            config.scan.include_tests = include;
        }
        if self.no_bodies {
            config.scan.include_bodies = false;
        }
        config.scan.exclude.extend(self.exclude.iter().cloned());
        if self.compact {
            config.output.pretty = false;
        }
    }
}
