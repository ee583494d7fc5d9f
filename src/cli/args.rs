// WiPose 📡 AGPL-3.0 License - https://github.com/wipose/wipose

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Mock Options:
    --count, -n <COUNT>    Number of predictions to generate [default: 1]
    --seed <SEED>          Seed the generator for reproducible output
    --pretty               Pretty-print the JSON output
    --output, -o <FILE>    Write predictions to a file instead of stdout
    --source, -s <FILE>    CSI capture the prediction stands in for (.csv only)
    --verbose              Show verbose output

Examples:
    wipose mock
    wipose mock --count 5 --pretty
    wipose mock --seed 42 -n 100 -o predictions.jsonl
    wipose mock --source capture.csv --pretty"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate mock pose predictions as wire-format JSON
    Mock(MockArgs),
}

/// Arguments for the mock command.
#[derive(Args, Debug)]
pub struct MockArgs {
    /// Number of predictions to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Seed the generator for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Write predictions to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// CSI capture the prediction stands in for (.csv only)
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}
