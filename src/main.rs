// WiPose 📡 AGPL-3.0 License - https://github.com/wipose/wipose

use clap::Parser;

use wipose::cli::args::{Cli, Commands};
use wipose::cli::mock::run_mock;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Mock(args) => run_mock(&args),
    }
}
