//! CLI entry point for the grid collage composer

use clap::Parser;
use gridcollage::io::cli::{Cli, CollageSession, init_logging};
use log::error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_filter());

    match CollageSession::new(cli).run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
