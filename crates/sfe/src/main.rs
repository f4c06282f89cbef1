//! Sentry Filter Events - Entry Point
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `sfe filter <FILE\|->` | Run one event through the filter |
//! | `sfe rules` | Print the combined filter list |

use clap::Parser;
use sfe::cli::{Cli, run};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("sfe: {e:#}");
            ExitCode::FAILURE
        }
    }
}
