//! Command line interface
//!
//! `sfe filter` runs a single event through the before-send filter the way a
//! host application would. `sfe rules` shows the rules it would apply and
//! `sfe config` writes out the configuration they come from.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use sfe_application::EventFilterService;
use sfe_domain::{Event, EventHint, FilterDecision, FilterList};
use sfe_infrastructure::config::ConfigLoader;
use sfe_infrastructure::di::{create_cache_provider, init_app_with_cache};
use sfe_infrastructure::logging::init_logging;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Exit code reported when the event was suppressed
pub const EXIT_SUPPRESSED: u8 = 3;

/// Input path meaning standard input
const STDIN_PATH: &str = "-";

/// Command line interface for Sentry Filter Events
#[derive(Parser, Debug)]
#[command(name = "sfe")]
#[command(about = "Filter error events before they are sent to Sentry")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Filter one event read as `{ "event": ..., "hint": ... }` JSON
    Filter {
        /// Input file, `-` for standard input
        #[arg(default_value = STDIN_PATH)]
        input: PathBuf,
    },
    /// Print the combined filter list with the origin of each rule
    Rules,
    /// Write the effective configuration to a TOML file
    Config {
        /// Destination file
        output: PathBuf,
    },
}

/// Event and hint handed to the filter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterRequest {
    /// Event to filter
    pub event: Event,

    /// Triggering exception, if any
    #[serde(default)]
    pub hint: EventHint,
}

/// Result of filtering a request
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    /// The event after rewriting
    pub event: Event,
    /// Whether to send it
    pub decision: FilterDecision,
}

impl FilterOutcome {
    /// Process exit code for this outcome
    pub fn exit_code(&self) -> u8 {
        if self.decision.is_suppressed() {
            EXIT_SUPPRESSED
        } else {
            0
        }
    }
}

/// Parse a filter request from JSON
pub fn parse_request(input: &str) -> anyhow::Result<FilterRequest> {
    serde_json::from_str(input).context("Invalid filter request")
}

/// Run a request through the filter
pub async fn filter_request(
    filter: &EventFilterService,
    request: FilterRequest,
) -> anyhow::Result<FilterOutcome> {
    let FilterRequest { mut event, hint } = request;
    let decision = filter
        .filter_event(&mut event, &hint)
        .await
        .context("Failed to filter event")?;
    Ok(FilterOutcome { event, decision })
}

/// Render the filter list, one `[origin] pattern` line per rule
pub fn render_rules(list: &FilterList) -> String {
    list.iter()
        .map(|entry| format!("[{}] {}\n", entry.source, entry.rule.message))
        .collect()
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read standard input")?;
        Ok(input)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

/// Execute the parsed command line
pub async fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    if let Command::Config { output } = &cli.command {
        loader
            .save_to_file(&config, output)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        return Ok(ExitCode::SUCCESS);
    }

    let cache = create_cache_provider(&config.cache);
    let context = init_app_with_cache(loader, config, cache)?;
    let filter = context.event_filter();

    match &cli.command {
        Command::Filter { input } => {
            let request = parse_request(&read_input(input)?)?;
            let outcome = filter_request(&filter, request).await?;
            match &outcome.decision {
                FilterDecision::Send => {
                    println!("{}", serde_json::to_string_pretty(&outcome.event)?);
                }
                FilterDecision::Suppressed { pattern, source } => {
                    eprintln!("Event suppressed by {source} rule: {pattern}");
                }
            }
            Ok(ExitCode::from(outcome.exit_code()))
        }
        Command::Rules => {
            let list = filter.filter_list().await?;
            print!("{}", render_rules(&list));
            Ok(ExitCode::SUCCESS)
        }
        Command::Config { .. } => Ok(ExitCode::SUCCESS),
    }
}
