use std::time::Duration;

use clap::ArgMatches;
use tracing::{error, info, warn};

use printwatch_core::config::PrintwatchConfig;
use printwatch_core::events;
use printwatch_core::{PrintwatchError, StatusPoller, TelemetrySnapshot};

use crate::dashboard;
use crate::table::StatusTable;

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
fn load_config_with_warning() -> PrintwatchConfig {
    match PrintwatchConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.printwatch/config.toml and ./.printwatch/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            PrintwatchConfig::default()
        }
    }
}

/// Resolve the endpoint URL: CLI flag wins over config, config over default.
fn resolve_url(matches: &ArgMatches, config: &PrintwatchConfig) -> String {
    matches
        .get_one::<String>("url")
        .cloned()
        .unwrap_or_else(|| config.url())
}

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("watch", sub_matches)) => handle_watch_command(sub_matches),
        Some(("status", sub_matches)) => handle_status_command(sub_matches),
        _ => Err("Unknown command. Use --help to see available commands.".into()),
    }
}

fn handle_watch_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let url = resolve_url(matches, &config);
    let interval = matches
        .get_one::<u64>("interval")
        .map(|secs| Duration::from_secs(*secs))
        .unwrap_or_else(|| config.interval());

    info!(
        event = "cli.watch.started",
        url = %url,
        interval_secs = interval.as_secs(),
    );

    let poller = StatusPoller::new(url, config.request_timeout())?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(dashboard::run_dashboard(poller, interval))?;

    info!(event = "cli.watch.completed");
    events::log_app_shutdown();
    Ok(())
}

fn handle_status_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let url = resolve_url(matches, &config);

    info!(event = "cli.status.started", url = %url);

    let poller = StatusPoller::new(url.clone(), config.request_timeout())?;
    let runtime = tokio::runtime::Runtime::new()?;

    match runtime.block_on(poller.fetch()) {
        Ok(payload) => {
            // One-shot view of the same merge path the dashboard uses.
            let snapshot = TelemetrySnapshot::default().merge(&payload);

            if matches.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                StatusTable::from_snapshot(&snapshot).print();
            }

            info!(event = "cli.status.completed", url = %url);
            Ok(())
        }
        Err(e) => {
            error!(
                event = "cli.status.failed",
                url = %url,
                error_code = e.error_code(),
                error = %e,
            );
            eprintln!("Error: {}", e);
            Err(Box::new(e))
        }
    }
}
