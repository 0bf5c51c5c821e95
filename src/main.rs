//! growthdash: print the derived dashboard payload for a metrics snapshot.
//!
//! Usage: `growthdash [SNAPSHOT]`. Logs go to stderr (`RUST_LOG` controls
//! verbosity); the JSON payload goes to stdout.

use std::process::ExitCode;

use growthdash_lib::config::load_config;
use growthdash_lib::error::DashboardError;
use growthdash_lib::json_loader::{load_snapshot, resolve_snapshot_path};
use growthdash_lib::services::dashboard::{build_dashboard, DashboardResult};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let arg = std::env::args().nth(1);
    let result = match run(arg.as_deref()) {
        Ok(result) => result,
        Err(e) => {
            log::error!("{}", e);
            DashboardResult::from_error(&e)
        }
    };

    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Failed to serialize dashboard: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if matches!(result, DashboardResult::Error { .. }) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(arg: Option<&str>) -> Result<DashboardResult, DashboardError> {
    let config = load_config()?;
    let path = resolve_snapshot_path(arg, &config)?;
    let snapshot = load_snapshot(&path)?;
    Ok(build_dashboard(&snapshot, &config))
}
