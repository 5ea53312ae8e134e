// src/logging.rs

//! Log output for `schedviz`.
//!
//! The filter comes from `--log-level` when given. Otherwise `SCHEDVIZ_LOG`
//! is read as `EnvFilter` directives, so `SCHEDVIZ_LOG=schedviz::parse=trace`
//! shows the lines each reader skips. With neither set, only `info` and above
//! is shown.
//!
//! Everything is written to stderr; `--print` and `--summary` own stdout.

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

pub const LOG_ENV_VAR: &str = "SCHEDVIZ_LOG";
const DEFAULT_DIRECTIVES: &str = "info";

/// Install the global subscriber. Call once, before any input is read.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let directives = filter_directives(cli_level, env_value.as_deref());
    let filter = EnvFilter::try_new(&directives)
        .with_context(|| format!("invalid {LOG_ENV_VAR} directives '{directives}'"))?;

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

/// Directive string for the filter: the CLI level wins over the environment.
fn filter_directives(cli_level: Option<LogLevel>, env_value: Option<&str>) -> String {
    match (cli_level, env_value.map(str::trim)) {
        (Some(level), _) => level_directive(level).to_string(),
        (None, Some(env)) if !env.is_empty() => env.to_string(),
        _ => DEFAULT_DIRECTIVES.to_string(),
    }
}

fn level_directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}
