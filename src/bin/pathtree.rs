use clap::Parser;
use pathtree::cli::{run_cli, Cli};
use pathtree::logging::{init_logging_with_config, LogConfig};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let mut log_config = LogConfig::from_env();
    // quiet by default so per-request events don't drown command output
    if std::env::var("PATHTREE_LOG_LEVEL").is_err() {
        log_config.log_level = "warn".to_string();
    }
    let _guard = init_logging_with_config(&log_config)?;

    run_cli(Cli::parse())
}
