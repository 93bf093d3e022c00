use std::collections::BTreeMap;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use http::Method;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{Cli, Commands};
use crate::hot_reload::watch_routes;
use crate::problem::ErrorBody;
use crate::router::{Router, SharedRouter};
use crate::runtime_config::RouterConfig;
use crate::table::RouteTable;

/// JSON printed by `pathtree resolve` on a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub method: String,
    pub path: String,
    pub handler: String,
    pub params: BTreeMap<String, String>,
}

/// Match `method` + `path` against `router`
///
/// A method name that does not parse is treated like any other miss.
pub(crate) fn resolve_report(
    router: &Router<String>,
    method: &str,
    path: &str,
) -> Result<MatchReport, ErrorBody> {
    let parsed = Method::from_bytes(method.to_ascii_uppercase().as_bytes());
    let Ok(parsed) = parsed else {
        return Err(ErrorBody::new(
            http::StatusCode::NOT_FOUND,
            format!("no route for {} {}", method, path),
        ));
    };

    match router.route(parsed.clone(), path) {
        Some(matched) => Ok(MatchReport {
            method: parsed.to_string(),
            path: path.to_string(),
            handler: matched.handler().as_ref().clone(),
            params: matched.path_params_map().into_iter().collect(),
        }),
        None => Err(ErrorBody::not_found(&parsed, path)),
    }
}

fn load_config(config: Option<&Path>) -> Result<RouterConfig> {
    match config {
        Some(path) => RouterConfig::from_yaml_file(path),
        None => Ok(RouterConfig::from_env()),
    }
}

fn build(routes: &Path, config: &RouterConfig) -> Result<Router<String>> {
    RouteTable::load(routes)?
        .build_router(config)
        .with_context(|| format!("failed to build router from {}", routes.display()))
}

/// Execute the parsed command
///
/// # Errors
///
/// Fails when the configuration or route table cannot be loaded, or the
/// watcher cannot be started. A request that matches no route is not an
/// error: the 404 body is printed and the exit code is 1.
pub fn run_cli(cli: Cli) -> Result<ExitCode> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Resolve {
            routes,
            method,
            path,
        } => {
            let router = build(&routes, &config)?;
            match resolve_report(&router, &method, &path) {
                Ok(report) => {
                    println!("{}", serde_json::to_string(&report)?);
                    Ok(ExitCode::SUCCESS)
                }
                Err(body) => {
                    println!("{}", body.to_json()?);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Dump { routes } => {
            let router = build(&routes, &config)?;
            router.dump_routes();
            Ok(ExitCode::SUCCESS)
        }
        Commands::Watch { routes } => {
            let router = build(&routes, &config)?;
            let shared = Arc::new(SharedRouter::new(router));
            let _watcher = watch_routes(&routes, Arc::clone(&shared), config, |table| {
                info!(routes_count = table.routes.len(), "Route table reloaded");
            })
            .with_context(|| format!("failed to watch {}", routes.display()))?;

            info!(path = %routes.display(), "Watching route table");
            wait_for_shutdown()?;
            info!("Stopping route table watcher");
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(unix)]
fn wait_for_shutdown() -> Result<()> {
    use signal_hook::consts::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals =
        Signals::new([SIGINT, SIGTERM]).context("failed to register signal handlers")?;
    if let Some(signal) = signals.forever().next() {
        info!(signal, "Received shutdown signal");
    }
    Ok(())
}

#[cfg(not(unix))]
fn wait_for_shutdown() -> Result<()> {
    loop {
        std::thread::park();
    }
}
