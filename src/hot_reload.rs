//! # Hot Reload Module
//!
//! Watches a route table file and swaps a freshly built router into a
//! [`SharedRouter`] whenever the file changes, without interrupting readers.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pathtree::hot_reload::watch_routes;
//! use pathtree::router::SharedRouter;
//! use pathtree::runtime_config::RouterConfig;
//! use pathtree::table::RouteTable;
//! use std::sync::Arc;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = RouterConfig::from_env();
//! let router = RouteTable::load("routes.yaml")?.build_router(&config)?;
//! let shared = Arc::new(SharedRouter::new(router));
//!
//! let _watcher = watch_routes("routes.yaml", Arc::clone(&shared), config, |table| {
//!     println!("Reloaded {} routes", table.routes.len());
//! })?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! If the new file fails to load or a route cannot be registered, the error
//! is logged and the previous router stays active. An empty file is treated
//! as a write in progress and ignored.

use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::router::{Router, SharedRouter};
use crate::runtime_config::RouterConfig;
use crate::table::RouteTable;

/// Load the table at `path` and build a router from it
fn rebuild(path: &Path, config: &RouterConfig) -> anyhow::Result<(RouteTable, Router<String>)> {
    let table = RouteTable::load(path)?;
    let router = table.build_router(config)?;
    Ok((table, router))
}

/// Watch a route table file and rebuild the [`SharedRouter`] when it changes.
///
/// The callback receives each table that was successfully applied. The
/// returned watcher stops watching when dropped.
///
/// # Errors
///
/// Fails if the watcher cannot be created or the path cannot be watched.
pub fn watch_routes<P, F>(
    path: P,
    router: Arc<SharedRouter<String>>,
    config: RouterConfig,
    mut on_reload: F,
) -> notify::Result<RecommendedWatcher>
where
    P: AsRef<Path>,
    F: FnMut(&RouteTable) + Send + 'static,
{
    let path: PathBuf = path.as_ref().to_path_buf();
    let watch_path = path.clone();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| match res {
            Ok(event) => {
                if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                    return;
                }
                // truncated but not yet rewritten; the write that follows fires again
                if std::fs::metadata(&watch_path).is_ok_and(|meta| meta.len() == 0) {
                    debug!(path = %watch_path.display(), "hot-reload: skipping empty file");
                    return;
                }
                match rebuild(&watch_path, &config) {
                    Ok((table, new_router)) => {
                        info!(
                            path = %watch_path.display(),
                            routes_count = new_router.route_count(),
                            "hot-reload: applying route updates"
                        );
                        router.replace(new_router);
                        on_reload(&table);
                    }
                    Err(e) => {
                        error!(
                            path = %watch_path.display(),
                            error = %format!("{:#}", e),
                            "hot-reload: keeping previous routes"
                        );
                    }
                }
            }
            Err(e) => error!(error = %e, "hot-reload: watch error"),
        },
        Config::default(),
    )?;

    watcher.watch(&path, RecursiveMode::NonRecursive)?;
    Ok(watcher)
}
