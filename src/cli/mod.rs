//! # CLI Module
//!
//! Command-line access to route tables.
//!
//! ## Commands
//!
//! ### `resolve`
//!
//! Match one request against a route table and print the result as JSON:
//!
//! ```bash
//! pathtree resolve --routes routes.yaml GET /pets/42
//! # {"method":"GET","path":"/pets/42","handler":"get_pet","params":{"id":"42"}}
//! ```
//!
//! A miss prints a 404 error body and exits with status 1.
//!
//! ### `dump`
//!
//! Print every route in registration order:
//!
//! ```bash
//! pathtree dump --routes routes.yaml
//! ```
//!
//! ### `watch`
//!
//! Keep a router built from the file up to date and log every reload until
//! SIGINT/SIGTERM:
//!
//! ```bash
//! PATHTREE_LOG_FORMAT=pretty pathtree watch --routes routes.yaml
//! ```
//!
//! All commands accept `--config <FILE>` with a YAML [`crate::runtime_config::RouterConfig`].

mod commands;
#[cfg(test)]
mod tests;

pub use commands::{run_cli, MatchReport};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface for pathtree
#[derive(Parser)]
#[command(name = "pathtree")]
#[command(about = "Resolve requests against path-tree route tables", long_about = None)]
pub struct Cli {
    /// Router configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a request against a route table
    Resolve {
        /// Route table file (.yaml, .yml, .json or .toml)
        #[arg(short, long)]
        routes: PathBuf,

        /// HTTP method, e.g. GET
        method: String,

        /// Request path, e.g. /pets/42
        path: String,
    },
    /// Print every route in a route table
    Dump {
        /// Route table file (.yaml, .yml, .json or .toml)
        #[arg(short, long)]
        routes: PathBuf,
    },
    /// Watch a route table and rebuild the router on every change
    Watch {
        /// Route table file (.yaml, .yml, .json or .toml)
        #[arg(short, long)]
        routes: PathBuf,
    },
}
