//! Unit tests for CLI commands

use super::commands::resolve_report;
use crate::cli::{Cli, Commands};
use crate::router::Router;
use crate::runtime_config::RouterConfig;
use clap::Parser;
use http::Method;

fn pet_router() -> Router<String> {
    let mut router = Router::new(&RouterConfig::default());
    router
        .add_route(Method::GET, "/pets", "list_pets".to_string())
        .unwrap();
    router
        .add_route(Method::GET, "/pets/{id}", "get_pet".to_string())
        .unwrap();
    router
        .add_route(
            Method::GET,
            "/users/{user_id}/posts/{post_id}",
            "get_post".to_string(),
        )
        .unwrap();
    router
}

#[test]
fn test_resolve_command_parses() {
    let cli = Cli::try_parse_from([
        "pathtree",
        "resolve",
        "--routes",
        "routes.yaml",
        "GET",
        "/pets/42",
    ])
    .unwrap();

    assert!(cli.config.is_none());
    match cli.command {
        Commands::Resolve {
            routes,
            method,
            path,
        } => {
            assert_eq!(routes.to_string_lossy(), "routes.yaml");
            assert_eq!(method, "GET");
            assert_eq!(path, "/pets/42");
        }
        _ => panic!("Expected Resolve command"),
    }
}

#[test]
fn test_global_config_flag() {
    let cli = Cli::try_parse_from([
        "pathtree",
        "dump",
        "--routes",
        "routes.json",
        "--config",
        "router.yaml",
    ])
    .unwrap();

    assert_eq!(cli.config.unwrap().to_string_lossy(), "router.yaml");
    assert!(matches!(cli.command, Commands::Dump { .. }));
}

#[test]
fn test_watch_requires_routes() {
    assert!(Cli::try_parse_from(["pathtree", "watch"]).is_err());
}

#[test]
fn test_resolve_report_hit() {
    let router = pet_router();
    let report = resolve_report(&router, "get", "/users/7/posts/abc?draft=1").unwrap();

    assert_eq!(report.method, "GET");
    assert_eq!(report.handler, "get_post");
    assert_eq!(report.path, "/users/7/posts/abc?draft=1");
    assert_eq!(report.params.get("user_id").map(String::as_str), Some("7"));
    assert_eq!(report.params.get("post_id").map(String::as_str), Some("abc"));

    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["handler"], "get_post");
    assert_eq!(json["params"]["user_id"], "7");
}

#[test]
fn test_resolve_report_miss() {
    let router = pet_router();

    let body = resolve_report(&router, "GET", "/nope").unwrap_err();
    assert_eq!(body.status, 404);
    assert_eq!(body.reason, "no route for GET /nope");

    // registered path, unregistered method
    let body = resolve_report(&router, "DELETE", "/pets/1").unwrap_err();
    assert_eq!(body.status, 404);

    let body = resolve_report(&router, "BAD METHOD", "/pets").unwrap_err();
    assert_eq!(body.status, 404);
}
