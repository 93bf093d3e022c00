#![allow(clippy::unwrap_used, clippy::expect_used)]

use http::Method;
use pathtree::runtime_config::RouterConfig;
use pathtree::table::{RouteSpec, RouteTable};

mod common;
use common::{fixtures, temp_files};

const PETS_JSON: &str = r#"{
  "url_prefix": "/api",
  "routes": [
    { "method": "GET", "path": "/pets", "handler": "list_pets" },
    { "method": "GET", "path": "/pets/{id}", "handler": "get_pet" }
  ]
}"#;

const PETS_TOML: &str = r#"
url_prefix = "/api"

[[routes]]
method = "GET"
path = "/pets"
handler = "list_pets"

[[routes]]
method = "GET"
path = "/pets/{id}"
handler = "get_pet"
"#;

fn assert_pets_table(table: &RouteTable) {
    assert_eq!(table.url_prefix.as_deref(), Some("/api"));
    assert_eq!(
        table.routes,
        vec![
            RouteSpec {
                method: "GET".to_string(),
                path: "/pets".to_string(),
                handler: "list_pets".to_string(),
            },
            RouteSpec {
                method: "GET".to_string(),
                path: "/pets/{id}".to_string(),
                handler: "get_pet".to_string(),
            },
        ]
    );
}

#[test]
fn test_load_yaml_table() {
    let path = temp_files::create_temp_yaml(fixtures::PET_STORE_YAML);
    let table = RouteTable::load(&path).unwrap();
    temp_files::cleanup_temp_files(&[path]);

    assert_eq!(table.url_prefix, None);
    assert_eq!(table.routes.len(), 6);
    assert_eq!(table.routes[0].path, "/");
    assert_eq!(table.routes[5].method, "delete");
}

#[test]
fn test_load_yml_extension() {
    let path = temp_files::create_temp_table(fixtures::PET_STORE_YAML, "yml");
    let table = RouteTable::load(&path).unwrap();
    temp_files::cleanup_temp_files(&[path]);
    assert_eq!(table.routes.len(), 6);
}

#[test]
fn test_load_json_table() {
    let path = temp_files::create_temp_json(PETS_JSON);
    let table = RouteTable::load(&path).unwrap();
    temp_files::cleanup_temp_files(&[path]);
    assert_pets_table(&table);
}

#[test]
fn test_load_toml_table() {
    let path = temp_files::create_temp_toml(PETS_TOML);
    let table = RouteTable::load(&path).unwrap();
    temp_files::cleanup_temp_files(&[path]);
    assert_pets_table(&table);
}

#[test]
fn test_formats_build_equivalent_routers() {
    let json = temp_files::create_temp_json(PETS_JSON);
    let toml = temp_files::create_temp_toml(PETS_TOML);
    let config = RouterConfig::default();

    let from_json = RouteTable::load(&json).unwrap().build_router(&config).unwrap();
    let from_toml = RouteTable::load(&toml).unwrap().build_router(&config).unwrap();
    temp_files::cleanup_temp_files(&[json, toml]);

    for router in [&from_json, &from_toml] {
        assert_eq!(router.url_prefix(), "/api");
        let matched = router.route(Method::GET, "/api/pets/3").unwrap();
        assert_eq!(matched.handler().as_str(), "get_pet");
        assert_eq!(matched.path_param("id"), Some("3"));
        assert!(router.route(Method::GET, "/pets/3").is_none());
    }
}

#[test]
fn test_unknown_extension_rejected() {
    let path = temp_files::create_temp_table(PETS_JSON, "txt");
    let err = RouteTable::load(&path).unwrap_err();
    temp_files::cleanup_temp_files(&[path]);
    assert!(err.to_string().contains("unsupported route table format"));
}

#[test]
fn test_malformed_table_rejected() {
    let path = temp_files::create_temp_yaml("routes: [ this is: not a route");
    let err = RouteTable::load(&path).unwrap_err();
    temp_files::cleanup_temp_files(&[path]);
    assert!(err.to_string().contains("failed to parse route table"));
}

#[test]
fn test_missing_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let err = RouteTable::load(dir.path().join("absent.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to read route table"));
}

#[test]
fn test_empty_table_builds_empty_router() {
    let path = temp_files::create_temp_yaml("routes: []\n");
    let router = RouteTable::load(&path)
        .unwrap()
        .build_router(&RouterConfig::default())
        .unwrap();
    temp_files::cleanup_temp_files(&[path]);
    assert_eq!(router.route_count(), 0);
    assert!(router.route(Method::GET, "/").is_none());
}
