#![allow(clippy::unwrap_used, clippy::expect_used)]

use http::Method;
use pathtree::router::{Router, SharedRouter};
use pathtree::runtime_config::RouterConfig;
use pathtree::table::RouteTable;
use pathtree::{PathTree, PathTreeError, RouterError, SegmentNode};

mod common;
use common::{fixtures, temp_files};

fn pet_store() -> Router<String> {
    let path = temp_files::create_temp_yaml(fixtures::PET_STORE_YAML);
    let router = RouteTable::load(&path)
        .unwrap()
        .build_router(&RouterConfig::default())
        .unwrap();
    temp_files::cleanup_temp_files(&[path]);
    router
}

fn parse_method(name: &str) -> Method {
    Method::from_bytes(name.as_bytes()).unwrap()
}

#[test]
fn test_pet_store_cases() {
    let router = pet_store();
    for (method, path, expected) in fixtures::PET_STORE_CASES {
        let found = router
            .route(parse_method(method), path)
            .map(|m| m.handler().as_str().to_owned());
        assert_eq!(
            found.as_deref(),
            *expected,
            "{} {} resolved to {:?}",
            method,
            path,
            found
        );
    }
}

#[test]
fn test_route_params() {
    let router = pet_store();
    let matched = router.route(Method::GET, "/users/9/posts/abc").unwrap();

    let params = matched.path_params();
    assert_eq!(params.len(), 2);
    assert_eq!(&*params[0].0, "user_id");
    assert_eq!(params[0].1, "9");
    assert_eq!(&*params[1].0, "post_id");
    assert_eq!(params[1].1, "abc");
    assert_eq!(matched.path_param("post_id"), Some("abc"));
    assert_eq!(matched.path_param("missing"), None);
}

#[test]
fn test_routes_listing_round_trips() {
    let router = pet_store();
    let routes = router.routes();
    assert_eq!(routes.len(), router.route_count());
    assert_eq!(routes.len(), 6);

    for entry in &routes {
        let concrete = entry.path.replace("{id}", "1");
        let matched = router.route(entry.method.clone(), &concrete);
        assert!(matched.is_some(), "{} {} not routable", entry.method, entry.path);
    }
}

#[test]
fn test_tree_resolve_binds_in_order() {
    let mut tree = PathTree::new();
    tree.register("/a/{x}/b/{y}", 1u32).unwrap();

    let matched = tree.resolve("/a/1/b/2").unwrap();
    let bound: Vec<(&str, Option<&str>)> = matched
        .node_path()
        .iter()
        .map(|b| (b.name(), b.value()))
        .collect();
    assert_eq!(
        bound,
        vec![
            ("a", None),
            ("{x}", Some("1")),
            ("b", None),
            ("{y}", Some("2")),
        ]
    );
    assert_eq!(matched.data(), Some(&1));
}

#[test]
fn test_tree_invalid_paths() {
    let mut tree: PathTree<u32> = PathTree::new();
    tree.register("/a", 1).unwrap();

    assert!(matches!(
        tree.resolve("a"),
        Err(PathTreeError::InvalidPath { .. })
    ));
    assert!(matches!(
        tree.resolve("/a/b"),
        Err(PathTreeError::InvalidPath { .. })
    ));
    assert!(tree.register("no-leading-slash", 2).is_err());
}

#[test]
fn test_first_match_shadowing_is_observable() {
    let mut tree = PathTree::new();
    tree.register("/users/{id}", "by_id").unwrap();
    assert!(matches!(
        tree.register("/users/me", "me"),
        Err(PathTreeError::Absorbed { .. })
    ));

    // "me" is taken by the earlier parameter child, whose route is unchanged
    {
        let matched = tree.resolve("/users/me").unwrap();
        assert_eq!(matched.data(), Some(&"by_id"));
        assert_eq!(matched.path_param("id"), Some("me"));
    }
    assert_eq!(tree.resolve("/users/42").unwrap().data(), Some(&"by_id"));
    assert_eq!(tree.root().child_at(0).unwrap().number_of_children(), 1);

    // moving a literal ahead of the parameter restores literal precedence
    let users = tree.root_mut().child_at_mut(0).unwrap();
    users
        .add_child_at(0, SegmentNode::with_data("me", "me"))
        .unwrap();

    assert_eq!(tree.resolve("/users/me").unwrap().data(), Some(&"me"));
    assert_eq!(tree.resolve("/users/7").unwrap().data(), Some(&"by_id"));
}

#[test]
fn test_absorbed_route_is_rejected_by_router() {
    let mut router: Router<&str> = Router::new(&RouterConfig::default());
    router.add_route(Method::GET, "/users/{id}", "by_id").unwrap();

    let err = router.add_route(Method::GET, "/users/me", "me").unwrap_err();
    assert!(matches!(
        err,
        RouterError::Tree(PathTreeError::Absorbed { .. })
    ));
    assert_eq!(router.route_count(), 1);
    assert_eq!(**router.route(Method::GET, "/users/42").unwrap().handler(), "by_id");
    assert_eq!(**router.route(Method::GET, "/users/me").unwrap().handler(), "by_id");
}

#[test]
fn test_trailing_slash_routes_like_bare_path() {
    let router = pet_store();
    let matched = router.route(Method::GET, "/pets/42/").unwrap();
    assert_eq!(matched.handler().as_str(), "get_pet");
    assert_eq!(matched.path_param("id"), Some("42"));
    assert_eq!(
        router.route(Method::GET, "/pets/?limit=1").unwrap().handler().as_str(),
        "list_pets"
    );
}

#[test]
fn test_router_errors() {
    let mut router: Router<&str> = Router::new(&RouterConfig::default());
    assert!(matches!(
        router.add_route(Method::CONNECT, "/x", "x"),
        Err(RouterError::UnsupportedMethod { .. })
    ));
    assert!(matches!(
        router.add_route(Method::GET, "x", "x"),
        Err(RouterError::Tree(PathTreeError::InvalidPath { .. }))
    ));
    assert_eq!(router.route_count(), 0);
}

#[test]
fn test_shared_router_snapshots() {
    let shared = SharedRouter::new(pet_store());
    let before = shared.load();

    shared
        .add_route(Method::PUT, "/pets/{id}", "update_pet".to_string())
        .unwrap();

    assert!(before.route(Method::PUT, "/pets/1").is_none());
    let after = shared.load();
    let matched = after.route(Method::PUT, "/pets/1").unwrap();
    assert_eq!(matched.handler().as_str(), "update_pet");
    assert_eq!(after.route_count(), before.route_count() + 1);
}
