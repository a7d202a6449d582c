//! Integration tests for route resolution and navigation highlighting.
//!
//! These exercise the public route table and nav entries together, the
//! same way the layout combines them for a single location.

use proptest::prelude::*;

use mysite::components::nav_links;
use mysite::models::{active_entry, Page, NAV_ENTRIES};
use mysite::routing::{match_route, resolve, ROUTES};

fn active_labels(path: &str) -> Vec<&'static str> {
    NAV_ENTRIES
        .iter()
        .filter(|entry| entry.is_active(path))
        .map(|entry| entry.label)
        .collect()
}

fn in_named_subtree(path: &str) -> bool {
    path == "/"
        || ["/about", "/tos"]
            .iter()
            .any(|base| path == *base || path.starts_with(&format!("{base}/")))
}

#[test]
fn test_router_examples() {
    assert_eq!(resolve("/"), Page::Home);
    assert_eq!(resolve("/about"), Page::About);
    assert_eq!(resolve("/tos"), Page::TermsOfService);
    assert_eq!(resolve("/about/anything"), Page::About);
    assert_eq!(resolve("/random"), Page::NotFound);
}

#[test]
fn test_navbar_examples() {
    assert_eq!(active_labels("/"), vec!["Home"]);
    assert_eq!(active_labels("/about"), vec!["About"]);
    assert_eq!(active_labels("/about/x"), vec!["About"]);
    assert_eq!(active_labels("/tos"), vec!["TOS"]);
    assert!(active_labels("/random").is_empty());
}

#[test]
fn test_not_found_has_404_status() {
    let route = match_route("/does/not/exist");
    assert_eq!(route.page, Page::NotFound);
    assert_eq!(route.status(), 404);
    assert_eq!(match_route("/about").status(), 200);
}

#[test]
fn test_active_entry_agrees_with_routed_page() {
    let pairs = [
        ("/", Page::Home, "Home"),
        ("/about", Page::About, "About"),
        ("/about/team", Page::About, "About"),
        ("/tos", Page::TermsOfService, "TOS"),
    ];
    for (path, page, label) in pairs {
        assert_eq!(resolve(path), page, "{path}");
        assert_eq!(active_entry(path).map(|e| e.label), Some(label), "{path}");
    }
}

#[test]
fn test_mixed_case_paths_route_like_lowercase() {
    assert_eq!(resolve("/About"), Page::About);
    assert_eq!(resolve("/ToS/x"), Page::TermsOfService);
    assert_eq!(resolve("/ABOUTUS"), Page::NotFound);
    assert_eq!(active_entry("/About").map(|e| e.label), Some("About"));
    assert_eq!(active_entry("/ToS/x").map(|e| e.label), Some("TOS"));
    assert!(active_entry("/ABOUTUS").is_none());
}

#[test]
fn test_navbar_output_depends_only_on_active_entry() {
    assert_eq!(nav_links("/about"), nav_links("/about/team"));
    assert_eq!(nav_links("/tos"), nav_links("/TOS/section"));
    assert_eq!(nav_links("/random"), nav_links("/nope/deep"));
    assert_ne!(nav_links("/"), nav_links("/about"));
}

proptest! {
    #[test]
    fn prop_exactly_one_route_matches_first(path in "(/[a-z]{0,8}){0,4}") {
        let first = ROUTES.iter().position(|r| r.pattern.matches(&path));
        prop_assert!(first.is_some());
        prop_assert_eq!(ROUTES[first.unwrap()].page, resolve(&path));
    }

    #[test]
    fn prop_unknown_paths_resolve_to_not_found(path in "(/[a-z]{0,8}){0,4}") {
        prop_assume!(!in_named_subtree(&path));
        prop_assert_eq!(resolve(&path), Page::NotFound);
        prop_assert!(active_entry(&path).is_none());
    }

    #[test]
    fn prop_at_most_one_active_entry(path in "(/[a-z]{0,8}){0,4}/?") {
        prop_assert!(active_labels(&path).len() <= 1);
    }

    #[test]
    fn prop_about_subtree_routes_to_about(suffix in "(/[a-z0-9]{1,8}){1,3}") {
        let path = format!("/about{suffix}");
        prop_assert_eq!(resolve(&path), Page::About);
        prop_assert_eq!(active_labels(&path), vec!["About"]);
    }

    #[test]
    fn prop_resolution_is_idempotent(path in "\\PC{0,24}") {
        prop_assert_eq!(resolve(&path), resolve(&path));
        prop_assert_eq!(active_entry(&path), active_entry(&path));
    }
}
