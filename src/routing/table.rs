use crate::models::Page;
use crate::routing::{matches_exact, matches_prefix};

/// How a route decides whether it claims a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePattern {
    /// Only this exact path
    Exact(&'static str),
    /// This path and everything below it
    Prefix(&'static str),
    /// Any path; must be registered last
    Wildcard,
}

impl RoutePattern {
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(pattern) => matches_exact(path, pattern),
            Self::Prefix(pattern) => matches_prefix(path, pattern),
            Self::Wildcard => true,
        }
    }
}

/// Association between a path pattern and the page it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub pattern: RoutePattern,
    pub page: Page,
}

impl Route {
    pub const fn status(&self) -> u16 {
        self.page.status()
    }
}

/// Route table in registration order. First match wins.
pub static ROUTES: [Route; 4] = [
    Route {
        pattern: RoutePattern::Exact("/"),
        page: Page::Home,
    },
    Route {
        pattern: RoutePattern::Prefix("/about"),
        page: Page::About,
    },
    Route {
        pattern: RoutePattern::Prefix("/tos"),
        page: Page::TermsOfService,
    },
    Route {
        pattern: RoutePattern::Wildcard,
        page: Page::NotFound,
    },
];

/// Find the first route in `ROUTES` that claims `path`.
pub fn match_route(path: &str) -> &'static Route {
    ROUTES
        .iter()
        .find(|route| route.pattern.matches(path))
        .unwrap_or(&ROUTES[ROUTES.len() - 1])
}

/// Select the page to render for `path`. Total: unmatched paths give `Page::NotFound`.
pub fn resolve(path: &str) -> Page {
    match_route(path).page
}
