use crate::routing::{matches_exact, matches_prefix};

/// A single link in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    /// Only the exact path activates the entry; otherwise its whole subtree does
    pub exact_match: bool,
}

/// Navigation bar entries, left to right.
pub static NAV_ENTRIES: [NavEntry; 3] = [
    NavEntry {
        label: "Home",
        path: "/",
        exact_match: true,
    },
    NavEntry {
        label: "About",
        path: "/about",
        exact_match: false,
    },
    NavEntry {
        label: "TOS",
        path: "/tos",
        exact_match: false,
    },
];

impl NavEntry {
    /// Whether this entry represents the route at `current_path`.
    pub fn is_active(&self, current_path: &str) -> bool {
        if self.exact_match {
            matches_exact(current_path, self.path)
        } else {
            matches_prefix(current_path, self.path)
        }
    }
}

/// Returns the entry that is active at `current_path`, if any.
pub fn active_entry(current_path: &str) -> Option<&'static NavEntry> {
    NAV_ENTRIES.iter().find(|entry| entry.is_active(current_path))
}
