use leptos::prelude::*;

use crate::models::Page;
use crate::routing::resolve;

/// Reactive view of the current location, shared through `use_context()`.
///
/// The router's history integration is the only writer of the pathname;
/// every reader sees the page derived from the same path.
#[derive(Clone, Copy)]
pub struct NavigationState {
    /// Current location pathname
    pub current_path: Memo<String>,
    /// Page selected by the route table for `current_path`
    pub page: Memo<Page>,
}

impl NavigationState {
    /// Derive navigation state from the router's pathname signal
    pub fn new(pathname: Memo<String>) -> Self {
        let page = Memo::new(move |_| pathname.with(|path| resolve(path)));
        Self {
            current_path: pathname,
            page,
        }
    }
}
