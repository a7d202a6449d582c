use leptos::prelude::*;
use leptos_router::components::Router;
use leptos_router::hooks::use_location;
use wasm_bindgen::JsValue;

use crate::components::{Footer, Navbar, PageOutlet};
use crate::models::{active_entry, NavigationState, Page};

/// Root application component that mounts the router and the site layout.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Layout />
        </Router>
    }
}

/// Persistent layout: navbar, routed page, footer. Provides `NavigationState`.
#[component]
fn Layout() -> impl IntoView {
    let location = use_location();
    let state = NavigationState::new(location.pathname);

    // Provide context to all child components
    provide_context(state);

    // Log and retitle the document on every path change
    Effect::new(move |_| {
        let path = state.current_path.get();
        let page = state.page.get();
        log_navigation(&path, page);
        set_document_title(page);
    });

    view! {
        <div class="flex flex-col min-h-screen">
            <Navbar />
            <main class="flex-grow">
                <PageOutlet />
            </main>
            <Footer />
        </div>
    }
}

fn log_navigation(path: &str, page: Page) {
    let nav = active_entry(path).map_or("none", |entry| entry.label);
    let message = format!("Resolved {path} to {page:?} ({}), active link: {nav}", page.status());
    web_sys::console::debug_1(&JsValue::from_str(&message));

    if page.is_not_found() {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "No route for {path}, rendering fallback page"
        )));
    }
}

fn set_document_title(page: Page) {
    match web_sys::window().and_then(|window| window.document()) {
        Some(document) => document.set_title(&page.document_title()),
        None => {
            web_sys::console::error_1(&"Document unavailable, page title not updated".into());
        }
    }
}
