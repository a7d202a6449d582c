use leptos::prelude::*;

use crate::content::SITE_NAME;
use crate::models::{NavigationState, NAV_ENTRIES};

const LINK_BASE: &str = "px-3 py-2 rounded-md text-sm font-medium transition-colors duration-200";
const LINK_ACTIVE: &str = "text-white bg-blue-600";
const LINK_INACTIVE: &str = "text-gray-700 hover:text-blue-600";

/// Everything the navbar renders for one link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLinkView {
    pub label: &'static str,
    pub href: &'static str,
    pub class: String,
    pub aria_current: Option<&'static str>,
}

/// Top navigation bar with the site brand and one link per `NavEntry`.
///
/// Plain anchors are enough: the router intercepts same-origin clicks and
/// navigates without a reload.
#[component]
pub fn Navbar() -> impl IntoView {
    let state = use_context::<NavigationState>().expect("NavigationState context missing");
    let links = Memo::new(move |_| state.current_path.with(|path| nav_links(path)));

    view! {
        <nav class="bg-white shadow mb-6">
            <div class="max-w-5xl mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <h1 class="text-xl font-bold text-blue-600">{SITE_NAME}</h1>
                    <div class="space-x-2">
                        {move || {
                            links
                                .get()
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            class=link.class
                                            aria-current=link.aria_current
                                        >
                                            {link.label}
                                        </a>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Links of the navigation bar as rendered at `current_path`.
pub fn nav_links(current_path: &str) -> Vec<NavLinkView> {
    NAV_ENTRIES
        .iter()
        .map(|entry| {
            let active = entry.is_active(current_path);
            NavLinkView {
                label: entry.label,
                href: entry.path,
                class: nav_link_class(active),
                aria_current: active.then_some("page"),
            }
        })
        .collect()
}

/// CSS classes for a navigation link in the given state.
pub fn nav_link_class(active: bool) -> String {
    let state = if active { LINK_ACTIVE } else { LINK_INACTIVE };
    format!("{LINK_BASE} {state}")
}
