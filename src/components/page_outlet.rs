use leptos::prelude::*;

use crate::models::{NavigationState, Page};
use crate::pages::{About, Home, NotFound, TermsOfService};

/// Renders the page the route table selected for the current path.
#[component]
pub fn PageOutlet() -> impl IntoView {
    let state = use_context::<NavigationState>().expect("NavigationState context missing");

    move || match state.page.get() {
        Page::Home => view! { <Home /> }.into_any(),
        Page::About => view! { <About /> }.into_any(),
        Page::TermsOfService => view! { <TermsOfService /> }.into_any(),
        Page::NotFound => view! { <NotFound /> }.into_any(),
    }
}
