use leptos::prelude::*;

use crate::content::{NOT_FOUND_BODY, NOT_FOUND_HEADING};

/// Fallback page for paths no named route claims.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="max-w-5xl mx-auto px-4 py-12">
            <h2 class="text-3xl font-bold mb-4">{NOT_FOUND_HEADING}</h2>
            <p class="text-gray-700">{NOT_FOUND_BODY}</p>
        </div>
    }
}
