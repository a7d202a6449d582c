use leptos::prelude::*;

use crate::content::{HOME_BODY, HOME_HEADING};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <section class="max-w-5xl mx-auto px-4 py-12 text-center">
            <h2 class="text-3xl font-bold mb-4">{HOME_HEADING}</h2>
            <p class="text-gray-700">{HOME_BODY}</p>
        </section>
    }
}
