use leptos::prelude::*;

use crate::content::{ABOUT_BODY, ABOUT_HEADING};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="max-w-5xl mx-auto px-4 py-12">
            <h2 class="text-3xl font-bold mb-4">{ABOUT_HEADING}</h2>
            <p class="text-gray-700">{ABOUT_BODY}</p>
        </section>
    }
}
