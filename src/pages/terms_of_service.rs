use leptos::prelude::*;

use crate::content::{TOS_HEADING, TOS_INTRO, TOS_TERMS};

/// Terms of Service: intro paragraph followed by the bullet list of terms.
#[component]
pub fn TermsOfService() -> impl IntoView {
    view! {
        <section class="max-w-5xl mx-auto px-4 py-12">
            <h2 class="text-3xl font-bold mb-4">{TOS_HEADING}</h2>
            <p class="text-gray-700 mb-2">{TOS_INTRO}</p>
            <ul class="list-disc list-inside text-gray-700 space-y-1">
                {TOS_TERMS.iter().map(|term| view! { <li>{*term}</li> }).collect_view()}
            </ul>
        </section>
    }
}
