use leptos::prelude::*;

use crate::content::footer_text;

/// Site footer with the copyright line for the current year.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-100 py-4 mt-12">
            <div class="max-w-5xl mx-auto px-4 text-center text-gray-500 text-sm">
                {footer_text(current_year())}
            </div>
        </footer>
    }
}

/// Calendar year of the browser clock at call time, in local time.
pub fn current_year() -> u32 {
    year_of(&js_sys::Date::new_0())
}

/// Local calendar year of `date`.
pub fn year_of(date: &js_sys::Date) -> u32 {
    date.get_full_year()
}
