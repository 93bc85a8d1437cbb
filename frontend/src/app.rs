use leptos::*;

use crate::components::loading::{Loading, Spinner};

/// Demo page showing the loading indicator in both display modes.
#[component]
pub fn App() -> impl IntoView {
    let (full_screen, set_full_screen) = create_signal(false);

    let toggle = move |_: web_sys::MouseEvent| {
        set_full_screen.update(|value| *value = !*value);
        log::debug!("Loading indicator full screen: {}", full_screen.get_untracked());
    };

    view! {
        <main class="mx-auto max-w-2xl p-4">
            <div class="mb-4 flex items-center gap-2">
                <button
                    class="rounded bg-blue-600 px-3 py-1 text-white"
                    on:click=toggle
                >
                    {move || if full_screen.get() { "Contained" } else { "Full screen" }}
                </button>
                <Spinner class="h-4 w-4 border-2" />
            </div>
            {move || view! { <Loading full_screen=full_screen.get() class="rounded border" /> }}
        </main>
    }
}
