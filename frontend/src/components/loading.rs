use leptos::*;
use shared::cn;

const CONTAINER_CLASS: &str = "flex w-full items-center justify-center";
const SPINNER_CLASS: &str =
    "h-8 w-8 animate-spin rounded-full border-4 border-gray-200 border-t-blue-600";

pub const CONTAINED_HEIGHT: &str = "h-32";
pub const FULL_SCREEN_HEIGHT: &str = "h-screen";

pub fn container_class(full_screen: bool, extra: Option<&str>) -> String {
    cn!(
        CONTAINER_CLASS,
        (FULL_SCREEN_HEIGHT, full_screen),
        (CONTAINED_HEIGHT, !full_screen),
        extra
    )
}

pub fn spinner_class(extra: Option<&str>) -> String {
    cn!(SPINNER_CLASS, extra)
}

#[component]
pub fn Spinner(#[prop(optional, into)] class: Option<String>) -> impl IntoView {
    view! {
        <div class=spinner_class(class.as_deref())></div>
    }
}

/// Centered spinner, viewport height when `full_screen` is set.
#[component]
pub fn Loading(
    #[prop(optional)] full_screen: bool,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    view! {
        <div
            class=container_class(full_screen, class.as_deref())
            role="status"
            aria-label="Loading"
        >
            <Spinner />
        </div>
    }
}
