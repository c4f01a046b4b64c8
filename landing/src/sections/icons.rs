//! Stroke icons (Lucide, 24x24 grid) used by the waitlist form.

use leptos::prelude::*;

/// Renders an inline stroked SVG from path data.
///
/// ```rust,ignore
/// view! { <Icon path=CHECK_CIRCLE class="h-6 w-6" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Sizing and colour classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Circle with a check mark (CircleCheck)
pub const CHECK_CIRCLE: &str = "M22 12a10 10 0 1 1-20 0a10 10 0 0 1 20 0Z M9 12l2 2l4-4";

/// Circle with an exclamation mark (CircleAlert)
pub const ALERT_CIRCLE: &str = "M22 12a10 10 0 1 1-20 0a10 10 0 0 1 20 0Z M12 8v4 M12 16h.01";

/// Open arc, spun with `animate-spin` (LoaderCircle)
pub const LOADER: &str = "M21 12a9 9 0 1 1-6.219-8.56";

pub const ARROW_RIGHT: &str = "M5 12h14 M12 5l7 7l-7 7";
