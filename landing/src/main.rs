// Lupin landing, Leptos 0.8 CSR
// Developed with 💜 by the Lupin team (c)2025
// Four page variants share one waitlist form; the path picks the variant.

mod bridge;
mod head;
mod logging;
mod pages;
mod sections;

use leptos::prelude::*;
use lupin_waitlist::{PageVariant, WaitlistConfig};
use pages::*;

const CONFIG_TOML: &str = include_str!("../waitlist.toml");

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let config = WaitlistConfig::from_toml_or_default(CONFIG_TOML);
    head::bootstrap(&config);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

fn current_variant() -> PageVariant {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| PageVariant::from_path(&path))
        .unwrap_or_default()
}

#[component]
fn App(config: WaitlistConfig) -> impl IntoView {
    let variant = current_variant();
    tracing::debug!(variant = variant.as_label(), "rendering landing page");
    provide_context(config);

    match variant {
        PageVariant::Classic => view! { <ClassicPage /> }.into_any(),
        PageVariant::Meadow => view! { <MeadowPage /> }.into_any(),
        PageVariant::Split => view! { <SplitPage /> }.into_any(),
        PageVariant::Spotlight => view! { <SpotlightPage /> }.into_any(),
    }
}
