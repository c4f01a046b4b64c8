//! One-time `<head>` setup: favicon and analytics.

use lupin_waitlist::analytics::ANALYTICS;
use lupin_waitlist::{AnalyticsConfig, AnalyticsInit, WaitlistConfig};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlLinkElement, HtmlScriptElement};

/// Run once before mounting. Failures are logged, never fatal.
pub fn bootstrap(config: &WaitlistConfig) {
    if let Err(err) = ensure_favicon(&config.favicon) {
        tracing::warn!(?err, "favicon not installed");
    }

    match ANALYTICS.init_once(&config.analytics, install_analytics) {
        Ok(AnalyticsInit::Installed) => {}
        Ok(AnalyticsInit::AlreadyInitialized) => tracing::debug!("analytics already running"),
        Ok(AnalyticsInit::Disabled) => tracing::debug!("analytics disabled"),
        Err(err) => tracing::warn!(?err, "analytics not installed"),
    }
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Point the page icon at `href`, reusing an existing icon link if there is one.
fn ensure_favicon(href: &str) -> Result<(), JsValue> {
    let document = document()?;
    let existing = document.query_selector("link[rel*='icon']")?;
    let is_new = existing.is_none();

    let link: HtmlLinkElement = match existing {
        Some(element) => element.dyn_into()?,
        None => document.create_element("link")?.dyn_into()?,
    };
    link.set_rel("icon");
    link.set_type("image/png");
    link.set_href(href);

    if is_new {
        let head = document
            .head()
            .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
        head.append_child(&link)?;
    }
    Ok(())
}

fn install_analytics(config: &AnalyticsConfig) -> Result<(), JsValue> {
    let src = config
        .script_src
        .as_deref()
        .ok_or_else(|| JsValue::from_str("analytics script_src missing"))?;
    let document = document()?;
    let script: HtmlScriptElement = document.create_element("script")?.dyn_into()?;
    script.set_src(src);
    script.set_async(true);
    script.set_defer(true);
    if let Some(site) = config.site.as_deref() {
        script.set_attribute("data-domain", site)?;
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
    head.append_child(&script)?;
    Ok(())
}
