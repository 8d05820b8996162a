//! Keeps the embedded report iframes pointed at the current geography.

use geofilter::GeoParams;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{AddEventListenerOptions, Element, HtmlIFrameElement};

use crate::dom;

/// Re-point the visible page's iframe at its base URL plus the current
/// geography query. Pages without an iframe, or iframes without a
/// `data-base-url`, are left alone.
pub fn refresh_active(geo: &GeoParams) {
    if let Some(page) = dom::query(".content-page.active") {
        refresh_page(&page, geo);
    }
}

pub fn refresh_page(page: &Element, geo: &GeoParams) {
    let Some(frame) = page.query_selector("iframe").ok().flatten() else {
        return;
    };
    let Some(base_url) = frame.get_attribute("data-base-url") else {
        return;
    };
    let Ok(frame) = frame.dyn_into::<HtmlIFrameElement>() else {
        return;
    };
    frame.set_src(&format!("{base_url}{}", geo.to_query()));
    show_loading(&frame);
}

/// Show the page's loading overlay until the new document arrives.
fn show_loading(frame: &HtmlIFrameElement) {
    let overlay = frame
        .parent_element()
        .and_then(|p| p.query_selector(".loading-overlay").ok().flatten());
    let Some(overlay) = overlay else { return };
    dom::set_display(&overlay, "flex");

    let hide_target = overlay.clone();
    // One-shot listener; the closure frees itself after the call.
    let cb = Closure::once(move || dom::set_display(&hide_target, "none"));
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let _ = frame.add_event_listener_with_callback_and_add_event_listener_options(
        "load",
        cb.as_ref().unchecked_ref(),
        &options,
    );
    cb.forget();
}
