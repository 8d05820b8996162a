//! Page switching and sidebar navigation state.

use nav::NavState;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Event, HtmlElement};

use crate::{dom, frame, state, urlstate};

/// Delegated click handler for `[data-subpage]` links anywhere in the
/// document, so links inside host-rendered markup work too.
pub fn wire() {
    let Some(doc) = dom::document() else { return };
    let cb = Closure::<dyn FnMut(Event)>::new(move |e: Event| {
        let Some(target) = dom::event_target_element(&e) else {
            return;
        };
        if !target.matches("[data-subpage]").unwrap_or(false) {
            return;
        }
        e.prevent_default();
        if let Some(subpage) = target.get_attribute("data-subpage") {
            show_subpage(&subpage, true);
        }
    });
    let _ = doc.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
    state::retain(cb);
}

/// Switch the visible content page. Every `.content-page` is hidden
/// first; an id with no matching element changes nothing further, so a
/// stale hash cannot corrupt navigation state.
pub fn show_subpage(subpage: &str, push_history: bool) {
    let Some(doc) = dom::document() else { return };
    for page in dom::query_all(".content-page") {
        dom::remove_class(&page, "active");
        dom::set_display(&page, "none");
    }
    let Some(target) = doc.get_element_by_id(subpage) else {
        return;
    };
    dom::add_class(&target, "active");
    dom::set_display(&target, "block");

    mark_active_link(subpage);
    frame::refresh_page(&target, &state::geo());

    state::set_nav(NavState::from_subpage(subpage));
    if push_history {
        urlstate::push_url();
    }
    doc.set_title(&state::config().document_title(subpage));
}

/// Move the sidebar `active` class to the current subpage's link and
/// expand its accordion section if collapsed. The landing page carries
/// no active link.
fn mark_active_link(subpage: &str) {
    for link in dom::query_all(".accordion-body a") {
        dom::remove_class(&link, "active");
    }
    if subpage == state::config().default_subpage {
        return;
    }
    let Some(link) = dom::query(&format!("[data-subpage=\"{subpage}\"]")) else {
        return;
    };
    dom::add_class(&link, "active");

    let button = link
        .closest(".accordion-item")
        .ok()
        .flatten()
        .and_then(|item| item.query_selector(".accordion-button").ok().flatten());
    let Some(button) = button else { return };
    if dom::has_class(&button, "collapsed") {
        // Synthetic click; no state borrow is held here, so the
        // re-entrant document handler is safe.
        if let Some(button) = button.dyn_ref::<HtmlElement>() {
            button.click();
        }
    }
}
