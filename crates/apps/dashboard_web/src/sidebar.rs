//! Mobile sidebar toggle.

use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Event, HtmlElement};

use crate::{dom, state};

pub fn toggle() {
    if let Some(sidebar) = dom::query(".sidebar") {
        dom::toggle_class(&sidebar, "show");
    }
}

/// On narrow viewports, append a fixed menu button that toggles the
/// sidebar. Wide viewports get nothing; CSS keeps the sidebar visible
/// there.
pub fn install_mobile_toggle() {
    let breakpoint = state::config().mobile_breakpoint_px;
    let width = dom::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64());
    let Some(width) = width else { return };
    if width > f64::from(breakpoint) {
        return;
    }

    let Some(doc) = dom::document() else { return };
    let Ok(button) = doc.create_element("button") else {
        return;
    };
    button.set_class_name("btn btn-primary d-md-none position-fixed");
    button.set_inner_html("☰ Menu");
    if let Some(html) = button.dyn_ref::<HtmlElement>() {
        html.style().set_css_text("top: 1rem; left: 1rem; z-index: 1060;");
    }

    let cb = Closure::<dyn FnMut(Event)>::new(move |_| toggle());
    let _ = button.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
    state::retain(cb);

    if let Some(body) = doc.body() {
        let _ = body.append_child(&button);
    }
}
