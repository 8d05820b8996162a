//! Defensive DOM helpers: missing elements come back as `None` or empty
//! collections, never as surfaced errors.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, NodeList, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(doc) = document() else {
        return Vec::new();
    };
    match doc.query_selector_all(selector) {
        Ok(list) => node_list_elements(&list),
        Err(_) => Vec::new(),
    }
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => node_list_elements(&list),
        Err(_) => Vec::new(),
    }
}

fn node_list_elements(list: &NodeList) -> Vec<Element> {
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            out.push(el);
        }
    }
    out
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub fn toggle_class(el: &Element, class: &str) {
    let _ = el.class_list().toggle(class);
}

pub fn set_display(el: &Element, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("display", value);
    }
}

pub fn event_target_element(e: &Event) -> Option<Element> {
    e.target()?.dyn_into::<Element>().ok()
}

pub fn warn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}
