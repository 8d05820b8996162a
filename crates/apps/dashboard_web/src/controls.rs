//! Sidebar geographic controls: level toggle buttons, the native
//! `<select>` fallbacks, and the custom dropdown widgets.

use geofilter::{GeoLevel, GeoParams};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement};

use crate::{dom, frame, host, state, urlstate};

/// Click handlers for the `.geo-toggle-btn` level buttons.
pub fn wire_level_toggles() {
    for button in dom::query_all(".geo-toggle-btn") {
        let cb = Closure::<dyn FnMut(Event)>::new(move |e: Event| {
            e.prevent_default();
            let Some(target) = dom::event_target_element(&e) else {
                return;
            };
            let Some(value) = target.get_attribute("data-value") else {
                return;
            };
            let level = GeoLevel::parse(&value).unwrap_or_default();
            select_level(&target, level);
        });
        let _ = button.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        state::retain(cb);
    }
}

fn select_level(clicked: &Element, level: GeoLevel) {
    for button in dom::query_all(".geo-toggle-btn") {
        dom::remove_class(&button, "active");
    }
    dom::add_class(clicked, "active");
    set_hidden_level_input(level);

    let geo = state::update_geo(|g| g.level = level);
    frame::refresh_active(&geo);
    urlstate::push_url();
    apply_selector_visibility(level);
    host::sync_geo(&geo);
}

fn set_hidden_level_input(level: GeoLevel) {
    let input = dom::by_id("geo_level").and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    if let Some(input) = input {
        input.set_value(level.as_str());
    }
}

/// Change handlers for the native selector fallbacks.
pub fn wire_selects() {
    wire_select("cbsa_selector", |geo, value| geo.cbsa = value);
    wire_select("locality_selector", |geo, value| geo.locality = value);
}

fn wire_select(id: &str, apply: fn(&mut GeoParams, Option<String>)) {
    let Some(select) = dom::by_id(id) else { return };
    let cb = Closure::<dyn FnMut(Event)>::new(move |e: Event| {
        let value = e
            .target()
            .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
            .map(|s| s.value())
            .filter(|v| !v.is_empty());
        let geo = state::update_geo(|g| apply(g, value));
        frame::refresh_active(&geo);
        urlstate::push_url();
    });
    let _ = select.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref());
    state::retain(cb);
}

/// Show only the selector container matching the level; the state level
/// needs neither.
pub fn apply_selector_visibility(level: GeoLevel) {
    let cbsa = dom::by_id("cbsa-selector-container");
    let locality = dom::by_id("locality-selector-container");
    if let Some(el) = &cbsa {
        dom::set_display(el, "none");
    }
    if let Some(el) = &locality {
        dom::set_display(el, "none");
    }
    match level {
        GeoLevel::Cbsa => {
            if let Some(el) = &cbsa {
                dom::set_display(el, "block");
            }
        }
        GeoLevel::Locality => {
            if let Some(el) = &locality {
                dom::set_display(el, "block");
            }
        }
        GeoLevel::State => {}
    }
}

/// Reflect URL-derived geography back into every control, then notify
/// the host bridge.
pub fn sync_from(geo: &GeoParams) {
    for button in dom::query_all(".geo-toggle-btn") {
        if button.get_attribute("data-value").as_deref() == Some(geo.level.as_str()) {
            dom::add_class(&button, "active");
        } else {
            dom::remove_class(&button, "active");
        }
    }
    set_hidden_level_input(geo.level);
    apply_selector_visibility(geo.level);

    if let Some(cbsa) = geo.cbsa.as_deref() {
        set_select_value("cbsa_selector", cbsa);
    }
    if let Some(locality) = geo.locality.as_deref() {
        set_select_value("locality_selector", locality);
    }
    host::sync_geo(geo);
}

fn set_select_value(id: &str, value: &str) {
    let select = dom::by_id(id).and_then(|el| el.dyn_into::<HtmlSelectElement>().ok());
    if let Some(select) = select {
        select.set_value(value);
    }
}

/// The custom dropdown widgets: `.custom-dropdown` containers holding a
/// `.dropdown-selected` display, a `.dropdown-options` list, and a
/// sibling hidden input for the host framework.
pub fn wire_dropdowns() {
    let dropdowns = dom::query_all(".custom-dropdown");
    for dropdown in &dropdowns {
        wire_dropdown_toggle(dropdown);
        wire_dropdown_options(dropdown);
    }

    // A click anywhere else closes every dropdown; clicks inside stop
    // propagation before they reach this handler.
    if let Some(doc) = dom::document() {
        let cb = Closure::<dyn FnMut(Event)>::new(move |_| close_all_dropdowns());
        let _ = doc.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        state::retain(cb);
    }
}

fn close_all_dropdowns() {
    for dropdown in dom::query_all(".custom-dropdown") {
        dom::remove_class(&dropdown, "open");
    }
}

fn wire_dropdown_toggle(dropdown: &Element) {
    let this = dropdown.clone();
    let cb = Closure::<dyn FnMut(Event)>::new(move |e: Event| {
        // Option clicks are handled by the option listeners.
        let on_option = dom::event_target_element(&e)
            .is_some_and(|target| dom::has_class(&target, "dropdown-option"));
        if on_option {
            return;
        }
        e.stop_propagation();

        for other in dom::query_all(".custom-dropdown") {
            if other != this {
                dom::remove_class(&other, "open");
            }
        }
        dom::toggle_class(&this, "open");
    });
    let _ = dropdown.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
    state::retain(cb);
}

fn wire_dropdown_options(dropdown: &Element) {
    let selected = dropdown.query_selector(".dropdown-selected").ok().flatten();
    let hidden = dropdown
        .parent_element()
        .and_then(|p| p.query_selector("input[type=\"hidden\"]").ok().flatten());
    let options = dom::query_all_in(dropdown, ".dropdown-option");

    for option in &options {
        let dropdown = dropdown.clone();
        let selected = selected.clone();
        let hidden = hidden.clone();
        let option_el = option.clone();
        let siblings = options.clone();
        let cb = Closure::<dyn FnMut(Event)>::new(move |e: Event| {
            e.stop_propagation();
            let Some(value) = option_el.get_attribute("data-value") else {
                return;
            };
            choose_dropdown_option(
                &dropdown,
                selected.as_ref(),
                hidden.as_ref(),
                &siblings,
                &option_el,
                &value,
            );
        });
        let _ = option.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        state::retain(cb);
    }
}

fn choose_dropdown_option(
    dropdown: &Element,
    selected: Option<&Element>,
    hidden: Option<&Element>,
    siblings: &[Element],
    option: &Element,
    value: &str,
) {
    let text = option.text_content().unwrap_or_default();
    if let Some(selected) = selected {
        selected.set_text_content(Some(&text));
    }
    let _ = dropdown.set_attribute("data-value", value);
    if let Some(hidden) = hidden.and_then(|el| el.dyn_ref::<HtmlInputElement>()) {
        hidden.set_value(value);
    }

    for sibling in siblings {
        dom::remove_class(sibling, "active");
    }
    dom::add_class(option, "active");
    dom::remove_class(dropdown, "open");

    // Which filter field a dropdown feeds is keyed by its element id.
    let value_opt = Some(value.to_string()).filter(|v| !v.is_empty());
    let geo = match dropdown.id().as_str() {
        "cbsa-dropdown" => state::update_geo(|g| g.cbsa = value_opt),
        "locality-dropdown" => state::update_geo(|g| g.locality = value_opt),
        _ => return,
    };
    frame::refresh_active(&geo);
    urlstate::push_url();
}
