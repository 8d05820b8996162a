//! Bridge to the embedding widget host (`window.Shiny`), when present.
//!
//! The host object is looked up by reflection on every call; the
//! dashboard works identically when no host framework is loaded.

use geofilter::GeoParams;
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::dom;

fn host_object() -> Option<Object> {
    let win = web_sys::window()?;
    let host = Reflect::get(win.as_ref(), &JsValue::from_str("Shiny")).ok()?;
    if host.is_undefined() || host.is_null() {
        return None;
    }
    host.dyn_into::<Object>().ok()
}

/// Forward one named input to the host. Absent host or bridge function
/// is a silent no-op.
pub fn set_input_value(name: &str, value: &str) {
    let Some(host) = host_object() else { return };
    let Ok(set) = Reflect::get(&host, &JsValue::from_str("setInputValue")) else {
        return;
    };
    let Ok(set) = set.dyn_into::<Function>() else { return };
    if let Err(err) = set.call2(&host, &JsValue::from_str(name), &JsValue::from_str(value)) {
        dom::warn(&format!("host setInputValue({name}) failed: {err:?}"));
    }
}

/// Mirror the geographic filter into the host's named inputs.
pub fn sync_geo(geo: &GeoParams) {
    set_input_value("geo_level", geo.level.as_str());
    if let Some(cbsa) = geo.cbsa.as_deref().filter(|v| !v.is_empty()) {
        set_input_value("cbsa_selector", cbsa);
    }
    if let Some(locality) = geo.locality.as_deref().filter(|v| !v.is_empty()) {
        set_input_value("locality_selector", locality);
    }
}
