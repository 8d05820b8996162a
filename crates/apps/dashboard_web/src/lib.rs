//! WebAssembly entry points for the Sourcebook dashboard shell.
//!
//! The embedding page loads this module and calls [`init_dashboard`]
//! once its markup is in place, including any widgets the host
//! framework renders after the initial document parse. Everything here
//! is DOM glue: the models live in `geofilter` and `nav`.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

mod config;
mod controls;
mod dom;
mod frame;
mod host;
mod navigate;
mod sidebar;
mod state;
mod urlstate;

pub use config::DashboardConfig;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Wire the dashboard with default configuration.
#[wasm_bindgen]
pub fn init_dashboard() {
    init_with(DashboardConfig::default());
}

/// Wire the dashboard with a JSON configuration object. Malformed
/// configuration falls back to the defaults rather than failing init.
#[wasm_bindgen]
pub fn init_dashboard_with_config(config_json: &str) {
    let config = match serde_json::from_str::<DashboardConfig>(config_json) {
        Ok(config) => config,
        Err(err) => {
            dom::warn(&format!("invalid dashboard config, using defaults: {err}"));
            DashboardConfig::default()
        }
    };
    init_with(config);
}

fn init_with(config: DashboardConfig) {
    state::set_config(config);

    apply_location();

    controls::wire_level_toggles();
    controls::wire_selects();
    controls::wire_dropdowns();
    navigate::wire();
    wire_popstate();
    sidebar::install_mobile_toggle();

    show_current_subpage();
}

/// Pull geography and subpage out of the URL into controller state.
/// Geography is reflected into the controls only when the URL actually
/// names one, so a bare URL leaves the markup's defaults alone. The
/// navigation state always follows the hash: a URL without a subpage
/// resets it, so back-navigation to the landing URL lands on the
/// default page rather than the last one shown.
fn apply_location() {
    let (geo, nav) = urlstate::parse_location();
    if let Some(geo) = geo {
        state::set_geo(geo.clone());
        controls::sync_from(&geo);
    }
    state::set_nav(nav.unwrap_or_default());
}

fn show_current_subpage() {
    let subpage = state::nav_state()
        .subpage
        .unwrap_or_else(|| state::config().default_subpage);
    navigate::show_subpage(&subpage, false);
}

/// Browser back/forward: re-read the URL and re-apply it without
/// pushing new history entries.
fn wire_popstate() {
    let Some(win) = dom::window() else { return };
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
        apply_location();
        show_current_subpage();
    });
    let _ = win.add_event_listener_with_callback("popstate", cb.as_ref().unchecked_ref());
    state::retain(cb);
}

/// Mobile menu hook, exported for inline `onclick` handlers.
#[wasm_bindgen]
pub fn toggle_sidebar() {
    sidebar::toggle();
}

/// Programmatic navigation with a history entry, mirroring a sidebar
/// click.
#[wasm_bindgen]
pub fn navigate_to(subpage: &str) {
    navigate::show_subpage(subpage, true);
}

/// JSON snapshot of the controller state, for the embedding page.
#[wasm_bindgen]
pub fn dashboard_state_json() -> String {
    state::snapshot_json()
}

#[cfg(test)]
mod tests {
    use nav::NavState;
    use pretty_assertions::assert_eq;

    // The hash-to-navigation fallback applied on load and popstate:
    // a URL without a subpage hash must resolve to the default page,
    // not whatever was shown before.
    #[test]
    fn missing_hash_resets_navigation_to_default() {
        let resolved = NavState::parse_hash("").unwrap_or_default();
        assert_eq!(resolved, NavState::default());
        assert_eq!(resolved.fragment(), nav::DEFAULT_SUBPAGE);
    }

    #[test]
    fn anchor_hash_resets_navigation_to_default() {
        let resolved = NavState::parse_hash("#overview").unwrap_or_default();
        assert_eq!(resolved.subpage, None);
        assert_eq!(resolved.fragment(), nav::DEFAULT_SUBPAGE);
    }
}
