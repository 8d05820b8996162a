use std::cell::RefCell;

use geofilter::GeoParams;
use nav::NavState;
use serde::Serialize;
use wasm_bindgen::closure::Closure;

use crate::config::DashboardConfig;

/// Controller singleton. Event closures registered on the DOM are
/// retained here for the page lifetime; dropping one would detach its
/// listener.
#[derive(Default)]
struct Dashboard {
    config: DashboardConfig,
    geo: GeoParams,
    nav: NavState,
    listeners: Vec<Closure<dyn FnMut(web_sys::Event)>>,
}

thread_local! {
    static STATE: RefCell<Dashboard> = RefCell::new(Dashboard::default());
}

// Accessors take short borrows and hand out clones, so event handlers
// never hold the RefCell open across DOM calls that can re-enter
// (synthetic clicks dispatch synchronously).

pub fn config() -> DashboardConfig {
    STATE.with(|s| s.borrow().config.clone())
}

pub fn set_config(config: DashboardConfig) {
    STATE.with(|s| s.borrow_mut().config = config);
}

pub fn geo() -> GeoParams {
    STATE.with(|s| s.borrow().geo.clone())
}

pub fn set_geo(geo: GeoParams) {
    STATE.with(|s| s.borrow_mut().geo = geo);
}

/// Mutate the geographic filter in place and return the result.
pub fn update_geo(f: impl FnOnce(&mut GeoParams)) -> GeoParams {
    STATE.with(|s| {
        let mut st = s.borrow_mut();
        f(&mut st.geo);
        st.geo.clone()
    })
}

pub fn nav_state() -> NavState {
    STATE.with(|s| s.borrow().nav.clone())
}

pub fn set_nav(nav: NavState) {
    STATE.with(|s| s.borrow_mut().nav = nav);
}

pub fn retain(cb: Closure<dyn FnMut(web_sys::Event)>) {
    STATE.with(|s| s.borrow_mut().listeners.push(cb));
}

#[derive(Serialize)]
struct Snapshot<'a> {
    geo: &'a GeoParams,
    nav: &'a NavState,
}

pub fn snapshot_json() -> String {
    STATE.with(|s| {
        let st = s.borrow();
        serde_json::to_string(&Snapshot {
            geo: &st.geo,
            nav: &st.nav,
        })
        .unwrap_or_else(|_| "{}".to_string())
    })
}
