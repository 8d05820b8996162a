//! URL round-trip: location → state on load and popstate, state →
//! history on every change.

use geofilter::GeoParams;
use nav::NavState;
use wasm_bindgen::JsValue;

use crate::{dom, state};

/// Read geography and subpage out of the current location. Geography is
/// `Some` only when the query names a `geo` parameter; the subpage only
/// when the hash looks like a `<section>-<page>` id.
pub fn parse_location() -> (Option<GeoParams>, Option<NavState>) {
    let Some(win) = dom::window() else {
        return (None, None);
    };
    let location = win.location();
    let geo = location
        .search()
        .ok()
        .and_then(|s| GeoParams::parse_query(&s));
    let nav = location.hash().ok().and_then(|h| NavState::parse_hash(&h));
    (geo, nav)
}

/// Push the current controller state onto the history stack.
pub fn push_url() {
    let Some(win) = dom::window() else { return };
    let Ok(history) = win.history() else { return };
    let Ok(pathname) = win.location().pathname() else { return };
    let url = compose_url(&pathname, &state::geo(), &state::nav_state());
    if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(&url)) {
        dom::warn(&format!("history.pushState failed: {err:?}"));
    }
}

fn compose_url(pathname: &str, geo: &GeoParams, nav: &NavState) -> String {
    format!("{pathname}{}#{}", geo.to_query(), nav.fragment())
}

#[cfg(test)]
mod tests {
    use super::compose_url;
    use geofilter::{GeoLevel, GeoParams};
    use nav::NavState;
    use pretty_assertions::assert_eq;

    #[test]
    fn composed_url_carries_query_and_fragment() {
        let geo = GeoParams {
            level: GeoLevel::Cbsa,
            cbsa: Some("47900".to_string()),
            locality: None,
        };
        let nav = NavState::from_subpage("demographics-age");
        assert_eq!(
            compose_url("/sourcebook/", &geo, &nav),
            "/sourcebook/?geo=cbsa&cbsa=47900#demographics-age"
        );
    }

    #[test]
    fn default_state_composes_to_intro_page() {
        assert_eq!(
            compose_url("/", &GeoParams::default(), &NavState::default()),
            "/?geo=state#intro-page"
        );
    }
}
