use serde::{Deserialize, Serialize};

/// Subpage shown when the URL carries no hash.
pub const DEFAULT_SUBPAGE: &str = "intro-page";

/// Window title when a subpage has no catalog entry.
pub const FALLBACK_TITLE: &str = "Sourcebook";

/// Display titles for the report subpages. Ids follow the
/// `<section>-<page>` convention used throughout the markup.
const SUBPAGE_TITLES: &[(&str, &str)] = &[
    ("demographics-total-population", "Total Population"),
    ("demographics-population-change", "Population Change"),
    ("demographics-race-ethnicity", "Race and Ethnicity"),
    ("demographics-age", "Age"),
    ("demographics-household-type", "Household Type"),
    ("demographics-household-size", "Household Size"),
    ("inventory-housing-production", "Housing Production"),
    ("inventory-housing-type", "Housing Type"),
    ("inventory-housing-age", "Housing Age"),
    ("inventory-housing-characteristics", "Housing Characteristics"),
    ("inventory-overcrowding", "Overcrowding"),
];

/// Display title for a subpage id, falling back to [`FALLBACK_TITLE`]
/// for ids outside the catalog.
pub fn page_title(subpage: &str) -> &'static str {
    SUBPAGE_TITLES
        .iter()
        .find(|(id, _)| *id == subpage)
        .map(|(_, title)| *title)
        .unwrap_or(FALLBACK_TITLE)
}

/// Which navigation section a subpage id belongs to: the prefix before
/// the first `-`, or `None` for ids without one.
pub fn section_of(subpage: &str) -> Option<&str> {
    subpage.split_once('-').map(|(section, _)| section)
}

/// Current navigation position. Transient, page lifetime only; the URL
/// hash is the only place it survives a reload.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    pub section: Option<String>,
    pub subpage: Option<String>,
}

impl NavState {
    pub fn from_subpage(id: &str) -> NavState {
        NavState {
            section: section_of(id).map(str::to_string),
            subpage: Some(id.to_string()),
        }
    }

    /// Parse a `location.hash` value, leading `#` optional.
    ///
    /// A hash names a subpage only when it contains the `-` section
    /// separator; anything else (including in-page anchors) is ignored.
    pub fn parse_hash(hash: &str) -> Option<NavState> {
        let id = hash.trim_start_matches('#');
        if id.is_empty() || !id.contains('-') {
            return None;
        }
        Some(NavState::from_subpage(id))
    }

    /// The fragment written back into the URL on every state change.
    pub fn fragment(&self) -> &str {
        self.subpage.as_deref().unwrap_or(DEFAULT_SUBPAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_subpage_has_catalog_title() {
        assert_eq!(page_title("demographics-age"), "Age");
        assert_eq!(page_title("inventory-overcrowding"), "Overcrowding");
    }

    #[test]
    fn unknown_subpage_falls_back() {
        assert_eq!(page_title("economics-median-income"), FALLBACK_TITLE);
        assert_eq!(page_title(""), FALLBACK_TITLE);
    }

    #[test]
    fn section_is_prefix_before_first_dash() {
        assert_eq!(section_of("inventory-housing-age"), Some("inventory"));
        assert_eq!(section_of("intro-page"), Some("intro"));
        assert_eq!(section_of("overview"), None);
    }

    #[test]
    fn hash_parses_with_and_without_marker() {
        let expected = NavState {
            section: Some("demographics".to_string()),
            subpage: Some("demographics-age".to_string()),
        };
        assert_eq!(NavState::parse_hash("#demographics-age"), Some(expected.clone()));
        assert_eq!(NavState::parse_hash("demographics-age"), Some(expected));
    }

    #[test]
    fn hash_without_separator_is_not_a_subpage() {
        assert_eq!(NavState::parse_hash("#overview"), None);
        assert_eq!(NavState::parse_hash("#"), None);
        assert_eq!(NavState::parse_hash(""), None);
    }

    #[test]
    fn fragment_defaults_to_intro_page() {
        assert_eq!(NavState::default().fragment(), DEFAULT_SUBPAGE);
        let nav = NavState::from_subpage("inventory-housing-type");
        assert_eq!(nav.fragment(), "inventory-housing-type");
    }

    #[test]
    fn serializes_for_state_snapshots() {
        let nav = NavState::from_subpage("demographics-age");
        let json = serde_json::to_string(&nav).unwrap();
        assert_eq!(serde_json::from_str::<NavState>(&json).unwrap(), nav);
    }
}
