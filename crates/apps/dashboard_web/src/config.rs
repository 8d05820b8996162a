use serde::{Deserialize, Serialize};

/// Page-level knobs the embedding page may override with a JSON object
/// passed to `init_dashboard_with_config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Subpage shown when the URL hash names none.
    pub default_subpage: String,
    /// Suffix appended to every window title.
    pub title_suffix: String,
    /// Viewport width at or below which the mobile menu button is added.
    pub mobile_breakpoint_px: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_subpage: nav::DEFAULT_SUBPAGE.to_string(),
            title_suffix: nav::FALLBACK_TITLE.to_string(),
            mobile_breakpoint_px: 768,
        }
    }
}

impl DashboardConfig {
    /// Window title for a subpage. Subpages outside the catalog keep the
    /// bare suffix instead of doubling it up.
    pub fn document_title(&self, subpage: &str) -> String {
        let title = nav::page_title(subpage);
        if title == nav::FALLBACK_TITLE {
            self.title_suffix.clone()
        } else {
            format!("{title} - {}", self.title_suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_subpage_gets_suffixed_title() {
        let config = DashboardConfig::default();
        assert_eq!(
            config.document_title("demographics-total-population"),
            "Total Population - Sourcebook"
        );
    }

    #[test]
    fn unknown_subpage_keeps_fallback_title() {
        let config = DashboardConfig::default();
        assert_eq!(config.document_title("economics-jobs"), "Sourcebook");
        assert_eq!(config.document_title("intro-page"), "Sourcebook");
    }

    #[test]
    fn partial_config_json_fills_defaults() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{"title_suffix":"Housing Sourcebook"}"#).unwrap();
        assert_eq!(config.title_suffix, "Housing Sourcebook");
        assert_eq!(config.default_subpage, nav::DEFAULT_SUBPAGE);
        assert_eq!(config.mobile_breakpoint_px, 768);
    }
}
