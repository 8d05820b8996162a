use serde::{Deserialize, Serialize};

pub mod query;

use query::{decode_component, encode_component};

/// Geographic aggregation level for the embedded report pages.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoLevel {
    #[default]
    State,
    Cbsa,
    Locality,
}

impl GeoLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            GeoLevel::State => "state",
            GeoLevel::Cbsa => "cbsa",
            GeoLevel::Locality => "locality",
        }
    }

    pub fn parse(s: &str) -> Option<GeoLevel> {
        match s {
            "state" => Some(GeoLevel::State),
            "cbsa" => Some(GeoLevel::Cbsa),
            "locality" => Some(GeoLevel::Locality),
            _ => None,
        }
    }
}

impl std::fmt::Display for GeoLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic filter state shared between the URL, the sidebar controls,
/// and the embedded report iframes.
///
/// Only the selector matching `level` is meaningful. The other value is
/// carried so switching levels back restores the previous choice, but it
/// never appears in a built query.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoParams {
    pub level: GeoLevel,
    pub cbsa: Option<String>,
    pub locality: Option<String>,
}

impl GeoParams {
    /// The selector value that applies at the current level, if any.
    /// `State` needs no companion selector.
    pub fn selected_value(&self) -> Option<&str> {
        let value = match self.level {
            GeoLevel::State => return None,
            GeoLevel::Cbsa => self.cbsa.as_deref(),
            GeoLevel::Locality => self.locality.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }

    /// Build the query string appended to report URLs, leading `?` included.
    ///
    /// Emits `geo` always, and `cbsa`/`locality` only when the level selects
    /// it and the value is non-empty.
    pub fn to_query(&self) -> String {
        let mut out = String::from("?geo=");
        out.push_str(self.level.as_str());
        let key = match self.level {
            GeoLevel::State => None,
            GeoLevel::Cbsa => Some("cbsa"),
            GeoLevel::Locality => Some("locality"),
        };
        if let (Some(key), Some(value)) = (key, self.selected_value()) {
            out.push('&');
            out.push_str(key);
            out.push('=');
            out.push_str(&encode_component(value));
        }
        out
    }

    /// Parse a query string, with or without the leading `?`.
    ///
    /// Returns `None` when no `geo` key is present, so callers can tell
    /// "URL carries no geography" apart from "URL selects the default".
    /// Malformed pairs and unknown keys are skipped; an unrecognized `geo`
    /// value falls back to the default level. Duplicate keys follow browser
    /// behavior: last write wins.
    pub fn parse_query(raw: &str) -> Option<GeoParams> {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let mut params = GeoParams::default();
        let mut saw_geo = false;
        for pair in raw.split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(key);
            let value = decode_component(value);
            match key.as_str() {
                "geo" => {
                    saw_geo = true;
                    params.level = GeoLevel::parse(&value).unwrap_or_default();
                }
                "cbsa" => params.cbsa = Some(value).filter(|v| !v.is_empty()),
                "locality" => params.locality = Some(value).filter(|v| !v.is_empty()),
                _ => {}
            }
        }
        saw_geo.then_some(params)
    }

    /// Total variant of [`parse_query`]: anything unparseable is the default.
    pub fn from_query(raw: &str) -> GeoParams {
        Self::parse_query(raw).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn state_query_carries_only_level() {
        let params = GeoParams {
            level: GeoLevel::State,
            cbsa: Some("47900".to_string()),
            locality: Some("Arlington".to_string()),
        };
        assert_eq!(params.to_query(), "?geo=state");
    }

    #[test]
    fn cbsa_query_omits_locality() {
        let params = GeoParams {
            level: GeoLevel::Cbsa,
            cbsa: Some("47900".to_string()),
            locality: Some("Arlington".to_string()),
        };
        assert_eq!(params.to_query(), "?geo=cbsa&cbsa=47900");
    }

    #[test]
    fn locality_query_omits_cbsa() {
        let params = GeoParams {
            level: GeoLevel::Locality,
            cbsa: Some("47900".to_string()),
            locality: Some("Falls Church".to_string()),
        };
        assert_eq!(params.to_query(), "?geo=locality&locality=Falls%20Church");
    }

    #[test]
    fn empty_selector_value_is_omitted() {
        let params = GeoParams {
            level: GeoLevel::Cbsa,
            cbsa: Some(String::new()),
            locality: None,
        };
        assert_eq!(params.to_query(), "?geo=cbsa");
    }

    #[test]
    fn round_trips_through_query() {
        let cases = [
            GeoParams::default(),
            GeoParams {
                level: GeoLevel::Cbsa,
                cbsa: Some("47900".to_string()),
                locality: None,
            },
            GeoParams {
                level: GeoLevel::Locality,
                cbsa: None,
                locality: Some("Prince William County".to_string()),
            },
        ];
        for params in cases {
            assert_eq!(GeoParams::from_query(&params.to_query()), params);
        }
    }

    #[test]
    fn parse_accepts_bare_and_prefixed_queries() {
        let expected = GeoParams {
            level: GeoLevel::Cbsa,
            cbsa: Some("47900".to_string()),
            locality: None,
        };
        assert_eq!(GeoParams::from_query("?geo=cbsa&cbsa=47900"), expected);
        assert_eq!(GeoParams::from_query("geo=cbsa&cbsa=47900"), expected);
    }

    #[test]
    fn parse_without_geo_key_is_none() {
        assert_eq!(GeoParams::parse_query("cbsa=47900"), None);
        assert_eq!(GeoParams::parse_query(""), None);
        assert_eq!(GeoParams::parse_query("?tab=overview"), None);
    }

    #[test]
    fn unknown_level_falls_back_to_state() {
        let params = GeoParams::from_query("?geo=galaxy&locality=Richmond");
        assert_eq!(params.level, GeoLevel::State);
        assert_eq!(params.locality.as_deref(), Some("Richmond"));
    }

    #[test]
    fn tolerates_junk_and_duplicate_pairs() {
        let params = GeoParams::from_query("?geo=cbsa&&cbsa=13980&cbsa=47900&noise&x=1");
        assert_eq!(
            params,
            GeoParams {
                level: GeoLevel::Cbsa,
                cbsa: Some("47900".to_string()),
                locality: None,
            }
        );
    }

    #[test]
    fn parse_accepts_plus_and_percent_spaces() {
        let a = GeoParams::from_query("?geo=locality&locality=Falls+Church");
        let b = GeoParams::from_query("?geo=locality&locality=Falls%20Church");
        assert_eq!(a, b);
        assert_eq!(a.locality.as_deref(), Some("Falls Church"));
    }
}
