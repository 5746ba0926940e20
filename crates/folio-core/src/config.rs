//! Page-level tuning knobs.
//!
//! The defaults reproduce the stock portfolio page. A page may override any
//! subset by embedding a JSON object in `<script type="application/json"
//! id="folio-config">`; fields it omits keep their defaults.

use crate::error::FolioError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ACKNOWLEDGMENT: &str =
    "Thank you! Your message has been sent. I will get back to you soon.";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FolioConfig {
    /// `localStorage` key holding `"light"` or `"dark"`.
    pub storage_key: String,
    /// Subtracted from each section's top to build its activation window (px).
    pub scroll_offset: f64,
    /// Scroll positions above this always highlight the home link (px).
    pub home_threshold: f64,
    pub home_section: String,
    pub reveal_root_margin: String,
    pub reveal_threshold: f64,
    pub skill_threshold: f64,
    pub acknowledgment: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            storage_key: "portfolio-theme".to_owned(),
            scroll_offset: 120.0,
            home_threshold: 100.0,
            home_section: "home".to_owned(),
            reveal_root_margin: "0px 0px -80px 0px".to_owned(),
            reveal_threshold: 0.1,
            skill_threshold: 0.2,
            acknowledgment: DEFAULT_ACKNOWLEDGMENT.to_owned(),
        }
    }
}

impl FolioConfig {
    /// Parse an override block. Intersection thresholds must lie in `[0, 1]`.
    pub fn from_json(raw: &str) -> Result<Self, FolioError> {
        let config: FolioConfig =
            serde_json::from_str(raw).map_err(|e| FolioError::InvalidConfig(e.to_string()))?;

        for (name, value) in [
            ("revealThreshold", config.reveal_threshold),
            ("skillThreshold", config.skill_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(FolioError::InvalidConfig(format!(
                    "{name} must be within 0..=1, got {value}"
                )));
            }
        }

        Ok(config)
    }

    /// Like [`FolioConfig::from_json`] but falls back to defaults on any error.
    pub fn from_json_or_default(raw: &str) -> Self {
        Self::from_json(raw).unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring folio config block");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_keeps_defaults() -> anyhow::Result<()> {
        assert_eq!(FolioConfig::from_json("{}")?, FolioConfig::default());
        Ok(())
    }

    #[test]
    fn overrides_only_named_fields() -> anyhow::Result<()> {
        let config = FolioConfig::from_json(r#"{"scrollOffset": 64, "homeSection": "top"}"#)?;

        assert_eq!(config.scroll_offset, 64.0);
        assert_eq!(config.home_section, "top");
        assert_eq!(config.storage_key, "portfolio-theme");
        assert_eq!(config.home_threshold, 100.0);
        assert_eq!(config.acknowledgment, DEFAULT_ACKNOWLEDGMENT);
        Ok(())
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let err = FolioConfig::from_json(r#"{"skillThreshold": 1.5}"#).unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig(msg) if msg.contains("skillThreshold")));
    }

    #[test]
    fn malformed_json_falls_back() {
        assert_eq!(
            FolioConfig::from_json_or_default("{not json"),
            FolioConfig::default()
        );
    }
}
