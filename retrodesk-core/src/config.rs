//! Site configuration
//!
//! Timing constants, palettes, desktop folders and the rider page sections all
//! live in `static/assets/data/site.json` of the web crate and are embedded
//! at compile time.
use crate::palette::{Palette, Palettes};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_SITE_DATA: &str = include_str!("../../retrodesk-web/static/assets/data/site.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("duplicate section id `{0}`")]
    DuplicateSection(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionCopy {
    pub id: String,
    /// Short label on the nav icon.
    pub label: String,
    pub title: String,
    #[serde(default)]
    pub standard: Vec<String>,
    #[serde(default)]
    pub easy_read: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_scroll_spy_offset")]
    pub scroll_spy_offset: f64,
    #[serde(default = "default_scroll_target_offset")]
    pub scroll_target_offset: f64,
    #[serde(default = "default_section")]
    pub default_section: String,
    #[serde(default = "default_announce_clear_ms")]
    pub announce_clear_ms: i32,
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: i32,
    #[serde(default = "default_layout_announce_delay_ms")]
    pub layout_announce_delay_ms: i32,
    #[serde(default = "default_compact_width")]
    pub compact_width: f64,
    #[serde(default = "default_compact_height")]
    pub compact_height: f64,
    #[serde(default)]
    pub palettes: Palettes,
    #[serde(default)]
    pub background_image: String,
    #[serde(default)]
    pub fallback_background: String,
    #[serde(default)]
    pub folders: Vec<FolderLink>,
    #[serde(default)]
    pub sections: Vec<SectionCopy>,
}

const fn default_scroll_spy_offset() -> f64 {
    200.0
}

const fn default_scroll_target_offset() -> f64 {
    120.0
}

fn default_section() -> String {
    "intro".to_string()
}

const fn default_announce_clear_ms() -> i32 {
    1000
}

const fn default_resize_debounce_ms() -> i32 {
    250
}

const fn default_layout_announce_delay_ms() -> i32 {
    500
}

const fn default_compact_width() -> f64 {
    768.0
}

const fn default_compact_height() -> f64 {
    600.0
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_spy_offset: default_scroll_spy_offset(),
            scroll_target_offset: default_scroll_target_offset(),
            default_section: default_section(),
            announce_clear_ms: default_announce_clear_ms(),
            resize_debounce_ms: default_resize_debounce_ms(),
            layout_announce_delay_ms: default_layout_announce_delay_ms(),
            compact_width: default_compact_width(),
            compact_height: default_compact_height(),
            palettes: Palettes::default(),
            background_image: String::new(),
            fallback_background: String::new(),
            folders: Vec::new(),
            sections: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, a timing value is not
    /// positive, or two sections share an id.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Embedded configuration, or defaults if it fails to parse.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_SITE_DATA).unwrap_or_else(|err| {
            log::warn!("falling back to default site config: {err}");
            Self::default()
        })
    }

    /// Process-wide cached copy of [`SiteConfig::load_from_static`].
    #[must_use]
    pub fn shared() -> &'static Self {
        static CONFIG: OnceCell<SiteConfig> = OnceCell::new();
        CONFIG.get_or_init(Self::load_from_static)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let timings = [
            ("announce_clear_ms", f64::from(self.announce_clear_ms)),
            ("resize_debounce_ms", f64::from(self.resize_debounce_ms)),
            (
                "layout_announce_delay_ms",
                f64::from(self.layout_announce_delay_ms),
            ),
            ("compact_width", self.compact_width),
            ("compact_height", self.compact_height),
        ];
        for (field, value) in timings {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        let mut seen = std::collections::BTreeSet::new();
        for section in &self.sections {
            if !seen.insert(section.id.as_str()) {
                return Err(ConfigError::DuplicateSection(section.id.clone()));
            }
        }
        Ok(())
    }

    /// Viewport small enough to warrant the "layout adjusted" announcement.
    #[must_use]
    pub fn is_compact_viewport(&self, width: f64, height: f64) -> bool {
        width <= self.compact_width || height <= self.compact_height
    }

    #[must_use]
    pub fn palette(&self, theme: crate::theme::Theme) -> Option<&Palette> {
        self.palettes.for_theme(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let cfg = SiteConfig::from_json(DEFAULT_SITE_DATA).expect("site.json should parse");
        assert_eq!(cfg.folders.len(), 5);
        assert!(cfg.sections.iter().any(|s| s.id == cfg.default_section));
        assert!((cfg.scroll_spy_offset - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg = SiteConfig::from_json("{}").unwrap();
        assert_eq!(cfg, SiteConfig::default());
        assert_eq!(cfg.announce_clear_ms, 1000);
    }

    #[test]
    fn rejects_bad_values() {
        let err = SiteConfig::from_json(r#"{"resize_debounce_ms": 0}"#).unwrap_err();
        assert!(err.to_string().contains("resize_debounce_ms"));

        let dupes = r#"{"sections": [
            {"id": "intro", "label": "a", "title": "A"},
            {"id": "intro", "label": "b", "title": "B"}
        ]}"#;
        assert!(matches!(
            SiteConfig::from_json(dupes),
            Err(ConfigError::DuplicateSection(id)) if id == "intro"
        ));
        assert!(matches!(
            SiteConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn compact_viewport_uses_either_dimension() {
        let cfg = SiteConfig::default();
        assert!(cfg.is_compact_viewport(768.0, 900.0));
        assert!(cfg.is_compact_viewport(1280.0, 600.0));
        assert!(!cfg.is_compact_viewport(1280.0, 900.0));
    }
}
