// Languiny Settings Module
// User-configurable language pair, detection tuning and word rules

#![cfg(feature = "config")]

use std::path::{Path, PathBuf};

use crate::corrector::Corrector;
use crate::detect::DetectorConfig;
use crate::rules::WordFilter;
use crate::Layout;

/// Settings for languiny
///
/// These settings are loaded from a TOML file (default:
/// ~/.config/languiny/settings.toml). Every section and key is optional;
/// missing values fall back to the defaults of [`Settings::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Layout the user types in most of the time
    primary: Layout,

    /// Layout switched to when the primary one reads wrong
    secondary: Layout,

    /// Whether the host should run switch detection at all
    auto_detect: bool,

    detector: DetectorConfig,

    filter: WordFilter,

    /// Path to the settings file (for reload)
    source_path: Option<PathBuf>,
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),
}

/// TOML representation for deserializing settings
#[derive(Debug, Clone, serde::Deserialize, Default)]
struct SettingsToml {
    #[serde(default)]
    languages: Option<LanguageSettings>,

    #[serde(default)]
    detection: Option<DetectionSettings>,

    #[serde(default)]
    rules: Option<RuleSettings>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct LanguageSettings {
    #[serde(default)]
    primary: Option<String>,
    #[serde(default)]
    secondary: Option<String>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct DetectionSettings {
    #[serde(default)]
    auto_detect: Option<toml::Value>,
    #[serde(default)]
    margin: Option<f64>,
    #[serde(default)]
    dictionary_weight: Option<f64>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct RuleSettings {
    #[serde(default)]
    min_word_length: Option<i64>,
    #[serde(default)]
    ignore_urls_emails: Option<toml::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Create settings with built-in defaults (en_US / ru_RU)
    pub fn new() -> Self {
        Self {
            primary: Layout::EnUS,
            secondary: Layout::RuRU,
            auto_detect: true,
            detector: DetectorConfig::default(),
            filter: WordFilter::default(),
            source_path: None,
        }
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        let mut settings = Self::from_toml(&content)?;
        settings.source_path = Some(path.as_ref().to_path_buf());
        log::debug!("loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings from TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let toml_settings: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();

        if let Some(languages) = toml_settings.languages {
            if let Some(primary) = languages.primary {
                settings.primary = parse_layout(&primary)?;
            }
            if let Some(secondary) = languages.secondary {
                settings.secondary = parse_layout(&secondary)?;
            }
        }
        if settings.primary == settings.secondary {
            return Err(SettingsError::InvalidValue(format!(
                "primary and secondary languages are both {}",
                settings.primary
            )));
        }

        if let Some(detection) = toml_settings.detection {
            if let Some(value) = detection.auto_detect {
                settings.auto_detect = parse_bool_value(&value)?;
            }
            if let Some(margin) = detection.margin {
                settings.detector.margin = parse_unit_interval("detection.margin", margin)?;
            }
            if let Some(weight) = detection.dictionary_weight {
                settings.detector.dictionary_weight =
                    parse_unit_interval("detection.dictionary_weight", weight)?;
            }
        }

        if let Some(rules) = toml_settings.rules {
            if let Some(length) = rules.min_word_length {
                settings.filter.min_word_length = usize::try_from(length).map_err(|_| {
                    SettingsError::InvalidValue(format!(
                        "rules.min_word_length must not be negative, got {}",
                        length
                    ))
                })?;
            }
            if let Some(value) = rules.ignore_urls_emails {
                settings.filter.ignore_urls_emails = parse_bool_value(&value)?;
            }
        }

        Ok(settings)
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("languiny").join("settings.toml"))
    }

    /// Load from default location (~/.config/languiny/settings.toml)
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        log::debug!("no settings file found, using defaults");
        Ok(Self::new())
    }

    /// Reload settings from the original file
    pub fn reload(&mut self) -> Result<(), SettingsError> {
        if let Some(ref path) = self.source_path {
            let new_settings = Self::from_file(path)?;
            *self = new_settings;
            Ok(())
        } else {
            Err(SettingsError::InvalidValue("No source path set".to_string()))
        }
    }

    pub fn primary(&self) -> Layout {
        self.primary
    }

    pub fn secondary(&self) -> Layout {
        self.secondary
    }

    /// The other layout of the configured pair
    pub fn counterpart(&self, layout: Layout) -> Layout {
        if layout == self.primary {
            self.secondary
        } else {
            self.primary
        }
    }

    pub fn auto_detect(&self) -> bool {
        self.auto_detect
    }

    pub fn detector_config(&self) -> DetectorConfig {
        self.detector
    }

    pub fn word_filter(&self) -> WordFilter {
        self.filter
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Build a corrector configured from these settings
    pub fn corrector(&self) -> Corrector {
        Corrector::new(self.filter, self.detector)
    }
}

fn parse_layout(name: &str) -> Result<Layout, SettingsError> {
    Layout::from_name(name).map_err(|e| SettingsError::InvalidValue(e.to_string()))
}

fn parse_unit_interval(key: &str, value: f64) -> Result<f64, SettingsError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(SettingsError::InvalidValue(format!(
            "{} must be within [0, 1], got {}",
            key, value
        )))
    }
}

/// Parse a TOML value as a boolean
fn parse_bool_value(value: &toml::Value) -> Result<bool, SettingsError> {
    match value {
        toml::Value::Boolean(b) => Ok(*b),
        toml::Value::Integer(1) => Ok(true),
        toml::Value::Integer(0) => Ok(false),
        toml::Value::String(s) => match s.to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(SettingsError::InvalidValue(format!(
                "Cannot convert '{}' to boolean",
                s
            ))),
        },
        _ => Err(SettingsError::InvalidValue(format!(
            "Cannot convert {:?} to boolean",
            value
        ))),
    }
}

/// Create default settings content for a new installation
pub fn default_settings_content() -> &'static str {
    r#"# Languiny Settings
# Place this file at: ~/.config/languiny/settings.toml

[languages]
# Layouts: "en_US", "ru_RU"
primary = "en_US"
secondary = "ru_RU"

[detection]
auto_detect = true
# How much better the other layout must read before switching (0..1)
margin = 0.3
# Share of the score given to common-word hits (0..1)
dictionary_weight = 0.25

[rules]
# Words shorter than this are never judged
min_word_length = 3
ignore_urls_emails = true
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::new();
        assert_eq!(settings.primary(), Layout::EnUS);
        assert_eq!(settings.secondary(), Layout::RuRU);
        assert!(settings.auto_detect());
        assert_eq!(settings.detector_config(), DetectorConfig::default());
        assert_eq!(settings.word_filter(), WordFilter::default());
        assert_eq!(settings.source_path(), None);
    }

    #[test]
    fn test_default_content_matches_defaults() {
        let settings = Settings::from_toml(default_settings_content()).unwrap();
        assert_eq!(settings, Settings::new());
    }

    #[test]
    fn test_settings_from_toml() {
        let toml = r#"
[languages]
primary = "ru_RU"
secondary = "en-us"

[detection]
auto_detect = "off"
margin = 0.5
dictionary_weight = 0.1

[rules]
min_word_length = 4
ignore_urls_emails = false
"#;

        let settings = Settings::from_toml(toml).unwrap();
        assert_eq!(settings.primary(), Layout::RuRU);
        assert_eq!(settings.secondary(), Layout::EnUS);
        assert!(!settings.auto_detect());
        assert_eq!(settings.detector_config().margin, 0.5);
        assert_eq!(settings.detector_config().dictionary_weight, 0.1);
        assert_eq!(settings.word_filter(), WordFilter::new(4, false));
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::new());
    }

    #[test]
    fn test_unknown_layout_rejected() {
        let result = Settings::from_toml("[languages]\nprimary = \"de_DE\"\n");
        assert!(matches!(result, Err(SettingsError::InvalidValue(_))));
    }

    #[test]
    fn test_same_pair_rejected() {
        let result = Settings::from_toml("[languages]\nsecondary = \"en_US\"\n");
        assert!(matches!(result, Err(SettingsError::InvalidValue(_))));
    }

    #[test]
    fn test_out_of_range_margin_rejected() {
        let result = Settings::from_toml("[detection]\nmargin = 1.5\n");
        assert!(matches!(result, Err(SettingsError::InvalidValue(_))));
    }

    #[test]
    fn test_negative_length_rejected() {
        let result = Settings::from_toml("[rules]\nmin_word_length = -2\n");
        assert!(matches!(result, Err(SettingsError::InvalidValue(_))));
    }

    #[test]
    fn test_bad_bool_rejected() {
        let result = Settings::from_toml("[detection]\nauto_detect = \"maybe\"\n");
        assert!(matches!(result, Err(SettingsError::InvalidValue(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let result = Settings::from_toml("[detection\n");
        assert!(matches!(result, Err(SettingsError::TomlParse(_))));
    }

    #[test]
    fn test_counterpart() {
        let settings = Settings::new();
        assert_eq!(settings.counterpart(Layout::EnUS), Layout::RuRU);
        assert_eq!(settings.counterpart(Layout::RuRU), Layout::EnUS);
    }

    #[test]
    fn test_reload_without_source() {
        let mut settings = Settings::new();
        assert!(matches!(settings.reload(), Err(SettingsError::InvalidValue(_))));
    }

    #[test]
    fn test_corrector_uses_settings() {
        let settings = Settings::from_toml("[rules]\nmin_word_length = 10\n").unwrap();
        assert_eq!(settings.corrector().correct("ghbdtn", Layout::EnUS), None);
        assert!(Settings::new().corrector().correct("ghbdtn", Layout::EnUS).is_some());
    }
}
