use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use url::Url;

use crate::language_utils;
use crate::locales::UiLocale;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// UI locale for user-facing messages
    #[serde(default)]
    pub ui_locale: UiLocale,

    /// Source column override; empty means auto-detect
    #[serde(default)]
    pub source_column: String,

    /// Source language code override; empty means auto-detect
    #[serde(default)]
    pub source_language: String,

    /// Target language codes; empty means all detected candidates
    #[serde(default)]
    pub target_languages: Vec<String>,

    /// Translation config
    pub translation: TranslationConfig,

    /// Suspicious output flagging config
    #[serde(default)]
    pub flagging: FlaggingConfig,

    /// Output styling config
    #[serde(default)]
    pub style: StyleConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation provider type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    // @provider: Google translate web endpoint
    #[default]
    Google,
    // @provider: LibreTranslate
    LibreTranslate,
}

impl TranslationProvider {
    // @returns: Capitalized provider name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Google => "Google",
            Self::LibreTranslate => "LibreTranslate",
        }
    }

    // @returns: Lowercase provider identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Google => "google".to_string(),
            Self::LibreTranslate => "libretranslate".to_string(),
        }
    }
}

// Implement Display trait for TranslationProvider
impl std::fmt::Display for TranslationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for TranslationProvider
impl std::str::FromStr for TranslationProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "libretranslate" => Ok(Self::LibreTranslate),
            _ => Err(anyhow!("Invalid provider type: {}", s)),
        }
    }
}

/// Provider configuration wrapper
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    // @field: Provider type identifier
    #[serde(rename = "type")]
    pub provider_type: String,

    // @field: API key
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Service URL
    #[serde(default = "String::new")]
    pub endpoint: String,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProviderConfig {
    // @param provider_type: Provider enum
    // @returns: Provider config with defaults
    pub fn new(provider_type: TranslationProvider) -> Self {
        match provider_type {
            TranslationProvider::Google => Self {
                provider_type: "google".to_string(),
                api_key: String::new(),
                endpoint: default_google_endpoint(),
                timeout_secs: default_timeout_secs(),
            },
            TranslationProvider::LibreTranslate => Self {
                provider_type: "libretranslate".to_string(),
                api_key: String::new(),
                endpoint: default_libretranslate_endpoint(),
                timeout_secs: default_timeout_secs(),
            },
        }
    }
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Translation provider to use
    #[serde(default)]
    pub provider: TranslationProvider,

    /// Available translation providers
    #[serde(default)]
    pub available_providers: Vec<ProviderConfig>,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider: TranslationProvider::default(),
            available_providers: vec![
                ProviderConfig::new(TranslationProvider::Google),
                ProviderConfig::new(TranslationProvider::LibreTranslate),
            ],
        }
    }
}

impl TranslationConfig {
    /// Resolve the config entry for the active provider
    pub fn active_provider_config(&self) -> Option<&ProviderConfig> {
        let wanted = self.provider.to_lowercase_string();
        self.available_providers
            .iter()
            .find(|p| p.provider_type == wanted)
    }
}

/// Configuration for suspicious output flagging
///
/// Translated cells whose text contains any of these substrings
/// (case-insensitively) are flagged for visual emphasis in the output.
/// The defaults target domain terminology that the translation service is
/// known to mangle.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FlaggingConfig {
    /// Substrings that mark a translated cell as suspicious
    #[serde(default = "default_suspicious_words")]
    pub suspicious_words: Vec<String>,
}

impl Default for FlaggingConfig {
    fn default() -> Self {
        Self {
            suspicious_words: default_suspicious_words(),
        }
    }
}

/// Output workbook styling
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StyleConfig {
    /// Font applied to every populated cell
    #[serde(default = "default_font_name")]
    pub font_name: String,

    /// Font size applied to every populated cell
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// ARGB color of the bold alert font for flagged cells
    #[serde(default = "default_alert_color")]
    pub alert_color: String,

    /// Display width of data columns
    #[serde(default = "default_column_width")]
    pub column_width: f64,

    /// Display width of the first (index artifact) column
    #[serde(default = "default_index_column_width")]
    pub index_column_width: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_name: default_font_name(),
            font_size: default_font_size(),
            alert_color: default_alert_color(),
            column_width: default_column_width(),
            index_column_width: default_index_column_width(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_google_endpoint() -> String {
    "https://translate.googleapis.com".to_string()
}

fn default_libretranslate_endpoint() -> String {
    "https://libretranslate.com".to_string()
}

fn default_suspicious_words() -> Vec<String> {
    ["poloz", "rama", "skrutky", "ulozenie"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_font_name() -> String {
    "Arial".to_string()
}

fn default_font_size() -> f64 {
    10.0
}

fn default_alert_color() -> String {
    "FF0000".to_string()
}

fn default_column_width() -> f64 {
    80.0
}

fn default_index_column_width() -> f64 {
    1.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui_locale: UiLocale::default(),
            source_column: String::new(),
            source_language: String::new(),
            target_languages: Vec::new(),
            translation: TranslationConfig::default(),
            flagging: FlaggingConfig::default(),
            style: StyleConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration after loading and CLI overrides
    pub fn validate(&self) -> Result<()> {
        if self.translation.active_provider_config().is_none() {
            return Err(anyhow!(
                "No provider configuration found for '{}'",
                self.translation.provider
            ));
        }

        if let Some(provider_config) = self.translation.active_provider_config() {
            if !provider_config.endpoint.is_empty() {
                Url::parse(&provider_config.endpoint).map_err(|e| {
                    anyhow!(
                        "Invalid endpoint URL for provider '{}': {}",
                        provider_config.provider_type,
                        e
                    )
                })?;
            }
        }

        if !self.source_language.is_empty()
            && !language_utils::is_code_shaped(&self.source_language)
        {
            return Err(anyhow!(
                "Invalid source language code: {}",
                self.source_language
            ));
        }

        for code in &self.target_languages {
            if !language_utils::is_code_shaped(code) {
                return Err(anyhow!("Invalid target language code: {}", code));
            }
        }

        if self.flagging.suspicious_words.iter().any(|w| w.is_empty()) {
            return Err(anyhow!("Suspicious word list must not contain empty strings"));
        }

        Ok(())
    }
}
