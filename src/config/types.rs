// Configuration type definitions

use serde::Deserialize;

use crate::highlight::Easing;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;
pub const DEFAULT_FRAME_MS: u64 = 16;
pub const DEFAULT_GLOW_RADIUS: u16 = 12;

/// Remote service configuration section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL the `/api/...` endpoints are resolved against
    pub base_url: String,
    /// Per-request timeout
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Autocomplete configuration section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    pub debounce_ms: u64,
    pub min_query_len: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
        }
    }
}

/// Glow color for the pointer highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HighlightColor {
    #[default]
    Blue,
    Red,
    White,
    Black,
}

/// Pointer highlight configuration section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enabled: bool,
    /// Raw easing factor, validated by [`HighlightConfig::easing`]
    pub easing: f32,
    pub frame_ms: u64,
    pub radius: u16,
    pub color: HighlightColor,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        HighlightConfig {
            enabled: true,
            easing: Easing::DEFAULT.get(),
            frame_ms: DEFAULT_FRAME_MS,
            radius: DEFAULT_GLOW_RADIUS,
            color: HighlightColor::Blue,
        }
    }
}

impl HighlightConfig {
    /// Validated easing factor, falling back to the default when the
    /// configured value is outside `(0, 1]`
    pub fn easing(&self) -> Easing {
        match Easing::new(self.easing) {
            Ok(easing) => easing,
            Err(e) => {
                log::warn!("{}; using {}", e, Easing::DEFAULT.get());
                Easing::DEFAULT
            }
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub suggest: SuggestConfig,
    pub highlight: HighlightConfig,
}
