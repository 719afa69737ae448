//! Configuration types for Alcove
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `BrowseSettings` / `CatalogSettings` - Section sub-types

use serde::{Deserialize, Serialize};

/// Global application settings, loaded from `.alcove/alcove.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub browse: BrowseSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,
}

/// Search and pagination behavior
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BrowseSettings {
    /// Results per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Debounce quiet period in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for BrowseSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Mock data source shape
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Generation seed; a fixed default keeps catalogs stable across runs
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Number of generated assets
    #[serde(default = "default_count")]
    pub count: usize,

    /// Simulated backend round-trip in milliseconds
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            count: default_count(),
            latency_ms: default_latency_ms(),
        }
    }
}

fn default_page_size() -> u32 {
    10
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_seed() -> u64 {
    42
}

fn default_count() -> usize {
    50
}

fn default_latency_ms() -> u64 {
    800
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.browse.page_size, 10);
        assert_eq!(settings.browse.debounce_ms, 300);
        assert_eq!(settings.catalog.seed, 42);
        assert_eq!(settings.catalog.count, 50);
        assert_eq!(settings.catalog.latency_ms, 800);
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [browse]
            page_size = 25
            "#,
        )
        .unwrap();
        assert_eq!(settings.browse.page_size, 25);
        assert_eq!(settings.browse.debounce_ms, 300);
        assert_eq!(settings.catalog.count, 50);
    }

    #[test]
    fn test_full_toml_round_trip() {
        let settings: Settings = toml::from_str(
            r#"
            [browse]
            page_size = 5
            debounce_ms = 150

            [catalog]
            seed = 7
            count = 200
            latency_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(settings.browse.page_size, 5);
        assert_eq!(settings.browse.debounce_ms, 150);
        assert_eq!(settings.catalog.seed, 7);
        assert_eq!(settings.catalog.count, 200);
        assert_eq!(settings.catalog.latency_ms, 0);

        let serialized = toml::to_string_pretty(&settings).unwrap();
        let back: Settings = toml::from_str(&serialized).unwrap();
        assert_eq!(back.catalog.count, 200);
    }
}
