//! Settings parser for .alcove/alcove.toml

use std::path::{Path, PathBuf};

use alcove_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "alcove.toml";
const ALCOVE_DIR: &str = ".alcove";

/// Path of the config file under a base directory
pub fn config_path(base: &Path) -> PathBuf {
    base.join(ALCOVE_DIR).join(CONFIG_FILENAME)
}

/// Load settings from .alcove/alcove.toml
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(base: &Path) -> Settings {
    let path = config_path(base);

    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Write settings to .alcove/alcove.toml, creating the directory if needed
pub fn save_settings(base: &Path, settings: &Settings) -> Result<()> {
    let dir = base.join(ALCOVE_DIR);
    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::config(format!("Failed to create .alcove dir: {e}")))?;
    }

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {e}")))?;
    std::fs::write(config_path(base), content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(dir.path());
        assert_eq!(settings.browse.page_size, 10);
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(ALCOVE_DIR)).unwrap();
        std::fs::write(config_path(dir.path()), "not [valid toml").unwrap();

        let settings = load_settings(dir.path());
        assert_eq!(settings.browse.debounce_ms, 300);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.browse.page_size = 7;
        settings.catalog.seed = 99;

        save_settings(dir.path(), &settings).unwrap();
        let loaded = load_settings(dir.path());

        assert_eq!(loaded.browse.page_size, 7);
        assert_eq!(loaded.catalog.seed, 99);
    }
}
