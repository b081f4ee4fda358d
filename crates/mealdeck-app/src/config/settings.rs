//! Settings loader for `config.toml`

use std::path::{Path, PathBuf};

use mealdeck_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "mealdeck";

/// Default location: `<config_dir>/mealdeck/config.toml`
///
/// Falls back to the working directory when the platform has no config dir.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILENAME)
}

/// Load settings from `config_path`.
///
/// A missing, unreadable or invalid file yields the defaults.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config to `config_path` unless one exists.
///
/// Returns `true` if a file was written.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    let default_content = format!(
        r#"# MealDeck Configuration

[api]
base_url = "{base_url}"
timeout_secs = 0        # 0 = no timeout
user_agent = "{user_agent}"

[ui]
show_images = true      # false = never download thumbnails
icons = "unicode"       # "unicode" or "nerd_fonts"

[behavior]
browser = ""            # Empty = system default
"#,
        base_url = mealdeck_api::DEFAULT_BASE_URL,
        user_agent = mealdeck_api::DEFAULT_USER_AGENT,
    );

    std::fs::write(config_path, default_content)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;

    info!("Wrote default config to {:?}", config_path);
    Ok(true)
}
