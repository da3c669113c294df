//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use adforge_client::Endpoints;
use adforge_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "adforge";

/// Default config location: `<config dir>/adforge/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings.
///
/// With an explicit `path` the file must exist. Without one, the default
/// location is tried and a missing file means defaults. In both cases an
/// unreadable or unparsable file is logged and defaults are used.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(Error::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            Ok(read_settings(path))
        }
        None => match default_config_path() {
            Some(path) if path.exists() => Ok(read_settings(&path)),
            Some(path) => {
                debug!("No config file at {:?}, using defaults", path);
                Ok(Settings::default())
            }
            None => {
                debug!("No config directory on this platform, using defaults");
                Ok(Settings::default())
            }
        },
    }
}

fn read_settings(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
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

/// Resolve the backend URLs described by `settings`
pub fn resolve_endpoints(settings: &Settings) -> Result<Endpoints> {
    Endpoints::with_paths(
        &settings.backend.origin,
        &settings.backend.generate_path,
        &settings.backend.static_path,
    )
}
