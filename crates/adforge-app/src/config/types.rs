//! Configuration types for adforge
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - `StartupOptions` - Command-line overrides and form pre-fill
//! - Related sub-types and enums

use std::path::PathBuf;

use adforge_client::{DEFAULT_GENERATE_PATH, DEFAULT_ORIGIN, DEFAULT_STATIC_PATH};
use serde::{Deserialize, Serialize};

use crate::navigation::Route;

/// Global settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub upload: UploadSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Where the generation backend lives
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BackendSettings {
    /// Scheme, host and port of the backend
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Path of the generation endpoint
    #[serde(default = "default_generate_path")]
    pub generate_path: String,

    /// Path prefix that generated image paths are relative to
    #[serde(default = "default_static_path")]
    pub static_path: String,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            generate_path: default_generate_path(),
            static_path: default_static_path(),
        }
    }
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

fn default_generate_path() -> String {
    DEFAULT_GENERATE_PATH.to_string()
}

fn default_static_path() -> String {
    DEFAULT_STATIC_PATH.to_string()
}

/// Upload filter
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UploadSettings {
    /// File extensions accepted for the presentation field
    #[serde(default = "default_accepted_extensions")]
    pub accepted_extensions: Vec<String>,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            accepted_extensions: default_accepted_extensions(),
        }
    }
}

fn default_accepted_extensions() -> Vec<String> {
    vec!["pptx".to_string()]
}

/// Icon rendering mode.
///
/// Controls whether the TUI uses Nerd Font glyphs (requires a Nerd Font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub icons: IconMode,
}

/// Behavior settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Command used to open asset URLs; empty uses the platform opener
    #[serde(default)]
    pub browser: String,
}

/// Values taken from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupOptions {
    /// Overrides `backend.origin`
    pub backend_origin: Option<String>,
    /// Initial value of the URL field
    pub prefill_url: Option<String>,
    /// Initial value of the file field
    pub prefill_file: Option<PathBuf>,
    /// Screen to open first
    pub initial_route: Route,
}

impl Settings {
    /// Apply command-line overrides (CLI wins over the file)
    pub fn apply_overrides(&mut self, options: &StartupOptions) {
        if let Some(origin) = &options.backend_origin {
            self.backend.origin = origin.clone();
        }
    }
}
