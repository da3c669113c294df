//! Configuration file parsing for adforge
//!
//! Supports `<config dir>/adforge/config.toml` (or an explicit `--config`
//! path) with command-line overrides on top.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, resolve_endpoints};
pub use types::*;
