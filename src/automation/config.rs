//! Engine configuration.
//!
//! Loads settings from config.json at startup. Provides the font cache
//! location, the fonts to preload, pointer and keyboard timing, and the
//! status line reader settings.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::input::DEFAULT_MOUSE_SPEED;
use crate::ocr::{FontLibrary, FontType, UpTextSettings};
use crate::paths::DefaultStorage;

/// Global configuration instance, initialized once at startup.
static CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Overrides the root that holds `Cache/Fonts`
    pub storage_root: Option<PathBuf>,
    /// Font sets to preload, in recognition priority order
    pub fonts: Vec<FontType>,
    /// Default pointer speed (10 is a relaxed human pace)
    pub mouse_speed: f64,
    /// Inter-key delay range in milliseconds
    pub key_delay_ms: (u64, u64),
    /// Sleep range between condition polls in milliseconds
    pub poll_interval_ms: (u64, u64),
    pub up_text: UpTextSettings,
    /// Process whose main window is captured and driven on Windows
    pub target_process: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            storage_root: None,
            fonts: FontType::ALL.to_vec(),
            mouse_speed: DEFAULT_MOUSE_SPEED,
            key_delay_ms: (50, 100),
            poll_interval_ms: (20, 30),
            up_text: UpTextSettings::default(),
            target_process: "java.exe".to_string(),
        }
    }
}

impl EngineConfig {
    /// Font cache location for this configuration.
    pub fn storage(&self) -> DefaultStorage {
        DefaultStorage {
            override_root: self.storage_root.clone(),
        }
    }

    /// Loads the configured fonts from the font cache, keeping their order
    /// as the recognition priority.
    pub fn load_fonts(&self) -> Result<FontLibrary> {
        FontLibrary::load(&self.storage(), &self.fonts)
    }
}

/// Reads a configuration file, falling back to defaults when it is missing
/// or malformed.
pub fn load_config_from(config_path: &Path) -> EngineConfig {
    crate::log(&format!("Looking for config at: {}", config_path.display()));

    if config_path.exists() {
        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    crate::log("Config loaded from config.json");
                    return config;
                }
                Err(e) => {
                    crate::log(&format!(
                        "Failed to parse config.json: {}. Using defaults.",
                        e
                    ));
                }
            },
            Err(e) => {
                crate::log(&format!(
                    "Failed to read config.json: {}. Using defaults.",
                    e
                ));
            }
        }
    } else {
        crate::log("config.json not found. Using default config.");
    }

    EngineConfig::default()
}

/// Loads config.json from the directory of the executable.
fn load_config() -> EngineConfig {
    let config_path = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("config.json")))
        .unwrap_or_else(|| Path::new("config.json").to_path_buf());
    load_config_from(&config_path)
}

/// Initializes the global configuration. Call once at startup.
pub fn init_config() {
    let _ = CONFIG.set(load_config());
}

/// Returns a reference to the global configuration.
/// Panics if called before init_config().
pub fn get_config() -> &'static EngineConfig {
    CONFIG
        .get()
        .expect("Config not initialized. Call init_config() first.")
}
