use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Override for the generation service base URL.
    pub base_url: Option<String>,
    pub text_model: String,
    pub image_model: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }
}

pub fn load_config() -> AppConfig {
    let path = config_path();
    let Ok(contents) = std::fs::read_to_string(&path) else {
        return AppConfig::default();
    };
    toml::from_str(&contents).unwrap_or_default()
}

fn config_path() -> PathBuf {
    std::env::var_os("STORYWEAVE_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| data_dir().join("config.toml"))
}

fn data_dir() -> PathBuf {
    if let Some(path) = std::env::var_os("STORYWEAVE_DATA_HOME") {
        return PathBuf::from(path);
    }
    platform_data_dir().unwrap_or_else(|| {
        // Last resort: a dot-directory next to wherever we were launched.
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".storyweave")
    })
}

#[cfg(target_os = "linux")]
fn platform_data_dir() -> Option<PathBuf> {
    match std::env::var_os("XDG_DATA_HOME") {
        Some(xdg) => Some(PathBuf::from(xdg).join("storyweave")),
        None => Some(home::home_dir()?.join(".local/share/storyweave")),
    }
}

#[cfg(target_os = "macos")]
fn platform_data_dir() -> Option<PathBuf> {
    Some(home::home_dir()?.join("Library/Application Support/StoryWeave"))
}

#[cfg(target_os = "windows")]
fn platform_data_dir() -> Option<PathBuf> {
    Some(PathBuf::from(std::env::var_os("APPDATA")?).join("StoryWeave"))
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn platform_data_dir() -> Option<PathBuf> {
    None
}
