use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_JPEG_QUALITY: u8 = 85;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum ThemeMode {
    System,
    Dark,
    Light,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the analysis server; the endpoints are joined onto this.
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Which capture device to open when the camera is toggled on.
    #[serde(default)]
    pub camera_index: u32,
    /// Quality for snapshot JPEG encoding (both analyze and share paths).
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}
fn default_jpeg_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}
fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            camera_index: 0,
            jpeg_quality: default_jpeg_quality(),
            theme_mode: default_theme_mode(),
        }
    }
}

pub fn get_config_path() -> PathBuf {
    let config_dir = dirs::config_dir().unwrap_or_default().join("snapview");
    let _ = std::fs::create_dir_all(&config_dir);
    config_dir.join("config.json")
}

pub fn load_config() -> Config {
    load_from(&get_config_path())
}

pub fn save_config(config: &Config) {
    save_to(&get_config_path(), config);
}

fn load_from(path: &Path) -> Config {
    if path.exists() {
        let data = std::fs::read_to_string(path).unwrap_or_default();
        serde_json::from_str(&data).unwrap_or_default()
    } else {
        Config::default()
    }
}

fn save_to(path: &Path, config: &Config) {
    let data = serde_json::to_string_pretty(config).unwrap_or_default();
    let _ = std::fs::write(path, data);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config {
            server_url: "http://example.com:8080".to_string(),
            camera_index: 2,
            jpeg_quality: 70,
            theme_mode: ThemeMode::Dark,
        };
        save_to(&path, &config);

        assert_eq!(load_from(&path), config);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(&dir.path().join("nope.json"));
        assert_eq!(config, Config::default());
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn garbage_and_unknown_keys_are_tolerated() {
        let dir = tempfile::tempdir().unwrap();

        let garbage = dir.path().join("garbage.json");
        std::fs::write(&garbage, "not json at all").unwrap();
        assert_eq!(load_from(&garbage), Config::default());

        let partial = dir.path().join("partial.json");
        std::fs::write(
            &partial,
            r#"{"server_url": "http://other:5000", "some_future_key": 1}"#,
        )
        .unwrap();
        let config = load_from(&partial);
        assert_eq!(config.server_url, "http://other:5000");
        assert_eq!(config.jpeg_quality, DEFAULT_JPEG_QUALITY);
    }
}
