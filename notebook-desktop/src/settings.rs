//! Application settings persistence for Notebook.
//!
//! Stores user preferences (notebook folder and preview grid shape) in a JSON
//! file at an OS-appropriate location.

use notebook_core::PreviewLayout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    /// Directory that relative open/save paths are resolved against.
    pub notebook_directory: String,
    /// Note previews per row.
    pub preview_columns: usize,
    /// Characters of body text shown in a preview.
    pub excerpt_chars: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        let layout = PreviewLayout::default();
        Self {
            notebook_directory: default_notebook_directory()
                .to_string_lossy()
                .to_string(),
            preview_columns: layout.columns,
            excerpt_chars: layout.excerpt_chars,
        }
    }
}

impl AppSettings {
    pub fn preview_layout(&self) -> PreviewLayout {
        PreviewLayout {
            columns: self.preview_columns,
            excerpt_chars: self.excerpt_chars,
        }
    }
}

/// Returns the path to the settings JSON file.
///
/// - macOS / Linux: `~/.config/notebook/settings.json`
/// - Windows: `%APPDATA%/Notebook/settings.json`
pub fn settings_file_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("Notebook").join("settings.json")
    }
    #[cfg(not(target_os = "windows"))]
    {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("notebook").join("settings.json")
    }
}

/// Returns the default notebook directory: `~/Documents/Notebook`.
pub fn default_notebook_directory() -> PathBuf {
    dirs::document_dir()
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Documents")
        })
        .join("Notebook")
}

/// Loads settings from `path`; returns defaults if the file is missing or corrupt.
pub fn load_settings_from(path: &Path) -> AppSettings {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("ignoring unreadable settings at {}: {e}", path.display());
            AppSettings::default()
        }),
        Err(_) => AppSettings::default(),
    }
}

/// Saves settings to `path`, creating parent directories as needed.
pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create settings directory: {e}"))?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| format!("Failed to serialize settings: {e}"))?;
    fs::write(path, json)
        .map_err(|e| format!("Failed to write settings: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_preview_layout() {
        let s = AppSettings::default();
        assert_eq!(s.preview_layout(), PreviewLayout::default());
        assert!(s.notebook_directory.ends_with("Notebook"));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let s = load_settings_from(&dir.path().join("settings.json"));
        assert_eq!(s, AppSettings::default());
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_settings_from(&path), AppSettings::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"previewColumns": 2}"#).unwrap();

        let s = load_settings_from(&path);
        assert_eq!(s.preview_columns, 2);
        assert_eq!(s.excerpt_chars, 30);
    }

    #[test]
    fn save_creates_directories_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = AppSettings {
            notebook_directory: "/tmp/notes".to_string(),
            preview_columns: 4,
            excerpt_chars: 12,
        };

        save_settings_to(&path, &settings).unwrap();
        let json = fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"notebookDirectory\""));
        assert_eq!(load_settings_from(&path), settings);
    }
}
