use crate::errors::{HistogramError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "render_settings.json";

/// How each bucket is drawn in a rendered histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RenderMode {
    /// One `scale x scale` block at the top of the bar
    #[default]
    Marker,
    /// The marker block plus everything below it down to the baseline
    Bars,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Each logical histogram cell becomes a `scale x scale` pixel block.
    pub scale: u32,
    /// ARGB fill for pixels no channel drew on.
    pub background: u32,
    pub mode: RenderMode,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            scale: 2,
            background: 0xFF80_8080,
            mode: RenderMode::Marker,
        }
    }
}

impl RenderSettings {
    pub fn with_scale(scale: u32) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Settings file in the platform config directory, when one exists.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "histogrammer", "Histogrammer")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Load from [`RenderSettings::default_path`], falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring unreadable settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::default_path().ok_or_else(|| HistogramError::SettingsError {
            message: "no config directory available on this platform".to_string(),
        })?;
        self.save_to(&path)
    }
}
