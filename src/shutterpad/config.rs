use crate::error::{GalleryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_QUALITY: u8 = 100;

/// Configuration for shutterpad, stored in `<data-dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryConfig {
    /// External capture program; receives the output path as its first
    /// argument and the requested quality as its second
    #[serde(default)]
    pub capture_command: Option<String>,

    /// JPEG quality requested from the camera (0-100)
    #[serde(default = "default_quality")]
    pub quality: u8,
}

fn default_quality() -> u8 {
    DEFAULT_QUALITY
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            capture_command: None,
            quality: DEFAULT_QUALITY,
        }
    }
}

impl GalleryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(GalleryError::Io)?;
        let config: GalleryConfig =
            serde_json::from_str(&content).map_err(GalleryError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(GalleryError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(GalleryError::Serialization)?;
        fs::write(config_path, content).map_err(GalleryError::Io)?;
        Ok(())
    }

    /// Set the capture quality, clamped to 100
    pub fn set_quality(&mut self, quality: u8) {
        self.quality = quality.min(100);
    }
}
