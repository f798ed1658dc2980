//! Job configuration: what to bake, at which size, and where to write it.

use std::path::{Path, PathBuf};

use fontatlas_core::Color;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default font size in points.
pub const FONT_SIZE: u32 = 16;

/// Rasterization resolution. Pixel size is `points * dpi / 72`.
pub const DPI: u32 = 96;

/// One font-to-atlas conversion.
///
/// Built from the positional command line or read from a TOML file. Fields
/// missing from the file take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    /// Font size in points.
    pub font_size: u32,
    /// Atlas width in pixels. The height is derived from the packed glyphs.
    pub bitmap_width: u32,
    pub font_path: PathBuf,
    pub bitmap_path: PathBuf,
    pub metadata_path: PathBuf,
    /// Face within a `.ttc` collection (0 for single-font files).
    pub face_index: u32,
    pub dpi: u32,
    /// Text color. Kept last: TOML tables must follow plain values.
    pub color: Color,
}

impl Default for Job {
    fn default() -> Self {
        Self {
            font_size: FONT_SIZE,
            bitmap_width: 512,
            font_path: PathBuf::from("font.ttf"),
            bitmap_path: PathBuf::from("atlas.png"),
            metadata_path: PathBuf::from("atlas.json"),
            face_index: 0,
            dpi: DPI,
            color: Color::new(255, 255, 255, 255),
        }
    }
}

impl Job {
    /// Read a job from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let job = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("config: loaded job from {}", path.display());
        Ok(job)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Reject jobs that cannot produce an atlas.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.font_size == 0 {
            return Err(ConfigError::Invalid("font size must be greater than zero"));
        }
        if self.bitmap_width == 0 {
            return Err(ConfigError::Invalid("bitmap width must be greater than zero"));
        }
        if self.dpi == 0 {
            return Err(ConfigError::Invalid("dpi must be greater than zero"));
        }
        Ok(())
    }

    /// Pixels per em at the configured size and resolution.
    pub fn pixel_size(&self) -> f32 {
        self.font_size as f32 * self.dpi as f32 / 72.0
    }
}

#[cfg(test)]
mod tests;
