use crate::error::{Result, ViewerError};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MIN_ZOOM: f32 = 0.7;
pub const DEFAULT_MAX_ZOOM: f32 = 7.0;
pub const DEFAULT_TARGET_HEIGHT: f32 = 400.0;

/// Tunables for the viewer. Every field has a default, so a config file only
/// needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Zoom multiplier for a positive scroll delta (wheel toward the user).
    pub positive_scroll_factor: f32,
    /// Zoom multiplier for a negative scroll delta.
    pub negative_scroll_factor: f32,
    /// Height of the surface the viewer opens with; width follows the image aspect.
    pub target_height: f32,
    pub window_position: [f32; 2],
    /// Sample the texture with nearest-neighbour filtering.
    pub pixelated: bool,
    pub background: [f64; 4],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            positive_scroll_factor: 0.9,
            negative_scroll_factor: 1.1,
            target_height: DEFAULT_TARGET_HEIGHT,
            window_position: [100.0, 100.0],
            pixelated: false,
            background: [0.16, 0.16, 0.16, 1.0],
        }
    }
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ViewerError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ViewerConfig =
            serde_json::from_str(&text).map_err(|source| ViewerError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        log::info!("Loaded viewer config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let positive = |v: f32| v.is_finite() && v > 0.0;

        if !positive(self.min_zoom) || !positive(self.max_zoom) {
            return Err(ViewerError::InvalidConfig(format!(
                "zoom bounds must be positive, got [{}, {}]",
                self.min_zoom, self.max_zoom
            )));
        }
        if self.min_zoom > self.max_zoom {
            return Err(ViewerError::InvalidConfig(format!(
                "min_zoom {} exceeds max_zoom {}",
                self.min_zoom, self.max_zoom
            )));
        }
        if !positive(self.positive_scroll_factor) || !positive(self.negative_scroll_factor) {
            return Err(ViewerError::InvalidConfig(
                "scroll factors must be positive".to_string(),
            ));
        }
        if !positive(self.target_height) {
            return Err(ViewerError::InvalidConfig(format!(
                "target_height must be positive, got {}",
                self.target_height
            )));
        }
        Ok(())
    }
}
