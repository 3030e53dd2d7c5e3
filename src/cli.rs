use std::path::PathBuf;

use clap::Parser;

use crate::config::ViewerConfig;
use crate::error::Result;

/// Open an image in a window with wheel zoom and drag panning.
///
/// Scroll toward you to shrink the image and away to enlarge it; the pixel
/// under the cursor stays in place. Drag with the left button to pan.
#[derive(Parser, Debug)]
#[command(name = "texview", version, about = "Texture viewer with cursor-anchored zoom")]
pub struct CliArgs {
    /// Image to display (PNG or JPEG).
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// JSON file with viewer settings. Flags below override it.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Lower zoom bound.
    #[arg(long, value_name = "Z")]
    pub min_zoom: Option<f32>,

    /// Upper zoom bound.
    #[arg(long, value_name = "Z")]
    pub max_zoom: Option<f32>,

    /// Use nearest-neighbour sampling when magnifying.
    #[arg(long)]
    pub pixelated: bool,
}

impl CliArgs {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn resolve_config(&self) -> Result<ViewerConfig> {
        let mut config = match &self.config {
            Some(path) => ViewerConfig::load(path)?,
            None => ViewerConfig::default(),
        };

        if let Some(z) = self.min_zoom {
            config.min_zoom = z;
        }
        if let Some(z) = self.max_zoom {
            config.max_zoom = z;
        }
        if self.pixelated {
            config.pixelated = true;
        }

        config.validate()?;
        Ok(config)
    }
}
