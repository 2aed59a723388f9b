use std::fmt;
use std::path::PathBuf;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_GRID_WIDTH;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArtConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of cell columns; rows follow from the image aspect ratio.
    pub width: u32,
    #[serde(default)]
    pub filter: ResizeFilter,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            filter: ResizeFilter::default(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Requested palette size. `None` picks a size from the grid dimensions.
    pub color_count: Option<usize>,
}

/// Interpolation used when shrinking the source image to grid size.
/// Affects resizing only, never quantization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeFilter {
    /// Bilinear filtering.
    #[default]
    Smooth,
    /// Plain pixel sampling, no filtering.
    Nearest,
}

impl ResizeFilter {
    pub fn filter_type(self) -> FilterType {
        match self {
            Self::Smooth => FilterType::Triangle,
            Self::Nearest => FilterType::Nearest,
        }
    }
}

impl fmt::Display for ResizeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Smooth => write!(f, "Smooth"),
            Self::Nearest => write!(f, "Nearest"),
        }
    }
}
