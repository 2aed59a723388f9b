use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pixelpaint_core::PixelArt;
use tracing::debug;

/// Read a project file written by [`save`].
pub fn load(path: &Path) -> Result<PixelArt> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read project {}", path.display()))?;
    let art: PixelArt = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid project file {}", path.display()))?;
    art.validate()
        .with_context(|| format!("Corrupt project {}", path.display()))?;
    debug!(
        path = %path.display(),
        cols = art.grid.cols(),
        rows = art.grid.rows(),
        colors = art.palette.len(),
        "Project loaded"
    );
    Ok(art)
}

pub fn save(art: &PixelArt, path: &Path) -> Result<()> {
    let json = serde_json::to_string(art).context("Failed to serialize project")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write project {}", path.display()))?;
    debug!(path = %path.display(), "Project saved");
    Ok(())
}
