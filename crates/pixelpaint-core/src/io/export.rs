use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::art::PixelArt;
use crate::error::{PaintError, Result};

/// Output size that fits a `cols x rows` grid into `max_dimension` along its
/// longer side.
pub fn export_dimensions(cols: usize, rows: usize, max_dimension: u32) -> (u32, u32) {
    let aspect = cols as f64 / rows as f64;
    let max = max_dimension as f64;
    let (w, h) = if aspect >= 1.0 {
        (max, max / aspect)
    } else {
        (max * aspect, max)
    };
    ((w as u32).max(1), (h as u32).max(1))
}

/// Render the finished artwork: every cell painted with its palette color,
/// nearest-neighbour scaled so the longer side is `max_dimension` pixels.
pub fn render_artwork(art: &PixelArt, max_dimension: u32) -> Result<RgbImage> {
    if max_dimension < 1 {
        return Err(PaintError::InvalidInput(
            "export size must be at least 1 pixel".into(),
        ));
    }
    art.validate()?;

    let grid = &art.grid;
    let (cols, rows) = (grid.cols(), grid.rows());
    let (out_w, out_h) = export_dimensions(cols, rows, max_dimension);
    let colors = art.palette.as_slice();

    Ok(RgbImage::from_fn(out_w, out_h, |x, y| {
        let col = (x as usize * cols / out_w as usize).min(cols - 1);
        let row = (y as usize * rows / out_h as usize).min(rows - 1);
        let cell = &grid.cells()[[row, col]];
        colors[cell.color_index].into()
    }))
}

/// Render and save the artwork as PNG.
pub fn save_artwork_png(art: &PixelArt, path: &Path, max_dimension: u32) -> Result<()> {
    let img = render_artwork(art, max_dimension)?;
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| PaintError::Encode(e.to_string()))?;
    Ok(())
}
