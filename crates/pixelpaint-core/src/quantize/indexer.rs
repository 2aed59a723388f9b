use rayon::prelude::*;

use crate::art::Grid;
use crate::color::Lab;
use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::{PaintError, Result};

/// Index of the palette entry closest to `point`, lowest index on ties.
///
/// `palette` must not be empty.
pub fn nearest_index(point: &Lab, palette: &[Lab]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, entry) in palette.iter().enumerate() {
        let dist = point.distance_squared(entry);
        if dist < best_dist {
            best = i;
            best_dist = dist;
        }
    }
    best
}

/// Map every pixel (row-major Lab points of a `width x height` image) to its
/// nearest palette entry and build an uncolored grid.
///
/// Parallelizes at the row level for images >= 256x256.
pub fn index_pixels(points: &[Lab], width: usize, height: usize, palette: &[Lab]) -> Result<Grid> {
    if palette.is_empty() {
        return Err(PaintError::InvalidInput("palette is empty".into()));
    }
    if width == 0 || height == 0 || points.len() != width * height {
        return Err(PaintError::InvalidDimensions {
            width: width as u32,
            height: height as u32,
        });
    }

    let indices: Vec<usize> = if width * height >= PARALLEL_PIXEL_THRESHOLD {
        let rows: Vec<Vec<usize>> = points
            .par_chunks(width)
            .map(|row| row.iter().map(|p| nearest_index(p, palette)).collect())
            .collect();
        rows.concat()
    } else {
        points.iter().map(|p| nearest_index(p, palette)).collect()
    };

    Grid::from_indices(height, width, indices)
}
