use std::ops::RangeInclusive;

use image::RgbImage;
use rayon::prelude::*;

use crate::color::{to_lab, Lab, Rgb8};
use crate::consts::{
    MAX_RECOMMENDED_COLORS, MIN_RECOMMENDED_COLORS, PARALLEL_PIXEL_THRESHOLD,
    RECOMMENDED_COLOR_FACTOR,
};

/// Convert every pixel to Lab, row-major.
///
/// Parallelizes at the row level for images >= 256x256.
pub(super) fn image_to_lab(img: &RgbImage) -> Vec<Lab> {
    let (w, h) = img.dimensions();
    let convert = |px: &image::Rgb<u8>| to_lab(Rgb8::from(*px));

    if (w as usize) * (h as usize) >= PARALLEL_PIXEL_THRESHOLD {
        let rows: Vec<Vec<Lab>> = (0..h)
            .into_par_iter()
            .map(|row| (0..w).map(|col| convert(img.get_pixel(col, row))).collect())
            .collect();
        rows.concat()
    } else {
        img.pixels().map(convert).collect()
    }
}

/// Grid dimensions `(width, height)` whose longer side is `longest_side`,
/// keeping the source aspect ratio.
pub fn target_dimensions(src_width: u32, src_height: u32, longest_side: u32) -> (u32, u32) {
    if src_width == 0 || src_height == 0 {
        return (longest_side.max(1), longest_side.max(1));
    }
    let aspect = src_width as f32 / src_height as f32;
    let longest = longest_side.max(1);
    if aspect >= 1.0 {
        (longest, ((longest as f32 / aspect).round() as u32).max(1))
    } else {
        (((longest as f32 * aspect).round() as u32).max(1), longest)
    }
}

/// Palette size suggested for a `width x height` grid: grows with the
/// square root of the cell count, clamped to [8, 256].
pub fn recommended_color_count(width: u32, height: u32) -> usize {
    let cells = width as f32 * height as f32;
    let raw = (RECOMMENDED_COLOR_FACTOR * cells.sqrt()).round() as usize;
    raw.clamp(MIN_RECOMMENDED_COLORS, MAX_RECOMMENDED_COLORS)
}

/// Sensible palette-size range around the recommendation (-20%..+20%,
/// snapped outward to multiples of five).
pub fn recommended_color_range(width: u32, height: u32) -> RangeInclusive<usize> {
    let recommended = recommended_color_count(width, height) as f32;
    let low = (recommended * 0.8).round() as usize;
    let high = (recommended * 1.2).round() as usize;
    round_down_to_5(low).max(1)..=round_up_to_5(high)
}

fn round_down_to_5(n: usize) -> usize {
    (n / 5) * 5
}

fn round_up_to_5(n: usize) -> usize {
    n.div_ceil(5) * 5
}
