#![allow(dead_code)]

use image::{DynamicImage, Rgb, RgbImage};

use pixelpaint_core::art::{Cell, Grid, Palette, PixelArt};
use pixelpaint_core::color::Rgb8;

pub const RED: Rgb8 = Rgb8::new(255, 0, 0);
pub const GREEN: Rgb8 = Rgb8::new(0, 255, 0);
pub const BLUE: Rgb8 = Rgb8::new(0, 0, 255);
pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);

/// A `width x height` image filled with one color.
pub fn solid_image(width: u32, height: u32, color: Rgb8) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(color.to_array())))
}

/// Left half `left`, right half `right`.
pub fn split_image(width: u32, height: u32, left: Rgb8, right: Rgb8) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgb(left.to_array())
        } else {
            Rgb(right.to_array())
        }
    }))
}

/// Uncolored grid from rows of palette indices.
pub fn grid_from_indices(rows: &[&[usize]]) -> Grid {
    Grid::from_rows(
        rows.iter()
            .map(|r| r.iter().map(|&i| Cell::new(i)).collect())
            .collect(),
    )
    .expect("valid grid")
}

/// Palette of `n` distinct grays.
pub fn gray_palette(n: usize) -> Palette {
    Palette::new(
        (0..n)
            .map(|i| {
                let v = (i * 255 / n.max(1)) as u8;
                Rgb8::new(v, v, v)
            })
            .collect(),
    )
}

pub fn art_from_indices(rows: &[&[usize]], palette_size: usize) -> PixelArt {
    PixelArt::new(grid_from_indices(rows), gray_palette(palette_size)).expect("valid art")
}

/// 4x4 grid: top two rows color 0, bottom two rows color 1.
pub fn two_band_art() -> PixelArt {
    art_from_indices(
        &[&[0, 0, 0, 0], &[0, 0, 0, 0], &[1, 1, 1, 1], &[1, 1, 1, 1]],
        2,
    )
}
