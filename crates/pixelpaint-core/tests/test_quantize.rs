mod common;

use std::collections::HashSet;

use proptest::prelude::*;

use pixelpaint_core::color::{to_lab, to_rgb, Lab, Rgb8};
use pixelpaint_core::error::PaintError;
use pixelpaint_core::quantize::{index_pixels, median_cut, nearest_index};

use common::{BLACK, BLUE, GREEN, RED, WHITE};

fn labs(colors: &[Rgb8]) -> Vec<Lab> {
    colors.iter().map(|&c| to_lab(c)).collect()
}

fn distinct_count(points: &[Lab]) -> usize {
    points
        .iter()
        .map(|p| (p.l.to_bits(), p.a.to_bits(), p.b.to_bits()))
        .collect::<HashSet<_>>()
        .len()
}

// ---------------------------------------------------------------------------
// Median cut
// ---------------------------------------------------------------------------

#[test]
fn test_single_color_gives_single_entry() {
    let points = labs(&[RED; 100]);
    let palette = median_cut(&points, 5).unwrap();
    assert_eq!(palette.len(), 1);
    assert_eq!(to_rgb(palette[0]), RED);
}

#[test]
fn test_black_and_white_split_along_lightness() {
    let points = labs(&[BLACK, WHITE, BLACK, WHITE]);
    let palette = median_cut(&points, 2).unwrap();
    assert_eq!(palette.len(), 2);
    assert_eq!(to_rgb(palette[0]), BLACK);
    assert_eq!(to_rgb(palette[1]), WHITE);
}

#[test]
fn test_k_one_averages_everything() {
    let points = labs(&[BLACK, WHITE]);
    let palette = median_cut(&points, 1).unwrap();
    assert_eq!(palette.len(), 1);
    assert!((palette[0].l - 50.0).abs() < 1e-3);
}

#[test]
fn test_fewer_distinct_colors_than_requested() {
    let points = labs(&[RED, GREEN, BLUE, RED, GREEN, BLUE]);
    let palette = median_cut(&points, 16).unwrap();
    assert!(palette.len() <= 16);
    let rgb: HashSet<Rgb8> = palette.iter().map(|&p| to_rgb(p)).collect();
    assert_eq!(rgb, HashSet::from([RED, GREEN, BLUE]));
}

#[test]
fn test_empty_input_rejected() {
    assert!(matches!(median_cut(&[], 4), Err(PaintError::EmptyImage)));
}

#[test]
fn test_zero_palette_size_rejected() {
    let points = labs(&[RED]);
    assert!(matches!(
        median_cut(&points, 0),
        Err(PaintError::InvalidInput(_))
    ));
}

// ---------------------------------------------------------------------------
// Indexing
// ---------------------------------------------------------------------------

#[test]
fn test_nearest_index_prefers_lowest_on_tie() {
    let entry = to_lab(RED);
    let palette = vec![entry, entry, to_lab(BLUE)];
    assert_eq!(nearest_index(&entry, &palette), 0);
}

#[test]
fn test_nearest_index_picks_closest() {
    let palette = labs(&[BLACK, WHITE]);
    assert_eq!(nearest_index(&to_lab(Rgb8::new(30, 30, 30)), &palette), 0);
    assert_eq!(nearest_index(&to_lab(Rgb8::new(220, 220, 220)), &palette), 1);
}

#[test]
fn test_index_pixels_shape_and_values() {
    let points = labs(&[BLACK, WHITE, WHITE, BLACK, BLACK, WHITE]);
    let palette = labs(&[BLACK, WHITE]);
    let grid = index_pixels(&points, 3, 2, &palette).unwrap();
    assert_eq!(grid.cols(), 3);
    assert_eq!(grid.rows(), 2);
    let indices: Vec<usize> = grid.iter().map(|c| c.color_index).collect();
    assert_eq!(indices, vec![0, 1, 1, 0, 0, 1]);
    assert!(grid.iter().all(|c| !c.is_colored));
}

#[test]
fn test_index_pixels_rejects_mismatched_dimensions() {
    let points = labs(&[BLACK, WHITE, WHITE]);
    let palette = labs(&[BLACK]);
    assert!(index_pixels(&points, 2, 2, &palette).is_err());
    assert!(index_pixels(&points, 3, 1, &[]).is_err());
}

#[test]
fn test_index_pixels_large_image_matches_sequential() {
    // 256x256 crosses the row-parallel threshold.
    let (w, h) = (256usize, 256usize);
    let points: Vec<Lab> = (0..w * h)
        .map(|i| {
            let v = (i % 256) as u8;
            to_lab(Rgb8::new(v, 255 - v, (i / 256) as u8))
        })
        .collect();
    let palette = median_cut(&points, 12).unwrap();
    let grid = index_pixels(&points, w, h, &palette).unwrap();
    for (i, cell) in grid.iter().enumerate() {
        assert_eq!(cell.color_index, nearest_index(&points[i], &palette));
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn rgb_strategy() -> impl Strategy<Value = Rgb8> {
    (0u8..=255, 0u8..=255, 0u8..=255).prop_map(|(r, g, b)| Rgb8::new(r, g, b))
}

fn small_palette_strategy() -> impl Strategy<Value = Rgb8> {
    prop::sample::select(vec![RED, GREEN, BLUE, BLACK, WHITE, Rgb8::new(128, 64, 32)])
}

proptest! {
    #[test]
    fn median_cut_is_deterministic(
        colors in prop::collection::vec(rgb_strategy(), 1..200),
        k in 1usize..16,
    ) {
        let points = labs(&colors);
        let first = median_cut(&points, k).unwrap();
        let second = median_cut(&points, k).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn palette_size_bounded_by_request(
        colors in prop::collection::vec(small_palette_strategy(), 1..120),
        k in 1usize..10,
    ) {
        let points = labs(&colors);
        let palette = median_cut(&points, k).unwrap();
        prop_assert!(palette.len() <= k);
        if distinct_count(&points) >= k {
            prop_assert_eq!(palette.len(), k);
        }
    }

    #[test]
    fn every_index_is_in_palette(
        colors in prop::collection::vec(rgb_strategy(), 1..100),
        k in 1usize..12,
    ) {
        let points = labs(&colors);
        let palette = median_cut(&points, k).unwrap();
        let grid = index_pixels(&points, points.len(), 1, &palette).unwrap();
        prop_assert!(grid.iter().all(|c| c.color_index < palette.len()));
    }
}
