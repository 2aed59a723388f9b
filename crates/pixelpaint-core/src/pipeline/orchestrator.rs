use std::sync::Arc;

use image::DynamicImage;
use tracing::info;

use crate::art::{Palette, PixelArt};
use crate::color::{to_rgb, Rgb8};
use crate::error::{PaintError, Result};
use crate::io::image_io::{load_image, resize_to_grid, scaled_height};
use crate::quantize::{index_pixels, median_cut};

use super::config::{ArtConfig, ResizeFilter};
use super::helpers::{image_to_lab, recommended_color_count};
use super::types::{NoOpReporter, PipelineStage, ProgressReporter};

fn validate_request(target_width: u32, color_count: usize) -> Result<()> {
    if target_width < 1 {
        return Err(PaintError::InvalidInput(
            "target width must be at least 1".into(),
        ));
    }
    if color_count < 1 {
        return Err(PaintError::InvalidInput(
            "color count must be at least 1".into(),
        ));
    }
    Ok(())
}

/// Turn a decoded image into a paint-by-number grid and palette.
///
/// The palette may hold fewer than `color_count` entries when the resized
/// image has fewer distinct colors.
pub fn generate(
    source: &DynamicImage,
    target_width: u32,
    color_count: usize,
    filter: ResizeFilter,
) -> Result<PixelArt> {
    generate_reported(source, target_width, color_count, filter, &NoOpReporter)
}

/// [`generate`] with stage-by-stage progress reporting.
pub fn generate_reported(
    source: &DynamicImage,
    target_width: u32,
    color_count: usize,
    filter: ResizeFilter,
    reporter: &dyn ProgressReporter,
) -> Result<PixelArt> {
    validate_request(target_width, color_count)?;
    if source.width() == 0 || source.height() == 0 {
        return Err(PaintError::EmptyImage);
    }

    reporter.begin_stage(PipelineStage::Resizing, None);
    let resized = resize_to_grid(source, target_width, filter)?;
    let (width, height) = (resized.width() as usize, resized.height() as usize);
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Converting, Some(width * height));
    let points = image_to_lab(&resized);
    drop(resized);
    reporter.advance(points.len());
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Quantizing, None);
    let lab_palette = median_cut(&points, color_count)?;
    reporter.finish_stage();
    info!(
        requested = color_count,
        colors = lab_palette.len(),
        "Palette built"
    );

    reporter.begin_stage(PipelineStage::Indexing, Some(width * height));
    let grid = index_pixels(&points, width, height, &lab_palette)?;
    reporter.advance(width * height);
    reporter.finish_stage();

    let palette: Vec<Rgb8> = lab_palette.into_iter().map(to_rgb).collect();
    PixelArt::new(grid, Palette::new(palette))
}

/// Palette size to request: the configured one, or a recommendation from
/// the grid size.
pub fn resolve_color_count(config: &ArtConfig, grid_width: u32, grid_height: u32) -> usize {
    config
        .palette
        .color_count
        .unwrap_or_else(|| recommended_color_count(grid_width, grid_height))
}

/// Run the full pipeline on `config.input` with a thread-safe progress
/// reporter.
pub fn run_pipeline_reported(
    config: &ArtConfig,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<PixelArt> {
    validate_request(config.grid.width, config.palette.color_count.unwrap_or(1))?;

    reporter.begin_stage(PipelineStage::Decoding, None);
    let source = load_image(&config.input)?;
    reporter.finish_stage();
    info!(
        input = %config.input.display(),
        width = source.width(),
        height = source.height(),
        "Source image loaded"
    );

    let grid_height = scaled_height(source.width(), source.height(), config.grid.width)?;
    let color_count = resolve_color_count(config, config.grid.width, grid_height);

    let art = generate_reported(
        &source,
        config.grid.width,
        color_count,
        config.grid.filter,
        reporter.as_ref(),
    )?;
    info!(
        cols = art.grid.cols(),
        rows = art.grid.rows(),
        colors = art.palette.len(),
        "Artwork generated"
    );
    Ok(art)
}

/// Run the full pipeline on `config.input`.
pub fn run_pipeline(config: &ArtConfig) -> Result<PixelArt> {
    run_pipeline_reported(config, Arc::new(NoOpReporter))
}
