use std::path::PathBuf;

use pixelpaint_core::consts::DEFAULT_GRID_WIDTH;
use pixelpaint_core::pipeline::config::{ArtConfig, GridConfig, PaletteConfig, ResizeFilter};
use pixelpaint_core::pipeline::PipelineStage;

// ---------------------------------------------------------------------------
// ResizeFilter
// ---------------------------------------------------------------------------

#[test]
fn test_resize_filter_display() {
    assert_eq!(format!("{}", ResizeFilter::Smooth), "Smooth");
    assert_eq!(format!("{}", ResizeFilter::Nearest), "Nearest");
}

#[test]
fn test_resize_filter_default_is_smooth() {
    assert_eq!(ResizeFilter::default(), ResizeFilter::Smooth);
}

#[test]
fn test_resize_filter_maps_to_image_filters() {
    use image::imageops::FilterType;
    assert!(matches!(ResizeFilter::Smooth.filter_type(), FilterType::Triangle));
    assert!(matches!(ResizeFilter::Nearest.filter_type(), FilterType::Nearest));
}

// ---------------------------------------------------------------------------
// ArtConfig
// ---------------------------------------------------------------------------

#[test]
fn test_grid_config_default() {
    let grid = GridConfig::default();
    assert_eq!(grid.width, DEFAULT_GRID_WIDTH);
    assert_eq!(grid.filter, ResizeFilter::Smooth);
    assert_eq!(PaletteConfig::default().color_count, None);
}

#[test]
fn test_config_missing_sections_use_defaults() {
    let json = r#"{ "input": "photo.jpg", "output": "photo.json" }"#;
    let config: ArtConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.input, PathBuf::from("photo.jpg"));
    assert_eq!(config.grid.width, DEFAULT_GRID_WIDTH);
    assert_eq!(config.palette.color_count, None);
}

#[test]
fn test_config_serde_roundtrip() {
    let config = ArtConfig {
        input: PathBuf::from("in.png"),
        output: PathBuf::from("out.json"),
        grid: GridConfig {
            width: 120,
            filter: ResizeFilter::Nearest,
        },
        palette: PaletteConfig {
            color_count: Some(48),
        },
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: ArtConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.grid.width, 120);
    assert_eq!(back.grid.filter, ResizeFilter::Nearest);
    assert_eq!(back.palette.color_count, Some(48));
}

// ---------------------------------------------------------------------------
// PipelineStage Display
// ---------------------------------------------------------------------------

#[test]
fn test_pipeline_stage_display() {
    assert_eq!(PipelineStage::Decoding.to_string(), "Decoding image");
    assert_eq!(PipelineStage::Quantizing.to_string(), "Building palette");
    assert_eq!(PipelineStage::Indexing.to_string(), "Indexing pixels");
}
