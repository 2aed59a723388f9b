pub mod config;
mod helpers;
mod orchestrator;
mod types;

pub use helpers::{recommended_color_count, recommended_color_range, target_dimensions};
pub use orchestrator::{
    generate, generate_reported, resolve_color_count, run_pipeline, run_pipeline_reported,
};
pub use types::{PipelineStage, ProgressReporter};
