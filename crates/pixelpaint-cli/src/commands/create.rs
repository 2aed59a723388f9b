use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use pixelpaint_core::pipeline::config::{ArtConfig, GridConfig, PaletteConfig, ResizeFilter};
use pixelpaint_core::pipeline::{run_pipeline_reported, PipelineStage, ProgressReporter};

use crate::project;
use crate::summary::print_create_summary;

#[derive(Args)]
pub struct CreateArgs {
    /// Source image (PNG, JPEG, ...)
    pub file: PathBuf,

    /// Grid width in cells; rows follow the image aspect ratio
    #[arg(long)]
    pub width: Option<u32>,

    /// Number of palette colors (default: recommended from the grid size)
    #[arg(long)]
    pub colors: Option<usize>,

    /// Sample pixels directly instead of smoothing when shrinking
    #[arg(long)]
    pub no_filter: bool,

    /// Generation config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Project file to write
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Drives an indicatif bar from pipeline stage events.
struct BarReporter {
    bar: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: PipelineStage, total_items: Option<usize>) {
        self.bar.set_message(stage.to_string());
        self.bar.set_length(total_items.unwrap_or(1) as u64);
        self.bar.set_position(0);
    }

    fn advance(&self, items_done: usize) {
        self.bar.inc(items_done as u64);
    }

    fn finish_stage(&self) {
        if let Some(len) = self.bar.length() {
            self.bar.set_position(len);
        }
    }
}

pub fn run(args: &CreateArgs) -> Result<()> {
    let mut config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid art config")?
    } else {
        ArtConfig {
            input: args.file.clone(),
            output: PathBuf::from("project.json"),
            grid: GridConfig::default(),
            palette: PaletteConfig::default(),
        }
    };
    apply_overrides(&mut config, args);

    let pb = ProgressBar::new(1);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:20} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let reporter: Arc<dyn ProgressReporter> = Arc::new(BarReporter { bar: pb.clone() });
    let art = run_pipeline_reported(&config, reporter)
        .with_context(|| format!("Failed to create artwork from {}", config.input.display()))?;
    pb.finish_with_message("Done");

    project::save(&art, &config.output)?;
    print_create_summary(&config, &art);

    Ok(())
}

/// Command-line flags win over the config file.
fn apply_overrides(config: &mut ArtConfig, args: &CreateArgs) {
    config.input = args.file.clone();
    if let Some(ref output) = args.output {
        config.output = output.clone();
    }
    if let Some(width) = args.width {
        config.grid.width = width;
    }
    if args.no_filter {
        config.grid.filter = ResizeFilter::Nearest;
    }
    if args.colors.is_some() {
        config.palette.color_count = args.colors;
    }
}
