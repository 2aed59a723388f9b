use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pixelpaint_core::consts::DEFAULT_EXPORT_MAX_DIMENSION;
use pixelpaint_core::io::export::{export_dimensions, save_artwork_png};

use crate::project;

#[derive(Args)]
pub struct ExportArgs {
    /// Project file
    pub project: PathBuf,

    /// Length of the longer image side in pixels
    #[arg(long, default_value_t = DEFAULT_EXPORT_MAX_DIMENSION)]
    pub max_dimension: u32,

    /// Output file path
    #[arg(short, long, default_value = "artwork.png")]
    pub output: PathBuf,
}

pub fn run(args: &ExportArgs) -> Result<()> {
    let art = project::load(&args.project)?;
    save_artwork_png(&art, &args.output, args.max_dimension)
        .with_context(|| format!("Failed to export {}", args.output.display()))?;

    let (w, h) = export_dimensions(art.grid.cols(), art.grid.rows(), args.max_dimension);
    println!("Saved {}x{} preview to {}", w, h, args.output.display());
    Ok(())
}
