use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use pixelpaint_core::session::ProgressInfo;

use crate::project;
use crate::summary::print_project_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Project file
    pub project: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let art = project::load(&args.project)?;
    let info = ProgressInfo::from_grid(&art.grid, art.palette.len());
    print_project_summary(&args.project, &art, &info);
    Ok(())
}
