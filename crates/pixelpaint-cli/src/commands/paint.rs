use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use pixelpaint_core::session::{ColoringSession, TapOutcome};
use pixelpaint_core::CellPos;

use crate::project;
use crate::summary::{print_paint_summary, TapTally};

#[derive(Args)]
pub struct PaintArgs {
    /// Project file (updated in place)
    pub project: PathBuf,

    /// Palette color to paint with
    #[arg(long)]
    pub color: usize,

    /// Cell to tap as `row,col`; repeat for several cells
    #[arg(long = "cell", value_parser = parse_cell)]
    pub cells: Vec<CellPos>,

    /// Paint every remaining cell of the color
    #[arg(long)]
    pub all: bool,
}

fn parse_cell(s: &str) -> std::result::Result<CellPos, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got `{s}`"))?;
    let row = row.trim().parse().map_err(|e| format!("bad row `{row}`: {e}"))?;
    let col = col.trim().parse().map_err(|e| format!("bad column `{col}`: {e}"))?;
    Ok(CellPos::new(row, col))
}

pub fn run(args: &PaintArgs) -> Result<()> {
    let art = project::load(&args.project)?;
    if args.color >= art.palette.len() {
        bail!(
            "Color {} does not exist (palette has {} colors)",
            args.color,
            art.palette.len()
        );
    }

    let targets: Vec<CellPos> = if args.all {
        art.grid
            .indexed_iter()
            .filter(|(_, cell)| cell.color_index == args.color && !cell.is_colored)
            .map(|(pos, _)| pos)
            .collect()
    } else {
        args.cells.clone()
    };
    if targets.is_empty() {
        bail!("Nothing to paint: pass --cell or --all");
    }
    if let Some(pos) = targets.iter().find(|pos| !art.grid.contains(**pos)) {
        bail!(
            "Cell {},{} is outside the {}x{} grid",
            pos.row,
            pos.col,
            art.grid.cols(),
            art.grid.rows()
        );
    }

    let mut session = ColoringSession::new(art)?;
    session.select_color(Some(args.color));

    let mut tally = TapTally::default();
    for pos in targets {
        match session.apply_tap(pos) {
            TapOutcome::Colored {
                color_completed,
                artwork_completed,
                ..
            } => {
                tally.colored += 1;
                tally.color_completed |= color_completed;
                tally.artwork_completed |= artwork_completed;
            }
            TapOutcome::AlreadyColored => tally.already_colored += 1,
            TapOutcome::WrongColor { .. } => tally.wrong += 1,
            TapOutcome::NoSelection => tally.skipped += 1,
        }
    }

    project::save(&session.to_art(), &args.project)?;
    print_paint_summary(args.color, &tally, &session.state().progress_info);

    Ok(())
}
