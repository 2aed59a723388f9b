use std::collections::HashSet;

use crate::art::CellPos;

use super::state::{ColoringSession, TapOutcome};

/// One continuous coloring drag.
///
/// A stroke only starts on an uncolored cell of the selected color. Every
/// cell it passes over afterwards is tapped at most once.
#[derive(Debug, Default)]
pub struct Stroke {
    visited: HashSet<CellPos>,
}

impl Stroke {
    /// Start a stroke at `pos`, coloring it. Returns `None` (and taps
    /// nothing) when the cell cannot be colored with the current selection,
    /// in which case the drag should pan the view instead.
    pub fn begin(session: &mut ColoringSession, pos: CellPos) -> Option<(Self, TapOutcome)> {
        let selected = session.selected_color()?;
        let cell = session.state().grid.get(pos)?;
        if cell.is_colored || cell.color_index != selected {
            return None;
        }

        let outcome = session.apply_tap(pos);
        let mut visited = HashSet::new();
        visited.insert(pos);
        Some((Self { visited }, outcome))
    }

    /// Continue the stroke over `pos`. Cells already visited by this stroke
    /// are skipped and yield `None`.
    pub fn extend(&mut self, session: &mut ColoringSession, pos: CellPos) -> Option<TapOutcome> {
        if !self.visited.insert(pos) {
            return None;
        }
        Some(session.apply_tap(pos))
    }

    pub fn visited(&self) -> usize {
        self.visited.len()
    }
}
