use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::art::{CellPos, Grid, Palette, PixelArt};
use crate::error::Result;
use crate::viewport::{locate, TransformState, Vec2, ViewportGeometry};

use super::progress::{ProgressInfo, ProgressState};

/// Where a session stands with respect to accepting taps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// A color is selected and taps may color cells.
    Active,
    /// No color selected; taps do nothing.
    NoSelection,
    /// Every cell is colored.
    Complete,
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::NoSelection => write!(f, "No Selection"),
            Self::Complete => write!(f, "Complete"),
        }
    }
}

/// What a single tap did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// No color was selected.
    NoSelection,
    /// The cell was colored before; nothing changed.
    AlreadyColored,
    /// The cell needs a different color; the attempt was recorded.
    WrongColor { expected: usize, attempted: usize },
    /// The cell was colored.
    Colored {
        color_index: usize,
        /// This tap colored the last cell of its color.
        color_completed: bool,
        /// This tap colored the last cell of the artwork.
        artwork_completed: bool,
    },
}

impl TapOutcome {
    pub fn changed_grid(&self) -> bool {
        matches!(self, Self::Colored { .. })
    }
}

/// Immutable snapshot of a coloring session.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub grid: Grid,
    pub palette: Palette,
    pub selected_color: Option<usize>,
    pub progress_info: ProgressInfo,
    pub progress: ProgressState,
    /// Cells tapped with the wrong color, mapped to the color attempted.
    pub wrong_taps: BTreeMap<CellPos, usize>,
}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        if self.progress_info.is_complete() {
            SessionPhase::Complete
        } else if self.selected_color.is_some() {
            SessionPhase::Active
        } else {
            SessionPhase::NoSelection
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress_info.is_complete()
    }
}

/// Live coloring state for one artwork.
///
/// Single writer: taps are applied one at a time through `&mut self`. Each
/// mutating tap installs a fresh [`SessionState`]; snapshots handed out
/// earlier by [`snapshot`](Self::snapshot) are never modified.
#[derive(Clone, Debug)]
pub struct ColoringSession {
    state: Arc<SessionState>,
}

impl ColoringSession {
    /// Start or resume a session. Cells already colored in `art` are
    /// counted as progress. No color is selected initially.
    pub fn new(art: PixelArt) -> Result<Self> {
        art.validate()?;
        let progress_info = ProgressInfo::from_grid(&art.grid, art.palette.len());
        let progress = progress_info.progress();
        debug!(
            cols = art.grid.cols(),
            rows = art.grid.rows(),
            colored = progress_info.total_colored,
            total = progress_info.total_pixels,
            "Coloring session started"
        );
        Ok(Self {
            state: Arc::new(SessionState {
                grid: art.grid,
                palette: art.palette,
                selected_color: None,
                progress_info,
                progress,
                wrong_taps: BTreeMap::new(),
            }),
        })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Shared handle to the current state, unaffected by later taps.
    pub fn snapshot(&self) -> Arc<SessionState> {
        Arc::clone(&self.state)
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    pub fn selected_color(&self) -> Option<usize> {
        self.state.selected_color
    }

    pub fn progress(&self) -> &ProgressState {
        &self.state.progress
    }

    /// Select a palette color, or clear the selection with `None`.
    ///
    /// Panics if the index is not in the palette.
    pub fn select_color(&mut self, color: Option<usize>) {
        if let Some(index) = color {
            assert!(
                index < self.state.palette.len(),
                "color {index} outside palette of {}",
                self.state.palette.len()
            );
        }
        if self.state.selected_color != color {
            Arc::make_mut(&mut self.state).selected_color = color;
        }
    }

    /// Apply a tap on a resolved cell.
    ///
    /// Panics if `pos` is outside the grid: callers must go through hit
    /// testing, which never yields such a cell.
    pub fn apply_tap(&mut self, pos: CellPos) -> TapOutcome {
        assert!(
            self.state.grid.contains(pos),
            "tap at ({}, {}) outside {}x{} grid",
            pos.row,
            pos.col,
            self.state.grid.cols(),
            self.state.grid.rows()
        );

        let Some(selected) = self.state.selected_color else {
            return TapOutcome::NoSelection;
        };
        let cell = *self.state.grid.cell(pos);
        if cell.is_colored {
            return TapOutcome::AlreadyColored;
        }
        if cell.color_index != selected {
            let state = Arc::make_mut(&mut self.state);
            state.wrong_taps.insert(pos, selected);
            return TapOutcome::WrongColor {
                expected: cell.color_index,
                attempted: selected,
            };
        }

        let state = Arc::make_mut(&mut self.state);
        state.grid.mark_colored(pos);
        state.progress_info = state.progress_info.apply_coloring(selected);
        state.progress = state.progress_info.progress();
        state.wrong_taps.remove(&pos);

        let color_completed = state.progress_info.is_color_done(selected);
        if color_completed {
            state.selected_color = None;
            debug!(color = selected, "Color completed");
        }
        let artwork_completed = state.progress_info.is_complete();
        if artwork_completed {
            info!(cells = state.progress_info.total_pixels, "Artwork completed");
        }

        TapOutcome::Colored {
            color_index: selected,
            color_completed,
            artwork_completed,
        }
    }

    /// Hit-test a screen point and apply the tap to the resolved cell.
    /// Returns `None` for taps outside the grid.
    pub fn tap_at_screen(
        &mut self,
        screen: Vec2,
        transform: &TransformState,
        geometry: &ViewportGeometry,
    ) -> Option<(CellPos, TapOutcome)> {
        let pos = locate(
            screen,
            transform,
            geometry,
            &self.state.grid,
            self.state.selected_color,
        )?;
        Some((pos, self.apply_tap(pos)))
    }

    /// The artwork in its current coloring state, ready to be persisted.
    pub fn to_art(&self) -> PixelArt {
        PixelArt {
            grid: self.state.grid.clone(),
            palette: self.state.palette.clone(),
        }
    }
}
