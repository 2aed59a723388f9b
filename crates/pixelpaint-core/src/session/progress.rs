use crate::art::Grid;

/// Cell counters per palette color and overall.
///
/// Invariants: `per_color_colored[i] <= per_color_total[i]` and
/// `total_colored` is the sum of `per_color_colored`. Values are never
/// mutated in place; every update returns a new snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressInfo {
    pub total_pixels: usize,
    pub per_color_total: Vec<usize>,
    pub per_color_colored: Vec<usize>,
    pub total_colored: usize,
}

impl ProgressInfo {
    /// Full scan of `grid`. Cells already marked colored are counted, so a
    /// resumed session gets the same counters as one colored tap by tap.
    ///
    /// Panics if a cell references a color index `>= palette_size`.
    pub fn from_grid(grid: &Grid, palette_size: usize) -> Self {
        let mut per_color_total = vec![0; palette_size];
        let mut per_color_colored = vec![0; palette_size];
        let mut total_colored = 0;

        for cell in grid.iter() {
            assert!(
                cell.color_index < palette_size,
                "cell color {} outside palette of {palette_size}",
                cell.color_index
            );
            per_color_total[cell.color_index] += 1;
            if cell.is_colored {
                per_color_colored[cell.color_index] += 1;
                total_colored += 1;
            }
        }

        Self {
            total_pixels: grid.len(),
            per_color_total,
            per_color_colored,
            total_colored,
        }
    }

    /// Counters after one more cell of `color_index` has been colored.
    ///
    /// Panics if that color has no uncolored cell left to account for.
    pub fn apply_coloring(&self, color_index: usize) -> Self {
        assert!(
            self.per_color_colored[color_index] < self.per_color_total[color_index],
            "color {color_index} is already fully colored"
        );
        let mut next = self.clone();
        next.per_color_colored[color_index] += 1;
        next.total_colored += 1;
        next
    }

    pub fn palette_size(&self) -> usize {
        self.per_color_total.len()
    }

    /// A color is done when all its cells are colored. Colors with no cells
    /// at all count as done.
    pub fn is_color_done(&self, color_index: usize) -> bool {
        self.per_color_colored[color_index] == self.per_color_total[color_index]
    }

    pub fn is_complete(&self) -> bool {
        self.total_colored == self.total_pixels
    }

    pub fn remaining(&self, color_index: usize) -> usize {
        self.per_color_total[color_index] - self.per_color_colored[color_index]
    }

    pub fn progress(&self) -> ProgressState {
        ProgressState::from(self)
    }
}

/// Normalized view of [`ProgressInfo`], every value in [0, 1].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgressState {
    pub global_progress: f32,
    pub per_color_progress: Vec<f32>,
}

fn fraction(done: usize, total: usize) -> f32 {
    if total == 0 {
        1.0
    } else {
        done as f32 / total as f32
    }
}

impl From<&ProgressInfo> for ProgressState {
    fn from(info: &ProgressInfo) -> Self {
        Self {
            global_progress: fraction(info.total_colored, info.total_pixels),
            per_color_progress: info
                .per_color_colored
                .iter()
                .zip(&info.per_color_total)
                .map(|(&done, &total)| fraction(done, total))
                .collect(),
        }
    }
}
