use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::color::Rgb8;
use crate::error::{PaintError, Result};

/// A single grid cell: the palette entry it must be painted with, and
/// whether the user has painted it yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub color_index: usize,
    #[serde(default)]
    pub is_colored: bool,
}

impl Cell {
    pub fn new(color_index: usize) -> Self {
        Self {
            color_index,
            is_colored: false,
        }
    }
}

/// Row/column address of a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Rectangular grid of cells, row-major, shape = (rows, cols).
///
/// The shape never changes after construction and is always at least 1x1.
/// Only the `is_colored` flag of individual cells is mutable, and only from
/// inside the crate (the coloring session owns that transition).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<Cell>", into = "Array2<Cell>")]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    pub fn from_cells(cells: Array2<Cell>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows == 0 || cols == 0 {
            return Err(PaintError::InvalidDimensions {
                width: cols as u32,
                height: rows as u32,
            });
        }
        Ok(Self { cells })
    }

    /// Build a grid from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != width) {
            return Err(PaintError::InvalidInput("grid rows have unequal lengths".into()));
        }
        let flat: Vec<Cell> = rows.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec((height, width), flat)
            .map_err(|e| PaintError::InvalidInput(e.to_string()))?;
        Self::from_cells(cells)
    }

    /// Build an uncolored grid from a row-major list of palette indices.
    pub fn from_indices(rows: usize, cols: usize, indices: Vec<usize>) -> Result<Self> {
        if indices.len() != rows * cols {
            return Err(PaintError::InvalidInput(format!(
                "expected {} indices for a {cols}x{rows} grid, got {}",
                rows * cols,
                indices.len()
            )));
        }
        let cells = Array2::from_shape_vec((rows, cols), indices.into_iter().map(Cell::new).collect())
            .map_err(|e| PaintError::InvalidInput(e.to_string()))?;
        Self::from_cells(cells)
    }

    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: CellPos) -> bool {
        pos.row < self.rows() && pos.col < self.cols()
    }

    pub fn get(&self, pos: CellPos) -> Option<&Cell> {
        self.cells.get((pos.row, pos.col))
    }

    /// Cell at `pos`. Panics when `pos` lies outside the grid.
    pub fn cell(&self, pos: CellPos) -> &Cell {
        &self.cells[[pos.row, pos.col]]
    }

    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// Iterate cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Iterate `(position, cell)` pairs in row-major order.
    pub fn indexed_iter(&self) -> impl Iterator<Item = (CellPos, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| (CellPos::new(row, col), cell))
    }

    /// Mark a cell colored. Returns false if it already was.
    pub(crate) fn mark_colored(&mut self, pos: CellPos) -> bool {
        let cell = &mut self.cells[[pos.row, pos.col]];
        if cell.is_colored {
            return false;
        }
        cell.is_colored = true;
        true
    }
}

impl TryFrom<Array2<Cell>> for Grid {
    type Error = PaintError;

    fn try_from(cells: Array2<Cell>) -> Result<Self> {
        Self::from_cells(cells)
    }
}

impl From<Grid> for Array2<Cell> {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

/// Ordered list of the colors an artwork is painted with.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Rgb8>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb8>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Rgb8> {
        self.colors.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rgb8> {
        self.colors.iter()
    }

    pub fn as_slice(&self) -> &[Rgb8] {
        &self.colors
    }
}

/// The unit produced by the image pipeline and persisted between sessions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PixelArt {
    pub grid: Grid,
    pub palette: Palette,
}

impl PixelArt {
    /// Pair a grid with its palette, checking every cell references a
    /// palette entry.
    pub fn new(grid: Grid, palette: Palette) -> Result<Self> {
        let art = Self { grid, palette };
        art.validate()?;
        Ok(art)
    }

    /// Check the grid/palette invariants. Useful after deserializing.
    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(PaintError::InvalidInput("palette is empty".into()));
        }
        if let Some((pos, cell)) = self
            .grid
            .indexed_iter()
            .find(|(_, c)| c.color_index >= self.palette.len())
        {
            return Err(PaintError::InvalidInput(format!(
                "cell ({}, {}) references color {} but the palette has {} entries",
                pos.row,
                pos.col,
                cell.color_index,
                self.palette.len()
            )));
        }
        Ok(())
    }
}
