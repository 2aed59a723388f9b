use crate::art::{CellPos, Grid};
use crate::consts::FORGIVENESS_FRACTION;

use super::transform::{TransformState, Vec2, ViewportGeometry};

/// Which edge band of a cell a tap fell in, per axis: -1 (low edge),
/// 0 (interior) or 1 (high edge).
fn edge_band(offset_in_cell: f32, cell_size: f32, margin: f32) -> isize {
    if offset_in_cell < margin {
        -1
    } else if offset_in_cell > cell_size - margin {
        1
    } else {
        0
    }
}

fn neighbor(pos: CellPos, d_row: isize, d_col: isize, grid: &Grid) -> Option<CellPos> {
    let candidate = CellPos::new(
        pos.row.checked_add_signed(d_row)?,
        pos.col.checked_add_signed(d_col)?,
    );
    grid.contains(candidate).then_some(candidate)
}

/// Resolve a screen tap to a grid cell.
///
/// Taps outside the grid give `None`. When the cell under the tap does not
/// carry the selected color but the tap landed within the forgiveness
/// margin of one or two of its edges, the adjacent cells across those edges
/// (plus the diagonal one when two edges apply) that do carry the selected
/// color are considered, and the one whose centre is nearest the tap wins.
/// Without such a neighbour the cell under the tap is returned unchanged.
pub fn locate(
    screen: Vec2,
    transform: &TransformState,
    geometry: &ViewportGeometry,
    grid: &Grid,
    selected: Option<usize>,
) -> Option<CellPos> {
    debug_assert_eq!((geometry.cols, geometry.rows), (grid.cols(), grid.rows()));

    let cell_size = geometry.cell_size();
    if !cell_size.is_finite() || cell_size <= 0.0 {
        return None;
    }

    let point = transform.screen_to_grid(screen, geometry);
    if !(point.x >= 0.0 && point.y >= 0.0) {
        return None;
    }
    let col = (point.x / cell_size).floor() as usize;
    let row = (point.y / cell_size).floor() as usize;
    let resolved = CellPos::new(row, col);
    if !grid.contains(resolved) {
        return None;
    }

    let Some(selected) = selected else {
        return Some(resolved);
    };
    if grid.cell(resolved).color_index == selected {
        return Some(resolved);
    }

    let margin = cell_size * FORGIVENESS_FRACTION;
    let vertical = edge_band(point.y - row as f32 * cell_size, cell_size, margin);
    let horizontal = edge_band(point.x - col as f32 * cell_size, cell_size, margin);
    if vertical == 0 && horizontal == 0 {
        return Some(resolved);
    }

    let mut candidates = Vec::with_capacity(3);
    if vertical != 0 {
        candidates.push(neighbor(resolved, vertical, 0, grid));
    }
    if horizontal != 0 {
        candidates.push(neighbor(resolved, 0, horizontal, grid));
    }
    if vertical != 0 && horizontal != 0 {
        candidates.push(neighbor(resolved, vertical, horizontal, grid));
    }

    let mut best: Option<(CellPos, f32)> = None;
    for pos in candidates.into_iter().flatten() {
        if grid.cell(pos).color_index != selected {
            continue;
        }
        let center = Vec2::new(
            (pos.col as f32 + 0.5) * cell_size,
            (pos.row as f32 + 0.5) * cell_size,
        );
        let dist = (center - point).length_squared();
        if best.map_or(true, |(_, d)| dist < d) {
            best = Some((pos, dist));
        }
    }

    Some(best.map_or(resolved, |(pos, _)| pos))
}
