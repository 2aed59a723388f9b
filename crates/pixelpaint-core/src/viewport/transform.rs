//! Pan/zoom state of the grid viewer and the mappings between screen space
//! and logical grid space.
//!
//! Screen coordinates have their origin at the viewport's top-left corner.
//! The grid is fitted into the viewport (aspect preserved) and centred; a
//! transform then scales it about the viewport centre and shifts it by
//! `offset` screen pixels.

use std::ops::{Add, Div, Mul, Sub};

use crate::art::Grid;
use crate::consts::MIN_VISIBLE_CELLS;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Layout of one grid inside one viewport. Independent of pan/zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportGeometry {
    pub cols: usize,
    pub rows: usize,
    pub viewport: Size,
}

impl ViewportGeometry {
    pub fn new(cols: usize, rows: usize, viewport: Size) -> Self {
        Self {
            cols,
            rows,
            viewport,
        }
    }

    pub fn for_grid(grid: &Grid, viewport: Size) -> Self {
        Self::new(grid.cols(), grid.rows(), viewport)
    }

    /// Size of the grid at scale 1: fitted into the viewport along whichever
    /// side is the tighter fit.
    pub fn grid_render_size(&self) -> Size {
        let vw = self.viewport.width;
        let vh = self.viewport.height;
        let grid_aspect = self.cols as f32 / self.rows as f32;
        let viewport_aspect = vw / vh;

        if grid_aspect > viewport_aspect {
            Size::new(vw, vw / grid_aspect)
        } else {
            Size::new(vh * grid_aspect, vh)
        }
    }

    /// Side length of one (square) cell at scale 1.
    pub fn cell_size(&self) -> f32 {
        self.grid_render_size().width / self.cols as f32
    }

    /// Upper zoom bound: `cols / 8`, never below 1 for narrow grids.
    pub fn max_scale(&self) -> f32 {
        (self.cols as f32 / MIN_VISIBLE_CELLS).max(1.0)
    }

    /// Largest offset magnitude per axis at `scale`.
    pub fn max_offset(&self, scale: f32) -> Vec2 {
        let render = self.grid_render_size();
        Vec2::new(
            (render.width * scale - self.viewport.width).max(0.0),
            (render.height * scale - self.viewport.height).max(0.0),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    pub scale: f32,
    pub offset: Vec2,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

impl TransformState {
    /// Apply one pinch/pan update and return the clamped result.
    ///
    /// `zoom` is the multiplicative scale change of this update, `pan` the
    /// finger translation in screen pixels and `centroid` the gesture centre
    /// in screen coordinates. The grid point under the centroid stays under
    /// it (as long as clamping does not intervene). Updates of one gesture
    /// must be applied in order, each on the previous result.
    pub fn apply_zoom_pan(
        &self,
        zoom: f32,
        pan: Vec2,
        centroid: Vec2,
        geometry: &ViewportGeometry,
    ) -> TransformState {
        let zoom = if zoom.is_finite() && zoom > 0.0 { zoom } else { 1.0 };
        let new_scale = (self.scale * zoom).clamp(1.0, geometry.max_scale());
        let effective_zoom = new_scale / self.scale;

        let centered = centroid - geometry.viewport.center();
        let offset = centered * (1.0 - effective_zoom) + (self.offset + pan) * effective_zoom;

        let max = geometry.max_offset(new_scale);
        TransformState {
            scale: new_scale,
            offset: Vec2::new(
                finite_or_zero(offset.x).clamp(-max.x, max.x),
                finite_or_zero(offset.y).clamp(-max.y, max.y),
            ),
        }
    }

    /// Map a screen point to unscaled grid space (origin at the grid's
    /// top-left corner, one cell = `geometry.cell_size()`).
    pub fn screen_to_grid(&self, screen: Vec2, geometry: &ViewportGeometry) -> Vec2 {
        let centered = screen - geometry.viewport.center();
        let unscaled = (centered - self.offset) / self.scale;
        unscaled + geometry.grid_render_size().center()
    }

    /// Inverse of [`screen_to_grid`](Self::screen_to_grid).
    pub fn grid_to_screen(&self, point: Vec2, geometry: &ViewportGeometry) -> Vec2 {
        let centered = point - geometry.grid_render_size().center();
        centered * self.scale + self.offset + geometry.viewport.center()
    }
}

fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
