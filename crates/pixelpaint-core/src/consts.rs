/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// CIE D65 reference white, X component (2° observer, Y normalized to 100).
pub const D65_WHITE_X: f64 = 95.047;

/// CIE D65 reference white, Y component.
pub const D65_WHITE_Y: f64 = 100.0;

/// CIE D65 reference white, Z component.
pub const D65_WHITE_Z: f64 = 108.883;

/// CIE Lab linear-segment threshold: (6/29)^3.
pub const LAB_EPSILON: f64 = 216.0 / 24389.0;

/// CIE Lab linear-segment slope: (29/3)^3.
pub const LAB_KAPPA: f64 = 24389.0 / 27.0;

/// Fraction of a cell's size, measured from each edge, within which a
/// wrong-color tap may snap to a neighbouring cell of the selected color.
pub const FORGIVENESS_FRACTION: f32 = 0.2;

/// Maximum zoom is reached when this many cells span the viewport width.
pub const MIN_VISIBLE_CELLS: f32 = 8.0;

/// Default grid width (cells) for new artworks.
pub const DEFAULT_GRID_WIDTH: u32 = 80;

/// Scale factor for the recommended color count: `factor * sqrt(cells)`.
pub const RECOMMENDED_COLOR_FACTOR: f32 = 0.83;

/// Lower bound for the recommended color count.
pub const MIN_RECOMMENDED_COLORS: usize = 8;

/// Upper bound for the recommended color count.
pub const MAX_RECOMMENDED_COLORS: usize = 256;

/// Longer side, in pixels, of an exported artwork preview.
pub const DEFAULT_EXPORT_MAX_DIMENSION: u32 = 1200;
