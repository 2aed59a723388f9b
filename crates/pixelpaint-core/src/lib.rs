pub mod art;
pub mod color;
pub mod consts;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod quantize;
pub mod session;
pub mod viewport;

pub use art::{Cell, CellPos, Grid, Palette, PixelArt};
pub use error::{PaintError, Result};
