pub mod indexer;
pub mod median_cut;

pub use indexer::{index_pixels, nearest_index};
pub use median_cut::median_cut;
