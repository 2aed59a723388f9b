pub mod lab;
pub mod rgb;

pub use lab::{to_lab, to_rgb, Lab};
pub use rgb::Rgb8;
