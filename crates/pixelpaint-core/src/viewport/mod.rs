pub mod hit_test;
pub mod transform;

pub use hit_test::locate;
pub use transform::{Size, TransformState, Vec2, ViewportGeometry};
