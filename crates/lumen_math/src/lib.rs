// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod interval;
mod ray;
mod rect;

pub use interval::Interval;
pub use ray::Ray2;
pub use rect::{Rect, SlabHit};
