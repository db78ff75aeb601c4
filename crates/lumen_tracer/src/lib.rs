//! Lumen Tracer - 2D ray casting with axis-aligned reflections.
//!
//! Two layers:
//! - [`nearest_hit`] finds the closest obstacle a ray enters (slab method).
//! - [`Tracer`] follows a ray through bounces off obstacles and the
//!   window border, emitting one [`Segment`] per bounce into a [`SegmentSink`].

mod intersect;
mod tracer;

pub use intersect::{nearest_hit, ObstacleHit};
pub use tracer::{reflect, trace_light, Edge, Segment, SegmentSink, Tracer, EDGE_EPSILON};

/// Re-export common math types from lumen_math
pub use lumen_math::{Rect, Vec2};
