use crate::Vec2;

/// A ray in the 2D scene plane.
///
/// The direction is used exactly as given: it is not normalized, so its
/// magnitude scales the parameter `t` passed to [`Ray2::at`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray2 {
    pub origin: Vec2,
    pub direction: Vec2,
}

impl Ray2 {
    /// Create a new ray.
    pub fn new(origin: Vec2, direction: Vec2) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec2 {
        self.origin + self.direction * t
    }

    /// True when the direction is exactly zero: such a ray never advances.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.direction == Vec2::ZERO
    }
}
