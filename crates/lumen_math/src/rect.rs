use crate::{Interval, Ray2, Vec2};

/// Axis-aligned rectangle in scene coordinates (y grows downward).
///
/// A rectangle is defined by two intervals, one per axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub x: Interval,
    pub y: Interval,
}

/// Parametric entry/exit of a ray through a [`Rect`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SlabHit {
    /// Where the ray enters the box. Negative when the origin is inside.
    pub t_near: f32,
    /// Where the ray leaves the box.
    pub t_far: f32,
}

impl Rect {
    /// Create a new rectangle from two intervals.
    pub fn new(x: Interval, y: Interval) -> Self {
        Self { x, y }
    }

    /// Create a rectangle from its top-left corner and its size.
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            x: Interval::from_start_length(origin.x, size.x),
            y: Interval::from_start_length(origin.y, size.y),
        }
    }

    /// Create a rectangle from two corner points.
    pub fn from_points(a: Vec2, b: Vec2) -> Self {
        Self {
            x: Interval::new(a.x.min(b.x), a.x.max(b.x)),
            y: Interval::new(a.y.min(b.y), a.y.max(b.y)),
        }
    }

    /// Top-left corner.
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x.min, self.y.min)
    }

    /// Bottom-right corner.
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x.max, self.y.max)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.x.size(), self.y.size())
    }

    pub fn center(&self) -> Vec2 {
        (self.min() + self.max()) * 0.5
    }

    /// Inclusive point containment.
    pub fn contains(&self, p: Vec2) -> bool {
        self.x.contains(p.x) && self.y.contains(p.y)
    }

    /// Closest point of the rectangle to `p`.
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(self.x.clamp(p.x), self.y.clamp(p.y))
    }

    /// Translate (move) the rectangle by an offset vector.
    pub fn translate(&self, offset: Vec2) -> Rect {
        Rect::new(self.x.add_scalar(offset.x), self.y.add_scalar(offset.y))
    }

    /// Ray/box intersection using the slab method.
    ///
    /// Each axis contributes a sorted pair of crossings; the ray is inside
    /// the box between the largest near crossing and the smallest far one.
    /// The hit is accepted when that range is non-empty and not entirely
    /// behind the origin. `t_near` stays negative when the origin is inside.
    ///
    /// Returns `None` for a ray with a zero direction.
    pub fn slab(&self, ray: &Ray2) -> Option<SlabHit> {
        if ray.is_degenerate() {
            return None;
        }

        let (x0, x1) = self.x.crossings(ray.origin.x, ray.direction.x);
        let (y0, y1) = self.y.crossings(ray.origin.y, ray.direction.y);

        // f32::max/min drop a NaN operand, so a 0/0 crossing is ignored
        let t_near = x0.max(y0);
        let t_far = x1.min(y1);

        (t_near <= t_far && t_far >= 0.0).then_some(SlabHit { t_near, t_far })
    }
}
