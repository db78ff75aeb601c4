/// A closed range `[min, max]` along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Interval starting at `start` and spanning `length`.
    pub fn from_start_length(start: f32, length: f32) -> Self {
        Self::new(start, start + length)
    }

    /// Returns the size of the interval (max - min).
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// Returns true if x is within `eps` of either bound.
    pub fn on_bound(&self, x: f32, eps: f32) -> bool {
        (x - self.min).abs() < eps || (x - self.max).abs() < eps
    }

    /// Adds a scalar displacement to both min and max.
    pub fn add_scalar(&self, displacement: f32) -> Interval {
        Interval::new(self.min + displacement, self.max + displacement)
    }

    /// Parametric values at which a line `origin + t * dir` crosses the
    /// two bounds, ordered so that the first is not greater than the second.
    ///
    /// A zero `dir` yields infinities (or NaN when `origin` sits exactly on
    /// a bound), which callers fold with `f32::max`/`f32::min`.
    pub fn crossings(&self, origin: f32, dir: f32) -> (f32, f32) {
        let t0 = (self.min - origin) / dir;
        let t1 = (self.max - origin) / dir;
        if t0 > t1 {
            (t1, t0)
        } else {
            (t0, t1)
        }
    }

    /// An empty interval (min > max, contains nothing).
    pub const EMPTY: Interval = Interval {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    /// A universe interval (contains everything).
    pub const UNIVERSE: Interval = Interval {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };
}
