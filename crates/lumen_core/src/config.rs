//! Fixed window geometry and the two runtime knobs of a session.

/// Logical width of the window and of the scene bounds.
pub const WINDOW_WIDTH: u32 = 800;
/// Logical height of the window and of the scene bounds.
pub const WINDOW_HEIGHT: u32 = 600;
pub const WINDOW_TITLE: &str = "Lumen";

/// Fewest rays the light may cast.
pub const MIN_RAYS: u32 = 2;
/// Fewest bounce levels a ray may be traced for.
pub const MIN_BOUNCES: u32 = 1;

pub const DEFAULT_RAYS: u32 = 64;
pub const DEFAULT_BOUNCES: u32 = 3;

/// Ray count and bounce budget, each floor-clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    ray_count: u32,
    bounce_count: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ray_count: DEFAULT_RAYS,
            bounce_count: DEFAULT_BOUNCES,
        }
    }
}

impl SessionConfig {
    /// Create a configuration, clamping both values to their floors.
    pub fn new(ray_count: u32, bounce_count: u32) -> Self {
        Self {
            ray_count: ray_count.max(MIN_RAYS),
            bounce_count: bounce_count.max(MIN_BOUNCES),
        }
    }

    pub fn ray_count(&self) -> u32 {
        self.ray_count
    }

    pub fn bounce_count(&self) -> u32 {
        self.bounce_count
    }

    /// Add a signed delta to the ray count. Returns the new count.
    pub fn adjust_rays(&mut self, delta: i32) -> u32 {
        self.ray_count = apply_delta(self.ray_count, delta, MIN_RAYS);
        self.ray_count
    }

    /// Add a signed delta to the bounce count. Returns the new count.
    pub fn adjust_bounces(&mut self, delta: i32) -> u32 {
        self.bounce_count = apply_delta(self.bounce_count, delta, MIN_BOUNCES);
        self.bounce_count
    }
}

fn apply_delta(value: u32, delta: i32, floor: u32) -> u32 {
    let raised = i64::from(value) + i64::from(delta);
    u32::try_from(raised.max(i64::from(floor))).unwrap_or(u32::MAX)
}
