//! Scene types for Lumen.
//!
//! A scene is the window bounds, one light and a fixed list of
//! axis-aligned obstacles. Only positions change after creation.

use lumen_math::{Rect, Vec2};

use crate::config::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// Index of an obstacle in its scene's obstacle list.
pub type ObstacleId = usize;

/// An axis-aligned rectangular obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Top-left corner
    pub position: Vec2,
    size: Vec2,
}

impl Obstacle {
    /// Create an obstacle. Width and height must be positive.
    pub fn new(position: Vec2, size: Vec2) -> Self {
        debug_assert!(size.x > 0.0 && size.y > 0.0, "obstacle size must be positive");
        Self { position, size }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// The area covered by this obstacle.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.rect().contains(point)
    }
}

/// The light source. Its radius only matters for picking and drawing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec2,
    pub radius: f32,
}

impl Light {
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self { position, radius }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.position.distance_squared(point) <= self.radius * self.radius
    }
}

/// Window bounds, the light and the obstacles.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    bounds: Rect,
    pub light: Light,
    obstacles: Vec<Obstacle>,
}

impl Default for Scene {
    fn default() -> Self {
        let size = Vec2::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32);

        let light = Light::new(size * 0.5 - Vec2::splat(25.0), 20.0);

        let obstacles = vec![
            Obstacle::new(Vec2::new(120.0, 100.0), Vec2::new(140.0, 60.0)),
            Obstacle::new(Vec2::new(540.0, 80.0), Vec2::new(80.0, 160.0)),
            Obstacle::new(Vec2::new(160.0, 400.0), Vec2::new(100.0, 100.0)),
            Obstacle::new(Vec2::new(500.0, 420.0), Vec2::new(180.0, 50.0)),
        ];

        Self::new(size, light, obstacles)
    }
}

impl Scene {
    /// Create a scene spanning `[0, size.x] x [0, size.y]`.
    pub fn new(size: Vec2, light: Light, obstacles: Vec<Obstacle>) -> Self {
        Self {
            bounds: Rect::from_origin_size(Vec2::ZERO, size),
            light,
            obstacles,
        }
    }

    /// The window rectangle rays reflect off.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn obstacle(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.get(id)
    }

    /// Topmost obstacle under `point`. Later obstacles are drawn on top.
    pub fn obstacle_at(&self, point: Vec2) -> Option<ObstacleId> {
        self.obstacles.iter().rposition(|o| o.contains(point))
    }

    /// Move the light, keeping its center inside the window.
    pub fn move_light(&mut self, position: Vec2) {
        self.light.position = self.bounds.clamp_point(position);
    }

    /// Move an obstacle's top-left corner, keeping the whole obstacle
    /// inside the window. Unknown ids are ignored.
    pub fn move_obstacle(&mut self, id: ObstacleId, position: Vec2) {
        let bounds = self.bounds;
        if let Some(obstacle) = self.obstacles.get_mut(id) {
            let max = (bounds.max() - obstacle.size).max(bounds.min());
            obstacle.position = position.clamp(bounds.min(), max);
        }
    }
}
