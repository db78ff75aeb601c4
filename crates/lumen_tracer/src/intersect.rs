//! Nearest obstacle along a ray.

use lumen_core::{Obstacle, ObstacleId};
use lumen_math::{Ray2, Vec2};

/// Where a ray enters the closest obstacle it meets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleHit {
    /// Entry point `origin + t_near * direction`
    pub point: Vec2,
    /// Index of the obstacle in the list that was searched
    pub obstacle: ObstacleId,
    /// Euclidean distance from the ray origin to `point`
    pub distance: f32,
    /// Entry parameter; negative when the origin is inside the obstacle
    pub t_near: f32,
}

/// Find the obstacle whose entry point is closest to `origin`.
///
/// `excluded` is skipped, which keeps a ray that just reflected off an
/// obstacle from hitting the same face again. Obstacles are visited in list
/// order and a candidate only replaces the current best when strictly
/// closer, so on equal distances the earliest obstacle wins.
///
/// Returns `None` when nothing is hit or when `direction` is zero.
pub fn nearest_hit(
    origin: Vec2,
    direction: Vec2,
    obstacles: &[Obstacle],
    excluded: Option<ObstacleId>,
) -> Option<ObstacleHit> {
    let ray = Ray2::new(origin, direction);
    let mut closest: Option<ObstacleHit> = None;

    for (id, obstacle) in obstacles.iter().enumerate() {
        if excluded == Some(id) {
            continue;
        }

        let Some(slab) = obstacle.rect().slab(&ray) else {
            continue;
        };

        let point = ray.at(slab.t_near);
        let distance = origin.distance(point);

        if closest.map_or(true, |best| distance < best.distance) {
            closest = Some(ObstacleHit {
                point,
                obstacle: id,
                distance,
                t_near: slab.t_near,
            });
        }
    }

    closest
}
