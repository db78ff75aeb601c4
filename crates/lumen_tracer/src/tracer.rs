//! Bounded recursive ray tracing with axis-aligned reflections.

use std::f32::consts::TAU;

use lumen_core::{hue_sweep, Color, Obstacle, ObstacleId, Scene, SessionConfig};
use lumen_math::{Rect, Vec2};

use crate::intersect::nearest_hit;

/// Tolerance used to decide which edge a point lies on.
pub const EDGE_EPSILON: f32 = 0.001;

/// One visible piece of a ray path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
    pub color: Color,
}

/// Receives segments as they are traced.
pub trait SegmentSink {
    fn segment(&mut self, segment: Segment);
}

impl SegmentSink for Vec<Segment> {
    fn segment(&mut self, segment: Segment) {
        self.push(segment);
    }
}

/// Side of an axis-aligned rectangle, in screen orientation (y down).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// `y == rect.y.max`
    Bottom,
    /// `y == rect.y.min`
    Top,
    /// `x == rect.x.min`
    Left,
    /// `x == rect.x.max`
    Right,
}

impl Edge {
    /// Which edge of `rect` the point lies on, within [`EDGE_EPSILON`].
    ///
    /// Checked in the order bottom, top, left, right; the first match wins,
    /// so a corner counts as its horizontal edge.
    pub fn classify(rect: &Rect, point: Vec2) -> Option<Edge> {
        if (point.y - rect.y.max).abs() < EDGE_EPSILON {
            Some(Edge::Bottom)
        } else if (point.y - rect.y.min).abs() < EDGE_EPSILON {
            Some(Edge::Top)
        } else if (point.x - rect.x.min).abs() < EDGE_EPSILON {
            Some(Edge::Left)
        } else if (point.x - rect.x.max).abs() < EDGE_EPSILON {
            Some(Edge::Right)
        } else {
            None
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Edge::Bottom | Edge::Top)
    }
}

/// Mirror `direction` off an edge: horizontal edges flip y, vertical edges flip x.
pub fn reflect(direction: Vec2, edge: Edge) -> Vec2 {
    if edge.is_horizontal() {
        Vec2::new(direction.x, -direction.y)
    } else {
        Vec2::new(-direction.x, direction.y)
    }
}

/// Traces rays against a set of obstacles inside a window.
#[derive(Debug, Clone, Copy)]
pub struct Tracer<'a> {
    obstacles: &'a [Obstacle],
    bounds: Rect,
}

impl<'a> Tracer<'a> {
    pub fn new(obstacles: &'a [Obstacle], bounds: Rect) -> Self {
        Self { obstacles, bounds }
    }

    pub fn for_scene(scene: &'a Scene) -> Self {
        Self::new(scene.obstacles(), scene.bounds())
    }

    /// Follow a ray for up to `bounces_remaining` segments.
    ///
    /// Every call with a budget of at least one and a non-zero direction
    /// emits exactly one segment, then recurses from its endpoint with the
    /// reflected direction and the obstacle just hit excluded. On the last
    /// bounce an obstacle hit still ends the segment but no reflection is
    /// computed.
    pub fn trace<S: SegmentSink + ?Sized>(
        &self,
        sink: &mut S,
        origin: Vec2,
        direction: Vec2,
        excluded: Option<ObstacleId>,
        bounces_remaining: u32,
        color: Color,
    ) {
        if bounces_remaining < 1 {
            return;
        }

        if direction == Vec2::ZERO {
            log::trace!("Dropping non-advancing ray at {:?}", origin);
            return;
        }

        let (end, next_direction, hit_obstacle) =
            match nearest_hit(origin, direction, self.obstacles, excluded) {
                Some(hit) => {
                    let next_direction = if bounces_remaining > 1 {
                        let rect = self.obstacles[hit.obstacle].rect();
                        Edge::classify(&rect, hit.point)
                            .map_or(direction, |edge| reflect(direction, edge))
                    } else {
                        direction
                    };
                    (hit.point, next_direction, Some(hit.obstacle))
                }
                None => {
                    let (end, next_direction) = self.exit_window(origin, direction);
                    (end, next_direction, None)
                }
            };

        sink.segment(Segment {
            start: origin,
            end,
            color,
        });

        self.trace(
            sink,
            end,
            next_direction,
            hit_obstacle,
            bounces_remaining - 1,
            color,
        );
    }

    /// Where a ray leaves the window, and its direction after bouncing off
    /// the border there.
    ///
    /// The exit point is clamped into the window; an origin already outside
    /// is clamped in place. A point on the left or right border flips x, on
    /// the top or bottom border flips y, and a corner flips both.
    pub fn exit_window(&self, origin: Vec2, direction: Vec2) -> (Vec2, Vec2) {
        let (_, tx) = self.bounds.x.crossings(origin.x, direction.x);
        let (_, ty) = self.bounds.y.crossings(origin.y, direction.y);

        // f32::min drops the NaN of an axis with zero direction
        let t = tx.min(ty).max(0.0);
        let end = self.bounds.clamp_point(origin + direction * t);

        let mut reflected = direction;
        if self.bounds.x.on_bound(end.x, EDGE_EPSILON) {
            reflected.x = -reflected.x;
        }
        if self.bounds.y.on_bound(end.y, EDGE_EPSILON) {
            reflected.y = -reflected.y;
        }

        (end, reflected)
    }
}

/// Cast `ray_count` rays evenly around the light, each traced for
/// `bounce_count` segments and tinted along the hue wheel.
pub fn trace_light<S: SegmentSink + ?Sized>(scene: &Scene, config: &SessionConfig, sink: &mut S) {
    let tracer = Tracer::for_scene(scene);
    let count = config.ray_count();

    for i in 0..count {
        let angle = TAU * i as f32 / count as f32;
        tracer.trace(
            sink,
            scene.light.position,
            Vec2::from_angle(angle),
            None,
            config.bounce_count(),
            hue_sweep(i, count),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::Light;

    const WHITE: Color = Color::ONE;

    fn window() -> Rect {
        Rect::from_origin_size(Vec2::ZERO, Vec2::new(800.0, 600.0))
    }

    fn trace(obstacles: &[Obstacle], origin: Vec2, direction: Vec2, bounces: u32) -> Vec<Segment> {
        let mut segments = Vec::new();
        Tracer::new(obstacles, window()).trace(&mut segments, origin, direction, None, bounces, WHITE);
        segments
    }

    fn assert_connected(segments: &[Segment]) {
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_zero_budget_emits_nothing() {
        let segments = trace(&[], Vec2::new(400.0, 300.0), Vec2::X, 0);
        assert!(segments.is_empty());
    }

    #[test]
    fn test_zero_direction_emits_nothing() {
        let segments = trace(&[], Vec2::new(400.0, 300.0), Vec2::ZERO, 5);
        assert!(segments.is_empty());
    }

    #[test]
    fn test_window_reflection() {
        let tracer = Tracer::new(&[], window());
        let (end, reflected) = tracer.exit_window(Vec2::new(400.0, 300.0), Vec2::X);

        assert_eq!(end, Vec2::new(800.0, 300.0));
        assert!(reflected.x < 0.0);
        assert_eq!(reflected.y, 0.0);

        let segments = trace(&[], Vec2::new(400.0, 300.0), Vec2::X, 2);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].end, Vec2::new(800.0, 300.0));
        assert_eq!(segments[1].end, Vec2::new(0.0, 300.0));
    }

    #[test]
    fn test_window_corner_flips_both() {
        let tracer = Tracer::new(&[], window());
        let (end, reflected) = tracer.exit_window(Vec2::new(400.0, 300.0), Vec2::new(4.0, 3.0));

        assert_eq!(end, Vec2::new(800.0, 600.0));
        assert_eq!(reflected, Vec2::new(-4.0, -3.0));
    }

    #[test]
    fn test_window_axis_aligned_exit_up() {
        let tracer = Tracer::new(&[], window());
        let (end, reflected) = tracer.exit_window(Vec2::new(400.0, 300.0), Vec2::NEG_Y);

        assert_eq!(end, Vec2::new(400.0, 0.0));
        assert_eq!(reflected, Vec2::Y);
    }

    #[test]
    fn test_origin_outside_window_is_clamped() {
        let tracer = Tracer::new(&[], window());
        let (end, _) = tracer.exit_window(Vec2::new(900.0, 300.0), Vec2::X);

        assert_eq!(end, Vec2::new(800.0, 300.0));
    }

    #[test]
    fn test_obstacle_reflection() {
        let obstacles = [Obstacle::new(Vec2::new(100.0, 0.0), Vec2::new(60.0, 60.0))];
        let segments = trace(&obstacles, Vec2::new(50.0, 30.0), Vec2::X, 2);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].start, Vec2::new(50.0, 30.0));
        assert_eq!(segments[0].end, Vec2::new(100.0, 30.0));
        // Bounced off the left face back toward the window edge
        assert_eq!(segments[1].end, Vec2::new(0.0, 30.0));
    }

    #[test]
    fn test_last_bounce_stops_at_obstacle() {
        let obstacles = [Obstacle::new(Vec2::new(100.0, 0.0), Vec2::new(60.0, 60.0))];
        let segments = trace(&obstacles, Vec2::new(50.0, 30.0), Vec2::X, 1);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].end, Vec2::new(100.0, 30.0));
    }

    #[test]
    fn test_hit_obstacle_excluded_on_next_bounce() {
        // Start inside the box: the entry face lies behind the origin
        let obstacles = [Obstacle::new(Vec2::new(100.0, 0.0), Vec2::new(60.0, 60.0))];
        let segments = trace(&obstacles, Vec2::new(130.0, 30.0), Vec2::X, 2);

        assert_eq!(segments[0].end, Vec2::new(100.0, 30.0));
        // Reflected off the left face and no longer sees the box
        assert_eq!(segments[1].end, Vec2::new(0.0, 30.0));
    }

    #[test]
    fn test_budget_bounds_segment_count() {
        let scene = Scene::default();
        let tracer = Tracer::for_scene(&scene);

        for i in 0..16 {
            let direction = Vec2::from_angle(TAU * i as f32 / 16.0 + 0.1);
            for bounces in 0..6 {
                let mut segments = Vec::new();
                tracer.trace(&mut segments, scene.light.position, direction, None, bounces, WHITE);

                assert!(segments.len() <= bounces as usize);
                assert_eq!(segments.first().map(|s| s.start).unwrap_or(scene.light.position), scene.light.position);
                assert_connected(&segments);

                for s in &segments {
                    assert!(scene.bounds().contains(s.end), "{:?} left the window", s.end);
                }
            }
        }
    }

    #[test]
    fn test_edge_classify() {
        let rect = Rect::from_origin_size(Vec2::new(100.0, 100.0), Vec2::new(50.0, 20.0));

        assert_eq!(Edge::classify(&rect, Vec2::new(120.0, 120.0)), Some(Edge::Bottom));
        assert_eq!(Edge::classify(&rect, Vec2::new(120.0, 100.0)), Some(Edge::Top));
        assert_eq!(Edge::classify(&rect, Vec2::new(100.0, 110.0)), Some(Edge::Left));
        assert_eq!(Edge::classify(&rect, Vec2::new(150.0, 110.0)), Some(Edge::Right));
        assert_eq!(Edge::classify(&rect, Vec2::new(125.0, 110.0)), None);
    }

    #[test]
    fn test_edge_classify_corner_priority() {
        let rect = Rect::from_origin_size(Vec2::new(100.0, 100.0), Vec2::new(50.0, 20.0));

        assert_eq!(Edge::classify(&rect, Vec2::new(100.0, 120.0)), Some(Edge::Bottom));
        assert_eq!(Edge::classify(&rect, Vec2::new(150.0, 100.0)), Some(Edge::Top));
    }

    #[test]
    fn test_reflect_flips_one_axis() {
        let d = Vec2::new(3.0, -4.0);

        for edge in [Edge::Bottom, Edge::Top] {
            let r = reflect(d, edge);
            assert_eq!(r, Vec2::new(3.0, 4.0));
            assert_eq!(r.length(), d.length());
        }

        for edge in [Edge::Left, Edge::Right] {
            let r = reflect(d, edge);
            assert_eq!(r, Vec2::new(-3.0, -4.0));
            assert_eq!(r.length(), d.length());
        }
    }

    #[test]
    fn test_corner_hit_reflects_as_horizontal_edge() {
        let obstacles = [Obstacle::new(Vec2::new(10.0, 10.0), Vec2::new(10.0, 10.0))];
        let segments = trace(&obstacles, Vec2::ZERO, Vec2::new(1.0, 1.0), 2);

        assert_eq!(segments[0].end, Vec2::new(10.0, 10.0));
        // Top edge wins: y flips, x keeps going right
        let d = segments[1].end - segments[1].start;
        assert!(d.x > 0.0 && d.y < 0.0);
    }

    #[test]
    fn test_trace_light_fan() {
        let scene = Scene::new(
            Vec2::new(800.0, 600.0),
            Light::new(Vec2::new(400.0, 300.0), 20.0),
            Vec::new(),
        );
        let config = SessionConfig::new(4, 2);
        let mut segments = Vec::new();

        trace_light(&scene, &config, &mut segments);

        assert_eq!(segments.len(), 8);
        // First ray points along +x and is red
        assert_eq!(segments[0].end, Vec2::new(800.0, 300.0));
        assert_eq!(segments[0].color, Color::new(1.0, 0.0, 0.0));
        // Every ray keeps a single color across its bounces
        for pair in segments.chunks(2) {
            assert_eq!(pair[0].color, pair[1].color);
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_trace_light_default_scene_is_deterministic() {
        let scene = Scene::default();
        let config = SessionConfig::default();

        let mut first = Vec::new();
        let mut second = Vec::new();
        trace_light(&scene, &config, &mut first);
        trace_light(&scene, &config, &mut second);

        assert_eq!(first.len(), (config.ray_count() * config.bounce_count()) as usize);
        assert_eq!(first, second);
    }
}
