use std::f32::consts::TAU;

use lumen_core::Color;
use lumen_math::{Rect, Vec2};
use lumen_tracer::{Segment, SegmentSink};

/// Vertex data for rendering (scene position + linear RGB)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 3],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x3];

    pub fn new(position: Vec2, color: Color) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
        }
    }

    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// One frame worth of geometry, rebuilt every frame.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    lines: Vec<Vertex>,
    triangles: Vec<Vertex>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all geometry but keep the allocations.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.triangles.clear();
    }

    /// Line list: every two vertices form one line.
    pub fn line_vertices(&self) -> &[Vertex] {
        &self.lines
    }

    /// Triangle list: every three vertices form one triangle.
    pub fn triangle_vertices(&self) -> &[Vertex] {
        &self.triangles
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.lines
            .extend([Vertex::new(from, color), Vertex::new(to, color)]);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (min, max) = (rect.min(), rect.max());
        let top_right = Vec2::new(max.x, min.y);
        let bottom_left = Vec2::new(min.x, max.y);

        self.triangles.extend(
            [min, top_right, max, min, max, bottom_left].map(|p| Vertex::new(p, color)),
        );
    }

    /// Filled disc as a triangle fan; larger discs get more slices.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let slices = ((radius * 0.5).ceil() as usize).clamp(12, 64);

        let rim = |i: usize| center + Vec2::from_angle(TAU * i as f32 / slices as f32) * radius;

        for i in 0..slices {
            self.triangles.extend(
                [center, rim(i), rim(i + 1)].map(|p| Vertex::new(p, color)),
            );
        }
    }
}

impl SegmentSink for DrawList {
    fn segment(&mut self, segment: Segment) {
        self.line(segment.start, segment.end, segment.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 20);
        assert_eq!(Vertex::desc().array_stride, 20);
    }

    #[test]
    fn test_line() {
        let mut list = DrawList::new();
        list.line(Vec2::ZERO, Vec2::new(10.0, 5.0), Color::X);

        assert_eq!(
            list.line_vertices(),
            &[
                Vertex { position: [0.0, 0.0], color: [1.0, 0.0, 0.0] },
                Vertex { position: [10.0, 5.0], color: [1.0, 0.0, 0.0] },
            ]
        );
        assert!(list.triangle_vertices().is_empty());
    }

    #[test]
    fn test_fill_rect_covers_corners() {
        let mut list = DrawList::new();
        let rect = Rect::from_origin_size(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
        list.fill_rect(rect, Color::ONE);

        let verts = list.triangle_vertices();
        assert_eq!(verts.len(), 6);

        for corner in [[10.0, 20.0], [40.0, 20.0], [40.0, 60.0], [10.0, 60.0]] {
            assert!(verts.iter().any(|v| v.position == corner));
        }
    }

    #[test]
    fn test_fill_circle_stays_on_disc() {
        let mut list = DrawList::new();
        let center = Vec2::new(100.0, 100.0);
        list.fill_circle(center, 20.0, Color::ONE);

        let verts = list.triangle_vertices();
        assert_eq!(verts.len() % 3, 0);
        assert!(verts.len() >= 12 * 3);

        for v in verts {
            let d = Vec2::from_array(v.position).distance(center);
            assert!(d <= 20.0 + 1e-3);
        }
    }

    #[test]
    fn test_segment_sink() {
        let mut list = DrawList::new();
        list.segment(Segment {
            start: Vec2::new(1.0, 2.0),
            end: Vec2::new(3.0, 4.0),
            color: Color::Y,
        });

        assert_eq!(list.line_vertices().len(), 2);
        assert_eq!(list.line_vertices()[1].position, [3.0, 4.0]);
        assert_eq!(list.line_vertices()[1].color, [0.0, 1.0, 0.0]);

        list.clear();
        assert!(list.line_vertices().is_empty());
    }
}
