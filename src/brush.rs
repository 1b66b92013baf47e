//! Brush facade - the public drawing operations
//!
//! A brush ties a texture and a style to the tessellate -> transform ->
//! render pipeline. Every operation composes the pipeline fresh and retains
//! nothing between calls, so drawing only needs `&self` and separate brushes
//! are fully independent.
//!
//! All named shape operations stroke their chain with the
//! [`Line`](Strategy::Line) strategy; the Point, Square, Round and Polygon
//! strategies are building blocks reachable through [`Brush::stroke`].

use nalgebra::{Point2, Vector2};

use crate::backend::{BrushError, QuadBackend, TextureSlot};
use crate::color::Rgba;
use crate::render::{render, Strategy};
use crate::style::Style;
use crate::tessellate::{tessellate, Chain, Rect, ShapeRequest};
use crate::transform;

/// Draws 2D primitives through a [`QuadBackend`].
///
/// The brush stretches a single texture (a 1x1 white pixel by default) into
/// every line, dot and outline it draws; it never needs more than that one
/// texture.
pub struct Brush<'t, B: QuadBackend> {
    texture: TextureSlot<'t, B::Texture>,
    /// Style shared by every operation. The per-call color argument overrides
    /// `style.color` for that call only.
    pub style: Style,
}

impl<'t, B: QuadBackend> Brush<'t, B> {
    /// Create a brush that owns a backend-created 1x1 white pixel texture.
    ///
    /// The texture is dropped with the brush.
    pub fn new(backend: &mut B) -> Result<Self, BrushError> {
        let texture = backend
            .create_pixel_texture()
            .map_err(|e| BrushError::TextureCreation(Box::new(e)))?;
        log::debug!("brush created with owned pixel texture");

        Ok(Self {
            texture: TextureSlot::Owned(texture),
            style: Style::default(),
        })
    }

    /// Create a brush that borrows a caller-supplied texture.
    ///
    /// The caller keeps ownership; the brush never drops it.
    pub fn with_texture(texture: &'t B::Texture) -> Self {
        log::debug!("brush created with borrowed texture");

        Self {
            texture: TextureSlot::Borrowed(texture),
            style: Style::default(),
        }
    }

    /// The texture every quad is drawn with.
    pub fn texture(&self) -> &B::Texture {
        self.texture.get()
    }

    /// Draw a point as a unit-radius circle outline at `position`.
    pub fn point(&self, backend: &mut B, position: Point2<f32>, color: Rgba) {
        let chain = tessellate(&ShapeRequest::Circle {
            radius: 1.0,
            sides: self.style.segments,
        });
        self.submit(backend, &chain, position.coords, color, Strategy::Line);
    }

    /// Draw a circle of `radius` centered at `position`.
    pub fn circle(&self, backend: &mut B, position: Point2<f32>, radius: f32, color: Rgba) {
        let chain = tessellate(&ShapeRequest::Circle {
            radius,
            sides: self.style.segments,
        });
        self.submit(backend, &chain, position.coords, color, Strategy::Line);
    }

    /// Draw a line segment from `start` to `end`.
    pub fn line(&self, backend: &mut B, start: Point2<f32>, end: Point2<f32>, color: Rgba) {
        let chain = tessellate(&ShapeRequest::Line { start, end });
        self.submit(backend, &chain, Vector2::zeros(), color, Strategy::Line);
    }

    /// Draw an axis-aligned box through two opposite corners.
    pub fn axis_aligned_box(
        &self,
        backend: &mut B,
        upper_left: Point2<f32>,
        lower_right: Point2<f32>,
        color: Rgba,
    ) {
        let chain = tessellate(&ShapeRequest::Square {
            top_left: upper_left,
            bottom_right: lower_right,
        });
        self.submit(backend, &chain, Vector2::zeros(), color, Strategy::Line);
    }

    /// Draw an axis-aligned rectangle.
    ///
    /// Produces exactly the chain [`Brush::axis_aligned_box`] would for the
    /// rect's corners.
    pub fn rectangle(&self, backend: &mut B, rect: &Rect, color: Rgba) {
        self.axis_aligned_box(backend, rect.top_left(), rect.bottom_right(), color);
    }

    /// Draw a box rotated about its upper-left corner.
    ///
    /// `scale` is accepted but not applied to the tessellated geometry; the
    /// historical API behaved this way and callers depend on it.
    pub fn rotated_rectangle(
        &self,
        backend: &mut B,
        upper_left: Point2<f32>,
        lower_right: Point2<f32>,
        rotation: f32,
        scale: f32,
        color: Rgba,
    ) {
        let _ = scale;

        let mut chain = tessellate(&ShapeRequest::Square {
            top_left: upper_left,
            bottom_right: lower_right,
        });
        transform::rotate(&mut chain, rotation, upper_left);
        self.submit(backend, &chain, Vector2::zeros(), color, Strategy::Line);
    }

    /// Draw a pie wedge at `position`.
    ///
    /// The wedge starts at `start_angle` and sweeps `sweep_angle` radians
    /// counter-clockwise, closed back through the center.
    pub fn pie(
        &self,
        backend: &mut B,
        position: Point2<f32>,
        radius: f32,
        start_angle: f32,
        sweep_angle: f32,
        color: Rgba,
    ) {
        let chain = tessellate(&ShapeRequest::Pie {
            radius,
            sides: self.style.segments,
            start_angle,
            sweep_angle,
        });
        self.submit(backend, &chain, position.coords, color, Strategy::Line);
    }

    /// Draw a tapered sine wave from `start` to `end`.
    ///
    /// The amplitude peaks at the midpoint and tapers to zero at both ends.
    pub fn sine_wave(
        &self,
        backend: &mut B,
        start: Point2<f32>,
        end: Point2<f32>,
        frequency: f32,
        amplitude: f32,
        color: Rgba,
    ) {
        let chain = tessellate(&ShapeRequest::SineWave {
            start,
            end,
            frequency,
            amplitude,
        });
        self.submit(backend, &chain, Vector2::zeros(), color, Strategy::Line);
    }

    /// Stroke an arbitrary chain under any strategy.
    ///
    /// `offset` is added to every chain point. This is the entry point for
    /// the Point, Square, Round and Polygon strategies, which no named shape
    /// operation uses.
    pub fn stroke(
        &self,
        backend: &mut B,
        chain: &Chain,
        offset: Vector2<f32>,
        color: Rgba,
        strategy: Strategy,
    ) {
        self.submit(backend, chain, offset, color, strategy);
    }

    fn submit(
        &self,
        backend: &mut B,
        chain: &Chain,
        offset: Vector2<f32>,
        color: Rgba,
        strategy: Strategy,
    ) {
        let style = self.style.with_color(color);
        for quad in render(chain, offset, &style, strategy) {
            backend.draw_quad(self.texture.get(), &quad);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::DrawQuad;
    use std::convert::Infallible;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-4;

    /// Backend that records every quad in arrival order.
    #[derive(Default)]
    struct RecordingBackend {
        quads: Vec<DrawQuad>,
        textures_created: usize,
    }

    impl QuadBackend for RecordingBackend {
        type Texture = u32;
        type Error = Infallible;

        fn create_pixel_texture(&mut self) -> Result<u32, Infallible> {
            self.textures_created += 1;
            Ok(self.textures_created as u32)
        }

        fn draw_quad(&mut self, _texture: &u32, quad: &DrawQuad) {
            self.quads.push(*quad);
        }
    }

    #[test]
    fn test_new_creates_owned_texture() {
        let mut backend = RecordingBackend::default();
        let brush = Brush::new(&mut backend).unwrap();
        assert_eq!(backend.textures_created, 1);
        assert_eq!(*brush.texture(), 1);
    }

    #[test]
    fn test_with_texture_borrows() {
        let texture = 42_u32;
        let mut backend = RecordingBackend::default();
        {
            let brush = Brush::<RecordingBackend>::with_texture(&texture);
            brush.line(
                &mut backend,
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Rgba::WHITE,
            );
        }
        // Brush is gone; the caller's texture is untouched and no texture
        // was ever created through the backend.
        assert_eq!(texture, 42);
        assert_eq!(backend.textures_created, 0);
        assert_eq!(backend.quads.len(), 1);
    }

    #[test]
    fn test_line_emits_one_stretched_quad() {
        let mut backend = RecordingBackend::default();
        let brush = Brush::new(&mut backend).unwrap();
        brush.line(
            &mut backend,
            Point2::new(0.0, 0.0),
            Point2::new(100.0, 0.0),
            Rgba::RED,
        );

        assert_eq!(backend.quads.len(), 1);
        let quad = &backend.quads[0];
        assert!((quad.scale.x - 100.0).abs() < EPSILON);
        assert!((quad.scale.y - brush.style.thickness).abs() < EPSILON);
        assert!(quad.rotation.abs() < EPSILON);
        assert_eq!(quad.color, Rgba::RED);
    }

    #[test]
    fn test_degenerate_line_still_draws() {
        let mut backend = RecordingBackend::default();
        let brush = Brush::new(&mut backend).unwrap();
        let point = Point2::new(7.0, 7.0);
        brush.line(&mut backend, point, point, Rgba::WHITE);

        assert_eq!(backend.quads.len(), 1);
        assert!(backend.quads[0].scale.x.abs() < EPSILON);
        assert!(backend.quads[0].rotation.abs() < EPSILON);
    }

    #[test]
    fn test_circle_segment_count() {
        let mut backend = RecordingBackend::default();
        let brush = Brush::new(&mut backend).unwrap();
        brush.circle(&mut backend, Point2::new(320.0, 240.0), 64.0, Rgba::GREEN);

        // 21-point chain, one quad per adjacent pair.
        assert_eq!(backend.quads.len(), 20);

        // Every quad anchors on the circle, offset by the center.
        for quad in &backend.quads {
            let distance = (quad.position - Point2::new(320.0, 240.0)).norm();
            assert!((distance - 64.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_point_is_unit_circle() {
        let mut backend = RecordingBackend::default();
        let brush = Brush::new(&mut backend).unwrap();
        brush.point(&mut backend, Point2::new(50.0, 60.0), Rgba::WHITE);

        assert_eq!(backend.quads.len(), 20);
        for quad in &backend.quads {
            let distance = (quad.position - Point2::new(50.0, 60.0)).norm();
            assert!((distance - 1.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_pie_quad_count() {
        let mut backend = RecordingBackend::default();
        let brush = Brush::new(&mut backend).unwrap();
        brush.pie(
            &mut backend,
            Point2::new(100.0, 100.0),
            64.0,
            FRAC_PI_2,
            FRAC_PI_2,
            Rgba::BLUE,
        );

        // Chain of segments + 3 points renders as segments + 2 quads.
        assert_eq!(backend.quads.len(), 22);
    }

    #[test]
    fn test_box_and_rectangle_agree() {
        let mut box_backend = RecordingBackend::default();
        let mut rect_backend = RecordingBackend::default();
        let box_brush = Brush::new(&mut box_backend).unwrap();
        let rect_brush = Brush::new(&mut rect_backend).unwrap();

        box_brush.axis_aligned_box(
            &mut box_backend,
            Point2::new(10.0, 20.0),
            Point2::new(40.0, 60.0),
            Rgba::WHITE,
        );
        rect_brush.rectangle(
            &mut rect_backend,
            &Rect::new(10.0, 20.0, 30.0, 40.0),
            Rgba::WHITE,
        );

        assert_eq!(box_backend.quads, rect_backend.quads);
    }

    #[test]
    fn test_rotated_rectangle_pivots_on_upper_left() {
        let mut backend = RecordingBackend::default();
        let brush = Brush::new(&mut backend).unwrap();
        let upper_left = Point2::new(10.0, 10.0);
        brush.rotated_rectangle(
            &mut backend,
            upper_left,
            Point2::new(20.0, 20.0),
            FRAC_PI_2,
            1.0,
            Rgba::WHITE,
        );

        assert_eq!(backend.quads.len(), 4);
        // The last emitted quad anchors the first chain point, the pivot.
        let last = backend.quads.last().unwrap();
        assert!((last.position - upper_left).norm() < EPSILON);
    }

    #[test]
    fn test_rotated_rectangle_ignores_scale() {
        let mut unscaled = RecordingBackend::default();
        let mut scaled = RecordingBackend::default();
        let unscaled_brush = Brush::new(&mut unscaled).unwrap();
        let scaled_brush = Brush::new(&mut scaled).unwrap();

        let upper_left = Point2::new(0.0, 0.0);
        let lower_right = Point2::new(30.0, 20.0);
        unscaled_brush.rotated_rectangle(
            &mut unscaled,
            upper_left,
            lower_right,
            0.3,
            1.0,
            Rgba::WHITE,
        );
        scaled_brush.rotated_rectangle(
            &mut scaled,
            upper_left,
            lower_right,
            0.3,
            5.0,
            Rgba::WHITE,
        );

        // The scale argument has never changed the geometry.
        assert_eq!(unscaled.quads, scaled.quads);
    }

    #[test]
    fn test_sine_wave_last_quad_anchors_start() {
        let mut backend = RecordingBackend::default();
        let brush = Brush::new(&mut backend).unwrap();
        let start = Point2::new(0.0, 0.0);
        brush.sine_wave(
            &mut backend,
            start,
            Point2::new(100.0, 0.0),
            0.5,
            10.0,
            Rgba::WHITE,
        );

        assert!(!backend.quads.is_empty());
        // Reverse walk: the final quad covers the first chain pair.
        let last = backend.quads.last().unwrap();
        assert!((last.position - start).norm() < EPSILON);
    }

    #[test]
    fn test_stroke_exposes_other_strategies() {
        let mut backend = RecordingBackend::default();
        let brush = Brush::new(&mut backend).unwrap();

        let chain = tessellate(&ShapeRequest::Triangle {
            a: Point2::new(0.0, 0.0),
            b: Point2::new(10.0, 0.0),
            c: Point2::new(5.0, 8.0),
        });
        brush.stroke(
            &mut backend,
            &chain,
            Vector2::new(50.0, 50.0),
            Rgba::WHITE,
            Strategy::Polygon,
        );

        // Three segments, two quads each.
        assert_eq!(backend.quads.len(), 6);
    }

    #[test]
    fn test_depth_and_thickness_flow_through() {
        let mut backend = RecordingBackend::default();
        let mut brush = Brush::new(&mut backend).unwrap();
        brush.style.thickness = 4.0;
        brush.style.depth = 0.75;

        brush.line(
            &mut backend,
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Rgba::WHITE,
        );

        let quad = &backend.quads[0];
        assert!((quad.scale.y - 4.0).abs() < EPSILON);
        assert!((quad.depth - 0.75).abs() < EPSILON);
    }
}
