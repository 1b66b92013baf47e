//! Shape tessellators - Line, Square, Triangle, Arc, Circle, Ellipse, Pie, SineWave
//!
//! Each tessellator emits points in local (shape-centered) coordinates; the
//! brush offsets the chain by a world position at render time. The one
//! exception is the sine wave, which rotates and translates itself into world
//! space because its placement depends on both endpoints.

use std::f32::consts::TAU;

use nalgebra::Point2;

use super::chain::Chain;
use crate::transform;

/// Sample step along the local x axis of a sine wave, in pixels.
const SINE_WAVE_STEP: f32 = 5.0;

/// An axis-aligned rectangle given by its top-left corner and size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner.
    pub fn top_left(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }

    /// Bottom-right corner.
    pub fn bottom_right(&self) -> Point2<f32> {
        Point2::new(self.x + self.width, self.y + self.height)
    }
}

/// A shape to tessellate.
///
/// Geometric parameters travel with the request; style (color, thickness,
/// depth) stays out of it and is applied when the chain is rendered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeRequest {
    /// A single segment from `start` to `end`
    Line {
        start: Point2<f32>,
        end: Point2<f32>,
    },
    /// An axis-aligned box as a closed 5-point loop
    Square {
        top_left: Point2<f32>,
        bottom_right: Point2<f32>,
    },
    /// A closed 4-point loop through three corners
    Triangle {
        a: Point2<f32>,
        b: Point2<f32>,
        c: Point2<f32>,
    },
    /// A circular arc sampled at `sides + 1` uniform angular steps
    Arc {
        radius: f32,
        sides: u32,
        start_angle: f32,
        sweep_angle: f32,
    },
    /// A full circle; shorthand for an arc sweeping 2π
    Circle { radius: f32, sides: u32 },
    /// An ellipse sampled backward from θ = 2π
    Ellipse {
        semi_major: f32,
        semi_minor: f32,
        sides: u32,
    },
    /// A closed wedge: origin, arc, origin
    Pie {
        radius: f32,
        sides: u32,
        start_angle: f32,
        sweep_angle: f32,
    },
    /// A tapered sine wave between two world-space points
    SineWave {
        start: Point2<f32>,
        end: Point2<f32>,
        frequency: f32,
        amplitude: f32,
    },
}

/// Build the point chain for a shape request.
pub fn tessellate(request: &ShapeRequest) -> Chain {
    let mut chain = Chain::new();
    match *request {
        ShapeRequest::Line { start, end } => line(&mut chain, start, end),
        ShapeRequest::Square {
            top_left,
            bottom_right,
        } => square(&mut chain, top_left, bottom_right),
        ShapeRequest::Triangle { a, b, c } => triangle(&mut chain, a, b, c),
        ShapeRequest::Arc {
            radius,
            sides,
            start_angle,
            sweep_angle,
        } => arc(&mut chain, radius, sides, start_angle, sweep_angle),
        ShapeRequest::Circle { radius, sides } => arc(&mut chain, radius, sides, 0.0, TAU),
        ShapeRequest::Ellipse {
            semi_major,
            semi_minor,
            sides,
        } => ellipse(&mut chain, semi_major, semi_minor, sides),
        ShapeRequest::Pie {
            radius,
            sides,
            start_angle,
            sweep_angle,
        } => pie(&mut chain, radius, sides, start_angle, sweep_angle),
        ShapeRequest::SineWave {
            start,
            end,
            frequency,
            amplitude,
        } => sine_wave(&mut chain, start, end, frequency, amplitude),
    }
    chain
}

fn line(chain: &mut Chain, start: Point2<f32>, end: Point2<f32>) {
    chain.push(start);
    chain.push(end);
}

fn square(chain: &mut Chain, top_left: Point2<f32>, bottom_right: Point2<f32>) {
    chain.push(top_left);
    chain.push(Point2::new(top_left.x, bottom_right.y));
    chain.push(bottom_right);
    chain.push(Point2::new(bottom_right.x, top_left.y));
    chain.push(top_left);
}

fn triangle(chain: &mut Chain, a: Point2<f32>, b: Point2<f32>, c: Point2<f32>) {
    chain.push(a);
    chain.push(b);
    chain.push(c);
    chain.push(a);
}

fn arc(chain: &mut Chain, radius: f32, sides: u32, start_angle: f32, sweep_angle: f32) {
    let step = sweep_angle / sides as f32;

    let mut theta = start_angle;
    for _ in 0..=sides {
        chain.push(Point2::new(radius * theta.cos(), radius * theta.sin()));
        theta += step;
    }
}

fn ellipse(chain: &mut Chain, semi_major: f32, semi_minor: f32, sides: u32) {
    let step = TAU / sides as f32;

    // The loop stops on a raw angle threshold rather than a sample count, so
    // the point count varies with `sides` and the last sample can land past
    // θ = 0. Callers rely on the historical spacing; keep this stopping rule.
    let mut theta = TAU;
    while theta >= -1.0 {
        chain.push(Point2::new(
            semi_major * theta.cos(),
            semi_minor * theta.sin(),
        ));
        theta -= step;
    }
}

fn pie(chain: &mut Chain, radius: f32, sides: u32, start_angle: f32, sweep_angle: f32) {
    chain.push(Point2::origin());
    arc(chain, radius, sides, start_angle, sweep_angle);
    chain.push(Point2::origin());
}

fn sine_wave(
    chain: &mut Chain,
    start: Point2<f32>,
    end: Point2<f32>,
    frequency: f32,
    amplitude: f32,
) {
    let span = end - start;
    let length = span.norm();
    let mid = length / 2.0;

    // Sample along the local x axis with a triangular envelope: zero at both
    // ends, full amplitude at the midpoint.
    let mut x = 0.0_f32;
    while x + SINE_WAVE_STEP < length {
        let envelope = 1.0 - (mid - x).abs() / mid;
        chain.push(Point2::new(
            x,
            envelope * amplitude * (frequency * x).sin(),
        ));
        x += SINE_WAVE_STEP;
    }

    // Land exactly on the far endpoint.
    chain.push(Point2::new(length, 0.0));

    // Place the wave in world space: rotate to the segment's angle, then
    // translate to the start point.
    transform::rotate(chain, span.y.atan2(span.x), Point2::origin());
    for point in chain.points_mut() {
        *point += start.coords;
    }
}
