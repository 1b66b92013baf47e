//! Segment renderer - walks a chain pairwise and emits quads
//!
//! The chain is walked from its last pair down to its first, so render order
//! is the reverse of creation order. The backend paints quads in arrival
//! order and alpha blending makes that visible, which makes the reverse walk
//! part of the contract rather than a loop-direction accident.

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::backend::DrawQuad;
use crate::style::Style;
use crate::tessellate::Chain;

/// How a chain is turned into quads.
///
/// The strategy is always chosen by the caller, never inferred from the
/// chain's content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// One isotropic stamp per pair, anchored at the later point
    Point,
    /// One quad per pair, stretched to exactly span the segment
    Line,
    /// Unrotated unit-spaced stamps along each segment
    Square,
    /// Overlapping rotated dashes along each segment
    Round,
    /// Line-style quad plus a vertex stamp per pair
    Polygon,
}

impl Strategy {
    /// Minimum chain length below which the strategy emits nothing.
    fn min_points(self) -> usize {
        match self {
            Strategy::Point => 1,
            _ => 2,
        }
    }
}

/// Render a chain as an ordered sequence of draw quads.
///
/// `offset` is added to every chain point, placing the shape in world space.
/// Chains shorter than the strategy's minimum produce an empty sequence;
/// degenerate geometry is a silent no-op, never an error.
pub fn render(
    chain: &Chain,
    offset: Vector2<f32>,
    style: &Style,
    strategy: Strategy,
) -> Vec<DrawQuad> {
    let mut quads = Vec::new();
    if chain.len() < strategy.min_points() {
        return quads;
    }

    let points = chain.points();
    for i in (1..points.len()).rev() {
        let first = points[i - 1];
        let second = points[i];

        let delta = second - first;
        let distance = delta.norm();
        // atan2(0, 0) is 0, so a zero-length segment comes out as an
        // unrotated, zero-scale quad rather than an error.
        let angle = delta.y.atan2(delta.x);

        match strategy {
            Strategy::Point => {
                quads.push(DrawQuad {
                    position: second + offset,
                    rotation: angle,
                    origin: Point2::new(0.5, 0.5),
                    scale: Vector2::new(style.thickness, style.thickness),
                    color: style.color,
                    depth: style.depth,
                });
            }
            Strategy::Line => {
                quads.push(DrawQuad {
                    position: first + offset,
                    rotation: angle,
                    origin: Point2::new(0.0, 0.5),
                    scale: Vector2::new(distance, style.thickness),
                    color: style.color,
                    depth: style.depth,
                });
            }
            Strategy::Square => {
                let direction = delta.normalize();
                let mut cursor = first;
                for _ in 0..distance.round() as i64 {
                    // Advance before stamping; the first stamp sits one unit
                    // past the segment start.
                    cursor += direction;
                    quads.push(DrawQuad {
                        position: cursor + offset,
                        rotation: 0.0,
                        origin: Point2::origin(),
                        scale: Vector2::new(style.thickness, style.thickness),
                        color: style.color,
                        depth: style.depth,
                    });
                }
            }
            Strategy::Round => {
                let direction = delta.normalize();
                let mut cursor = first;
                for _ in 0..distance.round() as i64 {
                    cursor += direction;
                    // Each dash is centered between the cursor and the
                    // segment end and spans the full segment distance, so
                    // consecutive dashes overlap heavily.
                    quads.push(DrawQuad {
                        position: cursor + 0.5 * (second - cursor) + offset,
                        rotation: angle,
                        origin: Point2::new(0.5, 0.5),
                        scale: Vector2::new(distance, style.thickness),
                        color: style.color,
                        depth: style.depth,
                    });
                }
            }
            Strategy::Polygon => {
                // Outline plus vertex marker: a centered stretched quad for
                // the segment, then a stamp at the segment's starting vertex.
                quads.push(DrawQuad {
                    position: first + 0.5 * delta + offset,
                    rotation: angle,
                    origin: Point2::new(0.5, 0.5),
                    scale: Vector2::new(distance, style.thickness),
                    color: style.color,
                    depth: style.depth,
                });
                quads.push(DrawQuad {
                    position: first + offset,
                    rotation: angle,
                    origin: Point2::new(0.5, 0.5),
                    scale: Vector2::new(style.thickness, style.thickness),
                    color: style.color,
                    depth: style.depth,
                });
            }
        }
    }

    quads
}
