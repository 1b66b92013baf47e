//! Chain type - the ordered point sequence produced by tessellation
//!
//! Points are connected pairwise by the renderer in the order they were
//! pushed. Duplicates are meaningful: a pie wedge visits the origin twice,
//! and a closed loop repeats its first point at the end.

use nalgebra::Point2;

/// An ordered, mutable sequence of 2D points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chain {
    points: Vec<Point2<f32>>,
}

impl Chain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create an empty chain with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append a point to the end of the chain.
    pub fn push(&mut self, point: Point2<f32>) {
        self.points.push(point);
    }

    /// Number of points in the chain.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the chain has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points, in insertion order.
    pub fn points(&self) -> &[Point2<f32>] {
        &self.points
    }

    /// Mutable access to the points, for in-place transforms.
    pub fn points_mut(&mut self) -> &mut [Point2<f32>] {
        &mut self.points
    }

    /// Whether the chain forms a closed loop (first point equals last).
    pub fn is_closed(&self) -> bool {
        self.points.len() >= 2 && self.points.first() == self.points.last()
    }
}

impl From<Vec<Point2<f32>>> for Chain {
    fn from(points: Vec<Point2<f32>>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point2<f32>> for Chain {
    fn from_iter<I: IntoIterator<Item = Point2<f32>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
