//! Chain transforms - rotation about an arbitrary pivot
//!
//! Rotation is always explicit about a pivot; there is no implicit origin.
//! The facade passes a shape's own anchor as the pivot by convention.

use nalgebra::{Point2, Rotation2};

use crate::tessellate::Chain;

/// Rotate every point of a chain about a pivot, in place.
///
/// Applies the standard counter-clockwise 2D rotation. Chain order is
/// unchanged and every point keeps its distance to the pivot.
pub fn rotate(chain: &mut Chain, angle: f32, pivot: Point2<f32>) {
    let rotation = Rotation2::new(angle);
    for point in chain.points_mut() {
        *point = pivot + rotation * (*point - pivot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tessellate::{tessellate, ShapeRequest};
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_rotate_90_degrees_about_origin() {
        let mut chain: Chain = vec![Point2::new(1.0, 0.0)].into();
        rotate(&mut chain, FRAC_PI_2, Point2::origin());
        let point = chain.points()[0];
        assert!(point.x.abs() < EPSILON);
        assert!((point.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_rotate_about_pivot() {
        let mut chain: Chain = vec![Point2::new(2.0, 1.0)].into();
        rotate(&mut chain, PI, Point2::new(1.0, 1.0));
        let point = chain.points()[0];
        assert!((point.x - 0.0).abs() < EPSILON);
        assert!((point.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_rotation_preserves_distance_to_pivot() {
        let pivot = Point2::new(-3.5, 12.25);
        let angles = [0.1, FRAC_PI_2, 1.0, PI, 5.0];

        let original = tessellate(&ShapeRequest::Circle {
            radius: 64.0,
            sides: 20,
        });

        for &angle in &angles {
            let mut chain = original.clone();
            rotate(&mut chain, angle, pivot);

            assert_eq!(chain.len(), original.len());
            for (before, after) in original.points().iter().zip(chain.points()) {
                let d_before = (*before - pivot).norm();
                let d_after = (*after - pivot).norm();
                assert!((d_before - d_after).abs() < EPSILON);
            }
        }
    }
}
