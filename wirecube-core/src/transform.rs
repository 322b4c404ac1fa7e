/// Axis rotations about the centroid of a point set
use nalgebra::{Matrix3, Rotation3};

use crate::geometry::{centroid, Vertex};

/// Principal rotation axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Right-handed rotation of `angle` radians about this axis.
    ///
    /// Positive angles turn counter-clockwise when viewed from the positive
    /// axis toward the origin.
    pub fn rotation(self, angle: f64) -> Rotation3<f64> {
        let (sin, cos) = angle.sin_cos();
        #[rustfmt::skip]
        let matrix = match self {
            Axis::X => Matrix3::new(
                1.0, 0.0, 0.0,
                0.0, cos, -sin,
                0.0, sin, cos,
            ),
            Axis::Y => Matrix3::new(
                cos, 0.0, sin,
                0.0, 1.0, 0.0,
                -sin, 0.0, cos,
            ),
            Axis::Z => Matrix3::new(
                cos, -sin, 0.0,
                sin, cos, 0.0,
                0.0, 0.0, 1.0,
            ),
        };
        Rotation3::from_matrix_unchecked(matrix)
    }
}

/// Rotate every point by `angle` about `axis`, pivoting on the centroid.
pub fn rotate_about_centroid(points: &mut [Vertex], angle: f64, axis: Axis) {
    if points.is_empty() {
        return;
    }

    let center = centroid(points);
    let rotation = axis.rotation(angle);

    for point in points.iter_mut() {
        let local = *point - center;
        *point = center + rotation * local;
    }
    log::trace!("rotated {} points by {angle} rad about {axis:?}", points.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Cube;
    use nalgebra::{Point3, Vector3};
    use std::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_quarter_turns() {
        let v = Vector3::new(1.0, 0.0, 0.0);
        assert!((Axis::Z.rotation(FRAC_PI_2) * v - Vector3::new(0.0, 1.0, 0.0)).norm() < EPS);
        let v = Vector3::new(0.0, 1.0, 0.0);
        assert!((Axis::X.rotation(FRAC_PI_2) * v - Vector3::new(0.0, 0.0, 1.0)).norm() < EPS);
        let v = Vector3::new(0.0, 0.0, 1.0);
        assert!((Axis::Y.rotation(FRAC_PI_2) * v - Vector3::new(1.0, 0.0, 0.0)).norm() < EPS);
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let original = Cube::new(100.0, 200.0);
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let mut cube = original.clone();
            rotate_about_centroid(cube.vertices_mut(), 0.0, axis);
            assert_eq!(cube, original);
        }
    }

    #[test]
    fn test_pivot_is_centroid() {
        let mut cube = Cube::new(100.0, 200.0);
        rotate_about_centroid(cube.vertices_mut(), 1.3, Axis::X);
        assert!((cube.centroid() - Point3::new(150.0, 150.0, 150.0)).norm() < EPS);
    }

    #[test]
    fn test_empty_slice() {
        let mut points: [Vertex; 0] = [];
        rotate_about_centroid(&mut points, 1.0, Axis::Y);
    }
}
