//! Affine transforms for body parts.
//!
//! This module provides the [`Transform`] type, a 4x4 homogeneous matrix built
//! from invertible primitives (translation, non-zero scale, rotation). Body
//! parts are positioned by multiplying primitives together, left to right in
//! the order they are written, so `a * b` applies `b` first.
//!
//! # Example
//!
//! ```
//! use walker_scene::Transform;
//! use glam::Vec3;
//!
//! // Swing a limb 30 degrees about its top end instead of its center.
//! let swing = Transform::rotation_x(30.0);
//! let shift = Transform::translation(Vec3::new(0.0, -1.0, 0.0));
//! let limb = swing.repivot(&shift).unwrap();
//!
//! // The pivot stays where it was.
//! let pivot = limb.transform_point(Vec3::new(0.0, -1.0, 0.0));
//! assert!((pivot - Vec3::new(0.0, -1.0, 0.0)).length() < 1e-5);
//! ```

use std::ops::Mul;

use glam::{Mat4, Quat, Vec3};
use walker_core::{Error, Result};

/// Determinant magnitude below which a matrix is treated as singular.
const EPSILON: f32 = 1e-6;

/// A homogeneous affine transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    matrix: Mat4,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        matrix: Mat4::IDENTITY,
    };

    /// Wrap an existing matrix.
    pub fn from_matrix(matrix: Mat4) -> Self {
        Self { matrix }
    }

    /// Translation by `offset`.
    pub fn translation(offset: Vec3) -> Self {
        Self::from_matrix(Mat4::from_translation(offset))
    }

    /// Non-uniform scale.
    ///
    /// # Errors
    /// Returns [`Error::Computation`] if any factor is zero or not finite,
    /// since the result could never be inverted.
    pub fn scale(factors: Vec3) -> Result<Self> {
        if !factors.is_finite() || factors.cmpeq(Vec3::ZERO).any() {
            return Err(Error::Computation(format!(
                "scale factors must be finite and non-zero, got {factors}"
            )));
        }
        Ok(Self::from_matrix(Mat4::from_scale(factors)))
    }

    /// Uniform scale.
    pub fn uniform_scale(factor: f32) -> Result<Self> {
        Self::scale(Vec3::splat(factor))
    }

    /// Rotation by a quaternion.
    pub fn rotation(rotation: Quat) -> Self {
        Self::from_matrix(Mat4::from_quat(rotation))
    }

    /// Rotation about the X axis, in degrees.
    pub fn rotation_x(degrees: f32) -> Self {
        Self::rotation(Quat::from_rotation_x(degrees.to_radians()))
    }

    /// Rotation about the Y axis, in degrees.
    pub fn rotation_y(degrees: f32) -> Self {
        Self::rotation(Quat::from_rotation_y(degrees.to_radians()))
    }

    /// Rotation about the Z axis, in degrees.
    pub fn rotation_z(degrees: f32) -> Self {
        Self::rotation(Quat::from_rotation_z(degrees.to_radians()))
    }

    /// The underlying column-major matrix.
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// Column-major floats, ready for a uniform upload.
    pub fn to_cols_array(&self) -> [f32; 16] {
        self.matrix.to_cols_array()
    }

    /// Check whether the transform can be inverted.
    pub fn is_invertible(&self) -> bool {
        let det = self.matrix.determinant();
        det.is_finite() && det.abs() >= EPSILON
    }

    /// Invert the transform.
    ///
    /// # Errors
    /// Returns [`Error::Computation`] if the matrix is singular. There is no
    /// identity fallback: a broken transform must fail the frame.
    pub fn try_inverse(&self) -> Result<Self> {
        if !self.is_invertible() {
            return Err(Error::Computation(format!(
                "cannot invert transform with determinant {}",
                self.matrix.determinant()
            )));
        }
        Ok(Self::from_matrix(self.matrix.inverse()))
    }

    /// Move the center of this transform to another point.
    ///
    /// Computes `shift * self * inverse(shift)`. With `shift` a translation to
    /// the point a limb attaches at, a rotation in `self` turns the limb about
    /// that point instead of its geometric center.
    pub fn repivot(&self, shift: &Transform) -> Result<Self> {
        Ok(*shift * *self * shift.try_inverse()?)
    }

    /// Matrix for transforming normals: `transpose(inverse(self))`.
    ///
    /// # Errors
    /// Returns [`Error::Computation`] if the transform is singular.
    pub fn normal_matrix(&self) -> Result<Mat4> {
        Ok(self.try_inverse()?.matrix.transpose())
    }

    /// Apply the transform to a point.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.matrix.transform_point3(point)
    }

    /// Apply the transform to a direction (ignores translation).
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.matrix.transform_vector3(vector)
    }

    /// Where the local origin ends up.
    pub fn origin(&self) -> Vec3 {
        self.matrix.w_axis.truncate()
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        Transform::from_matrix(self.matrix * rhs.matrix)
    }
}

impl From<Mat4> for Transform {
    fn from(matrix: Mat4) -> Self {
        Self::from_matrix(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq_vec3(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_transform_default() {
        assert_eq!(Transform::default().matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_composition_applies_right_operand_first() {
        let t = Transform::translation(Vec3::new(10.0, 0.0, 0.0));
        let s = Transform::uniform_scale(2.0).unwrap();

        // Scale first, then translate
        let p = (t * s).transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert!(approx_eq_vec3(p, Vec3::new(12.0, 0.0, 0.0)), "got {p:?}");

        // Translate first, then scale
        let p = (s * t).transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert!(approx_eq_vec3(p, Vec3::new(22.0, 0.0, 0.0)), "got {p:?}");
    }

    #[test]
    fn test_rotation_uses_degrees() {
        let p = Transform::rotation_y(90.0).transform_point(Vec3::X);
        assert!(approx_eq_vec3(p, Vec3::new(0.0, 0.0, -1.0)), "got {p:?}");

        let p = Transform::rotation_x(180.0).transform_point(Vec3::Y);
        assert!(approx_eq_vec3(p, Vec3::NEG_Y), "got {p:?}");

        let p = Transform::rotation_z(90.0).transform_point(Vec3::X);
        assert!(approx_eq_vec3(p, Vec3::Y), "got {p:?}");
    }

    #[test]
    fn test_zero_scale_rejected() {
        let err = Transform::scale(Vec3::new(1.0, 0.0, 1.0)).unwrap_err();
        assert!(matches!(err, Error::Computation(_)));

        let err = Transform::scale(Vec3::new(f32::NAN, 1.0, 1.0)).unwrap_err();
        assert!(matches!(err, Error::Computation(_)));
    }

    #[test]
    fn test_inverse_round_trip() {
        let t = Transform::translation(Vec3::new(1.0, 2.0, 3.0))
            * Transform::rotation_x(33.0)
            * Transform::scale(Vec3::new(2.0, 0.5, 4.0)).unwrap();
        let product = t * t.try_inverse().unwrap();
        assert!(product.matrix().abs_diff_eq(Mat4::IDENTITY, EPSILON));
    }

    #[test]
    fn test_singular_inverse_fails() {
        let singular = Transform::from_matrix(Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0)));
        assert!(!singular.is_invertible());
        assert!(matches!(
            singular.try_inverse(),
            Err(Error::Computation(_))
        ));
        assert!(matches!(
            singular.normal_matrix(),
            Err(Error::Computation(_))
        ));
    }

    #[test]
    fn test_repivot_keeps_pivot_fixed() {
        let pivots = [
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(2.5, -3.0, 0.75),
        ];
        let rotations = [
            Transform::rotation_x(45.0),
            Transform::rotation_x(180.0) * Transform::rotation_x(-30.0),
            Transform::rotation_y(71.0) * Transform::rotation_z(12.0),
        ];

        for pivot in pivots {
            let shift = Transform::translation(pivot);
            for rotation in rotations {
                let pivoted = rotation.repivot(&shift).unwrap();
                let moved = pivoted.transform_point(pivot);
                assert!(
                    approx_eq_vec3(moved, pivot),
                    "pivot {pivot:?} moved to {moved:?}"
                );
            }
        }
    }

    #[test]
    fn test_repivot_wrong_way_round_moves_pivot() {
        // Using the inverse on the left orbits the limb around the wrong point.
        let pivot = Vec3::new(0.0, -1.0, 0.0);
        let shift = Transform::translation(pivot);
        let rotation = Transform::rotation_x(90.0);
        let wrong = shift.try_inverse().unwrap() * rotation * shift;
        assert!(!approx_eq_vec3(wrong.transform_point(pivot), pivot));
    }

    #[test]
    fn test_repivot_differs_from_center_rotation() {
        let shift = Transform::translation(Vec3::new(0.0, -1.0, 0.0));
        let rotation = Transform::rotation_x(90.0);
        let pivoted = rotation.repivot(&shift).unwrap();

        // The geometric center now travels on a circle around the pivot.
        let center = pivoted.transform_point(Vec3::ZERO);
        assert!(approx_eq_vec3(center, Vec3::new(0.0, -1.0, 1.0)), "got {center:?}");
    }

    #[test]
    fn test_normal_matrix_with_scale() {
        let t = Transform::scale(Vec3::new(1.0, 2.0, 1.0)).unwrap();
        let expected = t.matrix().inverse().transpose();
        assert_eq!(t.normal_matrix().unwrap(), expected);
    }

    #[test]
    fn test_origin_and_vectors() {
        let t = Transform::translation(Vec3::new(4.0, 5.0, 6.0)) * Transform::rotation_z(90.0);
        assert_eq!(t.origin(), Vec3::new(4.0, 5.0, 6.0));
        assert!(approx_eq_vec3(t.transform_vector(Vec3::X), Vec3::Y));
    }
}
