// Copyright 2020 @TwoCookingMice

use super::constants::{Float, Vector3f};
use super::ray::Ray3f;

use nalgebra::{Matrix4, Point3, Rotation3};

pub type Matrix4f = Matrix4<Float>;

/// An affine object-to-world transform with its cached inverse.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    matrix: Matrix4f,
    inv_matrix: Matrix4f
}

impl Default for Transform {
    fn default() -> Self {
        Self { matrix: Matrix4f::identity(),
               inv_matrix: Matrix4f::identity() }
    }
}

impl Transform {
    pub fn new(matrix: Matrix4f) -> Self {
        Self { matrix: matrix,
               inv_matrix: matrix.try_inverse().unwrap_or(Matrix4f::identity())}
    }

    /// Scale, then rotate by XYZ Euler angles in degrees, then translate.
    pub fn from_srt(scale: Vector3f, rotation_deg: Vector3f, translation: Vector3f) -> Self {
        let r = rotation_deg.map(|a| a.to_radians());
        let rotation = Rotation3::from_euler_angles(r.x, r.y, r.z).to_homogeneous();
        let matrix = Matrix4f::new_translation(&translation)
            * rotation
            * Matrix4f::new_nonuniform_scaling(&scale);
        Self::new(matrix)
    }

    pub fn apply_point(&self, p: Vector3f) -> Vector3f {
        self.matrix.transform_point(&Point3::from(p)).coords
    }

    pub fn apply_vector(&self, v: Vector3f) -> Vector3f {
        self.matrix.transform_vector(&v)
    }

    // Normals transform with the inverse transpose so that n^T x = 0 survives.
    pub fn apply_normal(&self, n: Vector3f) -> Vector3f {
        self.inv_matrix.transpose().transform_vector(&n)
    }

    pub fn inv_apply_point(&self, p: Vector3f) -> Vector3f {
        self.inv_matrix.transform_point(&Point3::from(p)).coords
    }

    pub fn inv_apply_vector(&self, v: Vector3f) -> Vector3f {
        self.inv_matrix.transform_vector(&v)
    }

    /// Moves a ray into object space. The direction is not renormalized so
    /// that parametric distances agree between the two spaces.
    pub fn inv_apply_ray(&self, ray: &Ray3f) -> (Vector3f, Vector3f) {
        (self.inv_apply_point(ray.origin()), self.inv_apply_vector(ray.dir()))
    }
}
