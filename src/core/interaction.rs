// Copyright @yucwang 2023

use crate::materials::Material;
use crate::math::constants::{Float, Vector3f};
use std::sync::Arc;

/// Nearest hit of a ray against the scene. Measurement code only reads it;
/// noisy positions are returned as new values.
#[derive(Debug, Clone)]
pub struct SurfaceIntersection {
    p: Vector3f,
    normal: Vector3f,
    t: Float,
    material: Option<Arc<Material>>,
}

impl SurfaceIntersection {
    pub fn new(new_p: Vector3f,
               new_normal: Vector3f,
               new_t: Float,
               new_material: Option<Arc<Material>>) -> Self {
        Self { p: new_p, normal: new_normal, t: new_t, material: new_material }
    }

    /// Distance from the ray origin.
    pub fn t(&self) -> Float {
        self.t
    }

    pub fn p(&self) -> Vector3f {
        self.p
    }

    pub fn normal(&self) -> Vector3f {
        self.normal
    }

    pub fn material(&self) -> Option<&Material> {
        self.material.as_deref()
    }
}
