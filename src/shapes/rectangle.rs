// Copyright @yucwang 2026

use crate::core::computation_node::{generate_node_id, ComputationNode};
use crate::core::shape::{Shape, ShapeHit};
use crate::math::constants::{EPSILON, Float, Vector3f};
use crate::math::ray::Ray3f;
use crate::math::transform::Transform;

/// The square `[-1, 1]^2` of the local `z = 0` plane, facing `+z`, placed by
/// `to_world`.
pub struct Rectangle {
    id: String,
    to_world: Transform,
    normal: Vector3f,
    area: Float,
}

impl Rectangle {
    pub fn new(to_world: Transform, id: Option<String>) -> Self {
        let dp_du = to_world.apply_vector(Vector3f::new(2.0, 0.0, 0.0));
        let dp_dv = to_world.apply_vector(Vector3f::new(0.0, 2.0, 0.0));
        let area = dp_du.cross(&dp_dv).norm();
        let mut normal = dp_du.cross(&dp_dv);
        if normal.norm() > 0.0 {
            normal = normal.normalize();
        } else {
            normal = to_world.apply_normal(Vector3f::new(0.0, 0.0, 1.0));
            if normal.norm() > 0.0 {
                normal = normal.normalize();
            }
        }

        Self { id: id.unwrap_or_else(|| generate_node_id("Rectangle")), to_world, normal, area }
    }

    pub fn normal(&self) -> Vector3f {
        self.normal
    }
}

impl ComputationNode for Rectangle {
    fn id(&self) -> &str {
        &self.id
    }

    fn to_string(&self) -> String {
        format!("Rectangle {} (area {:.3})", self.id, self.area)
    }
}

impl Shape for Rectangle {
    fn ray_intersection(&self, ray: &Ray3f) -> Option<ShapeHit> {
        let (o, d) = self.to_world.inv_apply_ray(ray);
        if d.z.abs() < EPSILON {
            return None;
        }

        // Local and world parameters agree since the direction is not renormalized.
        let t = -o.z / d.z;
        if !ray.test_segment(t) {
            return None;
        }
        let p_local = o + d * t;
        if p_local.x.abs() > 1.0 || p_local.y.abs() > 1.0 {
            return None;
        }

        Some(ShapeHit { p: ray.at(t), normal: self.normal, t })
    }

    fn surface_area(&self) -> Float {
        self.area
    }
}
