// Copyright @yucwang 2026

use crate::core::computation_node::{generate_node_id, ComputationNode};
use crate::core::shape::{Shape, ShapeHit};
use crate::math::constants::{EPSILON, Float, Vector3f};
use crate::math::ray::Ray3f;

pub struct Sphere {
    id: String,
    center: Vector3f,
    radius: Float,
}

impl Sphere {
    pub fn new(center: Vector3f, radius: Float, id: Option<String>) -> Self {
        Self { id: id.unwrap_or_else(|| generate_node_id("Sphere")), center, radius: radius.abs() }
    }
}

impl ComputationNode for Sphere {
    fn id(&self) -> &str {
        &self.id
    }

    fn to_string(&self) -> String {
        format!("Sphere {} (radius {:.3})", self.id, self.radius)
    }
}

impl Shape for Sphere {
    fn ray_intersection(&self, ray: &Ray3f) -> Option<ShapeHit> {
        // A point has no surface to hit.
        if self.radius <= EPSILON {
            return None;
        }
        // |o + t d - c|^2 = r^2 with |d| = 1
        let oc = ray.origin() - self.center;
        let half_b = oc.dot(&ray.dir());
        let c = oc.norm_squared() - self.radius * self.radius;
        let discriminant = half_b * half_b - c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let t = [-half_b - sqrt_d, -half_b + sqrt_d]
            .into_iter()
            .find(|&t| ray.test_segment(t))?;
        let p = ray.at(t);
        Some(ShapeHit { p, normal: (p - self.center) / self.radius, t })
    }

    fn surface_area(&self) -> Float {
        4.0 * std::f64::consts::PI * self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_outside_and_inside() {
        let sphere = Sphere::new(Vector3f::new(0.0, 0.0, -5.0), 1.0, None);
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -1.0), None, None);
        let hit = sphere.ray_intersection(&ray).unwrap();
        assert!((hit.t - 4.0).abs() < 1e-9);
        assert!((hit.normal - Vector3f::new(0.0, 0.0, 1.0)).norm() < 1e-9);

        let inside = Ray3f::new(Vector3f::new(0.0, 0.0, -5.0), Vector3f::new(1.0, 0.0, 0.0), None, None);
        let hit = sphere.ray_intersection(&inside).unwrap();
        assert!((hit.t - 1.0).abs() < 1e-9);

        let miss = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 1.0, 0.0), None, None);
        assert!(sphere.ray_intersection(&miss).is_none());
    }

    #[test]
    fn test_zero_radius_is_never_hit() {
        let point = Sphere::new(Vector3f::new(0.0, 0.0, -5.0), 0.0, None);
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -1.0), None, None);
        assert!(point.ray_intersection(&ray).is_none());
        assert_eq!(point.surface_area(), 0.0);
    }
}
