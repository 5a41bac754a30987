// Copyright @yucwang 2026

use crate::core::computation_node::{ComputationNode, generate_node_id};
use crate::core::shape::{Shape, ShapeHit};
use crate::math::constants::{EPSILON, Float, Vector3f};
use crate::math::ray::Ray3f;
use crate::math::transform::Transform;

/// The box `[-1, 1]^3` placed by `to_world`. Cuboids of any proportion are
/// built by scaling, e.g. `Cube::cuboid(size, rotation, center)`.
pub struct Cube {
    id: String,
    to_world: Transform,
    area: Float,
}

impl Cube {
    pub fn new(to_world: Transform, id: Option<String>) -> Self {
        let dx = to_world.apply_vector(Vector3f::new(2.0, 0.0, 0.0));
        let dy = to_world.apply_vector(Vector3f::new(0.0, 2.0, 0.0));
        let dz = to_world.apply_vector(Vector3f::new(0.0, 0.0, 2.0));
        let area_xy = dx.cross(&dy).norm();
        let area_xz = dx.cross(&dz).norm();
        let area_yz = dy.cross(&dz).norm();
        let area = 2.0 * (area_xy + area_xz + area_yz);
        Self { id: id.unwrap_or_else(|| generate_node_id("Cube")), to_world, area }
    }

    /// Box with full edge lengths `size`, rotated by XYZ Euler angles in
    /// degrees about its center.
    pub fn cuboid(size: Vector3f, rotation_deg: Vector3f, center: Vector3f) -> Self {
        Self::new(Transform::from_srt(size * 0.5, rotation_deg, center), None)
    }

    fn intersect_local(&self, ray: &Ray3f) -> Option<(Float, Vector3f)> {
        let (o, d) = self.to_world.inv_apply_ray(ray);

        let mut t_min = ray.min_t();
        let mut t_max = ray.max_t();
        let mut near_t = Float::NEG_INFINITY;
        let mut far_t = Float::INFINITY;

        for axis in 0..3 {
            let dir = d[axis];
            if dir.abs() < EPSILON {
                if o[axis] < -1.0 || o[axis] > 1.0 {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / dir;
            let mut t0 = (-1.0 - o[axis]) * inv;
            let mut t1 = (1.0 - o[axis]) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }

            near_t = near_t.max(t0);
            far_t = far_t.min(t1);
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_max < t_min {
                return None;
            }
        }

        // Entering hit when the box is ahead, exit hit when starting inside.
        let t_hit = if ray.test_segment(near_t) { near_t } else { far_t };
        if !ray.test_segment(t_hit) {
            return None;
        }
        let p_local = o + d * t_hit;
        Some((t_hit, cube_normal(p_local)))
    }
}

fn cube_normal(p_local: Vector3f) -> Vector3f {
    let abs = p_local.abs();
    if abs.x >= abs.y && abs.x >= abs.z {
        Vector3f::new(p_local.x.signum(), 0.0, 0.0)
    } else if abs.y >= abs.z {
        Vector3f::new(0.0, p_local.y.signum(), 0.0)
    } else {
        Vector3f::new(0.0, 0.0, p_local.z.signum())
    }
}

impl ComputationNode for Cube {
    fn id(&self) -> &str {
        &self.id
    }

    fn to_string(&self) -> String {
        format!("Cube {} (area {:.3})", self.id, self.area)
    }
}

impl Shape for Cube {
    fn ray_intersection(&self, ray: &Ray3f) -> Option<ShapeHit> {
        let (t, n_local) = self.intersect_local(ray)?;
        let normal = self.to_world.apply_normal(n_local).normalize();
        Some(ShapeHit { p: ray.at(t), normal, t })
    }

    fn surface_area(&self) -> Float {
        self.area
    }
}
