// Copyright @yucwang 2026

use crate::core::scene::SceneObject;
use crate::math::constants::Vector3f;
use crate::shapes::cube::Cube;
use crate::shapes::sphere::Sphere;
use std::sync::Arc;

const HEAD_RADIUS: f64 = 0.3;
const POLE_WIDTH: f64 = 0.07;

/// A sensor head on a thin pole reaching down to `y = 0`. Neither part
/// carries a material.
pub fn pole_mount(position: Vector3f) -> Vec<SceneObject> {
    let mut parts = vec![SceneObject::bare(Arc::new(Sphere::new(position, HEAD_RADIUS, None)))
        .with_name("sensor head".to_string())];

    let height = position.y;
    if height > 0.0 {
        let pole = Cube::cuboid(Vector3f::new(POLE_WIDTH, height, POLE_WIDTH),
                                Vector3f::zeros(),
                                Vector3f::new(position.x, height / 2.0, position.z));
        parts.push(SceneObject::bare(Arc::new(pole)).with_name("sensor pole".to_string()));
    }
    parts
}
