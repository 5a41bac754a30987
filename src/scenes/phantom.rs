// Copyright @yucwang 2026

use crate::core::scene::{Scene, SceneObject};
use crate::emitters::point::PointLight;
use crate::materials::{presets, Material};
use crate::math::constants::{Float, Vector3f};
use crate::math::transform::{Matrix4f, Transform};
use crate::shapes::cube::Cube;
use crate::shapes::sphere::Sphere;
use nalgebra::Rotation3;
use std::sync::Arc;

const ROOM_WIDTH: Float = 20.0;
const ROOM_DEPTH: Float = 20.0;
const ROOM_HEIGHT: Float = 8.0;
const WALL_THICKNESS: Float = 0.1;

fn block(size: Vector3f, rotation_deg: Vector3f, center: Vector3f, material: &Arc<Material>, name: &str) -> SceneObject {
    SceneObject::new(Arc::new(Cube::cuboid(size, rotation_deg, center)), material.clone())
        .with_name(name.to_string())
}

/// Unit cube turned 45 degrees about z, then 45 degrees about x.
fn painted_cube_transform(center: Vector3f) -> Transform {
    let quarter = (45.0 as Float).to_radians();
    let turn = Rotation3::from_euler_angles(quarter, 0.0, 0.0) * Rotation3::from_euler_angles(0.0, 0.0, quarter);
    Transform::new(Matrix4f::new_translation(&center)
                   * turn.to_homogeneous()
                   * Matrix4f::new_nonuniform_scaling(&Vector3f::repeat(0.5)))
}

/// A concrete room open toward `+z` holding a crosswalk, two plywood
/// crates, a chrome ball, a painted cube and a retro-reflective road sign.
/// Lit from the ceiling at `(0, 8, 0)`.
pub fn phantom_scene() -> Scene {
    let (w, d, h, t) = (ROOM_WIDTH, ROOM_DEPTH, ROOM_HEIGHT, WALL_THICKNESS);
    let none = Vector3f::zeros();

    let concrete = Arc::new(presets::concrete());
    let paint = Arc::new(presets::reflective_paint());
    let plywood = Arc::new(presets::plywood());
    let film = Arc::new(presets::reflective_film());
    let steel = Arc::new(presets::stainless_steel());

    let mut scene = Scene::new();
    scene.add_object(block(Vector3f::new(w + t, t, d + t), none, Vector3f::new(0.0, -t / 2.0, 0.0), &concrete, "floor"));
    scene.add_object(block(Vector3f::new(t, h, d), none, Vector3f::new(-w / 2.0, h / 2.0, 0.0), &concrete, "left wall"));
    scene.add_object(block(Vector3f::new(t, h, d), none, Vector3f::new(w / 2.0, h / 2.0, 0.0), &concrete, "right wall"));
    scene.add_object(block(Vector3f::new(w, h, t), none, Vector3f::new(0.0, h / 2.0, -d / 2.0), &concrete, "back wall"));

    for i in -5..5 {
        scene.add_object(block(Vector3f::new(0.7, 0.001, 4.0), none,
                               Vector3f::new(i as Float, 0.0, -8.0), &paint, "crosswalk stripe"));
    }

    scene.add_object(block(Vector3f::repeat(3.0), none, Vector3f::new(-5.0, 1.5, -6.0), &plywood, "crate"));
    scene.add_object(block(Vector3f::repeat(3.0), Vector3f::new(0.0, 20.0, 0.0),
                           Vector3f::new(5.0, 1.5, -6.0), &plywood, "turned crate"));
    let painted = Cube::new(painted_cube_transform(Vector3f::new(-5.0, 3.866, -6.0)), None);
    scene.add_object(SceneObject::new(Arc::new(painted), paint.clone()).with_name("painted cube".to_string()));
    scene.add_object(SceneObject::new(Arc::new(Sphere::new(Vector3f::new(5.0, 3.75, -6.0), 0.75, None)),
                                      Arc::new(presets::chrome()))
        .with_name("chrome ball".to_string()));

    scene.add_object(block(Vector3f::new(1.5, 1.5, 0.001), Vector3f::new(0.0, 0.0, 45.0),
                           Vector3f::new(7.8, 5.0, -5.0 + 0.055), &film, "sign"));
    scene.add_object(block(Vector3f::new(0.1, 5.0, 0.1), none, Vector3f::new(7.8, 2.5, -5.0), &steel, "sign stand"));

    scene.set_light(PointLight::new(Vector3f::new(0.0, 8.0, 0.0)));
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::SensorScene;
    use crate::materials::MaterialKind;
    use crate::math::ray::Ray3f;

    #[test]
    fn test_phantom_layout() {
        let scene = phantom_scene();
        assert_eq!(scene.objects().len(), 4 + 10 + 4 + 2);
        assert_eq!(scene.light().position, Vector3f::new(0.0, 8.0, 0.0));
    }

    #[test]
    fn test_painted_cube_turns_about_z_first() {
        let center = Vector3f::new(-5.0, 3.866, -6.0);
        let to_world = painted_cube_transform(center);
        let half = (0.5 as Float).sqrt();

        // Local +x goes to Rx(45) Rz(45) x, scaled to the half-size.
        let x_axis = to_world.apply_vector(Vector3f::new(1.0, 0.0, 0.0)) * 2.0;
        assert!((x_axis - Vector3f::new(half, 0.5, 0.5)).norm() < 1e-12);

        // The highest corner is (+1, +1, -1) in local space.
        let top = to_world.apply_point(Vector3f::new(1.0, 1.0, -1.0));
        assert!((top - (center + Vector3f::new(0.0, 0.5 + 0.5 * half, 0.5 - 0.5 * half))).norm() < 1e-12);
    }

    #[test]
    fn test_phantom_hits() {
        let scene = phantom_scene();

        // Straight down from the middle of the room lands on bare floor.
        let down = Ray3f::new(Vector3f::new(0.0, 4.0, 0.0), Vector3f::new(0.0, -1.0, 0.0), None, None);
        let hit = scene.find_intersection(&down).unwrap();
        assert!(hit.p().y.abs() < 1e-6);
        assert_eq!(hit.material().map(|m| m.kind()), Some(MaterialKind::Diffuse));

        // Down onto a crosswalk stripe.
        let stripe = Ray3f::new(Vector3f::new(0.0, 4.0, -8.0), Vector3f::new(0.0, -1.0, 0.0), None, None);
        let hit = scene.find_intersection(&stripe).unwrap();
        assert_eq!(hit.material().map(|m| m.kind()), Some(MaterialKind::ReflectivePaint));

        // The room is open behind the origin.
        let out = Ray3f::new(Vector3f::new(0.0, 4.0, 0.0), Vector3f::new(0.0, 0.0, 1.0), None, None);
        assert!(scene.find_intersection(&out).is_none());
    }
}
