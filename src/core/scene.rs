// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::core::interaction::SurfaceIntersection;
use crate::core::shape::Shape;
use crate::emitters::point::PointLight;
use crate::materials::Material;
use crate::math::ray::Ray3f;
use std::sync::Arc;

/// What a sensor needs from the world it looks at. Queries are read-only and
/// may be issued from several worker threads at once.
pub trait SensorScene: Sync {
    fn find_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection>;
    fn light(&self) -> &PointLight;
    fn objects(&self) -> &[SceneObject];
}

#[derive(Clone)]
pub struct SceneObject {
    pub shape: Arc<dyn Shape>,
    pub material: Option<Arc<Material>>,
    pub name: Option<String>,
}

impl SceneObject {
    pub fn new(shape: Arc<dyn Shape>, material: Arc<Material>) -> Self {
        Self { shape, material: Some(material), name: None }
    }

    /// Geometry without a material, such as a sensor mount. Hits on it are
    /// measured as a total reflector.
    pub fn bare(shape: Arc<dyn Shape>) -> Self {
        Self { shape, material: None, name: None }
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn shape(&self) -> &Arc<dyn Shape> {
        &self.shape
    }
}

impl std::fmt::Debug for SceneObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneObject")
            .field("shape", &self.shape.id())
            .field("material", &self.material.as_ref().map(|m| m.kind()))
            .field("name", &self.name)
            .finish()
    }
}

/// Reference scene that tests every object for every ray.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    light: PointLight,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_objects(objects: Vec<SceneObject>) -> Self {
        Self { objects, light: PointLight::default() }
    }

    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    pub fn set_light(&mut self, light: PointLight) {
        self.light = light;
    }
}

impl SensorScene for Scene {
    fn find_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection> {
        let mut nearest: Option<(&SceneObject, crate::core::shape::ShapeHit)> = None;
        for object in &self.objects {
            if let Some(hit) = object.shape.ray_intersection(ray) {
                if nearest.as_ref().map_or(true, |(_, best)| hit.t < best.t) {
                    nearest = Some((object, hit));
                }
            }
        }

        nearest.map(|(object, hit)| {
            SurfaceIntersection::new(hit.p, hit.normal, hit.t, object.material.clone())
        })
    }

    fn light(&self) -> &PointLight {
        &self.light
    }

    fn objects(&self) -> &[SceneObject] {
        &self.objects
    }
}
