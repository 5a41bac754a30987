// Copyright @yucwang 2026

use crate::core::computation_node::{generate_node_id, ComputationNode};
use crate::core::error::{CaptureError, ConfigError};
use crate::core::rng::SensorRng;
use crate::core::scene::{SceneObject, SensorScene};
use crate::core::sensor::{CaptureArtifact, Sensor, SensorKind};
use crate::core::sweep::{sweep_rays, CaptureSettings};
use crate::math::bitmap::Bitmap;
use crate::math::constants::{Float, Vector3f};
use crate::math::pose::Pose;
use crate::math::spectrum::RGBSpectrum;
use crate::sensors::housing::pole_mount;
use crate::sensors::measurement::measure_pixel;
use crate::sensors::ray_source::{FieldSpec, RaySource};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    FourThirds,
    Widescreen,
}

impl AspectRatio {
    pub fn ratio(&self) -> Float {
        match self {
            AspectRatio::FourThirds => 4.0 / 3.0,
            AspectRatio::Widescreen => 16.0 / 9.0,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "4:3" => Some(AspectRatio::FourThirds),
            "16:9" => Some(AspectRatio::Widescreen),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub position: Vector3f,
    pub direction: Vector3f,
    /// Degrees.
    pub horizontal_fov: Float,
    pub horizontal_resolution: usize,
    pub aspect_ratio: AspectRatio,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vector3f::new(2.0, 2.0, -2.0),
            direction: Vector3f::new(1.0, 0.0, -1.0),
            horizontal_fov: 150.0,
            horizontal_resolution: 640,
            aspect_ratio: AspectRatio::FourThirds,
        }
    }
}

impl CameraConfig {
    pub fn vertical_fov(&self) -> Float {
        self.horizontal_fov / self.aspect_ratio.ratio()
    }

    pub fn vertical_resolution(&self) -> usize {
        (self.horizontal_resolution as Float / self.aspect_ratio.ratio()).floor() as usize
    }
}

/// Passive sensor shading one pixel per ray under the scene's point light.
pub struct Camera {
    id: String,
    source: RaySource,
    artifact: Option<CaptureArtifact>,
}

impl Camera {
    pub fn new(config: CameraConfig) -> Result<Self, ConfigError> {
        let pose = Pose::new(config.position, config.direction)?;
        let field = FieldSpec::new(config.horizontal_fov, config.vertical_fov(),
                                   config.horizontal_resolution, config.vertical_resolution())?;
        let source = RaySource::new(pose, field, 0.0)?;
        Ok(Self {
            id: generate_node_id("Camera"),
            source,
            artifact: None,
        })
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = id;
        self
    }

    pub fn image(&self) -> Option<&Bitmap> {
        self.artifact.as_ref().and_then(|a| a.as_image())
    }

    pub fn set_pose(&mut self, pose: Pose) {
        self.source = self.source.reposed(pose);
    }
}

impl ComputationNode for Camera {
    fn id(&self) -> &str {
        &self.id
    }

    fn to_string(&self) -> String {
        format!("Camera {}", self.id)
    }
}

impl Sensor for Camera {
    fn kind(&self) -> SensorKind {
        SensorKind::Camera
    }

    fn source(&self) -> &RaySource {
        &self.source
    }

    fn capture(&mut self,
               scene: &dyn SensorScene,
               settings: &CaptureSettings,
               rng: &mut SensorRng) -> Result<(), CaptureError> {
        log::info!("Taking a picture with {}", self.describe());
        let start = std::time::Instant::now();

        let light = scene.light();
        let colors: Vec<RGBSpectrum> = sweep_rays(&self.id, self.source.rays(), settings, rng.random(),
            |ray, _| match scene.find_intersection(ray) {
                Some(hit) => measure_pixel(ray, &hit, light),
                None => RGBSpectrum::black(),
            })?;

        let field = self.source.field();
        let (width, height) = (field.horizontal_resolution(), field.vertical_resolution());
        if colors.len() != width * height {
            return Err(CaptureError::Incomplete(self.id.clone()));
        }
        let image = Bitmap::from_scan_order(width, height, &colors);

        log::info!("{} finished a {}x{} image in {} ms", self.id, width, height, start.elapsed().as_millis());
        self.artifact = Some(CaptureArtifact::Image(image));
        Ok(())
    }

    fn artifact(&self) -> Option<&CaptureArtifact> {
        self.artifact.as_ref()
    }

    fn housing(&self) -> Vec<SceneObject> {
        pole_mount(self.source.pose().position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::seeded;
    use crate::core::scene::Scene;
    use crate::emitters::point::PointLight;
    use crate::materials::{colors, Material};
    use crate::math::transform::Transform;
    use crate::shapes::cube::Cube;
    use crate::shapes::rectangle::Rectangle;
    use std::sync::Arc;

    fn small_camera(direction: Vector3f) -> Camera {
        Camera::new(CameraConfig {
            position: Vector3f::zeros(),
            direction,
            horizontal_fov: 90.0,
            horizontal_resolution: 8,
            aspect_ratio: AspectRatio::FourThirds,
        }).unwrap()
    }

    #[test]
    fn test_vertical_field_from_aspect() {
        let config = CameraConfig::default();
        assert_eq!(config.vertical_resolution(), 480);
        assert!((config.vertical_fov() - 112.5).abs() < 1e-12);

        let wide = CameraConfig { aspect_ratio: AspectRatio::Widescreen, ..Default::default() };
        assert_eq!(wide.vertical_resolution(), 360);
        assert_eq!(AspectRatio::from_name("16:9"), Some(AspectRatio::Widescreen));
        assert_eq!(AspectRatio::from_name("1:1"), None);
    }

    #[test]
    fn test_empty_scene_is_black() {
        let mut camera = small_camera(Vector3f::new(0.0, 0.0, -1.0));
        camera.capture(&Scene::new(), &CaptureSettings::default(), &mut seeded(0)).unwrap();
        let image = camera.image().unwrap();
        assert_eq!((image.width(), image.height()), (8, 6));
        assert!(image.is_black());
    }

    fn slab_scene(size: Vector3f, center: Vector3f) -> Scene {
        let slab = Cube::cuboid(size, Vector3f::zeros(), center);
        let material = Arc::new(Material::diffuse(0.5, 1.0).unwrap());
        let mut scene = Scene::with_objects(vec![SceneObject::new(Arc::new(slab), material)]);
        scene.set_light(PointLight::new(Vector3f::zeros()));
        scene
    }

    #[test]
    fn test_scene_behind_camera_is_black() {
        let mut camera = small_camera(Vector3f::new(0.0, 0.0, -1.0));
        camera.capture(&slab_scene(Vector3f::new(50.0, 50.0, 1.0), Vector3f::new(0.0, 0.0, 5.5)), &CaptureSettings::default(), &mut seeded(0)).unwrap();
        let image = camera.image().unwrap();
        assert_eq!((image.width(), image.height()), (8, 6));
        assert!(image.is_black());
    }

    #[test]
    fn test_set_pose_turns_the_view() {
        let scene = slab_scene(Vector3f::new(1.0, 50.0, 50.0), Vector3f::new(8.5, 0.0, 0.0));
        let mut camera = small_camera(Vector3f::new(0.0, 0.0, -1.0));
        camera.capture(&scene, &CaptureSettings::default(), &mut seeded(0)).unwrap();
        assert!(camera.image().unwrap().is_black());

        camera.set_pose(Pose::new(Vector3f::zeros(), Vector3f::new(1.0, 0.0, 0.0)).unwrap());
        assert!((camera.source().pose().direction() - Vector3f::new(1.0, 0.0, 0.0)).norm() < 1e-12);
        assert!(camera.source().rays().iter().all(|ray| ray.dir().x > 0.5));

        camera.capture(&scene, &CaptureSettings::default(), &mut seeded(0)).unwrap();
        let image = camera.image().unwrap();
        assert_eq!((image.width(), image.height()), (8, 6));
        for row in 0..image.height() {
            for col in 0..image.width() {
                assert!(!image[(row, col)].is_black());
            }
        }
    }

    #[test]
    fn test_image_orientation() {
        // Red wall on the left half (x < 0), lit from behind the camera.
        let left = Rectangle::new(Transform::from_srt(Vector3f::new(10.0, 20.0, 1.0),
                                                      Vector3f::zeros(),
                                                      Vector3f::new(-10.0, 0.0, -5.0)), None);
        let material = Arc::new(Material::diffuse(0.5, 1.0).unwrap().with_color(colors::RED));
        let mut scene = Scene::with_objects(vec![SceneObject::new(Arc::new(left), material)]);
        scene.set_light(PointLight::new(Vector3f::new(0.0, 0.0, 5.0)));

        let mut camera = small_camera(Vector3f::new(0.0, 0.0, -1.0));
        camera.capture(&scene, &CaptureSettings::default(), &mut seeded(0)).unwrap();
        let image = camera.image().unwrap();

        for row in 0..image.height() {
            assert!(image[(row, 0)].r() > 0.0);
            assert!(image[(row, image.width() - 1)].is_black());
        }
    }

    #[test]
    fn test_image_top_row_is_highest() {
        // Floor below the camera only shows up in the bottom rows.
        let floor = Rectangle::new(Transform::from_srt(Vector3f::new(50.0, 50.0, 1.0),
                                                       Vector3f::new(-90.0, 0.0, 0.0),
                                                       Vector3f::new(0.0, -2.0, 0.0)), None);
        let material = Arc::new(Material::diffuse(0.5, 1.0).unwrap());
        let mut scene = Scene::with_objects(vec![SceneObject::new(Arc::new(floor), material)]);
        scene.set_light(PointLight::new(Vector3f::new(0.0, 5.0, -3.0)));

        let mut camera = small_camera(Vector3f::new(0.0, 0.0, -1.0));
        camera.capture(&scene, &CaptureSettings::default(), &mut seeded(0)).unwrap();
        let image = camera.image().unwrap();
        let last = image.height() - 1;
        assert!((0..image.width()).all(|col| image[(0, col)].is_black()));
        assert!((0..image.width()).all(|col| !image[(last, col)].is_black()));
    }

    #[test]
    fn test_cancelled_capture_keeps_previous_image() {
        let mut camera = small_camera(Vector3f::new(0.0, 0.0, -1.0));
        camera.capture(&Scene::new(), &CaptureSettings::default(), &mut seeded(0)).unwrap();
        let settings = CaptureSettings::default();
        settings.cancel.cancel();
        assert!(camera.capture(&Scene::new(), &settings, &mut seeded(0)).is_err());
        assert!(camera.image().is_some());
    }
}
