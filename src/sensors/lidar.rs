// Copyright @yucwang 2026

use crate::core::computation_node::{generate_node_id, ComputationNode};
use crate::core::error::{CaptureError, ConfigError};
use crate::core::point_cloud::PointCloud;
use crate::core::rng::SensorRng;
use crate::core::scene::{SceneObject, SensorScene};
use crate::core::sensor::{CaptureArtifact, Sensor, SensorKind};
use crate::core::sweep::{sweep_rays, CaptureSettings};
use crate::math::constants::{Float, Vector3f};
use crate::math::pose::Pose;
use crate::sensors::housing::pole_mount;
use crate::sensors::measurement::{measure_range_signal, RangeSample, RangeSignalModel};
use crate::sensors::ray_source::{FieldSpec, RaySource};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LidarConfig {
    pub position: Vector3f,
    pub direction: Vector3f,
    /// Degrees.
    pub divergence: Float,
    pub horizontal_fov: Float,
    pub vertical_fov: Float,
    pub horizontal_resolution: usize,
    pub vertical_resolution: usize,
    pub attenuation: Float,
    pub noise: Float,
}

impl Default for LidarConfig {
    fn default() -> Self {
        Self {
            position: Vector3f::new(0.0, 4.0, 0.0),
            direction: Vector3f::new(0.0, 0.0, -1.0),
            divergence: 0.0,
            horizontal_fov: 360.0,
            vertical_fov: 90.0,
            horizontal_resolution: 512,
            vertical_resolution: 128,
            attenuation: 1.0 / 40.0,
            noise: 0.001,
        }
    }
}

impl LidarConfig {
    /// A 128-channel spinning unit with 0.07 degree beam divergence.
    pub fn ouster(position: Vector3f, direction: Vector3f, horizontal_resolution: usize) -> Self {
        Self {
            position,
            direction,
            divergence: 0.07,
            horizontal_fov: 360.0,
            vertical_fov: 90.0,
            horizontal_resolution,
            vertical_resolution: 128,
            ..Default::default()
        }
    }
}

/// Scanning range sensor producing a point cloud of attenuated,
/// reflectance-weighted returns.
pub struct Lidar {
    id: String,
    source: RaySource,
    model: RangeSignalModel,
    artifact: Option<CaptureArtifact>,
    last_misses: usize,
}

impl Lidar {
    pub fn new(config: LidarConfig) -> Result<Self, ConfigError> {
        let pose = Pose::new(config.position, config.direction)?;
        let field = FieldSpec::new(config.horizontal_fov, config.vertical_fov,
                                   config.horizontal_resolution, config.vertical_resolution)?;
        let source = RaySource::new(pose, field, config.divergence)?;
        let model = RangeSignalModel::new(config.attenuation, config.noise)?;
        Ok(Self::from_parts(source, model))
    }

    pub fn from_parts(source: RaySource, model: RangeSignalModel) -> Self {
        Self {
            id: generate_node_id("LiDAR"),
            source,
            model,
            artifact: None,
            last_misses: 0,
        }
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = id;
        self
    }

    pub fn point_cloud(&self) -> Option<&PointCloud> {
        self.artifact.as_ref().and_then(|a| a.as_point_cloud())
    }

    /// Rays of the latest capture that hit nothing.
    pub fn last_misses(&self) -> usize {
        self.last_misses
    }

    /// Moves the sensor; the ray bundle is rebuilt for the new pose.
    pub fn set_pose(&mut self, pose: Pose) {
        self.source = self.source.reposed(pose);
    }
}

impl ComputationNode for Lidar {
    fn id(&self) -> &str {
        &self.id
    }

    fn to_string(&self) -> String {
        format!("LiDAR {}", self.id)
    }
}

impl Sensor for Lidar {
    fn kind(&self) -> SensorKind {
        SensorKind::Lidar
    }

    fn source(&self) -> &RaySource {
        &self.source
    }

    fn capture(&mut self,
               scene: &dyn SensorScene,
               settings: &CaptureSettings,
               rng: &mut SensorRng) -> Result<(), CaptureError> {
        log::info!("Sensing surroundings with {}", self.describe());
        let start = std::time::Instant::now();

        let model = self.model;
        let samples: Vec<Option<RangeSample>> = sweep_rays(&self.id, self.source.rays(), settings, rng.random(),
            |ray, rng| {
                scene.find_intersection(ray)
                    .map(|hit| measure_range_signal(&model, ray, &hit, rng))
            })?;

        let mut cloud = PointCloud::with_capacity(samples.len());
        for sample in samples.iter().flatten() {
            cloud.log_data_point(sample.signal, sample.position);
        }
        self.last_misses = samples.len() - cloud.len();

        log::info!("{} logged {} returns, {} misses, in {} ms",
                   self.id, cloud.len(), self.last_misses, start.elapsed().as_millis());
        self.artifact = Some(CaptureArtifact::PointCloud(cloud));
        Ok(())
    }

    fn artifact(&self) -> Option<&CaptureArtifact> {
        self.artifact.as_ref()
    }

    fn housing(&self) -> Vec<SceneObject> {
        pole_mount(self.source.pose().position())
    }
}
