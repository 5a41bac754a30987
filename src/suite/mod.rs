// Copyright @yucwang 2026

pub mod display;

use crate::core::computation_node::ComputationNode;
use crate::core::error::{CaptureError, ConfigError};
use crate::core::rng::seeded;
use crate::core::scene::SensorScene;
use crate::core::sensor::{CaptureArtifact, Sensor};
use crate::core::sweep::CaptureSettings;
use crate::math::bitmap::Bitmap;
use crate::math::constants::{Float, Vector3f};
use crate::sensors::camera::{AspectRatio, Camera, CameraConfig};
use crate::sensors::lidar::{Lidar, LidarConfig};
use display::{color_point_cloud, DisplayFrame, LabeledCloud, LabeledImage};

/// Images are shown at `value / (max * DISPLAY_HEADROOM)`.
pub const DISPLAY_HEADROOM: Float = 1.2;

/// A group of sensors captured together against one scene.
pub struct SensorSuite {
    position: Vector3f,
    sensors: Vec<Box<dyn Sensor>>,
    artifacts: Vec<(String, CaptureArtifact)>,
}

impl SensorSuite {
    pub fn new(position: Vector3f) -> Self {
        Self { position, sensors: Vec::new(), artifacts: Vec::new() }
    }

    /// The autonomous-vehicle layout: a roof LiDAR and two front corner
    /// cameras, all relative to `position`.
    pub fn av_suite(position: Vector3f) -> Result<Self, ConfigError> {
        let mut suite = Self::new(position);
        suite.add_sensor(Box::new(Lidar::new(LidarConfig {
            position: position + Vector3f::new(0.0, 4.0, 0.0),
            ..Default::default()
        })?));
        for side in [-1.0, 1.0] {
            suite.add_sensor(Box::new(Camera::new(CameraConfig {
                position: position + Vector3f::new(1.5 * side, 2.0, -1.5),
                direction: Vector3f::new(side, 0.0, -1.0),
                horizontal_fov: 120.0,
                horizontal_resolution: 640,
                aspect_ratio: AspectRatio::FourThirds,
            })?));
        }
        Ok(suite)
    }

    pub fn position(&self) -> Vector3f {
        self.position
    }

    /// Sensors are kept grouped by kind, range sensors first, in insertion
    /// order within a kind.
    pub fn add_sensor(&mut self, sensor: Box<dyn Sensor>) {
        let at = self.sensors.partition_point(|s| s.kind() <= sensor.kind());
        self.sensors.insert(at, sensor);
    }

    pub fn sensors(&self) -> &[Box<dyn Sensor>] {
        &self.sensors
    }

    /// Captures every sensor in order. Each sensor draws its capture seed
    /// from one generator seeded with `settings.seed`. On error the suite is
    /// left without artifacts.
    pub fn capture(&mut self, scene: &dyn SensorScene, settings: &CaptureSettings) -> Result<(), CaptureError> {
        self.artifacts.clear();
        let mut rng = seeded(settings.seed);
        let start = std::time::Instant::now();

        for sensor in self.sensors.iter_mut() {
            log::debug!("Suite capturing {}", sensor.describe());
            sensor.capture(scene, settings, &mut rng)?;
        }

        self.artifacts = self.sensors.iter()
            .filter_map(|s| s.artifact().map(|a| (s.id().to_string(), a.clone())))
            .collect();
        log::info!("Suite captured {} artifacts from {} sensors in {} ms",
                   self.artifacts.len(), self.sensors.len(), start.elapsed().as_millis());
        Ok(())
    }

    /// `(sensor id, artifact)` pairs of the latest capture, in capture order.
    pub fn artifacts(&self) -> &[(String, CaptureArtifact)] {
        &self.artifacts
    }

    pub fn images(&self) -> impl Iterator<Item = &Bitmap> {
        self.artifacts.iter().filter_map(|(_, a)| a.as_image())
    }

    /// Largest channel value over every image artifact, 0 when there is none.
    pub fn normalization_constant(&self) -> Float {
        self.images().map(|image| image.max_value()).fold(0.0, Float::max)
    }

    /// Images scaled for display by the shared constant and headroom. When
    /// every image is black they are returned unscaled.
    pub fn normalized_images(&self) -> Vec<Bitmap> {
        let scale = self.normalization_constant() * DISPLAY_HEADROOM;
        self.images()
            .map(|image| if scale > 0.0 { image.scaled(1.0 / scale) } else { image.clone() })
            .collect()
    }

    pub fn display(&self, scene: &dyn SensorScene, show_scene: bool, show_sensor: bool) -> DisplayFrame {
        let mut frame = DisplayFrame::default();
        let mut normalized = self.normalized_images().into_iter();

        for (sensor, artifact) in self.artifacts.iter() {
            match artifact {
                CaptureArtifact::PointCloud(cloud) => frame.point_clouds.push(LabeledCloud {
                    sensor: sensor.clone(),
                    points: color_point_cloud(cloud),
                }),
                CaptureArtifact::Image(_) => {
                    if let Some(image) = normalized.next() {
                        frame.images.push(LabeledImage { sensor: sensor.clone(), image });
                    }
                }
            }
        }

        if show_scene {
            frame.scene_objects = scene.objects().to_vec();
        }
        if show_sensor {
            frame.sensor_housings = self.sensors.iter().flat_map(|s| s.housing()).collect();
        }
        frame
    }
}
