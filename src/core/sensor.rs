// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::core::error::CaptureError;
use crate::core::point_cloud::PointCloud;
use crate::core::rng::SensorRng;
use crate::core::scene::{SceneObject, SensorScene};
use crate::core::sweep::CaptureSettings;
use crate::math::bitmap::Bitmap;
use crate::sensors::ray_source::RaySource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SensorKind {
    Lidar,
    Camera,
}

/// What one sweep of a sensor produces.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureArtifact {
    PointCloud(PointCloud),
    Image(Bitmap),
}

impl CaptureArtifact {
    pub fn as_image(&self) -> Option<&Bitmap> {
        match self {
            CaptureArtifact::Image(image) => Some(image),
            CaptureArtifact::PointCloud(_) => None,
        }
    }

    pub fn as_point_cloud(&self) -> Option<&PointCloud> {
        match self {
            CaptureArtifact::PointCloud(cloud) => Some(cloud),
            CaptureArtifact::Image(_) => None,
        }
    }
}

pub trait Sensor: ComputationNode + Send {
    fn kind(&self) -> SensorKind;
    fn source(&self) -> &RaySource;

    /// Sweeps every ray against `scene` and replaces the held artifact. On
    /// error the previous artifact is kept.
    fn capture(&mut self,
               scene: &dyn SensorScene,
               settings: &CaptureSettings,
               rng: &mut SensorRng) -> Result<(), CaptureError>;

    /// Artifact of the latest successful capture.
    fn artifact(&self) -> Option<&CaptureArtifact>;

    /// Physical body of the sensor, for display next to its data.
    fn housing(&self) -> Vec<SceneObject>;

    fn describe(&self) -> String {
        let field = self.source().field();
        format!("{} ({} rays, {}x{})",
                ComputationNode::to_string(self),
                self.source().len(),
                field.horizontal_resolution(),
                field.vertical_resolution())
    }
}
