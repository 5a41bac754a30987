// Copyright @yucwang 2026

use crate::core::point_cloud::PointCloud;
use crate::core::scene::SceneObject;
use crate::math::bitmap::Bitmap;
use crate::math::constants::{Float, Vector3f};
use crate::math::spectrum::RGBSpectrum;

// Samples of matplotlib's inferno map at every eighth of its range.
const INFERNO: [RGBSpectrum; 9] = [
    RGBSpectrum::new(0.001462, 0.000466, 0.013866),
    RGBSpectrum::new(0.087411, 0.044556, 0.224813),
    RGBSpectrum::new(0.258234, 0.038571, 0.406485),
    RGBSpectrum::new(0.416331, 0.090203, 0.432943),
    RGBSpectrum::new(0.578304, 0.148039, 0.404411),
    RGBSpectrum::new(0.735683, 0.215906, 0.330245),
    RGBSpectrum::new(0.865006, 0.316822, 0.226055),
    RGBSpectrum::new(0.954506, 0.468744, 0.099874),
    RGBSpectrum::new(0.988362, 0.998364, 0.644924),
];

/// Inferno color of `t`, clamped to [0, 1].
pub fn inferno(t: Float) -> RGBSpectrum {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let segments = (INFERNO.len() - 1) as Float;
    let x = t * segments;
    let i = (x.floor() as usize).min(INFERNO.len() - 2);
    let f = x - i as Float;
    let (a, b) = (INFERNO[i].as_vector(), INFERNO[i + 1].as_vector());
    let c = a * (1.0 - f) + b * f;
    RGBSpectrum::new(c.x, c.y, c.z)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredPoint {
    pub position: Vector3f,
    pub color: RGBSpectrum,
}

/// Maps each return onto the colormap over the cloud's own signal range.
/// A cloud with a single signal level maps to the bottom of the map.
pub fn color_point_cloud(cloud: &PointCloud) -> Vec<ColoredPoint> {
    let (lo, hi) = match cloud.signal_range() {
        Some(range) => range,
        None => return Vec::new(),
    };
    let span = hi - lo;
    cloud.points().iter().map(|p| {
        let t = if span > 0.0 { (p.signal - lo) / span } else { 0.0 };
        ColoredPoint { position: p.position, color: inferno(t) }
    }).collect()
}

#[derive(Debug, Clone)]
pub struct LabeledImage {
    pub sensor: String,
    pub image: Bitmap,
}

#[derive(Debug, Clone)]
pub struct LabeledCloud {
    pub sensor: String,
    pub points: Vec<ColoredPoint>,
}

/// Everything a viewer needs to present one suite capture.
#[derive(Debug, Clone, Default)]
pub struct DisplayFrame {
    pub images: Vec<LabeledImage>,
    pub point_clouds: Vec<LabeledCloud>,
    pub scene_objects: Vec<SceneObject>,
    pub sensor_housings: Vec<SceneObject>,
}

impl DisplayFrame {
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
            && self.point_clouds.is_empty()
            && self.scene_objects.is_empty()
            && self.sensor_housings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_inferno_endpoints() {
        assert_eq!(inferno(0.0), INFERNO[0]);
        assert_eq!(inferno(1.0), INFERNO[8]);
        assert_eq!(inferno(-3.0), INFERNO[0]);
        assert_eq!(inferno(Float::NAN), INFERNO[0]);

        let mid = inferno(0.0625);
        assert_relative_eq!(mid.r(), (INFERNO[0].r() + INFERNO[1].r()) / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_inferno_brightens() {
        let mut last = inferno(0.0).as_vector().sum();
        for i in 1..=16 {
            let next = inferno(i as Float / 16.0).as_vector().sum();
            assert!(next > last);
            last = next;
        }
    }

    #[test]
    fn test_color_point_cloud() {
        let mut cloud = PointCloud::new();
        assert!(color_point_cloud(&cloud).is_empty());

        cloud.log_data_point(0.2, Vector3f::new(1.0, 0.0, 0.0));
        cloud.log_data_point(0.6, Vector3f::new(2.0, 0.0, 0.0));
        let colored = color_point_cloud(&cloud);
        assert_eq!(colored.len(), 2);
        assert_eq!(colored[0].color, inferno(0.0));
        assert_eq!(colored[1].color, inferno(1.0));
        assert_eq!(colored[1].position, Vector3f::new(2.0, 0.0, 0.0));
    }
}
