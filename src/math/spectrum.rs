// Copyright 2020 @TwoCookingMice

use super::constants::{Float, Vector3f};

use std::ops;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RGBSpectrum {
    rgb: Vector3f
}

impl Default for RGBSpectrum {
    fn default() -> Self {
        Self { rgb: Vector3f::new(0.0, 0.0, 0.0) }
    }
}

impl ops::Index<usize> for RGBSpectrum {
    type Output = Float;

    fn index(&self, idx: usize) -> &Float {
        &self.rgb[idx]
    }
}

impl ops::Mul<Float> for RGBSpectrum {
    type Output = RGBSpectrum;

    fn mul(self, s: Float) -> RGBSpectrum {
        RGBSpectrum { rgb: self.rgb * s }
    }
}

impl ops::Div<Float> for RGBSpectrum {
    type Output = RGBSpectrum;

    fn div(self, s: Float) -> RGBSpectrum {
        RGBSpectrum { rgb: self.rgb / s }
    }
}

impl RGBSpectrum {
    pub const fn new(r: Float, g: Float, b: Float) -> Self {
        Self { rgb: Vector3f::new(r, g, b) }
    }

    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn r(&self) -> Float {
        self.rgb.x
    }

    pub fn g(&self) -> Float {
        self.rgb.y
    }

    pub fn b(&self) -> Float {
        self.rgb.z
    }

    pub fn is_black(&self) -> bool {
        self.rgb.iter().all(|&c| c == 0.0)
    }

    pub fn max_component(&self) -> Float {
        self.rgb.max()
    }

    pub fn as_vector(&self) -> Vector3f {
        self.rgb
    }

    /// Quantizes to 8-bit channels after clamping to [0, 1].
    pub fn to_rgb8(&self) -> [u8; 3] {
        let q = |c: Float| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.rgb.x), q(self.rgb.y), q(self.rgb.z)]
    }
}

/* Tests for RGBSpectrum */

#[cfg(test)]
mod tests {
    use super::RGBSpectrum;

    #[test]
    fn test_is_black() {
        assert!(RGBSpectrum::default().is_black());
        assert!(!RGBSpectrum::new(0.0, 0.1, 0.0).is_black());
    }

    #[test]
    fn test_scale_and_quantize() {
        let c = RGBSpectrum::new(1.0, 0.5, 0.25) * 0.5;
        assert_eq!(c, RGBSpectrum::new(0.5, 0.25, 0.125));
        assert_eq!(c.max_component(), 0.5);
        assert_eq!(RGBSpectrum::new(2.0, -1.0, 0.5).to_rgb8(), [255, 0, 128]);
    }
}
