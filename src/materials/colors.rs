// Copyright @yucwang 2026

//! Named base colors for materials.

use crate::math::spectrum::RGBSpectrum;

pub const RED: RGBSpectrum = RGBSpectrum::new(1.0, 0.0, 0.0);
pub const LIME: RGBSpectrum = RGBSpectrum::new(0.0, 1.0, 0.0);
pub const BLUE: RGBSpectrum = RGBSpectrum::new(0.0, 0.0, 1.0);
pub const WHITE: RGBSpectrum = RGBSpectrum::new(1.0, 1.0, 1.0);
pub const BLACK: RGBSpectrum = RGBSpectrum::new(0.0, 0.0, 0.0);
pub const YELLOW: RGBSpectrum = RGBSpectrum::new(1.0, 1.0, 0.0);
pub const CYAN: RGBSpectrum = RGBSpectrum::new(0.0, 1.0, 1.0);
pub const MAGENTA: RGBSpectrum = RGBSpectrum::new(1.0, 0.0, 1.0);
pub const SILVER: RGBSpectrum = RGBSpectrum::new(0.75, 0.75, 0.75);
pub const GRAY: RGBSpectrum = RGBSpectrum::new(0.5, 0.5, 0.5);
pub const MAROON: RGBSpectrum = RGBSpectrum::new(0.5, 0.0, 0.0);
pub const OLIVE: RGBSpectrum = RGBSpectrum::new(0.5, 0.5, 0.0);
pub const GREEN: RGBSpectrum = RGBSpectrum::new(0.0, 0.5, 0.0);
pub const PURPLE: RGBSpectrum = RGBSpectrum::new(0.5, 0.0, 0.5);
pub const TEAL: RGBSpectrum = RGBSpectrum::new(0.0, 0.5, 0.5);
pub const NAVY: RGBSpectrum = RGBSpectrum::new(0.0, 0.0, 0.5);
pub const CHROME: RGBSpectrum = RGBSpectrum::new(0.859, 0.886, 0.914);
pub const WOOD: RGBSpectrum = RGBSpectrum::new(0.898, 0.729, 0.507);
pub const SAFETY_YELLOW: RGBSpectrum = RGBSpectrum::new(0.933, 0.824, 0.01);
