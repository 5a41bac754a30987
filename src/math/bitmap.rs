// Copyright 2020 @TwoCookingMice

use super::constants::Float;
use super::spectrum::RGBSpectrum;

use std::ops;
use std::vec::Vec;

/// A row-major RGB float image. Row 0 is the top of the picture and column 0
/// its left edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    data: Vec<RGBSpectrum>,
    height: usize,
    width: usize
}

impl ops::Index<(usize, usize)> for Bitmap {
    type Output = RGBSpectrum;

    /// Indexed by `(row, col)`.
    fn index(&self, index: (usize, usize)) -> &RGBSpectrum {
        assert!(index.0 < self.height && index.1 < self.width);
        &self.data[index.1 + self.width * index.0]
    }
}

impl ops::IndexMut<(usize, usize)> for Bitmap {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut RGBSpectrum {
        assert!(index.0 < self.height && index.1 < self.width);
        &mut self.data[index.1 + self.width * index.0]
    }
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        let pixel_number = width * height;
        Self { data: vec!(RGBSpectrum::black(); pixel_number),
               width: width,
               height: height }
    }

    /// Lays out one color per ray of a `height x width` grid generated with
    /// azimuth varying fastest and both angles increasing. The generation
    /// grid is rotated a quarter turn and mirrored horizontally so that the
    /// highest elevation lands on row 0 and the leftmost azimuth on column 0,
    /// which amounts to reading the flat sequence backwards.
    pub fn from_scan_order(width: usize, height: usize, colors: &[RGBSpectrum]) -> Self {
        assert_eq!(colors.len(), width * height);
        let data = colors.iter().rev().copied().collect();
        Self { data, width, height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Largest channel value over the whole image, 0 for an empty image.
    pub fn max_value(&self) -> Float {
        self.data.iter().map(|c| c.max_component()).fold(0.0, Float::max)
    }

    pub fn is_black(&self) -> bool {
        self.data.iter().all(|c| c.is_black())
    }

    pub fn scaled(&self, factor: Float) -> Self {
        Self {
            data: self.data.iter().map(|&c| c * factor).collect(),
            width: self.width,
            height: self.height,
        }
    }

    pub fn to_rgb8_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            image::Rgb(self[(y as usize, x as usize)].to_rgb8())
        })
    }
}

/* Test for Bitmap */
