//! In-memory raster images and solid canvas constructors.

use ndarray::{Array3, Axis};

/// Raster image in HWC layout (height, width, channels) with 8-bit samples.
pub type RasterImage = Array3<u8>;

/// Channel index of red in an RGB(A) raster.
pub const RED: usize = 0;

/// Channel index of green in an RGB(A) raster.
pub const GREEN: usize = 1;

/// Channel index of blue in an RGB(A) raster.
pub const BLUE: usize = 2;

/// Channel index of alpha in an RGBA raster.
pub const ALPHA: usize = 3;

/// Number of channels in RGB images.
pub const RGB_CHANNELS: usize = 3;

/// Number of channels in RGBA images.
pub const RGBA_CHANNELS: usize = 4;

/// Darkest sample value.
pub const SAMPLE_MIN: u8 = 0;

/// Brightest sample value.
pub const SAMPLE_MAX: u8 = u8::MAX;

/// Dimensions of a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RasterShape {
    pub height: usize,
    pub width: usize,
    pub channels: usize,
}

impl std::fmt::Display for RasterShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.height, self.width, self.channels)
    }
}

/// Shape of `image` as (height, width, channels).
#[must_use]
pub fn shape_of(image: &RasterImage) -> RasterShape {
    let (height, width, channels) = image.dim();
    RasterShape {
        height,
        width,
        channels,
    }
}

/// Number of channels along the last axis.
#[must_use]
pub fn channel_count(image: &RasterImage) -> usize {
    image.len_of(Axis(2))
}

/// Raster with every sample set to `value`.
#[must_use]
pub fn solid(height: usize, width: usize, channels: usize, value: u8) -> RasterImage {
    Array3::from_elem((height, width, channels), value)
}

/// Raster with every sample set to 0.
#[must_use]
pub fn solid_black(height: usize, width: usize, channels: usize) -> RasterImage {
    Array3::zeros((height, width, channels))
}

/// Raster with every sample set to 255.
#[must_use]
pub fn solid_white(height: usize, width: usize, channels: usize) -> RasterImage {
    solid(height, width, channels, SAMPLE_MAX)
}

/// Black canvas with the same shape as `image`.
#[must_use]
pub fn black_like(image: &RasterImage) -> RasterImage {
    Array3::zeros(image.raw_dim())
}

/// White canvas with the same shape as `image`.
#[must_use]
pub fn white_like(image: &RasterImage) -> RasterImage {
    Array3::from_elem(image.raw_dim(), SAMPLE_MAX)
}
