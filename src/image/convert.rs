//! Conversions between `DynamicImage` and HWC rasters.

use image::{DynamicImage, GrayAlphaImage, GrayImage, RgbImage, RgbaImage};
use ndarray::Array3;

use crate::error::{Error, Result};
use crate::raster::{RasterImage, RGBA_CHANNELS, RGB_CHANNELS};

/// Pixel layout a decoded image is converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorLayout {
    /// Single luminance channel.
    Gray,
    /// Luminance plus alpha.
    GrayAlpha,
    /// Red, green, blue.
    #[default]
    Rgb,
    /// Red, green, blue, alpha.
    Rgba,
}

impl ColorLayout {
    /// Number of channels in this layout.
    #[must_use]
    pub const fn channels(self) -> usize {
        match self {
            Self::Gray => 1,
            Self::GrayAlpha => 2,
            Self::Rgb => RGB_CHANNELS,
            Self::Rgba => RGBA_CHANNELS,
        }
    }

    /// Layout with `channels` channels, if one exists.
    #[must_use]
    pub const fn from_channels(channels: usize) -> Option<Self> {
        match channels {
            1 => Some(Self::Gray),
            2 => Some(Self::GrayAlpha),
            RGB_CHANNELS => Some(Self::Rgb),
            RGBA_CHANNELS => Some(Self::Rgba),
            _ => None,
        }
    }
}

/// Convert a decoded image to an 8-bit raster in the requested layout.
///
/// # Errors
///
/// Returns an error if the pixel buffer does not match the image dimensions.
pub fn raster_from_dynamic(img: &DynamicImage, layout: ColorLayout) -> Result<RasterImage> {
    let (width, height) = (img.width() as usize, img.height() as usize);
    let channels = layout.channels();

    let raw = match layout {
        ColorLayout::Gray => img.to_luma8().into_raw(),
        ColorLayout::GrayAlpha => img.to_luma_alpha8().into_raw(),
        ColorLayout::Rgb => img.to_rgb8().into_raw(),
        ColorLayout::Rgba => img.to_rgba8().into_raw(),
    };

    let actual = raw.len();
    Array3::from_shape_vec((height, width, channels), raw).map_err(|_| Error::ShapeMismatch {
        expected: format!("{height}x{width}x{channels} samples"),
        actual: format!("{actual} samples"),
    })
}

/// Convert a raster back to a `DynamicImage` for encoding or display.
///
/// # Errors
///
/// Returns an error if the channel count has no pixel layout or the dimensions do not
/// fit in `u32`.
pub fn raster_to_dynamic(raster: &RasterImage) -> Result<DynamicImage> {
    let (height, width, channels) = raster.dim();

    let layout =
        ColorLayout::from_channels(channels).ok_or(Error::UnsupportedChannels { channels })?;

    let too_large = || Error::UnsupportedDimensions {
        width,
        height,
        reason: "exceeds u32::MAX".to_string(),
    };
    let w = u32::try_from(width).map_err(|_| too_large())?;
    let h = u32::try_from(height).map_err(|_| too_large())?;

    // Logical iteration order is row-major HWC regardless of memory layout.
    let raw: Vec<u8> = raster.iter().copied().collect();
    let mismatch = || Error::ShapeMismatch {
        expected: format!("{w}x{h} image with {channels} channel(s)"),
        actual: format!("{} samples", raster.len()),
    };

    let img = match layout {
        ColorLayout::Gray => {
            DynamicImage::ImageLuma8(GrayImage::from_raw(w, h, raw).ok_or_else(mismatch)?)
        }
        ColorLayout::GrayAlpha => {
            DynamicImage::ImageLumaA8(GrayAlphaImage::from_raw(w, h, raw).ok_or_else(mismatch)?)
        }
        ColorLayout::Rgb => {
            DynamicImage::ImageRgb8(RgbImage::from_raw(w, h, raw).ok_or_else(mismatch)?)
        }
        ColorLayout::Rgba => {
            DynamicImage::ImageRgba8(RgbaImage::from_raw(w, h, raw).ok_or_else(mismatch)?)
        }
    };

    Ok(img)
}

#[cfg(test)]
mod tests {
    use image::{GenericImageView, Rgb, Rgba};

    use super::*;

    #[test]
    fn test_from_dynamic_rgb_shape() {
        let img = DynamicImage::new_rgb8(7, 3);
        let raster = raster_from_dynamic(&img, ColorLayout::Rgb).unwrap();

        assert_eq!(raster.shape(), &[3, 7, 3]);
    }

    #[test]
    fn test_from_dynamic_pixel_placement() {
        let mut rgb = RgbImage::new(2, 2);
        rgb.put_pixel(1, 0, Rgb([10, 20, 30]));
        let raster =
            raster_from_dynamic(&DynamicImage::ImageRgb8(rgb), ColorLayout::Rgb).unwrap();

        // (x = 1, y = 0) lands at row 0, column 1.
        assert_eq!(raster[[0, 1, 0]], 10);
        assert_eq!(raster[[0, 1, 1]], 20);
        assert_eq!(raster[[0, 1, 2]], 30);
        assert_eq!(raster[[1, 0, 0]], 0);
    }

    #[test]
    fn test_from_dynamic_adds_opaque_alpha() {
        let img = DynamicImage::new_rgb8(2, 2);
        let raster = raster_from_dynamic(&img, ColorLayout::Rgba).unwrap();

        assert_eq!(raster.shape(), &[2, 2, 4]);
        assert!(raster.slice(ndarray::s![.., .., 3]).iter().all(|&a| a == 255));
    }

    #[test]
    fn test_to_dynamic_rgba() {
        let raster = Array3::from_shape_fn((2, 3, 4), |(y, x, c)| {
            u8::try_from(y * 100 + x * 10 + c).unwrap()
        });
        let img = raster_to_dynamic(&raster).unwrap();

        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(2, 1), Rgba([120, 121, 122, 123]));
    }

    #[test]
    fn test_to_dynamic_gray() {
        let raster = Array3::from_elem((4, 5, 1), 77u8);
        let img = raster_to_dynamic(&raster).unwrap();

        assert!(matches!(img, DynamicImage::ImageLuma8(_)));
        assert_eq!(img.dimensions(), (5, 4));
    }

    #[test]
    fn test_to_dynamic_rejects_five_channels() {
        let raster = Array3::<u8>::zeros((2, 2, 5));
        assert!(matches!(
            raster_to_dynamic(&raster),
            Err(Error::UnsupportedChannels { channels: 5 })
        ));
    }

    #[test]
    fn test_to_dynamic_handles_non_standard_layout() {
        // Transposed view forces a non-contiguous memory order.
        let raster = Array3::from_shape_fn((3, 2, 3), |(y, x, c)| {
            u8::try_from(y * 50 + x * 5 + c).unwrap()
        });
        let permuted = raster.clone().permuted_axes([1, 0, 2]);
        let img = raster_to_dynamic(&permuted).unwrap();

        assert_eq!(img.dimensions(), (3, 2));
        let pixel = img.get_pixel(2, 1);
        assert_eq!(pixel[0], raster[[2, 1, 0]]);
        assert_eq!(pixel[2], raster[[2, 1, 2]]);
    }

    #[test]
    fn test_layout_channels() {
        for channels in 1..=4 {
            let layout = ColorLayout::from_channels(channels).unwrap();
            assert_eq!(layout.channels(), channels);
        }
        assert_eq!(ColorLayout::from_channels(0), None);
    }
}
