//! Image saving utilities.

use std::path::Path;

use crate::error::{Error, Result};
use crate::raster::RasterImage;

use super::raster_to_dynamic;

/// Encoder settings for [`save_image`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOptions {
    /// Output JPEG quality (1-100). Ignored for other formats.
    pub jpeg_quality: u8,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self { jpeg_quality: 95 }
    }
}

impl SaveOptions {
    /// Validate the options.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(Error::InvalidParameter {
                name: "jpeg_quality".to_string(),
                reason: "must be between 1 and 100".to_string(),
            });
        }

        Ok(())
    }
}

/// Save a raster as an image file.
///
/// The format is inferred from the extension; files without one are written as PNG.
/// Rasters with 1, 2, 3 or 4 channels are written as gray, gray+alpha, RGB and RGBA.
///
/// # Errors
///
/// Returns an error if the options are invalid, the raster cannot be represented as an
/// image, or encoding fails.
pub fn save_image<P: AsRef<Path>>(
    raster: &RasterImage,
    path: P,
    options: &SaveOptions,
) -> Result<()> {
    let path = path.as_ref();
    options.validate()?;

    let img = raster_to_dynamic(raster)?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map_or_else(|| "png".to_string(), str::to_lowercase);

    tracing::info!("Saving {:?} raster to {}", raster.dim(), path.display());

    let save_error = |source: image::ImageError| Error::ImageSave {
        path: path.to_path_buf(),
        source,
    };

    match extension.as_str() {
        "jpg" | "jpeg" => {
            let mut output = std::fs::File::create(path)?;
            let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(
                &mut output,
                options.jpeg_quality,
            );
            img.write_with_encoder(encoder).map_err(save_error)?;
        }
        "png" if path.extension().is_none() => {
            img.save_with_format(path, image::ImageFormat::Png)
                .map_err(save_error)?;
        }
        _ => {
            img.save(path).map_err(save_error)?;
        }
    }

    Ok(())
}
