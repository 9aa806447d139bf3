//! Image loading utilities.

use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};

use crate::error::{Error, Result};
use crate::raster::RasterImage;

use super::{raster_from_dynamic, ColorLayout};

/// Load an image from disk as an RGB raster of shape (height, width, 3).
///
/// Any format the `image` crate can decode is accepted. Alpha is discarded and
/// grayscale sources are expanded to three equal channels.
///
/// # Errors
///
/// Returns [`Error::ImageLoad`] if the file is missing, unreadable, or not a
/// supported raster format.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RasterImage> {
    load_as(path.as_ref(), ColorLayout::Rgb)
}

/// Load an image from disk as an RGBA raster of shape (height, width, 4).
///
/// Sources without alpha get a fully opaque alpha channel.
///
/// # Errors
///
/// Returns [`Error::ImageLoad`] if the image cannot be decoded.
pub fn load_image_with_alpha<P: AsRef<Path>>(path: P) -> Result<RasterImage> {
    load_as(path.as_ref(), ColorLayout::Rgba)
}

fn load_as(path: &Path, layout: ColorLayout) -> Result<RasterImage> {
    let img = open(path)?;
    let raster = raster_from_dynamic(&img, layout)?;

    tracing::info!(
        "Loaded {} as {:?} raster {:?}",
        path.display(),
        layout,
        raster.dim()
    );

    Ok(raster)
}

/// Decode `path`, sniffing the format from content when the extension is missing or wrong.
fn open(path: &Path) -> Result<DynamicImage> {
    let load_error = |source: ImageError| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| load_error(ImageError::IoError(e)))?
        .decode()
        .map_err(load_error)
}
