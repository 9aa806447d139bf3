//! Zeroing every channel outside a selector.

use ndarray::Axis;

use crate::error::Result;
use crate::raster::{channel_count, RasterImage, SAMPLE_MIN};

use super::ChannelSelector;

/// Copy `image`, keeping the channels in `keep` and zeroing all others.
///
/// The output has the same shape as `image`; the input is never modified.
///
/// # Errors
///
/// Returns [`Error::InvalidChannelIndex`](crate::Error::InvalidChannelIndex) if `keep`
/// names a channel the image does not have. Nothing is allocated in that case.
pub fn isolate(image: &RasterImage, keep: &ChannelSelector) -> Result<RasterImage> {
    keep.validate(channel_count(image))?;

    tracing::debug!(
        "Isolating channels {:?} of {:?} image",
        keep.iter().collect::<Vec<_>>(),
        image.dim()
    );

    let mut isolated = image.clone();
    for (channel, mut plane) in isolated.axis_iter_mut(Axis(2)).enumerate() {
        if !keep.contains(channel) {
            plane.fill(SAMPLE_MIN);
        }
    }

    Ok(isolated)
}

/// Keep only the red channel.
///
/// # Errors
///
/// Fails if the image has no red channel.
pub fn isolate_red(image: &RasterImage) -> Result<RasterImage> {
    isolate(image, &ChannelSelector::red())
}

/// Keep only the green channel.
///
/// # Errors
///
/// Fails if the image has fewer than two channels.
pub fn isolate_green(image: &RasterImage) -> Result<RasterImage> {
    isolate(image, &ChannelSelector::green())
}

/// Keep only the blue channel.
///
/// # Errors
///
/// Fails if the image has fewer than three channels.
pub fn isolate_blue(image: &RasterImage) -> Result<RasterImage> {
    isolate(image, &ChannelSelector::blue())
}

/// Red, green and blue isolations of `image`, in that order.
///
/// # Errors
///
/// Fails if the image has fewer than three channels.
pub fn split_rgb(image: &RasterImage) -> Result<[RasterImage; 3]> {
    Ok([
        isolate_red(image)?,
        isolate_green(image)?,
        isolate_blue(image)?,
    ])
}
