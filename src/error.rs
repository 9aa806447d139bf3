//! Custom error types for chansplit.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the chansplit library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to load or decode an image file.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to save an image file.
    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A channel selector named a channel the image does not have.
    #[error("invalid channel index {index}: image has {channels} channel(s)")]
    InvalidChannelIndex { index: usize, channels: usize },

    /// The raster has a channel count no pixel layout can represent.
    #[error("unsupported channel count {channels}: expected 1, 2, 3 or 4")]
    UnsupportedChannels { channels: usize },

    /// Image dimensions are not supported.
    #[error("unsupported image dimensions {width}x{height}: {reason}")]
    UnsupportedDimensions {
        width: usize,
        height: usize,
        reason: String,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Shape mismatch between a pixel buffer and the raster it should fill.
    #[error("raster shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },
}

/// Result type alias for chansplit operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_channel_message() {
        let err = Error::InvalidChannelIndex {
            index: 3,
            channels: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid channel index 3: image has 3 channel(s)"
        );
    }
}
