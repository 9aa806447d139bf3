//! # `chansplit`
//!
//! Isolate colour channels of 8-bit raster images and build solid canvases.
//!
//! Rasters are `ndarray` arrays in HWC layout (height, width, channels). Isolating a
//! channel copies the image and zeroes every channel that is not kept, so the result can
//! be viewed or saved like any other image.
//!
//! ## Example
//!
//! ```no_run
//! use chansplit::{image, isolate, solid_white, ChannelSelector};
//!
//! # fn main() -> chansplit::Result<()> {
//! let img = image::load_image("photo.jpg")?;
//!
//! let red = isolate(&img, &ChannelSelector::red())?;
//! image::save_image(&red, "red.png", &image::SaveOptions::default())?;
//!
//! let (height, width, channels) = img.dim();
//! let white = solid_white(height, width, channels);
//! image::save_image(&white, "white.png", &image::SaveOptions::default())?;
//! # Ok(())
//! # }
//! ```

pub mod channels;
pub mod error;
pub mod image;
pub mod raster;

pub use channels::{
    isolate, isolate_blue, isolate_green, isolate_red, split_rgb, ChannelSelector,
};
pub use error::{Error, Result};
pub use raster::{
    black_like, shape_of, solid, solid_black, solid_white, white_like, RasterImage, RasterShape,
};
