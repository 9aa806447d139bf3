//! Image loading, conversion, and saving utilities.
//!
//! These adapt between files on disk, `image::DynamicImage`, and [`RasterImage`](crate::RasterImage).

mod convert;
mod load;
mod save;

pub use convert::{raster_from_dynamic, raster_to_dynamic, ColorLayout};
pub use load::{load_image, load_image_with_alpha};
pub use save::{save_image, SaveOptions};
