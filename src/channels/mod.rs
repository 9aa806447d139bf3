//! Channel isolation on multi-channel rasters.
//!
//! A [`ChannelSelector`] names the channels that survive; [`isolate`] copies an image and
//! zeroes every other channel.

mod isolate;
mod selector;

pub use isolate::{isolate, isolate_blue, isolate_green, isolate_red, split_rgb};
pub use selector::ChannelSelector;
