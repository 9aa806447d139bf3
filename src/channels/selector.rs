//! Sets of channel indices to preserve.

use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::raster::{BLUE, GREEN, RED, RGB_CHANNELS};

/// Channels kept by [`isolate`](super::isolate). Channels not in the set are zeroed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ChannelSelector {
    indices: BTreeSet<usize>,
}

impl ChannelSelector {
    /// Selector keeping the given channel indices. Duplicates collapse.
    pub fn new<I: IntoIterator<Item = usize>>(indices: I) -> Self {
        Self {
            indices: indices.into_iter().collect(),
        }
    }

    /// Selector keeping a single channel.
    #[must_use]
    pub fn single(channel: usize) -> Self {
        Self::new([channel])
    }

    /// Selector keeping channels `0..channels`.
    #[must_use]
    pub fn all(channels: usize) -> Self {
        Self::new(0..channels)
    }

    #[must_use]
    pub fn red() -> Self {
        Self::single(RED)
    }

    #[must_use]
    pub fn green() -> Self {
        Self::single(GREEN)
    }

    #[must_use]
    pub fn blue() -> Self {
        Self::single(BLUE)
    }

    /// Red, green and blue; drops alpha on RGBA rasters.
    #[must_use]
    pub fn rgb() -> Self {
        Self::all(RGB_CHANNELS)
    }

    #[must_use]
    pub fn contains(&self, channel: usize) -> bool {
        self.indices.contains(&channel)
    }

    /// Kept channel indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Check every index against an image with `channels` channels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannelIndex`] for the smallest index outside `0..channels`.
    pub fn validate(&self, channels: usize) -> Result<()> {
        match self.indices.range(channels..).next() {
            Some(&index) => Err(Error::InvalidChannelIndex { index, channels }),
            None => Ok(()),
        }
    }
}

impl FromIterator<usize> for ChannelSelector {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<usize> for ChannelSelector {
    fn from(channel: usize) -> Self {
        Self::single(channel)
    }
}
