//! Per-channel value histograms of an ARGB image.
//!
//! A [`Histogram`] is a fixed 4x256 table of counts, one row per [`Channel`]
//! in alpha, red, green, blue order. It starts zero-filled and is only ever
//! grown by [`Histogram::accumulate`].

use crate::argb::{self, ALPHA_SHIFT, BLUE_SHIFT, GREEN_SHIFT, RED_SHIFT};
use crate::pixel_source::PixelSource;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod percentage;

pub use percentage::PercentageHistogram;

/// Number of possible values of an 8-bit channel.
pub const BUCKETS: usize = 256;
pub const CHANNELS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Alpha,
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Table order, which is also the render layering order.
    pub const ALL: [Channel; CHANNELS] = [Channel::Alpha, Channel::Red, Channel::Green, Channel::Blue];

    pub fn index(self) -> usize {
        match self {
            Channel::Alpha => 0,
            Channel::Red => 1,
            Channel::Green => 2,
            Channel::Blue => 3,
        }
    }

    pub fn shift(self) -> u32 {
        match self {
            Channel::Alpha => ALPHA_SHIFT,
            Channel::Red => RED_SHIFT,
            Channel::Green => GREEN_SHIFT,
            Channel::Blue => BLUE_SHIFT,
        }
    }

    /// Opaque color used for this channel's marks in a rendered histogram.
    pub fn display_color(self) -> u32 {
        match self {
            Channel::Alpha => 0xFF00_0000,
            Channel::Red => 0xFFFF_0000,
            Channel::Green => 0xFF00_FF00,
            Channel::Blue => 0xFF00_00FF,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Alpha => "alpha",
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }

    /// This channel's 8-bit component of a packed ARGB pixel.
    pub fn extract(self, argb: u32) -> u8 {
        argb::component(argb, self.shift())
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw bucket counts, 4 channels x 256 values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [[u64; BUCKETS]; CHANNELS],
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Histogram {
    pub fn new() -> Self {
        Self {
            counts: [[0; BUCKETS]; CHANNELS],
        }
    }

    /// Build a histogram from a single pass over `source`.
    pub fn from_source<S: PixelSource + ?Sized>(source: &S) -> Self {
        let mut histogram = Self::new();
        histogram.accumulate(source);
        histogram
    }

    /// Add every pixel of `source` to the table.
    ///
    /// Counts are added to whatever is already there: running this twice on
    /// the same image without [`Histogram::reset`] doubles every bucket.
    pub fn accumulate<S: PixelSource + ?Sized>(&mut self, source: &S) {
        let (width, height) = (source.width(), source.height());
        tracing::debug!(width, height, "accumulating histogram");

        for y in 0..height {
            for x in 0..width {
                let pixel = source.argb(x, y);
                for channel in Channel::ALL {
                    self.counts[channel.index()][channel.extract(pixel) as usize] += 1;
                }
            }
        }
    }

    pub fn reset(&mut self) {
        self.counts = [[0; BUCKETS]; CHANNELS];
    }

    pub fn count(&self, channel: Channel, value: u8) -> u64 {
        self.counts[channel.index()][value as usize]
    }

    pub fn channel(&self, channel: Channel) -> &[u64; BUCKETS] {
        &self.counts[channel.index()]
    }

    /// The whole table, rows in [`Channel::ALL`] order.
    pub fn rows(&self) -> &[[u64; BUCKETS]; CHANNELS] {
        &self.counts
    }

    /// Sum of one channel row; equals the number of pixels accumulated.
    pub fn channel_total(&self, channel: Channel) -> u64 {
        self.channel(channel).iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().flatten().all(|&c| c == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argb::{pack_argb, ArgbImage};

    #[test]
    fn test_new_is_zeroed() {
        let histogram = Histogram::new();
        assert!(histogram.is_empty());
        for channel in Channel::ALL {
            assert_eq!(histogram.channel_total(channel), 0);
        }
    }

    #[test]
    fn test_accumulate_mixed_pixels() {
        let img = ArgbImage::from_fn(2, 2, |x, y| pack_argb(255, (x * 10) as u8, (y * 20) as u8, 3));
        let histogram = Histogram::from_source(&img);

        assert_eq!(histogram.count(Channel::Alpha, 255), 4);
        assert_eq!(histogram.count(Channel::Red, 0), 2);
        assert_eq!(histogram.count(Channel::Red, 10), 2);
        assert_eq!(histogram.count(Channel::Green, 0), 2);
        assert_eq!(histogram.count(Channel::Green, 20), 2);
        assert_eq!(histogram.count(Channel::Blue, 3), 4);
        for channel in Channel::ALL {
            assert_eq!(histogram.channel_total(channel), 4);
        }
    }

    #[test]
    fn test_accumulate_twice_doubles_then_reset() {
        let img = ArgbImage::from_pixel(3, 3, 0x8040_2010);
        let mut histogram = Histogram::new();
        histogram.accumulate(&img);
        histogram.accumulate(&img);
        assert_eq!(histogram.count(Channel::Alpha, 0x80), 18);
        assert_eq!(histogram.count(Channel::Blue, 0x10), 18);

        histogram.reset();
        assert!(histogram.is_empty());
    }

    #[test]
    fn test_channel_order_and_display() {
        let indices: Vec<usize> = Channel::ALL.iter().map(|c| c.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(Channel::Red.to_string(), "red");
        assert_eq!(Channel::Green.extract(0x00_00_AB_00), 0xAB);
    }
}
