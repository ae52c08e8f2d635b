use super::{Channel, Histogram, BUCKETS, CHANNELS};
use crate::errors::{HistogramError, Result};

/// Histogram expressed as whole percentages of the image's pixel count.
///
/// Each bucket is `round(count * 100 / total_pixels)` with ties rounded away
/// from zero, so 0.5% becomes 1% and 0.49% becomes 0%.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PercentageHistogram {
    percents: [[u32; BUCKETS]; CHANNELS],
}

impl PercentageHistogram {
    /// Normalize `histogram` against `total_pixels` (width x height of the source).
    ///
    /// Fails with [`HistogramError::EmptyImage`] when `total_pixels` is zero.
    /// Buckets holding more than `total_pixels` (a histogram accumulated more
    /// than once) come out above 100 and are left that way.
    pub fn from_histogram(histogram: &Histogram, total_pixels: u64) -> Result<Self> {
        if total_pixels == 0 {
            return Err(HistogramError::EmptyImage { width: 0, height: 0 });
        }

        let mut percents = [[0u32; BUCKETS]; CHANNELS];
        for (row, counts) in percents.iter_mut().zip(histogram.rows()) {
            for (percent, &count) in row.iter_mut().zip(counts) {
                *percent = round_percent(count, total_pixels);
            }
        }

        tracing::trace!(total_pixels, "normalized histogram");
        Ok(Self { percents })
    }

    /// All-zero table, what an image that was never accumulated normalizes to.
    pub fn zeroed() -> Self {
        Self {
            percents: [[0; BUCKETS]; CHANNELS],
        }
    }

    pub fn percent(&self, channel: Channel, value: u8) -> u32 {
        self.percents[channel.index()][value as usize]
    }

    pub fn channel(&self, channel: Channel) -> &[u32; BUCKETS] {
        &self.percents[channel.index()]
    }

    pub fn rows(&self) -> &[[u32; BUCKETS]; CHANNELS] {
        &self.percents
    }

    pub fn max_percent(&self) -> u32 {
        self.percents.iter().flatten().copied().max().unwrap_or(0)
    }

    /// First bucket outside 0..=100, if any, as `(channel, value, percent)`.
    pub fn first_out_of_range(&self) -> Option<(Channel, u8, u32)> {
        Channel::ALL.into_iter().find_map(|channel| {
            self.channel(channel)
                .iter()
                .position(|&p| p > 100)
                .map(|value| (channel, value as u8, self.channel(channel)[value]))
        })
    }
}

// Exact integer form of f64::round(count * 100 / total) for non-negative inputs
fn round_percent(count: u64, total: u64) -> u32 {
    let numerator = count as u128 * 200 + total as u128;
    (numerator / (2 * total as u128)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argb::ArgbImage;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_percent(0, 1000), 0);
        assert_eq!(round_percent(4, 1000), 0); // 0.4%
        assert_eq!(round_percent(5, 1000), 1); // 0.5%
        assert_eq!(round_percent(25, 1000), 3); // 2.5%
        assert_eq!(round_percent(1, 3), 33);
        assert_eq!(round_percent(2, 3), 67);
        assert_eq!(round_percent(1000, 1000), 100);
    }

    #[test]
    fn test_matches_float_rounding() {
        let total = 777u64;
        for count in 0..=total {
            let expected = (count as f64 * 100.0 / total as f64).round() as u32;
            assert_eq!(round_percent(count, total), expected, "count {}", count);
        }
    }

    #[test]
    fn test_zero_total_is_error() {
        let err = PercentageHistogram::from_histogram(&Histogram::new(), 0).unwrap_err();
        assert!(matches!(err, HistogramError::EmptyImage { .. }));
    }

    #[test]
    fn test_unaccumulated_histogram_is_all_zero() {
        let percentages = PercentageHistogram::from_histogram(&Histogram::new(), 100).unwrap();
        assert_eq!(percentages, PercentageHistogram::zeroed());
        assert_eq!(percentages.max_percent(), 0);
    }

    #[test]
    fn test_double_count_exceeds_hundred() {
        let img = ArgbImage::from_pixel(2, 2, 0xFF00_0000);
        let mut histogram = Histogram::from_source(&img);
        histogram.accumulate(&img);

        let percentages = PercentageHistogram::from_histogram(&histogram, 4).unwrap();
        assert_eq!(percentages.percent(Channel::Alpha, 255), 200);
        assert_eq!(percentages.first_out_of_range(), Some((Channel::Alpha, 255, 200)));
    }
}
