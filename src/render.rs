//! Draws a [`PercentageHistogram`] as a chart image.
//!
//! The chart is a 256 x 100 grid of logical cells, one column per bucket value
//! and one row per percent, magnified by `scale`. A bucket holding `p`% is
//! marked in logical row `100 - p`, except that 0% shares the baseline row 99
//! with 1% so the mark stays inside the image. Channels are drawn alpha, red,
//! green, blue, and marks that land on the same pixel are OR-ed together.

use crate::argb::ArgbImage;
use crate::errors::{HistogramError, Result};
use crate::histogram::{Channel, PercentageHistogram, BUCKETS};
use crate::settings::{RenderMode, RenderSettings};

/// Logical rows in a rendered chart, one per percent.
pub const ROWS: u32 = 100;

/// Output size in pixels for `scale`, or `None` when it does not fit.
pub fn output_dimensions(scale: u32) -> Option<(u32, u32)> {
    if scale == 0 {
        return None;
    }
    let width = (BUCKETS as u32).checked_mul(scale)?;
    let height = ROWS.checked_mul(scale)?;
    (width as u64)
        .checked_mul(height as u64)
        .filter(|&n| usize::try_from(n).is_ok())
        .map(|_| (width, height))
}

/// Logical row holding the mark for a bucket at `percent` (0..=100).
pub fn marker_row(percent: u32) -> u32 {
    (ROWS - percent).min(ROWS - 1)
}

pub fn render(percentages: &PercentageHistogram, settings: &RenderSettings) -> Result<ArgbImage> {
    let scale = settings.scale;
    let (width, height) =
        output_dimensions(scale).ok_or(HistogramError::InvalidScale { scale })?;

    if let Some((channel, value, percent)) = percentages.first_out_of_range() {
        return Err(HistogramError::PreconditionViolation { channel, value, percent });
    }

    tracing::debug!(width, height, scale, mode = ?settings.mode, "rendering histogram");
    let mut image = ArgbImage::new(width, height);

    for column in 0..BUCKETS as u32 {
        for channel in Channel::ALL {
            let row = marker_row(percentages.percent(channel, column as u8));
            let last_row = match settings.mode {
                RenderMode::Marker => row,
                RenderMode::Bars => ROWS - 1,
            };
            for r in row..=last_row {
                fill_cell(&mut image, column, r, scale, channel.display_color());
            }
        }
    }

    for pixel in image.pixels_mut().iter_mut().filter(|p| **p == 0) {
        *pixel = settings.background;
    }

    Ok(image)
}

/// [`render`] with default settings apart from `scale`.
pub fn render_with_scale(percentages: &PercentageHistogram, scale: u32) -> Result<ArgbImage> {
    render(percentages, &RenderSettings::with_scale(scale))
}

fn fill_cell(image: &mut ArgbImage, column: u32, row: u32, scale: u32, color: u32) {
    let (x0, y0) = (column * scale, row * scale);
    for y in y0..y0 + scale {
        for x in x0..x0 + scale {
            image.blend_or(x, y, color);
        }
    }
}
