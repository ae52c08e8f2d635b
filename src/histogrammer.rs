use crate::argb::ArgbImage;
use crate::errors::{HistogramError, Result};
use crate::histogram::{Histogram, PercentageHistogram};
use crate::pixel_source::PixelSource;
use crate::render;
use crate::settings::RenderSettings;

/// Histogram pipeline for one borrowed image: accumulate, normalize, render.
///
/// The percentage table is computed on first request and cached until the
/// counts change again. Not meant to be shared between threads while
/// [`Histogrammer::calc_histogram`] runs; give each thread its own instance.
pub struct Histogrammer<'a, S: PixelSource + ?Sized> {
    source: &'a S,
    histogram: Histogram,
    percentages: Option<PercentageHistogram>,
}

impl<'a, S: PixelSource + ?Sized> Histogrammer<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            histogram: Histogram::new(),
            percentages: None,
        }
    }

    /// Count every pixel of the source into the histogram.
    ///
    /// Calling this again without [`Histogrammer::reset`] counts the image a
    /// second time, doubling every bucket.
    pub fn calc_histogram(&mut self) {
        self.histogram.accumulate(self.source);
        self.percentages = None;
    }

    pub fn reset(&mut self) {
        self.histogram.reset();
        self.percentages = None;
    }

    /// Raw counts. All zero until [`Histogrammer::calc_histogram`] has run.
    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// Percentages against `width x height` of the source, computed once and cached.
    ///
    /// Before [`Histogrammer::calc_histogram`] this is all zeros. A zero-area
    /// source fails with [`HistogramError::EmptyImage`].
    pub fn percentage_histogram(&mut self) -> Result<&PercentageHistogram> {
        let percentages = match self.percentages.take() {
            Some(cached) => cached,
            None => {
                let (width, height) = (self.source.width(), self.source.height());
                if width == 0 || height == 0 {
                    return Err(HistogramError::EmptyImage { width, height });
                }
                PercentageHistogram::from_histogram(&self.histogram, self.source.pixel_count())?
            }
        };
        Ok(&*self.percentages.insert(percentages))
    }

    /// Chart of the percentage histogram, magnified by `scale`.
    pub fn histogram_as_image(&mut self, scale: u32) -> Result<ArgbImage> {
        self.render(&RenderSettings::with_scale(scale))
    }

    pub fn render(&mut self, settings: &RenderSettings) -> Result<ArgbImage> {
        let percentages = self.percentage_histogram()?;
        render::render(percentages, settings)
    }
}
