//! Per-channel ARGB histograms of decoded images.
//!
//! ```no_run
//! use histogrammer::{image_io, Histogrammer};
//! use std::path::Path;
//!
//! # fn main() -> histogrammer::Result<()> {
//! let image = image_io::load_image(Path::new("image.jpg"))?;
//! let mut histogrammer = Histogrammer::new(&image);
//! histogrammer.calc_histogram();
//! let chart = histogrammer.histogram_as_image(2)?;
//! image_io::save_png(&chart, Path::new("histogram.png"))?;
//! # Ok(())
//! # }
//! ```

pub mod argb;
pub mod errors;
pub mod histogram;
pub mod histogrammer;
pub mod image_io;
pub mod logging;
pub mod pixel_source;
pub mod render;
pub mod settings;


pub use argb::ArgbImage;
pub use errors::{HistogramError, Result};
pub use histogram::{Channel, Histogram, PercentageHistogram};
pub use histogrammer::Histogrammer;
pub use pixel_source::PixelSource;
pub use settings::{RenderMode, RenderSettings};
