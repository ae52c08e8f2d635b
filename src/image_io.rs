use crate::argb::ArgbImage;
use crate::errors::{HistogramError, Result};
use image::{DynamicImage, ImageFormat};
use std::path::Path;

/// Decode an image file. The format is guessed from the file contents.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(HistogramError::FileNotFound { path: path.to_path_buf() });
    }

    image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| HistogramError::ImageLoadError { path: path.to_path_buf(), message: e.to_string() })
}

/// Encode `image` as PNG at `path`, keeping its alpha channel.
pub fn save_png(image: &ArgbImage, path: &Path) -> Result<()> {
    tracing::debug!(path = %path.display(), width = image.width(), height = image.height(), "writing png");
    image
        .to_rgba_image()
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| HistogramError::ExportError { path: path.to_path_buf(), message: e.to_string() })
}
