use crate::argb::{pack_argb, ArgbImage};
use image::{DynamicImage, GenericImageView, RgbaImage};

/// A decoded, read-only grid of packed ARGB pixels.
///
/// Implementations must return the same value for the same coordinate for as
/// long as a histogram is being accumulated from them.
pub trait PixelSource {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Packed ARGB at `(x, y)`; alpha in bits 24-31, blue in bits 0-7.
    fn argb(&self, x: u32, y: u32) -> u32;

    fn pixel_count(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }
}

impl PixelSource for ArgbImage {
    fn width(&self) -> u32 {
        ArgbImage::width(self)
    }

    fn height(&self) -> u32 {
        ArgbImage::height(self)
    }

    fn argb(&self, x: u32, y: u32) -> u32 {
        self.get(x, y)
    }
}

impl PixelSource for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn argb(&self, x: u32, y: u32) -> u32 {
        let [r, g, b, a] = self.get_pixel(x, y).0;
        pack_argb(a, r, g, b)
    }
}

// Formats without alpha report fully opaque pixels
impl PixelSource for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn argb(&self, x: u32, y: u32) -> u32 {
        let [r, g, b, a] = self.get_pixel(x, y).0;
        pack_argb(a, r, g, b)
    }
}
