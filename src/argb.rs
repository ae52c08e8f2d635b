use image::{Rgba, RgbaImage};

pub const ALPHA_SHIFT: u32 = 24;
pub const RED_SHIFT: u32 = 16;
pub const GREEN_SHIFT: u32 = 8;
pub const BLUE_SHIFT: u32 = 0;

const BYTE_MASK: u32 = 0xFF;

/// Pack four 8-bit components into one ARGB word.
pub fn pack_argb(alpha: u8, red: u8, green: u8, blue: u8) -> u32 {
    (alpha as u32) << ALPHA_SHIFT
        | (red as u32) << RED_SHIFT
        | (green as u32) << GREEN_SHIFT
        | (blue as u32) << BLUE_SHIFT
}

/// Extract the 8-bit component stored at `shift`.
pub fn component(pixel: u32, shift: u32) -> u8 {
    ((pixel >> shift) & BYTE_MASK) as u8
}

/// Owned row-major grid of packed ARGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgbImage {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl ArgbImage {
    /// A fully transparent (all zero) image.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_pixel(width, height, 0)
    }

    pub fn from_pixel(width: u32, height: u32, argb: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![argb; width as usize * height as usize],
        }
    }

    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> u32,
    {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self { width, height, pixels }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Pixel at `(x, y)`. Panics when out of bounds, like `image::ImageBuffer::get_pixel`.
    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.pixels[self.index(x, y)]
    }

    pub fn put(&mut self, x: u32, y: u32, argb: u32) {
        let idx = self.index(x, y);
        self.pixels[idx] = argb;
    }

    /// OR `argb` into the pixel already stored at `(x, y)`.
    pub fn blend_or(&mut self, x: u32, y: u32, argb: u32) {
        let idx = self.index(x, y);
        self.pixels[idx] |= argb;
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Convert to an RGBA8 buffer the `image` encoders accept.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let p = self.get(x, y);
            Rgba([
                component(p, RED_SHIFT),
                component(p, GREEN_SHIFT),
                component(p, BLUE_SHIFT),
                component(p, ALPHA_SHIFT),
            ])
        })
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for {}x{} image",
            x,
            y,
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }
}

impl From<&RgbaImage> for ArgbImage {
    fn from(rgba: &RgbaImage) -> Self {
        Self::from_fn(rgba.width(), rgba.height(), |x, y| {
            let Rgba([r, g, b, a]) = *rgba.get_pixel(x, y);
            pack_argb(a, r, g, b)
        })
    }
}
