//! Frame access abstraction
//!
//! The locator reads frames through the [`PixelSource`] trait: width, height
//! and a bounds-checked per-pixel RGB read. Frames are owned by the caller
//! and never mutated or retained beyond one detection call.

use crate::geometry::Rect;
use image::{RgbImage, RgbaImage};

/// An RGB pixel value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

/// Read-only view of a captured frame
///
/// Out-of-range reads return `None`; implementations must never panic on any
/// coordinate. A source that fails internally may also return `None`, which
/// the locator treats as a local miss.
pub trait PixelSource {
    /// Frame width in pixels
    fn width(&self) -> u32;

    /// Frame height in pixels
    fn height(&self) -> u32;

    /// Pixel at (x, y), or None when out of range
    fn pixel(&self, x: u32, y: u32) -> Option<Rgb>;
}

/// A captured frame backed by raw RGBA bytes
///
/// This is the shape screen-capture collaborators hand over: a contiguous
/// RGBA buffer plus dimensions.
#[derive(Debug, Clone)]
pub struct OwnedFrame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl OwnedFrame {
    /// Create a frame from raw RGBA data
    ///
    /// `data` must hold `width * height * 4` bytes; a short buffer yields
    /// `None` reads past its end rather than a panic.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Create a black frame
    pub fn blank(width: u32, height: u32) -> Self {
        let mut data = vec![0u8; (width as usize) * (height as usize) * 4];
        // Opaque alpha
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        Self::new(width, height, data)
    }

    /// Overwrite a single pixel, ignoring out-of-range coordinates
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = ((y as usize * self.width as usize) + x as usize) * 4;
        if idx + 4 <= self.data.len() {
            self.data[idx] = color.r;
            self.data[idx + 1] = color.g;
            self.data[idx + 2] = color.b;
            self.data[idx + 3] = 255;
        }
    }

    /// Copy the given region out as an RGB image for the OCR handoff
    ///
    /// The region is clamped to the frame; returns None when nothing of it
    /// lies inside the frame.
    pub fn crop(&self, region: Rect) -> Option<RgbImage> {
        let bounds = Rect::new(0, 0, self.width, self.height);
        let region = region.intersect(&bounds)?;

        let mut out = RgbImage::new(region.width, region.height);
        for dy in 0..region.height {
            for dx in 0..region.width {
                let px = self
                    .pixel(region.x + dx, region.y + dy)
                    .unwrap_or(Rgb::new(0, 0, 0));
                out.put_pixel(dx, dy, image::Rgb([px.r, px.g, px.b]));
            }
        }
        Some(out)
    }
}

impl PixelSource for OwnedFrame {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize * self.width as usize) + x as usize) * 4;
        if idx + 4 <= self.data.len() {
            Some(Rgb::new(self.data[idx], self.data[idx + 1], self.data[idx + 2]))
        } else {
            None
        }
    }
}

impl PixelSource for RgbImage {
    fn width(&self) -> u32 {
        RgbImage::width(self)
    }

    fn height(&self) -> u32 {
        RgbImage::height(self)
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.get_pixel_checked(x, y)
            .map(|p| Rgb::new(p.0[0], p.0[1], p.0[2]))
    }
}

impl PixelSource for RgbaImage {
    fn width(&self) -> u32 {
        RgbaImage::width(self)
    }

    fn height(&self) -> u32 {
        RgbaImage::height(self)
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.get_pixel_checked(x, y)
            .map(|p| Rgb::new(p.0[0], p.0[1], p.0[2]))
    }
}
