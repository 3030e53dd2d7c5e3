use image::{DynamicImage, GenericImageView, ImageBuffer, Pixel};
use std::ops::Deref;

/// Pixel dimensions of a source bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height. Callers must ensure `height > 0`.
    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Anything that can hand the viewer its bitmap dimensions.
pub trait ImageSource {
    fn size(&self) -> ImageSize;
}

impl ImageSource for ImageSize {
    fn size(&self) -> ImageSize {
        *self
    }
}

impl<P, C> ImageSource for ImageBuffer<P, C>
where
    P: Pixel,
    C: Deref<Target = [P::Subpixel]>,
{
    fn size(&self) -> ImageSize {
        let (width, height) = self.dimensions();
        ImageSize { width, height }
    }
}

impl ImageSource for DynamicImage {
    fn size(&self) -> ImageSize {
        let (width, height) = self.dimensions();
        ImageSize { width, height }
    }
}
