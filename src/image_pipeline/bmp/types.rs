//! Bitmap pixel data types

/// Decoded bitmap pixels, rows top-down, channels in R, G, B order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Interleaved [R, G, B, R, G, B, ...], `width * height * 3` bytes
    pub data: Vec<u8>,
}

impl RgbImageData {
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}
