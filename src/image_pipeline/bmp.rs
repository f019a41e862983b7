//! Bitmap reading module
//!
//! This module parses uncompressed 24-bit bitmap files into top-down RGB buffers.

mod header;
mod reader;
mod standard_bmp_reader;
pub mod types;

pub use header::BitmapHeader;
pub use reader::BitmapReader;
pub use standard_bmp_reader::StandardBitmapReader;
pub use types::RgbImageData;
