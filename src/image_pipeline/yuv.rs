//! YUV conversion and writing module
//!
//! This module holds the fixed RGB to YUV transform and raw YUV stream output.

mod color;
mod writer;
mod raw_yuv_writer;
pub mod types;

pub use color::{convert_pixels, rgb_to_yuv};
pub use writer::YuvWriter;
pub use raw_yuv_writer::RawYuvWriter;
pub use types::{BatchPolicy, ConversionConfig, ConversionConfigBuilder, RowPadding, YuvImageData};
