//! Image processing pipeline module
//!
//! This module provides a structured approach to bitmap to YUV conversion,
//! with separate modules for bitmap reading, YUV conversion/writing, and conversion orchestration.

pub mod bmp;
pub mod yuv;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    Result,
};

pub use bmp::{
    BitmapHeader,
    BitmapReader,
    RgbImageData,
    StandardBitmapReader,
};

pub use yuv::{
    BatchPolicy,
    ConversionConfig,
    ConversionConfigBuilder,
    RawYuvWriter,
    RowPadding,
    YuvImageData,
    YuvWriter,
    convert_pixels,
    rgb_to_yuv,
};

pub use conversions::{
    BatchReport,
    BmpToYuvPipeline,
};
