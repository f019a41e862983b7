//! Pipeline conversions module
//!
//! This module contains orchestration logic for bitmap to YUV conversion, per file and per directory.

mod batch;
mod bmp_to_yuv;


pub use batch::BatchReport;
pub use bmp_to_yuv::{BmpToYuvPipeline, output_path_for};
