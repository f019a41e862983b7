use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::yuv::types::YuvImageData;

pub trait YuvWriter {
    fn write_yuv(&self, image: &YuvImageData, output: &mut dyn Write) -> Result<()>;
}
