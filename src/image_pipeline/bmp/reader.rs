use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::bmp::types::RgbImageData;
use crate::image_pipeline::yuv::types::ConversionConfig;

pub trait BitmapReader {
    fn read_bitmap(&self, data: &[u8], config: &ConversionConfig) -> Result<RgbImageData>;
}
