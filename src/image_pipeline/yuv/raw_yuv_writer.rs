use std::io::Write;
use tracing::debug;
use crate::image_pipeline::common::error::{Result, ConversionError};
use crate::image_pipeline::yuv::types::YuvImageData;
use crate::image_pipeline::yuv::writer::YuvWriter;

/// Writes packed YUV triples verbatim, with no container header.
pub struct RawYuvWriter;

impl YuvWriter for RawYuvWriter {
    fn write_yuv(&self, image: &YuvImageData, output: &mut dyn Write) -> Result<()> {
        debug!("Writing raw YUV stream: {}x{}, {} bytes", image.width, image.height, image.data.len());

        output
            .write_all(&image.data)
            .and_then(|_| output.flush())
            .map_err(|e| ConversionError::OutputWriteError(e.to_string()))?;

        Ok(())
    }
}
