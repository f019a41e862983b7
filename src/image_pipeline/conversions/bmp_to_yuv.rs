use tracing::{error, info, instrument, warn};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    bmp::{BitmapReader, StandardBitmapReader},
    yuv::{convert_pixels, BatchPolicy, ConversionConfig, RawYuvWriter, YuvImageData, YuvWriter},
    conversions::batch::BatchReport,
};

/// `<output_dir>/<input stem>.<extension>`
pub fn output_path_for(input_path: &Path, output_dir: &Path, extension: &str) -> PathBuf {
    let mut name: OsString = input_path
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(extension);
    output_dir.join(name)
}

pub struct BmpToYuvPipeline<R: BitmapReader, W: YuvWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl BmpToYuvPipeline<StandardBitmapReader, RawYuvWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: StandardBitmapReader,
            writer: RawYuvWriter,
            config,
        }
    }
}

impl<R: BitmapReader, W: YuvWriter> BmpToYuvPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!(
                    "Image dimensions {}x{} exceed maximum {}",
                    width, height, max
                );
                return Err(ConversionError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Decodes a bitmap held in memory and converts its pixels to YUV.
    pub fn convert_to_yuv(&self, input_data: &[u8]) -> Result<YuvImageData> {
        let rgb_image = {
            let _span = tracing::info_span!("decode_bitmap").entered();
            self.reader.read_bitmap(input_data, &self.config)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = rgb_image.width,
                height = rgb_image.height
            ).entered();
            self.validate_dimensions(rgb_image.width, rgb_image.height)?;
        }

        let data = {
            let _span = tracing::info_span!("convert_pixels", pixels = rgb_image.pixel_count()).entered();
            convert_pixels(&rgb_image.data)
        };

        Ok(YuvImageData {
            width: rgb_image.width,
            height: rgb_image.height,
            data,
        })
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting BMP to YUV conversion");

        let yuv_image = self.convert_to_yuv(input_data)?;

        {
            let _span = tracing::info_span!("write_yuv").entered();
            self.writer.write_yuv(&yuv_image, output)?;
        }

        info!(
            width = yuv_image.width,
            height = yuv_image.height,
            "Conversion complete"
        );
        Ok(())
    }

    /// Converts one bitmap into `<output_dir>/<stem>.yuv` and returns the written path.
    ///
    /// The output file is only created once the input decoded successfully.
    #[instrument(skip(self, input_path, output_dir))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_dir: Q,
    ) -> Result<PathBuf> {
        let input_path = input_path.as_ref();
        let output_dir = output_dir.as_ref();
        let output_path = output_path_for(input_path, output_dir, &self.config.output_extension);

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut buffer = Vec::new();
        self.convert(&input_data, &mut buffer)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::create_dir_all(output_dir).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_dir.display(), e))
            })?;
            std::fs::write(&output_path, &buffer).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(output_path)
    }

    /// Lists regular files directly in `input_dir` whose name ends with the input extension.
    fn list_inputs(&self, input_dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(input_dir).map_err(|e| {
            ConversionError::InputReadError(format!("{}: {}", input_dir.display(), e))
        })?;

        let mut inputs = Vec::new();
        for entry in entries {
            let path = entry?.path();
            let extension = self.config.input_extension.as_bytes();
            let matches = path
                .file_name()
                .is_some_and(|name| name.as_encoded_bytes().ends_with(extension));
            if matches && path.is_file() {
                inputs.push(path);
            }
        }
        inputs.sort();
        Ok(inputs)
    }

    /// Converts every matching bitmap in `input_dir` into `output_dir`.
    ///
    /// With [`BatchPolicy::ContinueOnError`] a failing file is logged and recorded in the
    /// report; with [`BatchPolicy::FailFast`] its error is returned immediately.
    #[instrument(skip(self, input_dir, output_dir))]
    pub fn convert_directory<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_dir: P,
        output_dir: Q,
    ) -> Result<BatchReport> {
        let input_dir = input_dir.as_ref();
        let output_dir = output_dir.as_ref();

        std::fs::create_dir_all(output_dir).map_err(|e| {
            ConversionError::OutputWriteError(format!("{}: {}", output_dir.display(), e))
        })?;

        let inputs = self.list_inputs(input_dir)?;
        info!(
            input_dir = %input_dir.display(),
            files = inputs.len(),
            "Converting directory"
        );

        let mut report = BatchReport::new();
        for input in inputs {
            match self.convert_file(&input, output_dir) {
                Ok(output) => report.record_success(output),
                Err(e) => {
                    error!(file = %input.display(), "Conversion failed: {}", e);
                    if self.config.batch_policy == BatchPolicy::FailFast {
                        return Err(e);
                    }
                    report.record_failure(input, e);
                }
            }
        }

        info!(
            converted = report.converted().len(),
            failed = report.failures().len(),
            "Directory conversion finished"
        );
        Ok(report)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
