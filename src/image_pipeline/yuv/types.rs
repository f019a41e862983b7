//! YUV conversion configuration types

/// How bitmap rows may be laid out in the pixel payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPadding {
    /// Accept either a packed or a 4-byte aligned stride, whichever matches the payload
    Auto,
    /// Rows are exactly `width * 3` bytes, no padding
    Packed,
    /// Rows are padded to a multiple of 4 bytes
    Aligned,
}

/// What a directory conversion does when one file fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPolicy {
    /// Stop at the first failing file
    FailFast,
    /// Record the failure and keep converting the remaining files
    ContinueOnError,
}

/// Configuration for BMP to YUV conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Accepted row layout of the bitmap payload
    pub row_padding: RowPadding,
    /// Behaviour of directory conversion on per-file failure
    pub batch_policy: BatchPolicy,
    /// Whether to validate image dimensions before conversion
    pub validate_dimensions: bool,
    /// Largest accepted width or height when validating
    pub max_dimension: Option<usize>,
    /// Suffix selecting input files in a directory (case-sensitive)
    pub input_extension: String,
    /// Extension given to written outputs, without the dot
    pub output_extension: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            row_padding: RowPadding::Auto,
            batch_policy: BatchPolicy::ContinueOnError,
            validate_dimensions: true,
            max_dimension: Some(65_536),
            input_extension: ".bmp".to_string(),
            output_extension: "yuv".to_string(),
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    row_padding: Option<RowPadding>,
    batch_policy: Option<BatchPolicy>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
    input_extension: Option<String>,
    output_extension: Option<String>,
}

impl ConversionConfigBuilder {
    pub fn row_padding(mut self, padding: RowPadding) -> Self {
        self.row_padding = Some(padding);
        self
    }

    pub fn batch_policy(mut self, policy: BatchPolicy) -> Self {
        self.batch_policy = Some(policy);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn input_extension(mut self, extension: impl Into<String>) -> Self {
        self.input_extension = Some(extension.into());
        self
    }

    pub fn output_extension(mut self, extension: impl Into<String>) -> Self {
        self.output_extension = Some(extension.into());
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            row_padding: self.row_padding.unwrap_or(default.row_padding),
            batch_policy: self.batch_policy.unwrap_or(default.batch_policy),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            input_extension: self.input_extension.unwrap_or(default.input_extension),
            output_extension: self.output_extension.unwrap_or(default.output_extension),
        }
    }
}

/// YUV pixels produced by the converter, same layout as the RGB source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YuvImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Interleaved [Y, U, V, Y, U, V, ...], rows top-down
    pub data: Vec<u8>,
}
