use thiserror::Error;

/// Size of the fixed bitmap prefix (file header + BITMAPINFOHEADER).
pub const BMP_HEADER_LEN: usize = 54;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Malformed bitmap header: {0}")]
    MalformedHeader(String),

    #[error("Pixel payload size mismatch: expected {expected} bytes, found {actual}")]
    PayloadSizeMismatch { expected: usize, actual: usize },

    #[error("Unsupported bitmap format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConversionError {
    /// Process exit code for this error class.
    pub fn exit_code(&self) -> u8 {
        match self {
            ConversionError::InputReadError(_)
            | ConversionError::OutputWriteError(_)
            | ConversionError::IoError(_) => 2,
            ConversionError::MalformedHeader(_) => 3,
            ConversionError::PayloadSizeMismatch { .. } => 4,
            ConversionError::UnsupportedFormat(_) => 5,
            ConversionError::InvalidDimensions(_, _) => 6,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_class() {
        let errors = [
            ConversionError::InputReadError("a".into()),
            ConversionError::MalformedHeader("b".into()),
            ConversionError::PayloadSizeMismatch { expected: 1, actual: 2 },
            ConversionError::UnsupportedFormat("c".into()),
            ConversionError::InvalidDimensions(0, 0),
        ];
        let mut codes: Vec<u8> = errors.iter().map(|e| e.exit_code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
        assert!(codes.iter().all(|&c| c > 1));
    }

    #[test]
    fn test_io_variants_share_exit_code() {
        let io = ConversionError::from(std::io::Error::other("disk full"));
        assert_eq!(io.exit_code(), ConversionError::OutputWriteError("x".into()).exit_code());
    }
}
