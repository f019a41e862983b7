use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Failed to load image: {0}")]
    ImageLoad(String),

    #[error("Failed to save image: {0}")]
    ImageSave(String),

    #[error("Image has no pixels: width={0}, height={1}")]
    EmptyImage(u32, u32),

    #[error("Ratio threshold must be in (0, 1], got {0}")]
    InvalidRatio(f32),
}

pub type Result<T> = std::result::Result<T, MatchError>;
