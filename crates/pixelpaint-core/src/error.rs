use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaintError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Image encode error: {0}")]
    Encode(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Image contains no pixels")]
    EmptyImage,
}

pub type Result<T> = std::result::Result<T, PaintError>;
