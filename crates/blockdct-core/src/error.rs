//! Error types for block transform coding

use thiserror::Error;

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding or decoding
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Invalid coefficient data: {0}")]
    InvalidCoefficients(String),

    #[error("Block index {index} is out of bounds for a {blocks_x}x{blocks_y} block grid")]
    BlockIndexOutOfBounds {
        index: usize,
        blocks_x: usize,
        blocks_y: usize,
    },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Buffer too small: expected {expected}, got {actual}")]
    BufferTooSmall { expected: usize, actual: usize },
}
