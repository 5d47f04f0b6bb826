use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid color format: {0:?} (expected 6 hex digits, optional '#')")]
    InvalidColorFormat(String),

    #[error("RGBA buffer size mismatch: expected {expected} bytes, got {actual}")]
    ImageSize { expected: usize, actual: usize },

    #[error("Image dimensions {width}x{height} exceed addressable memory")]
    ImageTooLarge { width: u32, height: u32 },
}
