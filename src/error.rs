use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisionError {
    /// Frame buffer does not carry exactly 3 interleaved channels
    InvalidImageShape { channels: usize },
    /// Buffer length doesn't match width * height * 3
    BufferSizeMismatch { expected: usize, got: usize },
    /// Zero-area frame (width or height is 0)
    EmptyImage,
}

impl fmt::Display for VisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidImageShape { channels } => {
                write!(f, "invalid image shape: expected 3 channels, got {channels}")
            }
            Self::BufferSizeMismatch { expected, got } => {
                write!(f, "frame buffer: expected {expected} bytes, got {got}")
            }
            Self::EmptyImage => write!(f, "empty image: width and height must be non-zero"),
        }
    }
}

impl std::error::Error for VisionError {}
