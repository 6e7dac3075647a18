use thiserror::Error;

use crate::camera_pipeline::mat::types::ElementType;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("No OpenCV equivalent for {element:?} with {channels} channel(s)")]
    InvalidFormat { element: ElementType, channels: u8 },

    #[error("Source buffer has no host-accessible memory")]
    NoHostBuffer,

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Row stride {step} is smaller than the packed row size {min}")]
    InvalidStride { step: usize, min: usize },

    #[error("Host buffer too small: need {required} bytes, have {actual}")]
    BufferTooSmall { required: usize, actual: usize },

    #[error("Camera is not opened")]
    CameraNotOpened,

    #[error("Camera error: {0}")]
    Camera(String),

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("CUDA error: {0}")]
    CudaError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
