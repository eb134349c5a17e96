/// An error type for the image module.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when an image dimension is zero.
    #[error("Image dimensions must be non-zero, got {0}x{1}")]
    ZeroSizedImage(usize, usize),

    /// Error when two images were expected to have the same size.
    #[error("Image size mismatch, expected {0}x{1} got {2}x{3}")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when a pixel value cannot be represented in the target type.
    #[error("Failed to cast image data")]
    CastError,
}
