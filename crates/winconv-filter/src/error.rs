use winconv_image::ImageError;

/// Errors that can occur while building kernels or running a scan.
#[derive(thiserror::Error, Debug)]
pub enum FilterError {
    /// The provided kernel has no weights.
    #[error("kernel must not be empty")]
    EmptyKernel,

    /// The provided weights do not form a square matrix.
    #[error("kernel weights must form a square matrix, got {0} weights for side length {1}")]
    NonSquareKernel(usize, usize),

    /// The kernel side length is even.
    #[error("kernel side length must be odd, got {0}")]
    EvenSizedKernel(usize),

    /// The frame budget does not allow even the preview frame.
    #[error("frame budget must be at least 1, got {0}")]
    InvalidFrameBudget(usize),

    /// Error from the underlying image type.
    #[error(transparent)]
    Image(#[from] ImageError),
}
