#![deny(missing_docs)]
//! Validated image buffer types for the winconv crates.

/// image representation for filtering purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize, PixelDtype};
