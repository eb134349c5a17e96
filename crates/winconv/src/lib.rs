#![deny(missing_docs)]
//! Sliding-window convolution engine with an instrumented trace mode.
//!
//! # Example
//!
//! ```
//! use winconv::image::{Image, ImageSize};
//! use winconv::filter::{convolve, convolve_traced, Kernel2d, Trace};
//!
//! let src = Image::<u8, 1>::new(
//!     ImageSize { width: 3, height: 3 },
//!     vec![0, 0, 0, 0, 90, 0, 0, 0, 0],
//! )?;
//!
//! // direct mode: a blurred buffer
//! let kernel = Kernel2d::box_filter(3)?;
//! let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0)?;
//! convolve(&src, &mut dst, &kernel, 0)?;
//! assert_eq!(dst.get([1, 1, 0]), Some(&10));
//!
//! // traced mode: one preview frame plus one frame per scanned position
//! let trace: Trace<u8, 1> = convolve_traced(&src, &kernel, 0, None)?;
//! assert_eq!(trace.len(), 3 * 3 + 1);
//! # Ok::<(), winconv::filter::FilterError>(())
//! ```

#[doc(inline)]
pub use winconv_image as image;

#[doc(inline)]
pub use winconv_filter as filter;
