#![deny(missing_docs)]
//! Sliding-window convolution with an instrumented trace mode.
//!
//! The engine scans every output position in row-major order, reduces the
//! kernel window into one output cell, and either returns the filtered buffer
//! directly or records a snapshot frame after each written cell so an
//! external exporter can animate the scan step by step.

/// Error types for the filter crate.
pub mod error;

/// Convolution kernels.
pub mod kernel;

/// Constant border padding.
pub mod padding;

/// The sliding-window scan.
pub mod convolution;

/// Instrumented scan producing animation frames.
pub mod trace;

pub use crate::convolution::{convolve, convolve_parallel};
pub use crate::error::FilterError;
pub use crate::kernel::Kernel2d;
pub use crate::trace::{convolve_traced, Frame, Position, Trace, TraceRecorder};
