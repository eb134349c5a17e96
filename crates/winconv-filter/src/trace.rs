use winconv_image::{Image, PixelDtype};

use crate::convolution::{pad_for_kernel, scan_into, window_sum};
use crate::error::FilterError;
use crate::kernel::Kernel2d;

/// A (row, col) coordinate in the output grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    /// Row index, `0 <= row < height`.
    pub row: usize,
    /// Column index, `0 <= col < width`.
    pub col: usize,
}

/// One step of an instrumented scan.
///
/// Every frame owns a deep copy of the output buffer, so earlier frames never
/// change as the scan proceeds.
#[derive(Clone)]
pub struct Frame<U, const C: usize> {
    /// Snapshot of the output buffer after this step. Cells not yet scanned
    /// hold the pixel type's numeric zero.
    pub output: Image<U, C>,
    /// The position written by this step, or `None` for the leading frame
    /// that previews the fully-computed result.
    pub position: Option<Position>,
}

/// An ordered, finite sequence of scan frames.
///
/// Frame 0 previews the fully-computed result; it is followed by one frame
/// per scanned position in row-major order, `height * width` of them when the
/// scan ran to completion.
#[derive(Clone)]
pub struct Trace<U, const C: usize> {
    frames: Vec<Frame<U, C>>,
    complete: bool,
}

impl<U, const C: usize> Trace<U, C> {
    /// The recorded frames, preview first.
    pub fn frames(&self) -> &[Frame<U, C>] {
        &self.frames
    }

    /// The number of recorded frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frames were recorded.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Whether the scan ran to completion, i.e. the trace was not truncated
    /// by a frame budget.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Consume the trace and return the frames, preview first.
    pub fn into_frames(self) -> Vec<Frame<U, C>> {
        self.frames
    }
}

/// Caller-owned state of an instrumented scan.
///
/// The recorder yields the preview frame first and then one frame per output
/// position in row-major order, each carrying a deep snapshot of the
/// in-progress output buffer. The scan is strictly sequential because the
/// frame order is observable. Recreating a recorder from the same inputs
/// reproduces the identical sequence.
pub struct TraceRecorder<'k, T, U, const C: usize> {
    padded: Image<T, C>,
    kernel: &'k Kernel2d,
    scratch: Image<U, C>,
    cursor: usize,
    total: usize,
}

impl<'k, T, U, const C: usize> TraceRecorder<'k, T, U, C>
where
    T: PixelDtype,
    U: PixelDtype,
{
    /// Set up an instrumented scan of `src` with `kernel`, padding with
    /// `border_value`.
    pub fn new(
        src: &Image<T, C>,
        kernel: &'k Kernel2d,
        border_value: T,
    ) -> Result<Self, FilterError> {
        let padded = pad_for_kernel(src, kernel, border_value)?;
        let scratch = Image::from_size_val(src.size(), U::default())?;

        Ok(Self {
            padded,
            kernel,
            scratch,
            cursor: 0,
            total: src.height() * src.width(),
        })
    }

    /// The number of frames a full scan yields, including the preview frame.
    pub fn total_frames(&self) -> usize {
        self.total + 1
    }
}

impl<T, U, const C: usize> Iterator for TraceRecorder<'_, T, U, C>
where
    T: PixelDtype,
    U: PixelDtype,
{
    type Item = Frame<U, C>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == 0 {
            // preview frame: the final result, computed by the same
            // reduction path as the per-position steps below
            let mut preview = self.scratch.clone();
            scan_into(&self.padded, self.kernel, &mut preview);
            self.cursor = 1;
            return Some(Frame {
                output: preview,
                position: None,
            });
        }

        if self.cursor > self.total {
            return None;
        }

        let idx = self.cursor - 1;
        let cols = self.scratch.cols();
        let row = idx / cols;
        let col = idx % cols;

        let sum = window_sum::<T, C>(
            self.padded.as_slice(),
            self.padded.cols(),
            self.kernel,
            row,
            col,
        );
        let dst_offset = idx * C;
        let dst = self.scratch.as_slice_mut();
        for ch in 0..C {
            dst[dst_offset + ch] = U::from_f32(sum[ch]);
        }

        self.cursor += 1;
        Some(Frame {
            output: self.scratch.clone(),
            position: Some(Position { row, col }),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total + 1 - self.cursor.min(self.total + 1);
        (remaining, Some(remaining))
    }
}

/// Convolve an image while recording a frame after every written cell.
///
/// Scan order and reduction are identical to [`crate::convolution::convolve`];
/// frame 0 equals its output exactly. Without a budget the trace holds
/// `height * width + 1` frames. A budget of `n` caps the trace at `n` frames
/// (preview first) and marks it incomplete; a budget of zero is rejected
/// before any scan work.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `kernel` - The convolution kernel.
/// * `border_value` - The fill value for the padded border.
/// * `budget` - Optional cap on the number of recorded frames.
///
/// # Errors
///
/// Returns an error on a zero frame budget.
pub fn convolve_traced<T, U, const C: usize>(
    src: &Image<T, C>,
    kernel: &Kernel2d,
    border_value: T,
    budget: Option<usize>,
) -> Result<Trace<U, C>, FilterError>
where
    T: PixelDtype,
    U: PixelDtype,
{
    if budget == Some(0) {
        return Err(FilterError::InvalidFrameBudget(0));
    }

    let recorder = TraceRecorder::<T, U, C>::new(src, kernel, border_value)?;
    let total = recorder.total_frames();
    let limit = budget.unwrap_or(total).min(total);

    let frames: Vec<Frame<U, C>> = recorder.take(limit).collect();
    let complete = frames.len() == total;
    if !complete {
        log::debug!(
            "trace truncated at {} of {} frames by the frame budget",
            frames.len(),
            total
        );
    }

    Ok(Trace { frames, complete })
}
