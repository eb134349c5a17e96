use rayon::prelude::*;
use winconv_image::{Image, ImageError, PixelDtype};

use crate::error::FilterError;
use crate::kernel::Kernel2d;
use crate::padding::{pad_constant, padded_size};

/// Weighted sum of the kernel window whose top-left corner sits at
/// `(row, col)` in padded coordinates, accumulated per channel in f32.
#[inline]
pub(crate) fn window_sum<T, const C: usize>(
    padded: &[T],
    padded_cols: usize,
    kernel: &Kernel2d,
    row: usize,
    col: usize,
) -> [f32; C]
where
    T: PixelDtype,
{
    let k = kernel.size();
    let weights = kernel.weights();

    let mut sum = [0.0f32; C];
    for ky in 0..k {
        let row_offset = ((row + ky) * padded_cols + col) * C;
        for kx in 0..k {
            let w = weights[ky * k + kx];
            let pix_offset = row_offset + kx * C;
            for ch in 0..C {
                let v: f32 = padded[pix_offset + ch].into();
                sum[ch] += v * w;
            }
        }
    }
    sum
}

/// Pad `src` with `kernel.radius()` border pixels of `border_value`.
pub(crate) fn pad_for_kernel<T, const C: usize>(
    src: &Image<T, C>,
    kernel: &Kernel2d,
    border_value: T,
) -> Result<Image<T, C>, ImageError>
where
    T: PixelDtype,
{
    let radius = kernel.radius();
    let mut padded = Image::from_size_val(padded_size(src.size(), radius), T::default())?;
    pad_constant(src, &mut padded, radius, [border_value; C])?;
    Ok(padded)
}

/// Sequential row-major scan of the padded buffer into `dst`.
///
/// The window centered at output `(row, col)` has its top-left corner at
/// padded `(row, col)`, so no coordinate shift is needed here.
pub(crate) fn scan_into<T, U, const C: usize>(
    padded: &Image<T, C>,
    kernel: &Kernel2d,
    dst: &mut Image<U, C>,
) where
    T: PixelDtype,
    U: PixelDtype,
{
    let cols = dst.cols();
    let padded_cols = padded.cols();
    let padded_data = padded.as_slice();

    dst.as_slice_mut()
        .chunks_exact_mut(cols * C)
        .enumerate()
        .for_each(|(row, dst_row)| {
            dst_row
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(col, dst_pix)| {
                    let sum = window_sum::<T, C>(padded_data, padded_cols, kernel, row, col);
                    for ch in 0..C {
                        dst_pix[ch] = U::from_f32(sum[ch]);
                    }
                });
        });
}

/// Convolve an image with a square kernel.
///
/// The image is extended with `kernel.radius()` border pixels of
/// `border_value`, then every output position is computed in row-major order
/// as the per-channel weighted sum of the kernel window. Sums are accumulated
/// in f32 and written back through the saturating round-to-nearest cast of
/// the output pixel type, which may differ from the input type.
///
/// A kernel wider than the image is legal, and the 1x1 identity kernel
/// returns the input unchanged modulo the cast round-trip. The output is a
/// pure function of `(src, kernel, border_value)`.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel` - The convolution kernel.
/// * `border_value` - The fill value for the padded border.
///
/// # Errors
///
/// Returns an error if `src` and `dst` differ in size.
pub fn convolve<T, U, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<U, C>,
    kernel: &Kernel2d,
    border_value: T,
) -> Result<(), FilterError>
where
    T: PixelDtype,
    U: PixelDtype,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        )
        .into());
    }

    let padded = pad_for_kernel(src, kernel, border_value)?;
    scan_into(&padded, kernel, dst);

    Ok(())
}

/// Convolve an image with a square kernel, parallelized over rows.
///
/// Same contract as [`convolve`]: every output row is owned by exactly one
/// scan step, so rows fan out across the rayon pool with no locking and the
/// result is bit-identical to the sequential scan.
///
/// # Errors
///
/// Returns an error if `src` and `dst` differ in size.
pub fn convolve_parallel<T, U, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<U, C>,
    kernel: &Kernel2d,
    border_value: T,
) -> Result<(), FilterError>
where
    T: PixelDtype,
    U: PixelDtype,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        )
        .into());
    }

    let padded = pad_for_kernel(src, kernel, border_value)?;

    let cols = dst.cols();
    let padded_cols = padded.cols();
    let padded_data = padded.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(cols * C)
        .enumerate()
        .for_each(|(row, dst_row)| {
            dst_row
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(col, dst_pix)| {
                    let sum = window_sum::<T, C>(padded_data, padded_cols, kernel, row, col);
                    for ch in 0..C {
                        dst_pix[ch] = U::from_f32(sum[ch]);
                    }
                });
        });

    Ok(())
}
