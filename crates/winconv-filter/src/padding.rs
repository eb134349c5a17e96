use winconv_image::{Image, ImageError, ImageSize};

/// The image size obtained by extending `size` with `radius` pixels on every
/// side.
pub fn padded_size(size: ImageSize, radius: usize) -> ImageSize {
    ImageSize {
        width: size.width + 2 * radius,
        height: size.height + 2 * radius,
    }
}

/// Extend `src` by `radius` pixels on every side into `dst`, filling the
/// border with a constant value.
///
/// The interior of `dst` is an exact copy of `src`; every border cell,
/// corners included, equals `value`.
///
/// # Arguments
///
/// * `src` - The source image to pad.
/// * `dst` - The destination image, of size `src` plus `2 * radius` per
///   dimension.
/// * `radius` - The number of border pixels to add on each side.
/// * `value` - The fill value for the border cells, one per channel.
///
/// # Errors
///
/// Returns an error if the size of `dst` does not match the padded size of
/// `src`.
///
/// # Example
///
/// ```rust
/// use winconv_image::{Image, ImageSize};
/// use winconv_filter::padding::{pad_constant, padded_size};
///
/// let src = Image::<u8, 1>::new(
///     ImageSize { width: 2, height: 2 },
///     vec![1, 2, 3, 4],
/// ).unwrap();
///
/// let mut dst = Image::<u8, 1>::from_size_val(padded_size(src.size(), 1), 0).unwrap();
/// pad_constant(&src, &mut dst, 1, [0]).unwrap();
///
/// assert_eq!(dst.size().width, 4);
/// assert_eq!(dst.get([1, 1, 0]), Some(&1));
/// ```
pub fn pad_constant<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    radius: usize,
    value: [T; C],
) -> Result<(), ImageError>
where
    T: Copy,
{
    let expected = padded_size(src.size(), radius);
    if dst.size() != expected {
        return Err(ImageError::InvalidImageSize(
            expected.width,
            expected.height,
            dst.width(),
            dst.height(),
        ));
    }

    let old_stride = src.width() * C;
    let new_stride = dst.width() * C;
    let row_offset = radius * new_stride + radius * C;

    let old_data = src.as_slice();
    let new_data = dst.as_slice_mut();

    new_data
        .chunks_exact_mut(C)
        .for_each(|chunk| chunk.copy_from_slice(&value));

    // copy src as the center of the new image data
    for (src_row, dst_row) in old_data
        .chunks_exact(old_stride)
        .zip(new_data[row_offset..].chunks_exact_mut(new_stride))
    {
        dst_row[..old_stride].copy_from_slice(src_row);
    }

    Ok(())
}
