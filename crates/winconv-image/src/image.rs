use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use winconv_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Trait for image pixel types.
///
/// `Into<f32>` widens a pixel into the accumulator type; `from_f32` narrows
/// the accumulator back, rounding to nearest and clamping to the
/// representable range instead of wrapping.
pub trait PixelDtype: Copy + Default + Into<f32> + Send + Sync {
    /// Convert an f32 accumulator value to the pixel type.
    fn from_f32(x: f32) -> Self;
}

impl PixelDtype for f32 {
    fn from_f32(x: f32) -> Self {
        x
    }
}

impl PixelDtype for u8 {
    fn from_f32(x: f32) -> Self {
        x.round().clamp(0.0, 255.0) as u8
    }
}

impl PixelDtype for u16 {
    fn from_f32(x: f32) -> Self {
        x.round().clamp(0.0, 65535.0) as u16
    }
}

/// Represents an image with pixel data.
///
/// The image is stored row-major with interleaved channels, i.e. with shape
/// (H, W, C), where H is the height of the image. Dimensions are validated
/// once at construction and never change afterwards.
#[derive(Clone)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Errors
    ///
    /// If either dimension is zero, or the length of the pixel data does not
    /// match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use winconv_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///    ImageSize {
    ///       width: 10,
    ///      height: 20,
    ///  },
    /// vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if size.width == 0 || size.height == 0 {
            return Err(ImageError::ZeroSizedImage(size.width, size.height));
        }

        // check if the data length matches the image size
        if data.len() != size.width * size.height * CHANNELS {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * CHANNELS,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and a uniform pixel value.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `val` - The value of every pixel sample.
    ///
    /// # Examples
    ///
    /// ```
    /// use winconv_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::from_size_val(
    ///   ImageSize {
    ///     width: 10,
    ///    height: 20,
    /// }, 0u8).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.width * size.height * CHANNELS];
        Image::new(size, data)
    }

    /// Cast the pixel data of the image to a different type.
    ///
    /// # Errors
    ///
    /// If a pixel value cannot be represented in the target type, an error is
    /// returned.
    pub fn cast<U>(&self) -> Result<Image<U, CHANNELS>, ImageError>
    where
        U: num_traits::NumCast,
        T: num_traits::NumCast + Copy,
    {
        let casted_data = self
            .data
            .iter()
            .map(|&x| U::from(x).ok_or(ImageError::CastError))
            .collect::<Result<Vec<U>, ImageError>>()?;

        Image::new(self.size, casted_data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Get the pixel data as a flat slice in (H, W, C) order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a mutable flat slice in (H, W, C) order.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Get a reference to the sample at `[row, col, channel]`, or `None` if
    /// the index is out of bounds.
    pub fn get(&self, index: [usize; 3]) -> Option<&T> {
        let [row, col, ch] = index;
        if row >= self.size.height || col >= self.size.width || ch >= CHANNELS {
            return None;
        }
        self.data.get((row * self.size.width + col) * CHANNELS + ch)
    }
}

#[cfg(test)]
mod tests {
    use crate::image::{Image, ImageSize, PixelDtype};
    use crate::ImageError;

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20 * 3],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.num_channels(), 3);

        Ok(())
    }

    #[test]
    fn image_data_mismatch() {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0u8; 3],
        );
        assert!(matches!(image, Err(ImageError::InvalidChannelShape(3, 4))));
    }

    #[test]
    fn image_zero_sized() {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 0,
                height: 4,
            },
            vec![],
        );
        assert!(matches!(image, Err(ImageError::ZeroSizedImage(0, 4))));
    }

    #[test]
    fn image_get() -> Result<(), ImageError> {
        let image = Image::<f32, 3>::new(
            ImageSize {
                height: 2,
                width: 1,
            },
            vec![0., 1., 2., 3., 4., 5.],
        )?;
        assert_eq!(image.get([1, 0, 2]), Some(&5.0));
        assert_eq!(image.get([2, 0, 0]), None);
        assert_eq!(image.get([0, 1, 0]), None);

        Ok(())
    }

    #[test]
    fn image_cast() -> Result<(), ImageError> {
        let data = vec![0u8, 1, 2, 3, 4, 5];
        let image_u8 = Image::<_, 3>::new(
            ImageSize {
                height: 2,
                width: 1,
            },
            data,
        )?;
        assert_eq!(image_u8.get([1, 0, 2]), Some(&5u8));

        let image_i32: Image<i32, 3> = image_u8.cast()?;
        assert_eq!(image_i32.get([1, 0, 2]), Some(&5i32));

        Ok(())
    }

    #[test]
    fn image_cast_out_of_range() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                height: 1,
                width: 2,
            },
            vec![1.0, 3.0e9],
        )?;
        assert!(matches!(
            image.cast::<i32>(),
            Err(ImageError::CastError)
        ));

        Ok(())
    }

    #[test]
    fn pixel_dtype_saturates() {
        assert_eq!(u8::from_f32(300.0), 255);
        assert_eq!(u8::from_f32(-4.0), 0);
        assert_eq!(u8::from_f32(127.5), 128);
        assert_eq!(u16::from_f32(70000.0), 65535);
        assert_eq!(u16::from_f32(-1.0), 0);
        assert_eq!(f32::from_f32(1.5), 1.5);
    }
}
