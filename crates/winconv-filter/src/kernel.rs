use crate::error::FilterError;

/// An immutable square convolution kernel with an odd side length.
///
/// Weights are stored row-major. No normalization is applied: callers wanting
/// a mean filter must supply weights that already sum to one, which the
/// [`Kernel2d::box_filter`] and [`Kernel2d::gaussian`] builders do.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel2d {
    size: usize,
    weights: Vec<f32>,
}

impl Kernel2d {
    /// Create a kernel from row-major weights with the given side length.
    ///
    /// # Errors
    ///
    /// Fails if the weights are empty, do not form a `size` x `size` matrix,
    /// or `size` is even.
    pub fn new(size: usize, weights: Vec<f32>) -> Result<Self, FilterError> {
        if size == 0 || weights.is_empty() {
            return Err(FilterError::EmptyKernel);
        }
        if weights.len() != size * size {
            return Err(FilterError::NonSquareKernel(weights.len(), size));
        }
        if size % 2 == 0 {
            return Err(FilterError::EvenSizedKernel(size));
        }

        Ok(Self { size, weights })
    }

    /// The 1x1 identity kernel.
    pub fn identity() -> Self {
        Self {
            size: 1,
            weights: vec![1.0],
        }
    }

    /// Create a box (arithmetic mean) kernel with uniform weights `1 / size^2`.
    ///
    /// # Errors
    ///
    /// Fails if `size` is zero or even.
    pub fn box_filter(size: usize) -> Result<Self, FilterError> {
        let weight = 1.0 / (size * size) as f32;
        Self::new(size, vec![weight; size * size])
    }

    /// Create a gaussian kernel with the given side length and sigma.
    ///
    /// The kernel is the outer product of the normalized 1-D gaussian, so its
    /// weights sum to one.
    ///
    /// # Errors
    ///
    /// Fails if `size` is zero or even.
    pub fn gaussian(size: usize, sigma: f32) -> Result<Self, FilterError> {
        if size == 0 {
            return Err(FilterError::EmptyKernel);
        }

        let mut kernel_1d = Vec::with_capacity(size);
        let mean = (size - 1) as f32 / 2.0;
        let sigma_sq = sigma * sigma;

        for i in 0..size {
            let x = i as f32 - mean;
            kernel_1d.push((-(x * x) / (2.0 * sigma_sq)).exp());
        }

        let norm = kernel_1d.iter().sum::<f32>();
        kernel_1d.iter_mut().for_each(|k| *k /= norm);

        let mut weights = Vec::with_capacity(size * size);
        for &ky in kernel_1d.iter() {
            for &kx in kernel_1d.iter() {
                weights.push(ky * kx);
            }
        }

        Self::new(size, weights)
    }

    /// Get the side length of the kernel.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the kernel radius, i.e. `(size - 1) / 2`.
    pub fn radius(&self) -> usize {
        (self.size - 1) / 2
    }

    /// Get the kernel weights as a row-major slice.
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn kernel_identity() {
        let kernel = Kernel2d::identity();
        assert_eq!(kernel.size(), 1);
        assert_eq!(kernel.radius(), 0);
        assert_eq!(kernel.weights(), &[1.0]);
    }

    #[test]
    fn kernel_box_filter() -> Result<(), FilterError> {
        let kernel = Kernel2d::box_filter(3)?;
        assert_eq!(kernel.size(), 3);
        assert_eq!(kernel.radius(), 1);
        assert_eq!(kernel.weights().len(), 9);
        for &w in kernel.weights() {
            assert_relative_eq!(w, 1.0 / 9.0);
        }

        Ok(())
    }

    #[test]
    fn kernel_gaussian_sums_to_one() -> Result<(), FilterError> {
        let kernel = Kernel2d::gaussian(5, 0.8)?;
        assert_eq!(kernel.size(), 5);
        assert_eq!(kernel.radius(), 2);

        let sum = kernel.weights().iter().sum::<f32>();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-5);

        // symmetric and peaked at the center
        let w = kernel.weights();
        assert_relative_eq!(w[0], w[24], epsilon = 1e-7);
        assert_relative_eq!(w[1], w[5], epsilon = 1e-7);
        assert!(w[12] > w[11]);

        Ok(())
    }

    #[test]
    fn kernel_rejects_even_size() {
        assert!(matches!(
            Kernel2d::new(2, vec![0.25; 4]),
            Err(FilterError::EvenSizedKernel(2))
        ));
        assert!(matches!(
            Kernel2d::box_filter(4),
            Err(FilterError::EvenSizedKernel(4))
        ));
    }

    #[test]
    fn kernel_rejects_empty() {
        assert!(matches!(
            Kernel2d::new(0, vec![]),
            Err(FilterError::EmptyKernel)
        ));
        assert!(matches!(
            Kernel2d::gaussian(0, 0.8),
            Err(FilterError::EmptyKernel)
        ));
    }

    #[test]
    fn kernel_rejects_non_square() {
        assert!(matches!(
            Kernel2d::new(3, vec![1.0; 6]),
            Err(FilterError::NonSquareKernel(6, 3))
        ));
    }
}
