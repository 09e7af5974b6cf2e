//! Convolution kernels
//!
//! Defines the kernel structure shared by the convolution, blur and edge
//! detection operations.

use crate::{FilterError, FilterResult};

/// A 2D convolution kernel stored in row-major order.
#[derive(Debug, Clone)]
pub struct Kernel {
    /// Width of the kernel
    width: u32,
    /// Height of the kernel
    height: u32,
    /// X coordinate of the center
    cx: u32,
    /// Y coordinate of the center
    cy: u32,
    /// Kernel data (row-major order)
    data: Vec<f32>,
}

impl Kernel {
    /// Create a zeroed kernel with the given dimensions.
    ///
    /// The center defaults to `(width / 2, height / 2)`.
    pub fn new(width: u32, height: u32) -> FilterResult<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidKernel(
                "kernel dimensions must be non-zero".into(),
            ));
        }
        Ok(Self {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            data: vec![0.0; (width * height) as usize],
        })
    }

    /// Create a kernel from a slice of values.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if `data.len()` does not
    /// equal `width * height`.
    pub fn from_slice(width: u32, height: u32, data: &[f32]) -> FilterResult<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidKernel(
                "kernel dimensions must be non-zero".into(),
            ));
        }
        if data.len() != (width * height) as usize {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} values, got {}",
                width * height,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            data: data.to_vec(),
        })
    }

    /// Create a box (averaging) kernel.
    ///
    /// All values are `1/(size*size)`.
    pub fn box_kernel(size: u32) -> FilterResult<Self> {
        if size == 0 {
            return Err(FilterError::InvalidKernel("box size must be > 0".into()));
        }
        let value = 1.0 / (size * size) as f32;
        let mut kernel = Self::new(size, size)?;
        kernel.data.fill(value);
        Ok(kernel)
    }

    /// Create a normalized Gaussian kernel for the given radius.
    ///
    /// The kernel is square with side `2 * radius + 1` and sigma fixed
    /// at `radius / 3`, so the tails fall to near zero at the edges.
    pub fn gaussian(radius: u32) -> FilterResult<Self> {
        if radius == 0 {
            return Err(FilterError::InvalidKernel(
                "gaussian radius must be > 0".into(),
            ));
        }
        let size = 2 * radius + 1;
        let sigma = radius as f32 / 3.0;
        let denom = 2.0 * sigma * sigma;

        let mut kernel = Self::new(size, size)?;
        for ky in 0..size {
            for kx in 0..size {
                let dx = kx as f32 - radius as f32;
                let dy = ky as f32 - radius as f32;
                let value = (-(dx * dx + dy * dy) / denom).exp();
                kernel.data[(ky * size + kx) as usize] = value;
            }
        }
        kernel.normalize()?;
        Ok(kernel)
    }

    /// Create the Sobel kernel for horizontal gradients (vertical edges).
    pub fn sobel_horizontal() -> Self {
        Self {
            width: 3,
            height: 3,
            cx: 1,
            cy: 1,
            data: vec![-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0],
        }
    }

    /// Create the Sobel kernel for vertical gradients (horizontal edges).
    pub fn sobel_vertical() -> Self {
        Self {
            width: 3,
            height: 3,
            cx: 1,
            cy: 1,
            data: vec![-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0],
        }
    }

    /// Get the kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the center X coordinate.
    #[inline]
    pub fn center_x(&self) -> u32 {
        self.cx
    }

    /// Get the center Y coordinate.
    #[inline]
    pub fn center_y(&self) -> u32 {
        self.cy
    }

    /// Get the value at `(x, y)`, or `None` if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Set the value at `(x, y)`.
    pub fn set(&mut self, x: u32, y: u32, value: f32) -> FilterResult<()> {
        if x >= self.width || y >= self.height {
            return Err(FilterError::InvalidKernel(format!(
                "({x}, {y}) out of bounds for {}x{} kernel",
                self.width, self.height
            )));
        }
        self.data[(y * self.width + x) as usize] = value;
        Ok(())
    }

    /// Sum of all kernel values.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// Scale the kernel so its values sum to 1.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if the sum is too close
    /// to zero to divide by.
    pub fn normalize(&mut self) -> FilterResult<()> {
        let sum = self.sum();
        if sum.abs() < f32::EPSILON {
            return Err(FilterError::InvalidKernel(
                "cannot normalize a zero-sum kernel".into(),
            ));
        }
        for value in &mut self.data {
            *value /= sum;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== kernel construction tests ==========

    #[test]
    fn test_new_zero_size_fails() {
        assert!(Kernel::new(0, 3).is_err());
        assert!(Kernel::new(3, 0).is_err());
    }

    #[test]
    fn test_from_slice_length_mismatch() {
        assert!(Kernel::from_slice(3, 3, &[1.0; 8]).is_err());
        assert!(Kernel::from_slice(3, 3, &[1.0; 9]).is_ok());
    }

    #[test]
    fn test_box_kernel_sums_to_one() {
        let kernel = Kernel::box_kernel(5).unwrap();
        assert!((kernel.sum() - 1.0).abs() < 1e-5);
        assert_eq!(kernel.width(), 5);
        assert_eq!(kernel.center_x(), 2);
    }

    #[test]
    fn test_gaussian_kernel_shape() {
        let kernel = Kernel::gaussian(2).unwrap();
        assert_eq!(kernel.width(), 5);
        assert_eq!(kernel.height(), 5);
        assert!((kernel.sum() - 1.0).abs() < 1e-5);
        // Center value is the maximum
        let center = kernel.get(2, 2).unwrap();
        let corner = kernel.get(0, 0).unwrap();
        assert!(center > corner);
    }

    #[test]
    fn test_gaussian_zero_radius_fails() {
        assert!(Kernel::gaussian(0).is_err());
    }

    #[test]
    fn test_sobel_kernels_sum_to_zero() {
        assert!(Kernel::sobel_horizontal().sum().abs() < 1e-6);
        assert!(Kernel::sobel_vertical().sum().abs() < 1e-6);
    }

    #[test]
    fn test_get_set() {
        let mut kernel = Kernel::new(3, 3).unwrap();
        kernel.set(1, 2, 4.5).unwrap();
        assert_eq!(kernel.get(1, 2), Some(4.5));
        assert_eq!(kernel.get(3, 0), None);
        assert!(kernel.set(0, 3, 1.0).is_err());
    }

    #[test]
    fn test_normalize_zero_sum_fails() {
        let mut kernel = Kernel::new(3, 3).unwrap();
        assert!(kernel.normalize().is_err());
    }
}
