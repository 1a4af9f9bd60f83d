//! Convolution kernels

use crate::{FilterError, FilterResult};

/// A 2D convolution kernel
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    width: u32,
    height: u32,
    cx: u32,
    cy: u32,
    data: Vec<f32>,
}

impl Kernel {
    /// Create a kernel from a slice of values, centered at the middle
    /// cell.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] for zero dimensions or a
    /// slice of the wrong length.
    pub fn from_slice(width: u32, height: u32, data: &[f32]) -> FilterResult<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel dimensions must be positive: {width}x{height}"
            )));
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(FilterError::InvalidKernel(format!(
                "kernel data has {} value(s), expected {expected}",
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

    /// Create a normalized Gaussian kernel.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] for a zero size or a
    /// non-positive sigma.
    pub fn gaussian(size: u32, sigma: f32) -> FilterResult<Self> {
        if size == 0 {
            return Err(FilterError::InvalidKernel(
                "gaussian kernel size must be positive".into(),
            ));
        }
        if sigma <= 0.0 {
            return Err(FilterError::InvalidKernel(format!(
                "gaussian sigma must be positive, got {sigma}"
            )));
        }

        let cx = (size / 2) as f32;
        let cy = (size / 2) as f32;
        let inv_two_sigma_sq = 1.0 / (2.0 * sigma * sigma);

        let mut data = Vec::with_capacity(size as usize * size as usize);
        for y in 0..size {
            for x in 0..size {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                data.push((-(dx * dx + dy * dy) * inv_two_sigma_sq).exp());
            }
        }

        let mut kernel = Self::from_slice(size, size, &data)?;
        kernel.normalize();
        Ok(kernel)
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

    /// Get the kernel data.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get a value at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Get the sum of all kernel values.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// Normalize the kernel so that values sum to 1.
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum.abs() > f32::EPSILON {
            for value in &mut self.data {
                *value /= sum;
            }
        }
    }
}
