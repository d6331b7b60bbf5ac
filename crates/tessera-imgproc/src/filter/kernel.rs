use super::error::FilterError;

/// The default weight assigned to every cell of a freshly created kernel.
pub const DEFAULT_WEIGHT: f32 = 1.0;

/// A square convolution kernel with real-valued weights.
///
/// The kernel size is always a positive odd integer so that a unique center
/// cell exists; `half()` gives the radius around it. Weights are stored
/// row-major and carry no range restriction, negative and fractional values
/// included.
///
/// # Examples
///
/// ```
/// use tessera_imgproc::filter::Kernel;
///
/// let mut kernel = Kernel::new(3).unwrap();
/// kernel.set(1, 1, -4.0).unwrap();
///
/// assert_eq!(kernel.size(), 3);
/// assert_eq!(kernel.half(), 1);
/// assert_eq!(kernel.get(1, 1).unwrap(), -4.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    size: usize,
    weights: Vec<f32>,
}

impl Kernel {
    /// Create a new kernel with every cell set to [`DEFAULT_WEIGHT`].
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernelSize`] if `size` is zero or even.
    pub fn new(size: usize) -> Result<Self, FilterError> {
        if size == 0 || size % 2 == 0 {
            return Err(FilterError::InvalidKernelSize(size));
        }

        Ok(Self {
            size,
            weights: vec![DEFAULT_WEIGHT; size * size],
        })
    }

    /// Create a kernel from row-major weight data.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernelSize`] if `size` is zero or even,
    /// or [`FilterError::InvalidKernelLength`] if the weight length is not
    /// `size * size`.
    pub fn from_weights(size: usize, weights: Vec<f32>) -> Result<Self, FilterError> {
        if size == 0 || size % 2 == 0 {
            return Err(FilterError::InvalidKernelSize(size));
        }
        if weights.len() != size * size {
            return Err(FilterError::InvalidKernelLength(weights.len(), size * size));
        }

        Ok(Self { size, weights })
    }

    /// Overwrite the weight of a single cell.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::CellOutOfBounds`] if `row` or `col` is not in
    /// `[0, size)`.
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<(), FilterError> {
        if row >= self.size || col >= self.size {
            return Err(FilterError::CellOutOfBounds(row, col, self.size));
        }

        self.weights[row * self.size + col] = value;
        Ok(())
    }

    /// Read the weight of a single cell.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::CellOutOfBounds`] if `row` or `col` is not in
    /// `[0, size)`.
    pub fn get(&self, row: usize, col: usize) -> Result<f32, FilterError> {
        if row >= self.size || col >= self.size {
            return Err(FilterError::CellOutOfBounds(row, col, self.size));
        }

        Ok(self.weights[row * self.size + col])
    }

    /// Set every cell back to [`DEFAULT_WEIGHT`].
    pub fn reset(&mut self) {
        self.weights.fill(DEFAULT_WEIGHT);
    }

    /// Get the kernel size, i.e. its width and height.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the kernel radius around the center cell.
    pub fn half(&self) -> usize {
        (self.size - 1) / 2
    }

    /// Get the kernel weights as a flat row-major slice.
    pub fn as_slice(&self) -> &[f32] {
        self.weights.as_slice()
    }
}
