use tessera_image::ImageError;

/// An error type for the filter module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FilterError {
    /// Error when the kernel size is not a positive odd integer.
    #[error("Kernel size must be a positive odd integer, got {0}")]
    InvalidKernelSize(usize),

    /// Error when the weight data length does not match the kernel size.
    #[error("Weight length ({0}) does not match the kernel size ({1})")]
    InvalidKernelLength(usize, usize),

    /// Error when a cell index falls outside the kernel extent.
    #[error("Cell ({0}, {1}) is out of bounds for a {2}x{2} kernel")]
    CellOutOfBounds(usize, usize, usize),

    /// Error when a preset index is not in the preset table.
    #[error("Unknown preset filter index {0}")]
    UnknownPreset(usize),

    /// Error from the image module.
    #[error(transparent)]
    Image(#[from] ImageError),
}
