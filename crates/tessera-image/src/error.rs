/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// Error when the data length does not match the image shape.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidLength(usize, usize),

    /// Error when a pixel coordinate falls outside the image extent.
    #[error("Pixel coordinate ({0}, {1}) is out of bounds for a {2}x{3} image")]
    PixelOutOfBounds(usize, usize, usize, usize),

    /// Error when an operation requires a non-empty image.
    #[error("Image has zero extent ({0}x{1})")]
    ZeroSizeImage(usize, usize),
}
