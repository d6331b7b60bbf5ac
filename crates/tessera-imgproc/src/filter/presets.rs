//! Preset 3x3 filter kernels, addressable by index.

use super::error::FilterError;
use super::kernel::Kernel;

/// Index of the identity filter.
pub const IDENTITY: usize = 0;
/// Index of the sharpen filter.
pub const SHARPEN: usize = 1;
/// Index of the alternative sharpen filter.
pub const SHARPEN_ALT: usize = 2;
/// Index of the box blur filter with weight 0.1.
pub const BOX_BLUR: usize = 3;
/// Index of the north-west emboss filter.
pub const EMBOSS_NW: usize = 4;
/// Index of the south-east emboss filter.
pub const EMBOSS_SE: usize = 5;
/// Index of the Laplacian edge detection filter.
pub const LAPLACIAN: usize = 6;
/// Index of the horizontal Sobel filter.
pub const SOBEL_X: usize = 7;
/// Index of the vertical Sobel filter.
pub const SOBEL_Y: usize = 8;

/// Number of preset filters in the table.
pub const PRESET_COUNT: usize = 9;

const PRESET_SIZE: usize = 3;

#[rustfmt::skip]
const PRESETS: [[f32; PRESET_SIZE * PRESET_SIZE]; PRESET_COUNT] = [
    // identity
    [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
    // sharpen
    [-1.0, -1.0, -1.0, -1.0, 8.0, -1.0, -1.0, -1.0, -1.0],
    // sharpen-alt
    [0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0],
    // box-blur
    [0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1],
    // emboss-nw
    [-2.0, -1.0, 0.0, -1.0, 1.0, 1.0, 0.0, 1.0, 2.0],
    // emboss-se
    [2.0, 1.0, 0.0, 1.0, -1.0, -1.0, 0.0, -1.0, -2.0],
    // laplacian
    [0.0, 1.0, 0.0, 1.0, -4.0, 1.0, 0.0, 1.0, 0.0],
    // sobel-x
    [-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0],
    // sobel-y
    [-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0],
];

/// Create a ready-to-use kernel from the preset filter table.
///
/// # Arguments
///
/// * `index` - The index of the preset filter, in `[0, PRESET_COUNT)`.
///
/// # Errors
///
/// Returns [`FilterError::UnknownPreset`] if the index is outside the table.
///
/// # Examples
///
/// ```
/// use tessera_imgproc::filter::presets;
///
/// let kernel = presets::preset_kernel(presets::LAPLACIAN).unwrap();
/// assert_eq!(kernel.size(), 3);
/// assert_eq!(kernel.get(1, 1).unwrap(), -4.0);
/// ```
pub fn preset_kernel(index: usize) -> Result<Kernel, FilterError> {
    let weights = PRESETS.get(index).ok_or(FilterError::UnknownPreset(index))?;
    Kernel::from_weights(PRESET_SIZE, weights.to_vec())
}
