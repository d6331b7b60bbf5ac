use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};
use tessera_image::{Image, ImageError};

use super::error::FilterError;
use super::kernel::Kernel;

/// Number of channels per pixel, RGBA interleaved.
const CHANNELS: usize = 4;
/// Index of the alpha channel within a pixel.
const ALPHA: usize = 3;

/// Apply a square convolution kernel to an RGBA image with periodic boundaries.
///
/// Each output pixel is the weighted sum of its neighborhood under the kernel.
/// Sampling coordinates that fall outside the image wrap around to the
/// opposite edge (toroidal addressing), so filtering near an edge blends in
/// pixels from the other side. This also makes kernels larger than the image
/// well-defined. The alpha channel is copied from the input, never filtered.
///
/// Weighted sums are rounded half away from zero and clamped to `[0, 255]`.
/// The input image and kernel are read-only; a fresh output image of the same
/// size is returned. Rows are processed in parallel and the result does not
/// depend on the number of worker threads.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, 4).
/// * `kernel` - The kernel to apply.
///
/// # Errors
///
/// Returns [`ImageError::ZeroSizeImage`] if the image width or height is zero.
///
/// # Example
///
/// ```
/// use tessera_image::{Image, ImageSize};
/// use tessera_imgproc::filter::{filter_2d, presets};
///
/// let image = Image::<u8, 4>::new(
///     ImageSize {
///         width: 2,
///         height: 2,
///     },
///     vec![
///         10, 10, 10, 255, 20, 20, 20, 255, //
///         30, 30, 30, 255, 40, 40, 40, 255, //
///     ],
/// )
/// .unwrap();
///
/// let kernel = presets::preset_kernel(presets::IDENTITY).unwrap();
/// let filtered = filter_2d(&image, &kernel).unwrap();
///
/// assert_eq!(filtered, image);
/// ```
pub fn filter_2d(src: &Image<u8, 4>, kernel: &Kernel) -> Result<Image<u8, 4>, FilterError> {
    let (width, height) = (src.width(), src.height());
    if width == 0 || height == 0 {
        return Err(ImageError::ZeroSizeImage(width, height).into());
    }

    let mut dst = Image::<u8, 4>::from_size_val(src.size(), 0)?;

    let src_data = src.as_slice();
    let weights = kernel.as_slice();
    let ksize = kernel.size();
    let half = kernel.half() as isize;

    dst.as_slice_mut()
        .par_chunks_exact_mut(width * CHANNELS)
        .enumerate()
        .for_each(|(y, dst_row)| {
            for x in 0..width {
                let (mut r, mut g, mut b) = (0.0f32, 0.0f32, 0.0f32);
                for ky in -half..=half {
                    // periodic boundary condition
                    let py = (y as isize + ky).rem_euclid(height as isize) as usize;
                    let src_row = &src_data[py * width * CHANNELS..(py + 1) * width * CHANNELS];
                    for kx in -half..=half {
                        let px = (x as isize + kx).rem_euclid(width as isize) as usize;

                        let weight = weights[(ky + half) as usize * ksize + (kx + half) as usize];
                        let pixel = &src_row[px * CHANNELS..px * CHANNELS + CHANNELS];

                        r += pixel[0] as f32 * weight;
                        g += pixel[1] as f32 * weight;
                        b += pixel[2] as f32 * weight;
                    }
                }

                let dst_pixel = &mut dst_row[x * CHANNELS..x * CHANNELS + CHANNELS];
                dst_pixel[0] = clamp_channel(r);
                dst_pixel[1] = clamp_channel(g);
                dst_pixel[2] = clamp_channel(b);
                dst_pixel[ALPHA] = src_data[(y * width + x) * CHANNELS + ALPHA];
            }
        });

    Ok(dst)
}

/// Clamp a weighted sum to the valid channel range, rounding half away from zero.
fn clamp_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
