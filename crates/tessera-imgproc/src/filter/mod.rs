//! Filter operations
//!
//! This module provides kernel-based filter operations for image processing.

/// Filter kernel model
mod kernel;
pub use kernel::*;

/// Preset filter kernels
pub mod presets;

/// Convolution operations
mod convolution;
pub use convolution::*;

/// Filter error types
mod error;
pub use error::*;
