//! rasterlab-filter - Convolution and tonal adjustment
//!
//! This crate provides the pixel-level filtering operations:
//!
//! - Convolution with arbitrary kernels, box and Gaussian blur
//! - Sobel edge detection
//! - Unsharp mask sharpening and softening
//! - Radial vignette, noise reduction and film grain
//! - The ordered tonal adjustment pipeline (brightness through vignette)

pub mod convolve;
pub mod edge;
mod error;
pub mod kernel;
pub mod sharpen;
pub mod spatial;
pub mod tonal;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export commonly used functions
pub use convolve::{box_blur, convolve, gaussian_blur};
pub use edge::{sobel_edges, sobel_magnitude};
pub use sharpen::unsharp_mask;
pub use spatial::{NoiseOptions, VignetteOptions, apply_noise, grain, reduce_noise, vignette};
pub use tonal::{
    TonalOptions, adjust_brightness_contrast, adjust_exposure, adjust_gamma,
    adjust_highlights_shadows, adjust_saturation_hue, adjust_vibrance, adjust_warmth_tint,
    adjust_whites_blacks, apply_tonal,
};
