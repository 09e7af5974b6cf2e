//! Rasterlab - Pixel-level image processing for Rust
//!
//! Rasterlab operates on raw RGBA buffers and provides:
//!
//! - Tonal adjustment (brightness, contrast, saturation, gamma,
//!   exposure, highlights/shadows, vibrance, warmth and more, applied
//!   in a fixed pipeline order)
//! - Convolution, blur, sharpening, edge detection, vignette and grain
//! - Artistic effects (oil painting, watercolor, pencil sketch,
//!   cartoon, vintage, HDR)
//! - Three-way lift/gamma/gain color grading
//! - Palette extraction, color harmonies, temperature, mood and
//!   accessibility analysis
//!
//! # Example
//!
//! ```
//! use rasterlab::PixelBuffer;
//! use rasterlab::filter::{TonalOptions, apply_tonal};
//!
//! let buf = PixelBuffer::new_filled(64, 64, 180, 120, 90, 255).unwrap();
//! let opts = TonalOptions {
//!     brightness: 10.0,
//!     vibrance: 30.0,
//!     ..TonalOptions::default()
//! };
//! let adjusted = apply_tonal(&buf, &opts).unwrap();
//! assert_eq!(adjusted.width(), 64);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rasterlab_core::{BYTES_PER_PIXEL, Error, PixelBuffer, Result};

// Byte-level channel helpers from the core crate
pub use rasterlab_core::color as pixel;

// Re-export domain crates as modules
pub use rasterlab_color as color;
pub use rasterlab_effects as effects;
pub use rasterlab_filter as filter;
