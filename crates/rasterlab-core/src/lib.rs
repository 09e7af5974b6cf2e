//! Rasterlab Core - Basic data structures for image processing
//!
//! This crate provides the fundamental types used throughout the rasterlab
//! image processing library:
//!
//! - [`PixelBuffer`] - Owned RGBA image container
//! - [`color`] - Channel constants, BT.601 luma, hex conversion
//! - [`Error`] / [`Result`] - Core error type
//!
//! Everything here is a plain value type: no shared mutable state, no
//! interior mutability, no I/O. All engines built on top of this crate are
//! safe to call from any number of threads as long as each call owns its
//! buffers.

pub mod buffer;
pub mod color;
pub mod error;

pub use buffer::{BYTES_PER_PIXEL, PixelBuffer};
pub use error::{Error, Result};
