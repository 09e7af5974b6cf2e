//! PixelBuffer - The main image container
//!
//! A `PixelBuffer` holds a decoded image as raw RGBA bytes. It is the value
//! that every engine in the library consumes and produces.
//!
//! # Pixel layout
//!
//! - Row-major, 4 bytes per pixel in R, G, B, A order
//! - All channel values are in [0, 255]
//! - `data.len() == width * height * 4` always holds for a constructed buffer
//!
//! # Ownership model
//!
//! Buffers are plain owned values. Every transform receives a `&PixelBuffer`
//! and returns a freshly allocated output; inputs are never mutated, so a
//! caller can keep the original around as an undo state and hand the same
//! buffer to any number of worker threads.

use crate::color::{ALPHA, BLUE, GREEN, RED};
use crate::error::{Error, Result};

/// Bytes per pixel (R, G, B, A)
pub const BYTES_PER_PIXEL: usize = 4;

/// An owned RGBA image buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new buffer filled with transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = width as usize * height as usize * BYTES_PER_PIXEL;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Create a new buffer with every pixel set to the given color.
    pub fn new_filled(width: u32, height: u32, r: u8, g: u8, b: u8, a: u8) -> Result<Self> {
        let mut buf = Self::new(width, height)?;
        for px in buf.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            px[RED] = r;
            px[GREEN] = g;
            px[BLUE] = b;
            px[ALPHA] = a;
        }
        Ok(buf)
    }

    /// Wrap raw RGBA bytes in a buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `data.len()` is not exactly
    /// `width * height * 4`. The data is rejected before any processing;
    /// no partially valid buffer is ever constructed.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Get the buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw RGBA bytes, row-major.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the raw RGBA bytes.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return the raw bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Byte offset of the pixel at (x, y).
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }

    /// Get the RGBA values at (x, y), with bounds checking.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside the buffer.
    pub fn get_rgba(&self, x: u32, y: u32) -> Result<(u8, u8, u8, u8)> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.get_rgba_unchecked(x, y))
    }

    /// Get the RGBA values at (x, y) without bounds checking.
    ///
    /// Callers must guarantee `x < width` and `y < height`.
    #[inline]
    pub fn get_rgba_unchecked(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height);
        let i = self.offset(x, y);
        (
            self.data[i + RED],
            self.data[i + GREEN],
            self.data[i + BLUE],
            self.data[i + ALPHA],
        )
    }

    /// Set the RGBA values at (x, y) without bounds checking.
    ///
    /// Callers must guarantee `x < width` and `y < height`.
    #[inline]
    pub fn set_rgba_unchecked(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) {
        debug_assert!(x < self.width && y < self.height);
        let i = self.offset(x, y);
        self.data[i + RED] = r;
        self.data[i + GREEN] = g;
        self.data[i + BLUE] = b;
        self.data[i + ALPHA] = a;
    }

    /// Iterate over pixels as (r, g, b, a) tuples in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (u8, u8, u8, u8)> + '_ {
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|px| (px[0], px[1], px[2], px[3]))
    }
}
