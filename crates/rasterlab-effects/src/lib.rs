//! rasterlab-effects - Artistic effects and color grading
//!
//! This crate composes the filtering primitives into finished looks:
//!
//! - Artistic filters (oil painting, watercolor, pencil sketch,
//!   cartoon, vintage, HDR)
//! - Posterization
//! - Three-way lift/gamma/gain color grading

pub mod artistic;
mod error;
pub mod grading;

pub use error::{EffectError, EffectResult};

// Re-export commonly used types and functions
pub use artistic::{
    ArtisticFilter, apply_artistic, apply_artistic_or_passthrough, cartoon, hdr, oil_painting,
    pencil_sketch, posterize, vintage, watercolor,
};
pub use grading::{ColorGrading, ZoneGrade, apply_grading};

// Edge detection is part of the artistic surface as well
pub use rasterlab_filter::sobel_edges;
