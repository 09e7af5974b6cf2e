//! Error types for rasterlab-effects

use thiserror::Error;

/// Errors that can occur while applying effects
#[derive(Debug, Error)]
pub enum EffectError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterlab_core::Error),

    /// Filtering error from an underlying pass
    #[error("filter error: {0}")]
    Filter(#[from] rasterlab_filter::FilterError),

    /// Color analysis error from an underlying pass
    #[error("color error: {0}")]
    Color(#[from] rasterlab_color::ColorError),

    /// The requested filter has no implementation
    #[error("unsupported filter: {0}")]
    UnsupportedFilter(&'static str),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for effect operations
pub type EffectResult<T> = Result<T, EffectError>;
