//! Brush utility error types

use thiserror::Error;

/// Errors that can occur while mapping a brush selection back to a scale's domain
#[derive(Error, Debug)]
pub enum BrushError {
    /// The pixel range is collapsed or produces a zero / non-finite band width.
    #[error("Invalid scale range: [{start}, {end}]")]
    InvalidScaleRange { start: f64, end: f64 },

    #[error("Pixel value {value} cannot be inverted by this scale")]
    NotInvertible { value: f64 },

    #[error("Invalid brush config: {0}")]
    Config(#[from] serde_json::Error),
}
