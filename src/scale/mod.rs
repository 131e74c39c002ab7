//! Scales map data values (domain) to a normalized `[0, 1]` range and back.
//!
//! Continuous scales ([`Linear`], [`Logarithmic`]) implement [`Scale`] and can be
//! inverted at any point. Discrete scales ([`Band`]) assign one pixel band to each
//! domain value and can only be inverted to a band index.

mod band;
mod linear;
mod log;
pub mod util;

pub use band::Band;
pub use linear::Linear;
pub use log::Logarithmic;

/// A continuous, invertible mapping between a numeric domain and `[0, 1]`.
///
/// A brush only ever runs a scale backwards, so the trait carries the inverse
/// direction. Out-of-range values are not clamped: normalized values below 0
/// or above 1 map outside the domain, which is what lets a brush extend past
/// the plotted data.
pub trait Scale {
    type Domain;
    type Normalized;

    /// Returns the domain endpoints as set (not sorted).
    fn domain(&self) -> (&Self::Domain, &Self::Domain);

    /// Maps a normalized value back into the domain.
    ///
    /// Returns `None` when the result cannot be represented in the domain type.
    fn denormalize_opt(&self, t: Self::Normalized) -> Option<Self::Domain>;
}
