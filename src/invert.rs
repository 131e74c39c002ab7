//! Mapping pixel positions and pixel extents back into a scale's domain.
//!
//! A brush only knows where the pointer went in pixels. To report what was
//! selected it has to run the axis scale backwards:
//!
//! - A **continuous** scale ([`Linear`](crate::scale::Linear),
//!   [`Logarithmic`](crate::scale::Logarithmic)) bound to a pixel range inverts
//!   to a domain value.
//! - A **discrete** scale ([`Band`]) inverts to the index of the band that
//!   contains the pixel.
//!
//! [`BrushScale`] carries that distinction so it is decided once, where the
//! scale is handed to the brush.
//!
//! # Examples
//!
//! ```rust
//! use aksel_brush::{BrushScale, DomainExtent, get_domain_from_extent, scale::{Band, Linear}};
//!
//! let linear = Linear::<f64, f64>::new(0.0, 100.0);
//! let x = BrushScale::<f64, ()>::continuous(&linear, (0.0, 800.0));
//! let extent = get_domain_from_extent(&x, 400.0, 200.0, 0.0).unwrap();
//! assert_eq!(extent, DomainExtent::Continuous { start: 25.0, end: 50.0 });
//!
//! let band = Band::new(vec!["mon", "tue", "wed"], (0.0, 300.0));
//! let x = BrushScale::<f64, _>::discrete(&band);
//! let extent = get_domain_from_extent(&x, 120.0, 250.0, 2.0).unwrap();
//! assert_eq!(extent.values(), Some(&["tue", "wed"][..]));
//! ```

use num_traits::Float;
use serde::Serialize;

use crate::error::BrushError;
use crate::scale::{Band, Scale, util};

/// A continuous scale bound to the pixel range it is drawn over.
#[derive(Clone, Copy)]
pub struct Continuous<'a, D, N = f64> {
    scale: &'a dyn Scale<Domain = D, Normalized = N>,
    range: (f64, f64),
}

impl<'a, D, N> Continuous<'a, D, N> {
    pub const fn new(scale: &'a dyn Scale<Domain = D, Normalized = N>, range: (f64, f64)) -> Self {
        Self { scale, range }
    }

    pub const fn range(&self) -> (f64, f64) {
        self.range
    }
}

impl<D, N> Continuous<'_, D, N>
where
    N: Float,
{
    /// Maps a pixel position to a domain value.
    ///
    /// Pixels outside the range extrapolate; nothing is clamped.
    pub fn invert(&self, value: f64) -> Result<D, BrushError> {
        let (start, end) = self.range;
        let span = end - start;
        if span == 0.0 || !span.is_finite() {
            tracing::warn!("Rejecting collapsed pixel range [{}, {}]", start, end);
            return Err(BrushError::InvalidScaleRange { start, end });
        }

        let t = N::from((value - start) / span).ok_or(BrushError::NotInvertible { value })?;
        self.scale
            .denormalize_opt(t)
            .ok_or(BrushError::NotInvertible { value })
    }
}

impl<T> Band<T> {
    /// Returns the index of the band containing a pixel position.
    ///
    /// Bands are walked from the start of the range in the direction the range
    /// runs. A pixel before the first band lands in band `0`; a pixel past the
    /// last band lands in the last one. Without a step each band is one pixel.
    pub fn invert_index(&self, value: f64) -> Result<usize, BrushError> {
        let (start, end) = self.range();
        let step = self.step().unwrap_or(1.0);
        let width = step * (end - start) / (end - start).abs();
        if width == 0.0 || !width.is_finite() {
            tracing::warn!("Rejecting degenerate band range [{}, {}]", start, end);
            return Err(BrushError::InvalidScaleRange { start, end });
        }

        let past = |boundary: f64| {
            if width > 0.0 {
                value > boundary
            } else {
                value < boundary
            }
        };

        let last = self.len().saturating_sub(1);
        let index = (0..last)
            .find(|&i| !past(start + width * (i + 1) as f64))
            .unwrap_or(last);
        Ok(index)
    }
}

/// The scale an axis of the brush is drawn against.
pub enum BrushScale<'a, D, T, N = f64> {
    Continuous(Continuous<'a, D, N>),
    Discrete(&'a Band<T>),
}

impl<'a, D, T, N> BrushScale<'a, D, T, N> {
    pub const fn continuous(
        scale: &'a dyn Scale<Domain = D, Normalized = N>,
        range: (f64, f64),
    ) -> Self {
        Self::Continuous(Continuous::new(scale, range))
    }

    pub const fn discrete(band: &'a Band<T>) -> Self {
        Self::Discrete(band)
    }

    /// Pixel range the scale is drawn over, in the order it was given.
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::Continuous(scale) => scale.range(),
            Self::Discrete(band) => band.range(),
        }
    }
}

impl<'a, D, T, N> From<&'a Band<T>> for BrushScale<'a, D, T, N> {
    fn from(band: &'a Band<T>) -> Self {
        Self::Discrete(band)
    }
}

/// Result of inverting a single pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inversion<D> {
    /// Domain value recovered from a continuous scale.
    Value(D),
    /// Band index recovered from a discrete scale.
    Index(usize),
}

/// The part of a scale's domain a pixel extent covers.
///
/// Serializes as `{"start": .., "end": ..}` or `{"values": [..]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DomainExtent<D, T> {
    Continuous { start: D, end: D },
    Discrete { values: Vec<T> },
}

impl<D: Copy, T> DomainExtent<D, T> {
    pub fn start(&self) -> Option<D> {
        match self {
            Self::Continuous { start, .. } => Some(*start),
            Self::Discrete { .. } => None,
        }
    }

    pub fn end(&self) -> Option<D> {
        match self {
            Self::Continuous { end, .. } => Some(*end),
            Self::Discrete { .. } => None,
        }
    }

    pub fn values(&self) -> Option<&[T]> {
        match self {
            Self::Continuous { .. } => None,
            Self::Discrete { values } => Some(values),
        }
    }
}

/// Inverts a pixel position through `scale`.
///
/// Continuous scales yield a domain value, discrete scales yield a band index.
pub fn scale_invert<D, T, N>(
    scale: &BrushScale<'_, D, T, N>,
    value: f64,
) -> Result<Inversion<D>, BrushError>
where
    N: Float,
{
    tracing::trace!("Inverting pixel {}", value);
    match scale {
        BrushScale::Continuous(continuous) => continuous.invert(value).map(Inversion::Value),
        BrushScale::Discrete(band) => band.invert_index(value).map(Inversion::Index),
    }
}

/// Maps the pixel interval `[start, end]` to the domain it covers.
///
/// The interval may be given in either order. Each endpoint is first pushed
/// `tolerance` pixels away from the other one so sub-pixel rounding at the
/// edges does not drop a value. The result is the same for `(start, end)` and
/// `(end, start)`.
pub fn get_domain_from_extent<D, T, N>(
    scale: &BrushScale<'_, D, T, N>,
    start: f64,
    end: f64,
    tolerance: f64,
) -> Result<DomainExtent<D, T>, BrushError>
where
    D: PartialOrd,
    T: Clone,
    N: Float,
{
    let padded_start = util::widen_away_from(start, end, tolerance);
    let padded_end = util::widen_away_from(end, start, tolerance);
    tracing::debug!(
        "Converting pixel extent [{}, {}] (tolerance {}) to domain",
        padded_start,
        padded_end,
        tolerance
    );

    match scale {
        BrushScale::Continuous(continuous) => {
            let (min, max) = util::sorted_pair(
                continuous.invert(padded_start)?,
                continuous.invert(padded_end)?,
            );
            Ok(DomainExtent::Continuous { start: min, end: max })
        }
        BrushScale::Discrete(band) => {
            let (min, max) = util::sorted_pair(
                band.invert_index(padded_start)?,
                band.invert_index(padded_end)?,
            );
            let values = band
                .domain()
                .get(min..=max)
                .map(<[T]>::to_vec)
                .unwrap_or_default();
            Ok(DomainExtent::Discrete { values })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::{Linear, Logarithmic};

    fn letters(range: (f64, f64)) -> Band<&'static str> {
        Band::new(vec!["a", "b", "c"], range)
    }

    #[test]
    fn test_continuous_invert_delegates_to_scale() {
        let linear = Linear::<f64, f64>::new(0.0, 10.0);
        let scale = BrushScale::<f64, ()>::continuous(&linear, (2.0, 4.0));

        assert_eq!(scale_invert(&scale, 3.0).unwrap(), Inversion::Value(5.0));
        assert_eq!(scale_invert(&scale, 2.0).unwrap(), Inversion::Value(0.0));
        assert_eq!(scale_invert(&scale, 5.0).unwrap(), Inversion::Value(15.0));
    }

    #[test]
    fn test_continuous_invert_with_reversed_pixel_range() {
        let linear = Linear::<f64, f64>::new(0.0, 50.0);
        let scale = BrushScale::<f64, ()>::continuous(&linear, (600.0, 0.0));
        assert_eq!(scale.range(), (600.0, 0.0));

        assert_eq!(scale_invert(&scale, 600.0).unwrap(), Inversion::Value(0.0));
        assert_eq!(scale_invert(&scale, 0.0).unwrap(), Inversion::Value(50.0));
        assert_eq!(scale_invert(&scale, 300.0).unwrap(), Inversion::Value(25.0));
    }

    #[test]
    fn test_continuous_invert_rejects_collapsed_range() {
        let linear = Linear::<f64, f64>::new(0.0, 10.0);
        let scale = BrushScale::<f64, ()>::continuous(&linear, (3.0, 3.0));

        assert!(matches!(
            scale_invert(&scale, 3.0),
            Err(BrushError::InvalidScaleRange { start, end }) if start == 3.0 && end == 3.0
        ));
    }

    #[test]
    fn test_continuous_invert_reports_unrepresentable_values() {
        // Accepts only normalized values inside [0, 1]
        struct Bounded;

        impl Scale for Bounded {
            type Domain = f64;
            type Normalized = f64;

            fn domain(&self) -> (&f64, &f64) {
                (&0.0, &1.0)
            }

            fn denormalize_opt(&self, t: f64) -> Option<f64> {
                (0.0..=1.0).contains(&t).then_some(t)
            }
        }

        let scale = BrushScale::<f64, ()>::continuous(&Bounded, (0.0, 10.0));
        assert_eq!(scale_invert(&scale, 5.0).unwrap(), Inversion::Value(0.5));
        assert!(matches!(
            scale_invert(&scale, 20.0),
            Err(BrushError::NotInvertible { value }) if value == 20.0
        ));
    }

    #[test]
    fn test_band_invert_returns_index() {
        let band = letters((1.1, 3.5));
        let scale = BrushScale::<f64, _>::discrete(&band);
        assert_eq!(scale_invert(&scale, 3.0).unwrap(), Inversion::Index(2));
    }

    #[test]
    fn test_band_invert_with_reversed_range() {
        let band = letters((20.0, 1.0));
        let scale: BrushScale<'_, f64, _> = (&band).into();
        assert_eq!(scale.range(), (20.0, 1.0));
        assert_eq!(scale_invert(&scale, 3.0).unwrap(), Inversion::Index(2));
        assert_eq!(scale_invert(&scale, 19.0).unwrap(), Inversion::Index(0));
        assert_eq!(scale_invert(&scale, 10.0).unwrap(), Inversion::Index(1));
    }

    #[test]
    fn test_band_invert_every_band() {
        let band = Band::new(vec![10, 20, 30, 40], (0.0, 400.0));
        for (i, pixel) in [50.0, 150.0, 250.0, 350.0].into_iter().enumerate() {
            assert_eq!(band.invert_index(pixel).unwrap(), i);
        }
        // band boundaries belong to the lower band
        assert_eq!(band.invert_index(100.0).unwrap(), 0);
        assert_eq!(band.invert_index(200.0).unwrap(), 1);
    }

    #[test]
    fn test_band_invert_clamps_outside_range() {
        let band = letters((0.0, 300.0));
        assert_eq!(band.invert_index(-1e9).unwrap(), 0);
        assert_eq!(band.invert_index(1e12).unwrap(), 2);
    }

    #[test]
    fn test_band_invert_rejects_degenerate_range() {
        let band = letters((5.0, 5.0));
        assert!(matches!(
            band.invert_index(5.0),
            Err(BrushError::InvalidScaleRange { .. })
        ));

        let unstepped = Band::unstepped(vec!["a"], (7.0, 7.0));
        assert!(unstepped.invert_index(0.0).is_err());
    }

    #[test]
    fn test_unstepped_band_uses_unit_width() {
        let band = Band::unstepped(vec!["a", "b", "c", "d"], (0.0, 100.0));
        assert_eq!(band.invert_index(0.5).unwrap(), 0);
        assert_eq!(band.invert_index(1.5).unwrap(), 1);
        assert_eq!(band.invert_index(2.5).unwrap(), 2);
        assert_eq!(band.invert_index(50.0).unwrap(), 3);
    }

    #[test]
    fn test_extent_on_continuous_scale() {
        let linear = Linear::<f64, f64>::new(0.0, 10.0);
        let scale = BrushScale::<f64, ()>::continuous(&linear, (2.0, 4.0));
        let BrushScale::Continuous(continuous) = &scale else {
            unreachable!()
        };

        let extent = get_domain_from_extent(&scale, 0.0, 1.0, 0.5).unwrap();
        assert_eq!(extent.start(), Some(continuous.invert(-0.5).unwrap()));
        assert_eq!(extent.end(), Some(continuous.invert(1.5).unwrap()));
        assert_eq!(
            extent,
            DomainExtent::Continuous {
                start: -12.5,
                end: -2.5
            }
        );
        assert!(extent.values().is_none());
    }

    #[test]
    fn test_extent_is_symmetric_in_argument_order() {
        let linear = Linear::<f64, f64>::new(0.0, 10.0);
        let scale = BrushScale::<f64, ()>::continuous(&linear, (2.0, 4.0));
        assert_eq!(
            get_domain_from_extent(&scale, 0.0, 1.0, 0.5).unwrap(),
            get_domain_from_extent(&scale, 1.0, 0.0, 0.5).unwrap()
        );

        let band = Band::new(vec!['p', 'q', 'r', 's'], (400.0, 0.0));
        let scale = BrushScale::<f64, _>::discrete(&band);
        assert_eq!(
            get_domain_from_extent(&scale, 90.0, 260.0, 2.0).unwrap(),
            get_domain_from_extent(&scale, 260.0, 90.0, 2.0).unwrap()
        );
    }

    #[test]
    fn test_extent_on_band_scale() {
        let band = letters((1.1, 3.5));
        let scale = BrushScale::<f64, _>::discrete(&band);

        let extent = get_domain_from_extent(&scale, 0.0, 1.0, 0.5).unwrap();
        assert_eq!(extent, DomainExtent::Discrete { values: vec!["a"] });
        assert_eq!(extent.start(), None);
    }

    #[test]
    fn test_extent_on_band_scale_spans_multiple_values() {
        let band = Band::new(vec!["a", "b", "c", "d"], (0.0, 400.0));
        let scale = BrushScale::<f64, _>::discrete(&band);

        let extent = get_domain_from_extent(&scale, 150.0, 320.0, 2.0).unwrap();
        assert_eq!(extent.values(), Some(&["b", "c", "d"][..]));
    }

    #[test]
    fn test_extent_on_empty_band_is_empty() {
        let band: Band<u8> = Band::new(Vec::new(), (0.0, 10.0));
        let scale = BrushScale::<f64, _>::discrete(&band);

        let extent = get_domain_from_extent(&scale, 1.0, 9.0, 0.0).unwrap();
        assert_eq!(extent, DomainExtent::Discrete { values: vec![] });
    }

    #[test]
    fn test_extent_on_log_scale() {
        let log = Logarithmic::<f64, f64>::new(10.0, 1.0, 1000.0);
        let scale = BrushScale::<f64, ()>::continuous(&log, (0.0, 300.0));

        let extent = get_domain_from_extent(&scale, 200.0, 100.0, 0.0).unwrap();
        assert!((extent.start().unwrap() - 10.0).abs() < 1e-9);
        assert!((extent.end().unwrap() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_extent_serializes_like_plain_objects() {
        let continuous: DomainExtent<f64, &str> = DomainExtent::Continuous {
            start: 1.0,
            end: 2.5,
        };
        assert_eq!(
            serde_json::to_string(&continuous).unwrap(),
            r#"{"start":1.0,"end":2.5}"#
        );

        let discrete: DomainExtent<f64, &str> = DomainExtent::Discrete {
            values: vec!["a", "b"],
        };
        assert_eq!(
            serde_json::to_string(&discrete).unwrap(),
            r#"{"values":["a","b"]}"#
        );
    }
}
