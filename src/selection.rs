//! Two-axis brush selections in pixel space and their domain equivalents.
//!
//! A brush is dragged from one [`ScreenPoint`] to another. The rectangle
//! between them is a [`PixelExtent`], which [`convert_extent_to_domain`] runs
//! through the x and y scales to find what was selected on each axis.
//!
//! # Coordinate Systems
//!
//! Screen pixels have their origin at the top-left with Y increasing
//! downward. That inversion is not handled here: give the y scale a pixel
//! range of `(height, 0.0)` and larger domain values end up at the top.
//!
//! # Examples
//!
//! ```rust
//! use aksel_brush::{
//!     BrushScale, PixelExtent, SAFE_PIXEL, ScreenPoint, convert_extent_to_domain,
//!     scale::{Band, Linear},
//! };
//!
//! let prices = Linear::<f64, f64>::new(0.0, 100.0);
//! let days = Band::new(vec!["mon", "tue", "wed", "thu"], (0.0, 400.0));
//!
//! let x = BrushScale::<f64, &str>::continuous(&prices, (0.0, 800.0));
//! let y = BrushScale::<f64, _>::discrete(&days);
//!
//! // dragged from bottom-right to top-left
//! let extent = PixelExtent::from_points(
//!     ScreenPoint::new(300.0, 250.0),
//!     ScreenPoint::new(100.0, 50.0),
//! );
//! let selected = convert_extent_to_domain(&extent, &x, &y, SAFE_PIXEL).unwrap();
//!
//! assert!((selected.x.start().unwrap() - 12.25).abs() < 1e-9);
//! assert!((selected.x.end().unwrap() - 37.75).abs() < 1e-9);
//! assert_eq!(selected.y.values(), Some(&["mon", "tue", "wed"][..]));
//! ```

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::error::BrushError;
use crate::invert::{BrushScale, DomainExtent, get_domain_from_extent};
use crate::scale::util::sorted_pair;

/// Pixels added on each side of a selection before it is inverted.
pub const SAFE_PIXEL: f64 = 2.0;

/// A rectangle in screen/pixel coordinates.
///
/// `x` and `y` are the top-left corner; `width` and `height` are in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A point in screen/pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The pixel area covered by a brush, ordered so `x0 <= x1` and `y0 <= y1`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelExtent {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl PixelExtent {
    /// Builds the extent spanned by a drag from `start` to `end`.
    ///
    /// The points may be given in any order.
    pub fn from_points(start: ScreenPoint, end: ScreenPoint) -> Self {
        let (x0, x1) = sorted_pair(start.x, end.x);
        let (y0, y1) = sorted_pair(start.y, end.y);
        Self { x0, x1, y0, y1 }
    }

    /// Limits the extent to `bounds`, the area the brush is allowed to cover.
    ///
    /// An extent entirely outside `bounds` collapses onto its nearest edge.
    pub fn clamp_to(&self, bounds: &ScreenRect) -> Self {
        let (min_x, max_x) = sorted_pair(bounds.x, bounds.x + bounds.width);
        let (min_y, max_y) = sorted_pair(bounds.y, bounds.y + bounds.height);

        Self {
            x0: self.x0.clamp(min_x, max_x),
            x1: self.x1.clamp(min_x, max_x),
            y0: self.y0.clamp(min_y, max_y),
            y1: self.y1.clamp(min_y, max_y),
        }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// True when the extent has no area, e.g. after a click without a drag.
    pub fn is_empty(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }
}

/// What a brush selects on each axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionDomain<D, X, Y> {
    pub x: DomainExtent<D, X>,
    pub y: DomainExtent<D, Y>,
}

/// Converts a pixel extent to the domain it covers on both axes.
///
/// Each axis is handled on its own, with `tolerance` pixels added to both
/// ends of the selection. Pass [`SAFE_PIXEL`] for the usual margin.
pub fn convert_extent_to_domain<D, X, Y, N>(
    extent: &PixelExtent,
    x_scale: &BrushScale<'_, D, X, N>,
    y_scale: &BrushScale<'_, D, Y, N>,
    tolerance: f64,
) -> Result<SelectionDomain<D, X, Y>, BrushError>
where
    D: PartialOrd,
    X: Clone,
    Y: Clone,
    N: Float,
{
    let x = get_domain_from_extent(x_scale, extent.x0, extent.x1, tolerance)?;
    let y = get_domain_from_extent(y_scale, extent.y0, extent.y1, tolerance)?;

    Ok(SelectionDomain { x, y })
}
