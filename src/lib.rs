//! Brush selection helpers for charts
//!
//! `aksel_brush` holds the arithmetic a chart brush needs once the user has
//! dragged across a plot: turning pixel positions back into data, reading
//! positions out of input events and deciding which mouse buttons count.
//! Drag state, rendering and event wiring belong to the brush component itself.
//!
//! # Core Concepts
//!
//! ## Scales
//!
//! Scales map data values (domain) to pixels. Two kinds are supported:
//! - Continuous scales ([`scale::Linear`], [`scale::Logarithmic`]) bound to a
//!   pixel range invert to a domain value.
//! - Discrete scales ([`scale::Band`]) invert to the index of the band under a
//!   pixel.
//!
//! [`BrushScale`] wraps either kind for the brush.
//!
//! ## Extents
//!
//! [`get_domain_from_extent`] maps a one-axis pixel interval to the domain it
//! covers. [`convert_extent_to_domain`] does the same for both axes of a
//! [`PixelExtent`].
//!
//! ## Input
//!
//! [`get_page_coordinates`] reads the page position from an [`InputEvent`];
//! [`get_mouse_button_id`] and [`numberalize_mouse_button_array`] normalize
//! numeric and named buttons to ids.
//!
//! # Examples
//!
//! ## Inverting a Pixel
//!
//! ```rust
//! use aksel_brush::{BrushScale, Inversion, scale_invert, scale::{Band, Linear}};
//!
//! let linear = Linear::<f64, f64>::new(0.0, 10.0);
//! let x = BrushScale::<f64, ()>::continuous(&linear, (2.0, 4.0));
//! assert_eq!(scale_invert(&x, 3.0).unwrap(), Inversion::Value(5.0));
//!
//! let band = Band::new(vec!["a", "b", "c"], (20.0, 1.0));
//! let x = BrushScale::<f64, _>::discrete(&band);
//! assert_eq!(scale_invert(&x, 3.0).unwrap(), Inversion::Index(2));
//! ```
//!
//! ## Selecting Bands
//!
//! ```rust
//! use aksel_brush::{BrushScale, DomainExtent, get_domain_from_extent, scale::Band};
//!
//! let band = Band::new(vec!["a", "b", "c"], (1.1, 3.5));
//! let x = BrushScale::<f64, _>::discrete(&band);
//!
//! let extent = get_domain_from_extent(&x, 0.0, 1.0, 0.5).unwrap();
//! assert_eq!(extent, DomainExtent::Discrete { values: vec!["a"] });
//! ```
//!
//! ## Mouse Buttons
//!
//! ```rust
//! use aksel_brush::{MouseButton, numberalize_mouse_button_array};
//!
//! let buttons = vec![MouseButton::Id(0), MouseButton::Id(2), "left".into(), "middle".into()];
//! let mut ids = numberalize_mouse_button_array(Some(buttons.as_slice()));
//! ids.sort_unstable();
//! assert_eq!(ids, vec![0, 1, 2]);
//!
//! assert!(numberalize_mouse_button_array(None).is_empty());
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod invert;
pub mod mouse;
pub mod scale;
pub mod selection;

pub use num_traits::Float;

pub use config::BrushConfig;
pub use error::BrushError;
pub use event::{InputEvent, PageCoordinates, get_page_coordinates};
pub use invert::{
    BrushScale, Continuous, DomainExtent, Inversion, get_domain_from_extent, scale_invert,
};
pub use mouse::{MouseButton, MouseButtonId, get_mouse_button_id, numberalize_mouse_button_array};
pub use scale::Scale;
pub use selection::{
    PixelExtent, SAFE_PIXEL, ScreenPoint, ScreenRect, SelectionDomain, convert_extent_to_domain,
};
