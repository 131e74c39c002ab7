//! Page coordinates from pointer and touch input.
//!
//! The host UI layer decides what kind of event it is forwarding; this module
//! only reads the position out of it.

use serde::{Deserialize, Serialize};

/// Position of an input relative to the whole page, in CSS pixels.
///
/// Either axis may be missing from a forwarded event. A missing axis stays
/// `None` instead of failing the whole event.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCoordinates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_y: Option<f64>,
}

impl PageCoordinates {
    pub const fn new(page_x: f64, page_y: f64) -> Self {
        Self {
            page_x: Some(page_x),
            page_y: Some(page_y),
        }
    }

    /// Both axes, when the event carried both.
    pub fn xy(&self) -> Option<(f64, f64)> {
        Some((self.page_x?, self.page_y?))
    }
}

/// An input event the brush reacts to.
///
/// Deserializes from `{"type": "mouse" | "pointer" | "touch", ...}` with
/// DOM-style `pageX` / `pageY` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputEvent {
    Mouse(PageCoordinates),
    Pointer(PageCoordinates),
    Touch {
        #[serde(default)]
        touches: Vec<PageCoordinates>,
    },
}

/// Reads the page position of an input event.
///
/// Touch events report their first touch point. A touch event without any
/// touch points has no position and yields `None`. Missing axes pass through
/// as `None` fields.
///
/// ```rust
/// use aksel_brush::{InputEvent, PageCoordinates, get_page_coordinates};
///
/// let event = InputEvent::Touch {
///     touches: vec![PageCoordinates::new(10.0, 20.0), PageCoordinates::new(30.0, 40.0)],
/// };
/// assert_eq!(get_page_coordinates(&event), Some(PageCoordinates::new(10.0, 20.0)));
/// ```
pub fn get_page_coordinates(event: &InputEvent) -> Option<PageCoordinates> {
    match event {
        InputEvent::Mouse(coords) | InputEvent::Pointer(coords) => Some(*coords),
        InputEvent::Touch { touches } => touches.first().copied(),
    }
}
