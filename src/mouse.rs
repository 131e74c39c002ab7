//! Mouse button descriptors and their canonical ids.
//!
//! Buttons can be named numerically (`0`, `1`, `2`, as reported by input
//! events) or symbolically (`"left"`, `"middle"`, `"right"`, as written in
//! configuration). Both forms normalize to a [`MouseButtonId`].

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Canonical button id: `-1` unknown, `0` left, `1` middle, `2` right.
///
/// Numeric descriptors pass through unchanged, so other values can appear.
pub type MouseButtonId = i32;

pub const UNKNOWN_BUTTON: MouseButtonId = -1;
pub const LEFT_BUTTON: MouseButtonId = 0;
pub const MIDDLE_BUTTON: MouseButtonId = 1;
pub const RIGHT_BUTTON: MouseButtonId = 2;

/// A mouse button as written by a caller or in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MouseButton {
    /// A numeric id that fits in `i32`. Other JSON numbers, such as `1.5` or
    /// `3000000000`, deserialize as [`MouseButton::Other`] and map to
    /// [`UNKNOWN_BUTTON`].
    Id(MouseButtonId),
    Name(String),
    /// Any other JSON value. Always maps to [`UNKNOWN_BUTTON`].
    Other(serde_json::Value),
}

impl From<MouseButtonId> for MouseButton {
    fn from(id: MouseButtonId) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for MouseButton {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for MouseButton {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<bool> for MouseButton {
    fn from(value: bool) -> Self {
        Self::Other(serde_json::Value::Bool(value))
    }
}

/// Maps a button descriptor to its canonical id.
///
/// ```rust
/// use aksel_brush::{MouseButton, get_mouse_button_id};
///
/// assert_eq!(get_mouse_button_id(&MouseButton::Id(2)), 2);
/// assert_eq!(get_mouse_button_id(&"left".into()), 0);
/// assert_eq!(get_mouse_button_id(&"unknown".into()), -1);
/// assert_eq!(get_mouse_button_id(&true.into()), -1);
/// ```
pub fn get_mouse_button_id(button: &MouseButton) -> MouseButtonId {
    match button {
        MouseButton::Id(id) => *id,
        MouseButton::Name(name) => match name.as_str() {
            "left" => LEFT_BUTTON,
            "middle" => MIDDLE_BUTTON,
            "right" => RIGHT_BUTTON,
            _ => UNKNOWN_BUTTON,
        },
        MouseButton::Other(_) => UNKNOWN_BUTTON,
    }
}

/// Normalizes a list of button descriptors to distinct ids.
///
/// Each id appears once. Callers should not depend on the order.
pub fn numberalize_mouse_button_array(buttons: Option<&[MouseButton]>) -> Vec<MouseButtonId> {
    let Some(buttons) = buttons else {
        return Vec::new();
    };

    buttons
        .iter()
        .map(get_mouse_button_id)
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}
