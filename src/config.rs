//! Brush configuration as supplied by the host application.

use serde::{Deserialize, Serialize};

use crate::error::BrushError;
use crate::mouse::{MouseButton, MouseButtonId, numberalize_mouse_button_array};
use crate::selection::SAFE_PIXEL;

/// Settings a brush reads when it starts.
///
/// Every field has a default, so `{}` is a valid config.
///
/// ```rust
/// use aksel_brush::BrushConfig;
///
/// let config = BrushConfig::from_json(r#"{"mouse_buttons": ["left", 2]}"#).unwrap();
/// assert_eq!(config.tolerance, 2.0);
/// assert!(config.accepts_button(0));
/// assert!(config.accepts_button(2));
/// assert!(!config.accepts_button(1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    /// Pixels added to each end of a selection before it is inverted.
    pub tolerance: f64,
    /// Buttons allowed to start a drag. `None` or empty allows any button.
    pub mouse_buttons: Option<Vec<MouseButton>>,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            tolerance: SAFE_PIXEL,
            mouse_buttons: None,
        }
    }
}

impl BrushConfig {
    pub fn from_json(json: &str) -> Result<Self, BrushError> {
        let config: Self = serde_json::from_str(json)?;
        tracing::debug!(
            "Loaded brush config: tolerance={}, buttons={:?}",
            config.tolerance,
            config.mouse_buttons
        );
        Ok(config)
    }

    /// Distinct ids of the configured buttons.
    pub fn button_ids(&self) -> Vec<MouseButtonId> {
        numberalize_mouse_button_array(self.mouse_buttons.as_deref())
    }

    pub fn accepts_button(&self, id: MouseButtonId) -> bool {
        let allowed = self.button_ids();
        allowed.is_empty() || allowed.contains(&id)
    }
}
