use super::serde_default_funcs::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Placement and gesture settings shared by every panel.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct WindowSettings {
    /// Columns of a dragged panel that always stay visible.
    #[serde(default = "serde_default_drag_margin")]
    drag_margin: u16,
    #[serde(default = "serde_default_minimize_delay_ms")]
    minimize_delay_ms: u64,
    #[serde(default = "serde_default_as_true")]
    placement_jitter: bool,
    #[serde(default = "serde_default_padding_cols")]
    padding_cols: u16,
    #[serde(default = "serde_default_padding_rows")]
    padding_rows: u16,
}

impl WindowSettings {
    pub fn drag_margin(&self) -> u16 {
        return self.drag_margin;
    }

    pub fn minimize_delay(&self) -> Duration {
        return Duration::from_millis(self.minimize_delay_ms);
    }

    pub fn placement_jitter(&self) -> bool {
        return self.placement_jitter;
    }

    pub fn set_placement_jitter(&mut self, jitter: bool) {
        self.placement_jitter = jitter;
    }

    pub fn padding_cols(&self) -> u16 {
        return self.padding_cols;
    }

    pub fn padding_rows(&self) -> u16 {
        return self.padding_rows;
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        return Self {
            drag_margin: serde_default_drag_margin(),
            minimize_delay_ms: serde_default_minimize_delay_ms(),
            placement_jitter: true,
            padding_cols: serde_default_padding_cols(),
            padding_rows: serde_default_padding_rows(),
        };
    }
}
