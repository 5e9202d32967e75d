//! Hover tooltip state machine
//!
//! The only stateful behavior in the system. Two states, three events:
//!
//! ```text
//! HIDDEN  --pointer_enter-->  VISIBLE   (sets content + position)
//! VISIBLE --pointer_enter-->  VISIBLE   (new tile: replaces content)
//! VISIBLE --pointer_move--->  VISIBLE   (updates position only)
//! VISIBLE --pointer_leave-->  HIDDEN
//! ```
//!
//! The machine knows nothing about rendering surfaces; it holds plain text
//! content and a position derived from the pointer. The HTML renderer emits
//! a script with the same transitions, and tests drive the machine directly
//! against [`Chart::tile_at`](crate::chart::Chart::tile_at) hit-testing.

/// Horizontal offset between the pointer and the tooltip's left edge.
pub const POINTER_OFFSET_X: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub enum TooltipState {
    Hidden,
    Visible { content: String, x: f64, y: f64 },
}

#[derive(Debug, Clone, Default)]
pub struct Tooltip {
    state: TooltipState,
}

impl Default for TooltipState {
    fn default() -> Self {
        TooltipState::Hidden
    }
}

impl Tooltip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, TooltipState::Visible { .. })
    }

    /// Pointer entered a tile: show the tooltip with that tile's content.
    pub fn pointer_enter(&mut self, name: &str, category: &str, value: f64, x: f64, y: f64) {
        self.state = TooltipState::Visible {
            content: format!(
                "Name: {}\nCategory: {}\nValue: {}",
                name,
                category,
                format_value(value)
            ),
            x: x + POINTER_OFFSET_X,
            y,
        };
    }

    /// Pointer moved while over a tile: reposition, keep content. A move
    /// without a preceding enter is ignored (the pointer isn't over a tile).
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if let TooltipState::Visible { x: px, y: py, .. } = &mut self.state {
            *px = x + POINTER_OFFSET_X;
            *py = y;
        }
    }

    /// Pointer left the tile: hide.
    pub fn pointer_leave(&mut self) {
        self.state = TooltipState::Hidden;
    }
}

/// Values render the way the datasets carry them: integral values without a
/// decimal point, fractional values as-is.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}
