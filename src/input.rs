//! Edge-triggered input helpers
//!
//! The controller consumes discrete toggle events, one per physical press.
//! Hosts whose input layer only exposes held state can run each sample
//! through [`PressEdge`] to recover the press edge: a held button fires
//! exactly once until released.

/// Button state as reported by a platform adapter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Turns held-state samples into single press events.
#[derive(Debug, Default, Clone)]
pub struct PressEdge {
    held: bool,
}

impl PressEdge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one sample of the button's held state.
    ///
    /// Returns true only on the rising edge; repeated `true` samples while
    /// the button stays held return false.
    pub fn sample(&mut self, pressed: bool) -> bool {
        let fired = pressed && !self.held;
        self.held = pressed;
        fired
    }

    /// Event-style variant of [`sample`](Self::sample).
    pub fn inject(&mut self, state: ButtonState) -> bool {
        self.sample(state == ButtonState::Pressed)
    }

    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held
    }
}
