//! Per-card pointer hover state.

/// Hover flag owned by a single card.
///
/// Both the card scale-up and the overlay fade read this one flag, so they
/// cannot drift apart however fast enter/leave events arrive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct HoverFlag(bool);

impl HoverFlag {
    pub fn enter(&mut self) {
        self.0 = true;
    }

    pub fn leave(&mut self) {
        self.0 = false;
    }

    pub fn is_hovered(&self) -> bool {
        self.0
    }

    /// Overlay opacity target for the current state.
    pub fn overlay_opacity(&self) -> f32 {
        if self.0 {
            1.0
        } else {
            0.0
        }
    }

    /// Card scale target for the current state.
    pub fn scale(&self) -> f32 {
        if self.0 {
            1.05
        } else {
            1.0
        }
    }
}
