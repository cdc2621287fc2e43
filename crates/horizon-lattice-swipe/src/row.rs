//! Per-row swipe state.
//!
//! Rows are owned by the host's list view. The controller only needs the
//! narrow [`SwipeRow`] capability to move a row's foreground and to mark it
//! open or closed; [`RowState`] is a ready-made implementation hosts can embed
//! in their own row holders.

/// Which buttons a row currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonsState {
    /// No buttons are visible.
    #[default]
    Gone,
    /// The button strip is revealed.
    RightVisible,
    /// The row was swiped past the long-swipe threshold.
    FullySwiped,
}

/// Capability the controller needs from a row holder.
///
/// The offset is a distance: the row's foreground is drawn `offset` pixels
/// to the left of its resting place.
pub trait SwipeRow {
    /// Current horizontal offset.
    fn swipe_offset(&self) -> f32;

    /// Moves the row's foreground.
    fn set_swipe_offset(&mut self, offset: f32);

    /// Whether the row's action buttons are revealed.
    fn is_open(&self) -> bool;

    /// Marks the row open or closed.
    fn set_open(&mut self, open: bool);

    /// Asks the list to redraw this row.
    fn request_redraw(&mut self);

    /// Records which buttons are showing. Rows that do not track this can
    /// ignore it.
    fn set_buttons_state(&mut self, _state: ButtonsState) {}

    /// Returns the row to closed with zero offset, as when it is rebound to
    /// different data.
    fn reset(&mut self) {
        self.set_swipe_offset(0.0);
        self.set_open(false);
        self.set_buttons_state(ButtonsState::Gone);
        self.request_redraw();
    }
}

/// Default swipe state for a row holder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowState {
    offset: f32,
    open: bool,
    buttons: ButtonsState,
    needs_redraw: bool,
}

impl RowState {
    /// Creates a closed row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Which buttons are currently showing.
    #[inline]
    pub fn buttons_state(&self) -> ButtonsState {
        self.buttons
    }

    /// Whether a redraw was requested since the last call, clearing the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}

impl SwipeRow for RowState {
    fn swipe_offset(&self) -> f32 {
        self.offset
    }

    fn set_swipe_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    fn set_buttons_state(&mut self, state: ButtonsState) {
        self.buttons = state;
    }

    /// Only requests a redraw if the row was not already at rest.
    fn reset(&mut self) {
        let was_moved = self.offset != 0.0 || self.open;
        self.offset = 0.0;
        self.open = false;
        self.buttons = ButtonsState::Gone;
        if was_moved {
            self.needs_redraw = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_state_defaults() {
        let row = RowState::new();
        assert_eq!(row.swipe_offset(), 0.0);
        assert!(!row.is_open());
        assert_eq!(row.buttons_state(), ButtonsState::Gone);
    }

    #[test]
    fn test_take_redraw_clears() {
        let mut row = RowState::new();
        row.request_redraw();
        assert!(row.take_redraw());
        assert!(!row.take_redraw());
    }

    #[test]
    fn test_reset_closes_row() {
        let mut row = RowState::new();
        row.set_swipe_offset(120.0);
        row.set_open(true);
        row.set_buttons_state(ButtonsState::RightVisible);

        row.reset();

        assert_eq!(row.swipe_offset(), 0.0);
        assert!(!row.is_open());
        assert_eq!(row.buttons_state(), ButtonsState::Gone);
        assert!(row.take_redraw());
    }

    #[test]
    fn test_reset_at_rest_skips_redraw() {
        let mut row = RowState::new();
        row.reset();
        assert!(!row.take_redraw());
    }
}
