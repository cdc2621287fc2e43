//! Listener contracts for swipe notifications.
//!
//! A [`SwipeCallback`] holds at most one listener of each kind. Listeners are
//! invoked after the controller has fully applied the transition they
//! describe. They receive a [`SwipeContext`] through which they may ask the
//! facade to reset rows; those requests run once the current callback returns
//! and before the next queued notification is delivered.
//!
//! [`SwipeCallback`]: crate::SwipeCallback

use crate::action::SwipeAction;

/// A follow-up requested by a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SwipeRequest {
    ResetController,
    ResetSwipedView(usize),
}

/// Requests a listener can make while it is being notified.
#[derive(Debug, Default)]
pub struct SwipeContext {
    requests: Vec<SwipeRequest>,
}

impl SwipeContext {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Closes any open or dragging row without animation, as
    /// [`SwipeCallback::reset_swipe_controller`] does.
    ///
    /// [`SwipeCallback::reset_swipe_controller`]: crate::SwipeCallback::reset_swipe_controller
    pub fn reset_swipe_controller(&mut self) {
        self.requests.push(SwipeRequest::ResetController);
    }

    /// Asks the list to redraw the row at `position`.
    pub fn reset_swiped_view(&mut self, position: usize) {
        self.requests.push(SwipeRequest::ResetSwipedView(position));
    }

    /// Whether any request is pending.
    pub fn has_requests(&self) -> bool {
        !self.requests.is_empty()
    }

    pub(crate) fn take_requests(&mut self) -> Vec<SwipeRequest> {
        std::mem::take(&mut self.requests)
    }
}

/// Receives launched actions and plain clicks.
pub trait OnSwipeActionLaunchedListener {
    /// An action was launched on the row at `position`, by tapping its
    /// button or by a long swipe.
    fn on_swipe_action_launched(
        &mut self,
        ctx: &mut SwipeContext,
        position: usize,
        action: &SwipeAction,
    );

    /// The row at `position` was tapped while no row was open.
    fn on_item_clicked(&mut self, _ctx: &mut SwipeContext, _position: usize) {}

    /// The row at `position` was long-pressed while no row was open.
    fn on_item_long_clicked(&mut self, _ctx: &mut SwipeContext, _position: usize) {}
}

/// Receives swipe start and end notifications.
pub trait OnSwipeStateChangedListener {
    /// The row at `position` started revealing its actions.
    fn on_swipe_started(&mut self, ctx: &mut SwipeContext, position: usize);

    /// The row at `position` is closed again.
    fn on_swipe_ended(&mut self, ctx: &mut SwipeContext, position: usize);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_collects_requests_in_order() {
        let mut ctx = SwipeContext::new();
        assert!(!ctx.has_requests());

        ctx.reset_swiped_view(4);
        ctx.reset_swipe_controller();

        assert!(ctx.has_requests());
        assert_eq!(
            ctx.take_requests(),
            vec![SwipeRequest::ResetSwipedView(4), SwipeRequest::ResetController]
        );
        assert!(!ctx.has_requests());
    }
}
