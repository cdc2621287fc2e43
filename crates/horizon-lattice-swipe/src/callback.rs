//! The swipe facade and its builder.
//!
//! [`SwipeCallback`] attaches swipe actions to a list view. It owns the list
//! view, its adapter and the [`SwipeController`], translates pointer events
//! through a [`PointerTracker`] and delivers the resulting notifications to
//! the registered listeners.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_swipe::{
//!     ActionList, RowList, SwipeActionProvider, SwipeAdapter, SwipeCallback,
//! };
//!
//! struct Inbox;
//!
//! impl SwipeActionProvider for Inbox {
//!     fn actions(&self, _position: usize) -> ActionList {
//!         ActionList::new()
//!     }
//! }
//!
//! impl SwipeAdapter for Inbox {
//!     fn item_count(&self) -> usize {
//!         3
//!     }
//! }
//!
//! let callback = SwipeCallback::builder()
//!     .list_view(RowList::new(360.0))
//!     .adapter(Inbox)
//!     .swipe_threshold(0.6)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(callback.view().len(), 3);
//! ```

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::config::{SwipeConfig, SwipeThreshold};
use crate::controller::{SwipeController, SwipeEvent, SwipeInput};
use crate::error::{Result, SwipeError};
use crate::list::{SwipeAdapter, SwipeListView};
use crate::listener::{
    OnSwipeActionLaunchedListener, OnSwipeStateChangedListener, SwipeContext, SwipeRequest,
};
use crate::logging::targets;
use crate::pointer::{PointerEvent, PointerTracker};
use crate::row::SwipeRow;

/// Builder for [`SwipeCallback`].
///
/// The list view and adapter are required; everything else is optional.
pub struct SwipeCallbackBuilder<V, A> {
    list_view: Option<V>,
    adapter: Option<A>,
    action_listener: Option<Box<dyn OnSwipeActionLaunchedListener>>,
    state_listener: Option<Box<dyn OnSwipeStateChangedListener>>,
    swipe_threshold: Option<f32>,
    config: SwipeConfig,
}

impl<V, A> Default for SwipeCallbackBuilder<V, A> {
    fn default() -> Self {
        Self {
            list_view: None,
            adapter: None,
            action_listener: None,
            state_listener: None,
            swipe_threshold: None,
            config: SwipeConfig::default(),
        }
    }
}

impl<V: SwipeListView, A: SwipeAdapter> SwipeCallbackBuilder<V, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the list view to attach to.
    pub fn list_view(mut self, list_view: V) -> Self {
        self.list_view = Some(list_view);
        self
    }

    /// Set the adapter providing items and their actions.
    pub fn adapter(mut self, adapter: A) -> Self {
        self.adapter = Some(adapter);
        self
    }

    /// Set the listener for launched actions and clicks.
    pub fn on_swipe_action_launched_listener(
        mut self,
        listener: impl OnSwipeActionLaunchedListener + 'static,
    ) -> Self {
        self.action_listener = Some(Box::new(listener));
        self
    }

    /// Set the listener for swipe start and end.
    pub fn on_swipe_state_changed_listener(
        mut self,
        listener: impl OnSwipeStateChangedListener + 'static,
    ) -> Self {
        self.state_listener = Some(Box::new(listener));
        self
    }

    /// Set the long-swipe threshold, overriding the one in the configuration.
    ///
    /// The value must be in `[0, 1]`; [`build`](Self::build) fails otherwise.
    pub fn swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = Some(threshold);
        self
    }

    /// Set the remaining tunables.
    pub fn config(mut self, config: SwipeConfig) -> Self {
        self.config = config;
        self
    }

    /// Validates the configuration and attaches to the list view.
    ///
    /// # Errors
    ///
    /// - [`SwipeError::ThresholdOutOfRange`] and the other configuration
    ///   errors if the configuration does not validate
    /// - [`SwipeError::MissingListView`] if no list view was set
    /// - [`SwipeError::MissingAdapter`] if no adapter was set
    pub fn build(self) -> Result<SwipeCallback<V, A>> {
        let mut config = self.config;
        if let Some(threshold) = self.swipe_threshold {
            config.swipe_threshold = threshold;
        }
        let controller = SwipeController::new(&config)?;

        let mut view = self.list_view.ok_or(SwipeError::MissingListView)?;
        let adapter = self.adapter.ok_or(SwipeError::MissingAdapter)?;

        let item_count = adapter.item_count();
        view.bind_adapter(item_count);
        tracing::debug!(
            target: targets::CALLBACK,
            threshold = config.swipe_threshold,
            item_count,
            "swipe callback attached"
        );

        Ok(SwipeCallback {
            tracker: PointerTracker::new(&config),
            view,
            adapter,
            controller,
            action_listener: self.action_listener,
            state_listener: self.state_listener,
            pending: VecDeque::new(),
        })
    }
}

/// Swipe actions attached to a list view.
pub struct SwipeCallback<V, A> {
    view: V,
    adapter: A,
    controller: SwipeController,
    tracker: PointerTracker,
    action_listener: Option<Box<dyn OnSwipeActionLaunchedListener>>,
    state_listener: Option<Box<dyn OnSwipeStateChangedListener>>,
    pending: VecDeque<SwipeEvent>,
}

impl<V: SwipeListView, A: SwipeAdapter> SwipeCallback<V, A> {
    /// Create a builder.
    pub fn builder() -> SwipeCallbackBuilder<V, A> {
        SwipeCallbackBuilder::new()
    }

    /// The list view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The list view, mutably.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// The adapter.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// The adapter, mutably. Call
    /// [`notify_data_set_changed`](Self::notify_data_set_changed) after
    /// changing its items.
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// The interaction state machine.
    pub fn controller(&self) -> &SwipeController {
        &self.controller
    }

    /// The long-swipe threshold in use.
    pub fn threshold(&self) -> SwipeThreshold {
        self.controller.threshold()
    }

    /// Feeds a raw pointer event.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) {
        for input in self.tracker.process(event) {
            self.handle_input(input);
        }
    }

    /// Delivers a pending long press, if the pointer has been held long
    /// enough. Call this periodically while a pointer is down.
    pub fn check_long_press(&mut self, now: Instant) {
        if let Some(input) = self.tracker.check_long_press(now) {
            self.handle_input(input);
        }
    }

    /// Feeds an already recognized input.
    ///
    /// A drag start first closes whatever occupies the controller and
    /// delivers those notifications, so listener requests made while the
    /// previous row closes cannot touch the new gesture.
    pub fn handle_input(&mut self, input: SwipeInput) {
        tracing::trace!(target: targets::CALLBACK, ?input, "input");
        if let SwipeInput::DragStarted { position } = input {
            let events = self
                .controller
                .prepare_drag(position, &mut self.view, &self.adapter);
            self.dispatch(events);
        }
        let events = self.controller.handle(input, &mut self.view, &self.adapter);
        self.dispatch(events);
    }

    /// Moves settle animations forward. Call this once per frame.
    pub fn advance(&mut self, dt: Duration) {
        let events = self.controller.advance(dt, &mut self.view);
        self.dispatch(events);
    }

    /// Forces any open or dragging row closed without animation.
    ///
    /// `on_swipe_ended` is delivered for a row that had started. Calling this
    /// with no active row does nothing.
    pub fn reset_swipe_controller(&mut self) {
        let events = self.controller.reset(&mut self.view);
        self.dispatch(events);
    }

    /// Asks the list to redraw the row at `position`.
    pub fn reset_swiped_view(&mut self, position: usize) {
        self.view.notify_item_changed(position);
    }

    /// Resets the row at `position` after the list rebound it to other data.
    pub fn on_row_rebound(&mut self, position: usize) {
        let events = self.controller.release_row(position, &mut self.view);
        if let Some(row) = self.view.row_mut(position) {
            row.reset();
        }
        self.dispatch(events);
    }

    /// Rebinds the list view after the adapter's items changed.
    pub fn notify_data_set_changed(&mut self) {
        self.tracker.reset();
        let events = self.controller.reset(&mut self.view);
        self.view.bind_adapter(self.adapter.item_count());
        self.dispatch(events);
    }

    /// Delivers events in order, running listener requests between them.
    fn dispatch(&mut self, events: Vec<SwipeEvent>) {
        self.pending.extend(events);

        while let Some(event) = self.pending.pop_front() {
            let mut ctx = SwipeContext::new();
            self.notify(&mut ctx, event);

            for request in ctx.take_requests() {
                match request {
                    SwipeRequest::ResetController => {
                        let events = self.controller.reset(&mut self.view);
                        self.pending.extend(events);
                    }
                    SwipeRequest::ResetSwipedView(position) => {
                        self.view.notify_item_changed(position);
                    }
                }
            }
        }
    }

    fn notify(&mut self, ctx: &mut SwipeContext, event: SwipeEvent) {
        tracing::debug!(target: targets::CALLBACK, ?event, "notify");

        match event {
            SwipeEvent::ActionLaunched { position, action } => {
                if let Some(listener) = self.action_listener.as_mut() {
                    listener.on_swipe_action_launched(ctx, position, &action);
                }
            }
            SwipeEvent::ItemClicked { position } => {
                if let Some(listener) = self.action_listener.as_mut() {
                    listener.on_item_clicked(ctx, position);
                }
            }
            SwipeEvent::ItemLongClicked { position } => {
                if let Some(listener) = self.action_listener.as_mut() {
                    listener.on_item_long_clicked(ctx, position);
                }
            }
            SwipeEvent::SwipeStarted { position } => {
                if let Some(listener) = self.state_listener.as_mut() {
                    listener.on_swipe_started(ctx, position);
                }
            }
            SwipeEvent::SwipeEnded { position } => {
                if let Some(listener) = self.state_listener.as_mut() {
                    listener.on_swipe_ended(ctx, position);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionList;
    use crate::list::{RowList, SwipeActionProvider};

    struct Items(usize);

    impl SwipeActionProvider for Items {
        fn actions(&self, _position: usize) -> ActionList {
            ActionList::new()
        }
    }

    impl SwipeAdapter for Items {
        fn item_count(&self) -> usize {
            self.0
        }
    }

    #[test]
    fn test_build_binds_adapter() {
        let callback = SwipeCallback::builder()
            .list_view(RowList::new(200.0))
            .adapter(Items(5))
            .build()
            .unwrap();

        assert_eq!(callback.view().len(), 5);
        assert_eq!(callback.threshold(), SwipeThreshold::default());
    }

    #[test]
    fn test_build_requires_view_and_adapter() {
        let result = SwipeCallbackBuilder::<RowList, Items>::new()
            .adapter(Items(1))
            .build();
        assert!(matches!(result, Err(SwipeError::MissingListView)));

        let result = SwipeCallbackBuilder::<RowList, Items>::new()
            .list_view(RowList::new(200.0))
            .build();
        assert!(matches!(result, Err(SwipeError::MissingAdapter)));
    }

    #[test]
    fn test_threshold_override() {
        let callback = SwipeCallback::builder()
            .list_view(RowList::new(200.0))
            .adapter(Items(1))
            .config(SwipeConfig::new().swipe_threshold(0.9))
            .swipe_threshold(0.5)
            .build()
            .unwrap();

        assert_eq!(callback.threshold().get(), 0.5);
    }

    #[test]
    fn test_notify_data_set_changed_rebinds() {
        let mut callback = SwipeCallback::builder()
            .list_view(RowList::new(200.0))
            .adapter(Items(2))
            .build()
            .unwrap();

        callback.adapter_mut().0 = 7;
        callback.notify_data_set_changed();

        assert_eq!(callback.view().len(), 7);
    }
}
