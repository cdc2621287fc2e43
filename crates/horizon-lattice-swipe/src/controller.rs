//! The swipe interaction state machine.
//!
//! [`SwipeController`] owns the single active swipe in a list. It consumes
//! discrete [`SwipeInput`]s (from [`PointerTracker`] or any other gesture
//! source), moves rows through the [`SwipeListView`] contract and reports
//! what happened as [`SwipeEvent`]s. All state is updated before the events
//! are returned, so a caller reacting to an event always sees the state the
//! event describes.
//!
//! # States
//!
//! ```text
//!            drag on a row with actions
//!   Idle ────────────────────────────────▶ Dragging
//!    ▲                                      │ release / cancel
//!    │ settled closed                       ▼
//!    └──────────────── Animating(Closed) ◀──┴──▶ Animating(Open) ──▶ Open
//!                            ▲                                       │
//!                            └──── button tap / tap elsewhere ◀──────┘
//! ```
//!
//! Releasing at or past `threshold * row_width` launches the row's primary
//! action before the row settles closed. At most one row is ever outside
//! `Idle`: starting a drag on another row first closes the current one.
//!
//! [`PointerTracker`]: crate::PointerTracker

use std::time::Duration;

use crate::action::{ActionList, SwipeAction};
use crate::animation::{AnimationTarget, Easing, RecoverAnimation};
use crate::config::{SwipeConfig, SwipeThreshold};
use crate::error::Result;
use crate::list::{SwipeActionProvider, SwipeListView};
use crate::logging::targets;
use crate::row::{ButtonsState, SwipeRow};

/// A discrete input for the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeInput {
    /// A horizontal drag began on a row.
    DragStarted {
        /// The dragged row.
        position: usize,
    },
    /// The drag moved. `translation` is the horizontal pointer movement since
    /// the drag began; negative values move left.
    DragMoved {
        /// The dragged row.
        position: usize,
        /// Movement since the drag began.
        translation: f32,
    },
    /// The pointer was released.
    DragEnded {
        /// The dragged row.
        position: usize,
        /// Movement since the drag began.
        translation: f32,
    },
    /// The platform cancelled the drag.
    DragCancelled {
        /// The dragged row.
        position: usize,
    },
    /// A tap on a row. `x` is measured from the row's left edge.
    Tap {
        /// The tapped row.
        position: usize,
        /// Horizontal tap position within the row.
        x: f32,
    },
    /// A long press on a row.
    LongPress {
        /// The pressed row.
        position: usize,
    },
    /// A touch that belongs to no row, or that became a scroll.
    Dismiss,
}

/// Something the controller reports to listeners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeEvent {
    /// A row started showing its actions.
    SwipeStarted {
        /// The swiped row.
        position: usize,
    },
    /// A previously started row is closed again.
    SwipeEnded {
        /// The closed row.
        position: usize,
    },
    /// An action was launched by a button tap or a long swipe.
    ActionLaunched {
        /// The row the action belongs to.
        position: usize,
        /// The launched action.
        action: SwipeAction,
    },
    /// A row was tapped while no row was open.
    ItemClicked {
        /// The tapped row.
        position: usize,
    },
    /// A row was long-pressed while no row was open.
    ItemLongClicked {
        /// The pressed row.
        position: usize,
    },
}

/// Observable phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipePhase {
    /// No row is active.
    Idle,
    /// A row follows the pointer.
    Dragging,
    /// A row rests with its buttons revealed.
    Open,
    /// A row settles towards a target.
    Animating(AnimationTarget),
}

/// Distances for the active row, fixed when its gesture begins.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Geometry {
    /// Full swipeable distance (the row width).
    max_distance: f32,
    /// Offset at which the row rests open.
    open_distance: f32,
    /// Smallest release offset that opens the row.
    min_reveal: f32,
    /// Release offset at or past which the primary action fires.
    long_swipe: f32,
}

impl Geometry {
    fn new(
        actions: &ActionList,
        row_width: f32,
        button_width: f32,
        min_reveal_fraction: Option<f32>,
        threshold: SwipeThreshold,
    ) -> Self {
        let max_distance = row_width.max(0.0);
        let count = actions.len();
        let open_distance = (count as f32 * button_width).min(max_distance);
        let min_reveal = match min_reveal_fraction {
            Some(fraction) => open_distance * fraction,
            None => open_distance / count.max(2) as f32,
        };

        Self {
            max_distance,
            open_distance,
            min_reveal,
            long_swipe: threshold.get() * max_distance,
        }
    }

    fn is_long_swipe(&self, offset: f32) -> bool {
        offset > 0.0 && offset >= self.long_swipe
    }

    fn buttons_state(&self, offset: f32) -> ButtonsState {
        if self.is_long_swipe(offset) {
            ButtonsState::FullySwiped
        } else if offset > 0.0 && offset >= self.min_reveal {
            ButtonsState::RightVisible
        } else {
            ButtonsState::Gone
        }
    }
}

/// The row that currently occupies the controller.
#[derive(Debug, Clone)]
struct ActiveRow {
    position: usize,
    /// Read once when the gesture begins.
    actions: ActionList,
    geometry: Geometry,
    /// Offset when the current drag began.
    base_offset: f32,
    offset: f32,
    /// `SwipeStarted` was emitted and `SwipeEnded` is still owed.
    started: bool,
}

impl ActiveRow {
    /// Index of the button under `x`, if the row is open and `x` hits one.
    fn button_at(&self, x: f32) -> Option<usize> {
        let count = self.actions.len();
        if count == 0 || self.geometry.open_distance <= 0.0 {
            return None;
        }
        let strip_start = self.geometry.max_distance - self.geometry.open_distance;
        if x < strip_start || x >= self.geometry.max_distance {
            return None;
        }
        let span = self.geometry.open_distance / count as f32;
        let index = ((x - strip_start) / span) as usize;
        Some(index.min(count - 1))
    }
}

#[derive(Debug, Clone, Default)]
enum State {
    #[default]
    Idle,
    Dragging(ActiveRow),
    Open(ActiveRow),
    Animating(ActiveRow, RecoverAnimation),
}

/// The swipe interaction state machine.
#[derive(Debug, Clone)]
pub struct SwipeController {
    threshold: SwipeThreshold,
    button_width: f32,
    min_reveal_fraction: Option<f32>,
    animation_duration: Duration,
    easing: Easing,
    state: State,
}

impl SwipeController {
    /// Creates a controller from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` does not validate.
    pub fn new(config: &SwipeConfig) -> Result<Self> {
        let threshold = config.validate()?;
        Ok(Self {
            threshold,
            button_width: config.button_width,
            min_reveal_fraction: config.min_reveal_fraction,
            animation_duration: config.animation_duration,
            easing: config.easing,
            state: State::Idle,
        })
    }

    /// The long-swipe threshold.
    #[inline]
    pub fn threshold(&self) -> SwipeThreshold {
        self.threshold
    }

    /// The current phase.
    pub fn phase(&self) -> SwipePhase {
        match &self.state {
            State::Idle => SwipePhase::Idle,
            State::Dragging(_) => SwipePhase::Dragging,
            State::Open(_) => SwipePhase::Open,
            State::Animating(_, anim) => SwipePhase::Animating(anim.target()),
        }
    }

    /// The row that is dragging, open or settling.
    pub fn active_position(&self) -> Option<usize> {
        self.active().map(|row| row.position)
    }

    /// The active row's offset.
    pub fn offset(&self) -> Option<f32> {
        self.active().map(|row| row.offset)
    }

    /// Whether releasing the current drag would launch the primary action.
    pub fn is_primed(&self) -> bool {
        match &self.state {
            State::Dragging(row) => row.geometry.is_long_swipe(row.offset),
            _ => false,
        }
    }

    /// Feeds one input to the state machine.
    pub fn handle<V, P>(&mut self, input: SwipeInput, list: &mut V, provider: &P) -> Vec<SwipeEvent>
    where
        V: SwipeListView,
        P: SwipeActionProvider + ?Sized,
    {
        let mut events = Vec::new();

        match input {
            SwipeInput::DragStarted { position } => {
                self.begin_drag(position, list, provider, &mut events);
            }
            SwipeInput::DragMoved {
                position,
                translation,
            } => {
                self.drag_to(position, translation, list, &mut events);
            }
            SwipeInput::DragEnded {
                position,
                translation,
            } => {
                self.end_drag(position, translation, list, &mut events);
            }
            SwipeInput::DragCancelled { position } => {
                self.cancel_drag(position, list, &mut events);
            }
            SwipeInput::Tap { position, x } => self.tap(position, x, list, &mut events),
            SwipeInput::LongPress { position } => self.long_press(position, list, &mut events),
            SwipeInput::Dismiss => {
                if matches!(self.state, State::Open(_)) {
                    self.animate(AnimationTarget::Closed, list, &mut events);
                }
            }
        }

        events
    }

    /// Frees the controller for a drag on `position` without starting it.
    ///
    /// A running animation is settled and another open row is closed. Hosts
    /// that deliver the resulting events before feeding
    /// [`SwipeInput::DragStarted`] let listeners react to the close before
    /// the new gesture exists. Does nothing if the drag would be ignored.
    pub fn prepare_drag<V, P>(&mut self, position: usize, list: &mut V, provider: &P) -> Vec<SwipeEvent>
    where
        V: SwipeListView,
        P: SwipeActionProvider + ?Sized,
    {
        let mut events = Vec::new();
        if self.accepts_drag(position, list, provider).is_some() {
            self.vacate(position, list, &mut events);
        }
        events
    }

    /// Moves a settle animation forward by `dt`.
    pub fn advance<V: SwipeListView>(&mut self, dt: Duration, list: &mut V) -> Vec<SwipeEvent> {
        let mut events = Vec::new();
        if let State::Animating(row, anim) = &mut self.state {
            row.offset = anim.advance(dt);
            let (position, offset) = (row.position, row.offset);
            update_row(list, position, offset, None);
            self.settle_if_finished(list, &mut events);
        }
        events
    }

    /// Completes a running settle animation immediately.
    pub fn finish_animation<V: SwipeListView>(&mut self, list: &mut V) -> Vec<SwipeEvent> {
        let mut events = Vec::new();
        self.finish_animation_into(list, &mut events);
        events
    }

    /// Forces the active row closed without animation.
    ///
    /// No action is launched. Calling this with no active row does nothing.
    pub fn reset<V: SwipeListView>(&mut self, list: &mut V) -> Vec<SwipeEvent> {
        let mut events = Vec::new();
        self.close_now(list, &mut events);
        events
    }

    /// Releases `position` after the list rebound it to different data.
    ///
    /// If it was the active row it is closed without animation.
    pub fn release_row<V: SwipeListView>(
        &mut self,
        position: usize,
        list: &mut V,
    ) -> Vec<SwipeEvent> {
        let mut events = Vec::new();
        if self.active_position() == Some(position) {
            tracing::debug!(target: targets::CONTROLLER, position, "active row rebound");
            self.close_now(list, &mut events);
        }
        events
    }

    fn active(&self) -> Option<&ActiveRow> {
        match &self.state {
            State::Idle => None,
            State::Dragging(row) | State::Open(row) | State::Animating(row, _) => Some(row),
        }
    }

    /// Whether a drag on `position` would be accepted.
    fn accepts_drag<V, P>(&self, position: usize, list: &mut V, provider: &P) -> Option<ActionList>
    where
        V: SwipeListView,
        P: SwipeActionProvider + ?Sized,
    {
        if let State::Dragging(row) = &self.state {
            tracing::trace!(
                target: targets::CONTROLLER,
                position,
                dragging = row.position,
                "ignoring second drag"
            );
            return None;
        }

        let actions = provider.actions(position);
        if actions.is_empty() {
            tracing::trace!(target: targets::CONTROLLER, position, "row has no actions, drag ignored");
            return None;
        }
        if list.row_mut(position).is_none() {
            tracing::trace!(target: targets::CONTROLLER, position, "row is not bound, drag ignored");
            return None;
        }
        Some(actions)
    }

    /// Settles a running animation and closes any other open row.
    fn vacate<V: SwipeListView>(
        &mut self,
        position: usize,
        list: &mut V,
        events: &mut Vec<SwipeEvent>,
    ) {
        self.finish_animation_into(list, events);
        if matches!(&self.state, State::Open(row) if row.position != position) {
            self.close_now(list, events);
        }
    }

    fn begin_drag<V, P>(
        &mut self,
        position: usize,
        list: &mut V,
        provider: &P,
        events: &mut Vec<SwipeEvent>,
    ) where
        V: SwipeListView,
        P: SwipeActionProvider + ?Sized,
    {
        let Some(actions) = self.accepts_drag(position, list, provider) else {
            return;
        };
        self.vacate(position, list, events);

        let geometry = Geometry::new(
            &actions,
            list.row_width(),
            self.button_width,
            self.min_reveal_fraction,
            self.threshold,
        );

        match std::mem::take(&mut self.state) {
            State::Open(mut row) if row.position == position => {
                tracing::debug!(target: targets::CONTROLLER, position, ?geometry, "dragging open row");
                row.actions = actions;
                row.geometry = geometry;
                row.offset = row.offset.min(geometry.max_distance);
                row.base_offset = row.offset;
                self.state = State::Dragging(row);
            }
            _ => {
                tracing::debug!(target: targets::CONTROLLER, position, ?geometry, "drag started");
                self.state = State::Dragging(ActiveRow {
                    position,
                    actions,
                    geometry,
                    base_offset: 0.0,
                    offset: 0.0,
                    started: false,
                });
            }
        }
    }

    fn drag_to<V: SwipeListView>(
        &mut self,
        position: usize,
        translation: f32,
        list: &mut V,
        events: &mut Vec<SwipeEvent>,
    ) {
        let State::Dragging(row) = &mut self.state else {
            return;
        };
        if row.position != position {
            return;
        }

        let offset = (row.base_offset - translation).clamp(0.0, row.geometry.max_distance);
        row.offset = offset;
        if !row.started && offset > 0.0 {
            row.started = true;
            tracing::debug!(target: targets::CONTROLLER, position, "swipe started");
            events.push(SwipeEvent::SwipeStarted { position });
        }
        let buttons = row.geometry.buttons_state(offset);
        update_row(list, position, offset, Some(buttons));
    }

    fn end_drag<V: SwipeListView>(
        &mut self,
        position: usize,
        translation: f32,
        list: &mut V,
        events: &mut Vec<SwipeEvent>,
    ) {
        self.drag_to(position, translation, list, events);

        let State::Dragging(row) = &self.state else {
            return;
        };
        if row.position != position {
            return;
        }

        let offset = row.offset;
        let geometry = row.geometry;

        if !row.started {
            // Never moved: nothing was revealed, nothing to report.
            tracing::trace!(target: targets::CONTROLLER, position, "drag released at rest");
            self.state = State::Idle;
            update_row(list, position, 0.0, Some(ButtonsState::Gone));
            return;
        }

        if geometry.is_long_swipe(offset) {
            if let Some(action) = row.actions.primary().copied() {
                tracing::debug!(target: targets::CONTROLLER, position, offset, "long swipe");
                events.push(SwipeEvent::ActionLaunched { position, action });
            }
            self.animate(AnimationTarget::Closed, list, events);
        } else if offset >= geometry.min_reveal {
            self.animate(AnimationTarget::Open, list, events);
        } else {
            self.animate(AnimationTarget::Closed, list, events);
        }
    }

    fn cancel_drag<V: SwipeListView>(
        &mut self,
        position: usize,
        list: &mut V,
        events: &mut Vec<SwipeEvent>,
    ) {
        let State::Dragging(row) = &self.state else {
            return;
        };
        if row.position != position {
            return;
        }

        tracing::debug!(target: targets::CONTROLLER, position, "drag cancelled");
        if row.started {
            self.animate(AnimationTarget::Closed, list, events);
        } else {
            self.state = State::Idle;
        }
    }

    fn tap<V: SwipeListView>(
        &mut self,
        position: usize,
        x: f32,
        list: &mut V,
        events: &mut Vec<SwipeEvent>,
    ) {
        // A row settling open takes taps as if it were already open.
        if self.phase() == SwipePhase::Animating(AnimationTarget::Open) {
            self.finish_animation_into(list, events);
        }

        match &self.state {
            State::Idle => events.push(SwipeEvent::ItemClicked { position }),
            State::Open(row) => {
                let hit = if row.position == position {
                    row.button_at(x)
                        .and_then(|index| row.actions.get(index).copied())
                } else {
                    None
                };
                match hit {
                    Some(action) => {
                        tracing::debug!(target: targets::CONTROLLER, position, "action button tapped");
                        events.push(SwipeEvent::ActionLaunched { position, action });
                    }
                    None => {
                        tracing::debug!(target: targets::CONTROLLER, position, "tap dismissed open row");
                    }
                }
                self.animate(AnimationTarget::Closed, list, events);
            }
            State::Dragging(_) | State::Animating(..) => {
                tracing::trace!(target: targets::CONTROLLER, position, "tap ignored while dragging or closing");
            }
        }
    }

    fn long_press<V: SwipeListView>(
        &mut self,
        position: usize,
        list: &mut V,
        events: &mut Vec<SwipeEvent>,
    ) {
        match &self.state {
            State::Idle => events.push(SwipeEvent::ItemLongClicked { position }),
            State::Open(_) => self.animate(AnimationTarget::Closed, list, events),
            State::Dragging(_) | State::Animating(..) => {}
        }
    }

    /// Starts settling the active row towards `target`.
    fn animate<V: SwipeListView>(
        &mut self,
        target: AnimationTarget,
        list: &mut V,
        events: &mut Vec<SwipeEvent>,
    ) {
        let row = match std::mem::take(&mut self.state) {
            State::Dragging(row) | State::Open(row) | State::Animating(row, _) => row,
            State::Idle => return,
        };

        let target_offset = match target {
            AnimationTarget::Open => row.geometry.open_distance,
            AnimationTarget::Closed => 0.0,
        };
        tracing::debug!(
            target: targets::CONTROLLER,
            position = row.position,
            ?target,
            from = row.offset,
            to = target_offset,
            "settling row"
        );

        let anim = RecoverAnimation::new(
            target,
            row.offset,
            target_offset,
            self.animation_duration,
            self.easing,
        );
        list.set_items_clickable(false);
        self.state = State::Animating(row, anim);
        self.settle_if_finished(list, events);
    }

    fn finish_animation_into<V: SwipeListView>(
        &mut self,
        list: &mut V,
        events: &mut Vec<SwipeEvent>,
    ) {
        if let State::Animating(row, anim) = &mut self.state {
            row.offset = anim.finish();
            self.settle_if_finished(list, events);
        }
    }

    fn settle_if_finished<V: SwipeListView>(
        &mut self,
        list: &mut V,
        events: &mut Vec<SwipeEvent>,
    ) {
        let finished = matches!(&self.state, State::Animating(_, anim) if anim.is_finished());
        if !finished {
            return;
        }
        let State::Animating(mut row, anim) = std::mem::take(&mut self.state) else {
            return;
        };

        row.offset = anim.target_offset();
        match anim.target() {
            AnimationTarget::Open => {
                let position = row.position;
                update_row(list, position, row.offset, Some(ButtonsState::RightVisible));
                if let Some(list_row) = list.row_mut(position) {
                    list_row.set_open(true);
                }
                if !row.started {
                    row.started = true;
                    events.push(SwipeEvent::SwipeStarted { position });
                }
                tracing::debug!(target: targets::CONTROLLER, position, "row open");
                self.state = State::Open(row);
            }
            AnimationTarget::Closed => {
                self.state = State::Idle;
                close_row(list, row, events);
            }
        }
    }

    /// Closes the active row at once, whatever its phase.
    fn close_now<V: SwipeListView>(&mut self, list: &mut V, events: &mut Vec<SwipeEvent>) {
        match std::mem::take(&mut self.state) {
            State::Idle => {}
            State::Dragging(row) | State::Open(row) | State::Animating(row, _) => {
                close_row(list, row, events);
            }
        }
    }
}

/// Writes an offset (and optionally a buttons state) to a row.
fn update_row<V: SwipeListView>(
    list: &mut V,
    position: usize,
    offset: f32,
    buttons: Option<ButtonsState>,
) {
    let Some(row) = list.row_mut(position) else {
        tracing::trace!(target: targets::CONTROLLER, position, "row not bound, skipping update");
        return;
    };
    row.set_swipe_offset(offset);
    if let Some(buttons) = buttons {
        row.set_buttons_state(buttons);
    }
    row.request_redraw();
}

/// Puts a row back to rest and reports `SwipeEnded` if it was owed.
fn close_row<V: SwipeListView>(list: &mut V, row: ActiveRow, events: &mut Vec<SwipeEvent>) {
    let position = row.position;
    if let Some(list_row) = list.row_mut(position) {
        list_row.reset();
    }
    list.notify_item_changed(position);
    list.set_items_clickable(true);

    tracing::debug!(target: targets::CONTROLLER, position, started = row.started, "row closed");
    if row.started {
        events.push(SwipeEvent::SwipeEnded { position });
    }
}
