//! Swipe actions for list rows in Horizon Lattice.
//!
//! This crate adds swipe-to-reveal actions to a scrollable list:
//!
//! - **Short swipe**: drag a row left and release past the minimum reveal to
//!   show its action buttons
//! - **Long swipe**: release past the threshold to launch the row's primary
//!   (last) action directly
//! - **Taps and long presses**: told apart from swipes and reported as clicks
//!   when no row is open
//!
//! The host supplies the list view ([`SwipeListView`]) and an adapter
//! ([`SwipeAdapter`]) that knows which actions each row offers. A
//! [`SwipeCallback`] ties them together with the [`SwipeController`] state
//! machine and delivers notifications to the registered listeners.
//!
//! # Example
//!
//! ```ignore
//! use horizon_lattice_swipe::prelude::*;
//!
//! let mut callback = SwipeCallback::builder()
//!     .list_view(RowList::new(360.0))
//!     .adapter(players)
//!     .on_swipe_action_launched_listener(actions)
//!     .swipe_threshold(0.75)
//!     .build()?;
//!
//! // Feed raw pointer events and drive animations from the frame clock.
//! callback.on_pointer_event(&event);
//! callback.advance(frame_time);
//! ```

pub mod action;
pub mod animation;
pub mod callback;
pub mod config;
pub mod controller;
pub mod list;
pub mod listener;
pub mod logging;
pub mod pointer;
pub mod row;

mod error;

pub use action::{ActionList, ColorRef, DimenRef, IconRef, RowViewType, StringRef, SwipeAction};
pub use callback::{SwipeCallback, SwipeCallbackBuilder};
pub use config::{SwipeConfig, SwipeThreshold};
pub use controller::{SwipeController, SwipeEvent, SwipeInput, SwipePhase};
pub use error::{Result, SwipeError};
pub use list::{RowList, SwipeActionProvider, SwipeAdapter, SwipeListView};
pub use listener::{OnSwipeActionLaunchedListener, OnSwipeStateChangedListener, SwipeContext};
pub use pointer::{PointerEvent, PointerPhase, PointerTracker};
pub use row::{ButtonsState, RowState, SwipeRow};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::action::{ActionList, SwipeAction};
    pub use crate::callback::{SwipeCallback, SwipeCallbackBuilder};
    pub use crate::config::SwipeConfig;
    pub use crate::list::{RowList, SwipeActionProvider, SwipeAdapter, SwipeListView};
    pub use crate::listener::{
        OnSwipeActionLaunchedListener, OnSwipeStateChangedListener, SwipeContext,
    };
    pub use crate::pointer::{PointerEvent, PointerPhase};
    pub use crate::row::{RowState, SwipeRow};
}
