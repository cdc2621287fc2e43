//! Error types for the swipe actions crate.

use thiserror::Error;

/// Errors raised while configuring swipe actions.
///
/// The interaction state machine itself never fails; every variant here is
/// produced at configuration or build time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwipeError {
    /// The long-swipe threshold is outside `[0, 1]`.
    #[error("swipe threshold must be at least 0 and at most 1, got {0}")]
    ThresholdOutOfRange(f32),

    /// The builder was finished without a list view.
    #[error("a list view is required to build swipe actions")]
    MissingListView,

    /// The builder was finished without an adapter.
    #[error("an adapter is required to build swipe actions")]
    MissingAdapter,

    /// The action button width is not a positive, finite number.
    #[error("action button width must be positive and finite, got {0}")]
    InvalidButtonWidth(f32),

    /// The explicit minimum reveal fraction is outside `(0, 1]`.
    #[error("minimum reveal fraction must be greater than 0 and at most 1, got {0}")]
    InvalidMinimumReveal(f32),
}

/// Result type for swipe configuration.
pub type Result<T> = std::result::Result<T, SwipeError>;
