//! Swipe configuration and validation.

use std::time::Duration;

use crate::animation::Easing;
use crate::error::{Result, SwipeError};
use crate::logging::targets;

/// Default long-swipe threshold.
///
/// Swipes past this fraction of the row width count as long swipes.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 0.75;

/// Default width of one action button in pixels.
pub const DEFAULT_BUTTON_WIDTH: f32 = 80.0;

/// Default settle animation duration in milliseconds.
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 250;

/// Default movement that turns a press into a drag, in pixels.
pub const DEFAULT_TOUCH_SLOP: f32 = 10.0;

/// Default long-press timeout in milliseconds.
pub const DEFAULT_LONG_PRESS_TIMEOUT_MS: u64 = 500;

/// A validated long-swipe threshold in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Validates `value` as a threshold.
    ///
    /// # Errors
    ///
    /// Returns [`SwipeError::ThresholdOutOfRange`] if `value` is outside
    /// `[0, 1]` or NaN.
    pub fn new(value: f32) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            tracing::warn!(target: targets::SWIPE, value, "rejected swipe threshold");
            Err(SwipeError::ThresholdOutOfRange(value))
        }
    }

    /// The threshold as a fraction.
    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl TryFrom<f32> for SwipeThreshold {
    type Error = SwipeError;

    fn try_from(value: f32) -> Result<Self> {
        Self::new(value)
    }
}

/// Configuration for swipe actions.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use horizon_lattice_swipe::SwipeConfig;
///
/// let config = SwipeConfig::new()
///     .swipe_threshold(0.6)
///     .button_width(96.0)
///     .animation_duration(Duration::ZERO);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwipeConfig {
    /// Fraction of the row width past which a release fires the primary action.
    pub swipe_threshold: f32,
    /// Width of one revealed action button.
    pub button_width: f32,
    /// Minimum reveal, as a fraction of the button strip, for a release to
    /// open the row. `None` uses one button's width, or half a button when
    /// the row has a single action.
    pub min_reveal_fraction: Option<f32>,
    /// Duration of the settle animation after release.
    pub animation_duration: Duration,
    /// Curve of the settle animation.
    pub easing: Easing,
    /// Movement that turns a press into a drag or scroll.
    pub touch_slop: f32,
    /// Hold time that turns a press into a long press.
    pub long_press_timeout: Duration,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            button_width: DEFAULT_BUTTON_WIDTH,
            min_reveal_fraction: None,
            animation_duration: Duration::from_millis(DEFAULT_ANIMATION_DURATION_MS),
            easing: Easing::default(),
            touch_slop: DEFAULT_TOUCH_SLOP,
            long_press_timeout: Duration::from_millis(DEFAULT_LONG_PRESS_TIMEOUT_MS),
        }
    }
}

impl SwipeConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the long-swipe threshold.
    pub fn swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    /// Set the action button width.
    pub fn button_width(mut self, width: f32) -> Self {
        self.button_width = width;
        self
    }

    /// Set an explicit minimum reveal fraction.
    pub fn min_reveal_fraction(mut self, fraction: f32) -> Self {
        self.min_reveal_fraction = Some(fraction);
        self
    }

    /// Set the settle animation duration.
    pub fn animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    /// Set the settle animation curve.
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the touch slop.
    pub fn touch_slop(mut self, slop: f32) -> Self {
        self.touch_slop = slop;
        self
    }

    /// Set the long-press timeout.
    pub fn long_press_timeout(mut self, timeout: Duration) -> Self {
        self.long_press_timeout = timeout;
        self
    }

    /// Checks every field and returns the validated threshold.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field as a [`SwipeError`].
    pub fn validate(&self) -> Result<SwipeThreshold> {
        let threshold = SwipeThreshold::new(self.swipe_threshold)?;

        if !self.button_width.is_finite() || self.button_width <= 0.0 {
            return Err(SwipeError::InvalidButtonWidth(self.button_width));
        }

        if let Some(fraction) = self.min_reveal_fraction
            && !(fraction > 0.0 && fraction <= 1.0)
        {
            return Err(SwipeError::InvalidMinimumReveal(fraction));
        }

        Ok(threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_range() {
        for value in [0.0, 0.25, 0.75, 1.0] {
            assert_eq!(SwipeThreshold::new(value).map(SwipeThreshold::get), Ok(value));
        }
        for value in [-0.01, 1.01, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                SwipeThreshold::new(value),
                Err(SwipeError::ThresholdOutOfRange(_))
            ));
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = SwipeConfig::default();
        assert_eq!(config.validate(), Ok(SwipeThreshold::default()));
        assert_eq!(config.swipe_threshold, 0.75);
    }

    #[test]
    fn test_invalid_button_width() {
        let config = SwipeConfig::new().button_width(0.0);
        assert_eq!(config.validate(), Err(SwipeError::InvalidButtonWidth(0.0)));
    }

    #[test]
    fn test_invalid_min_reveal() {
        let config = SwipeConfig::new().min_reveal_fraction(1.5);
        assert_eq!(config.validate(), Err(SwipeError::InvalidMinimumReveal(1.5)));
        assert!(SwipeConfig::new().min_reveal_fraction(1.0).validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_json() {
        let config: SwipeConfig =
            serde_json::from_str(r#"{ "swipe_threshold": 0.5, "easing": "Linear" }"#).unwrap();
        assert_eq!(config.swipe_threshold, 0.5);
        assert_eq!(config.easing, Easing::Linear);
        assert_eq!(config.button_width, DEFAULT_BUTTON_WIDTH);
    }
}
