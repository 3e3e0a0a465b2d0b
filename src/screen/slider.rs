//! Speed slider control
//!
//! The slider owns the valid range and step of the animation speed. Values
//! outside the range are rejected here, before they reach the controller.

use serde::Serialize;

use crate::config::animation::{DEFAULT_SPEED, SPEED_MAX, SPEED_MIN, SPEED_STEP};
use crate::error::ControlError;

/// A continuous slider with a bounded range and step granularity
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeedSlider {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub initial: f32,
}

impl Default for SpeedSlider {
    fn default() -> Self {
        Self {
            min: SPEED_MIN,
            max: SPEED_MAX,
            step: SPEED_STEP,
            initial: DEFAULT_SPEED,
        }
    }
}

impl SpeedSlider {
    /// Validate a raw value from the frontend and snap it to the step grid
    pub fn report(&self, raw: f32) -> Result<f32, ControlError> {
        if !raw.is_finite() {
            return Err(ControlError::NotFinite);
        }
        if raw < self.min || raw > self.max {
            return Err(ControlError::OutOfRange {
                value: raw,
                min: self.min,
                max: self.max,
            });
        }
        Ok(self.snap(raw))
    }

    /// Nearest step from `min`, kept inside the range
    fn snap(&self, value: f32) -> f32 {
        if self.step <= 0.0 {
            return value;
        }
        let steps = ((value - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}
