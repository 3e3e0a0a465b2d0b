//! Screen controller holding the observable animation speed
//!
//! `speed` is a plain field written only by `ScreenController::set_speed`,
//! which is reached through the slider. Anything displaying the speed
//! subscribes and is re-evaluated on each change.

use serde::Serialize;

use crate::config::animation::READOUT_LABEL;
use crate::error::ControlError;
use crate::pulse::pulse_period;

use super::slider::SpeedSlider;

/// Notification sent to observers after an accepted speed change
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedChanged {
    pub speed: f32,
    pub readout: String,
    /// Seconds per pulse cycle at the new speed
    pub period_secs: Option<f32>,
}

/// Handle returned by [`ScreenController::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn Fn(&SpeedChanged) + Send + 'static>;

/// Snapshot of the control surface for the frontend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedControlView {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub value: f32,
    pub readout: String,
    /// Seconds per pulse cycle at the current speed
    pub period_secs: Option<f32>,
}

/// Owns the speed slider and the speed it drives
pub struct ScreenController {
    slider: SpeedSlider,
    speed: f32,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl Default for ScreenController {
    fn default() -> Self {
        Self::new(SpeedSlider::default())
    }
}

impl std::fmt::Debug for ScreenController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenController")
            .field("slider", &self.slider)
            .field("speed", &self.speed)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl ScreenController {
    pub fn new(slider: SpeedSlider) -> Self {
        Self {
            speed: slider.initial,
            slider,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn slider(&self) -> &SpeedSlider {
        &self.slider
    }

    /// Text label bound to the current speed, e.g. `Animation Speed: 1.00`
    pub fn readout(&self) -> String {
        format_readout(self.speed)
    }

    pub fn view(&self) -> SpeedControlView {
        SpeedControlView {
            min: self.slider.min,
            max: self.slider.max,
            step: self.slider.step,
            value: self.speed,
            readout: self.readout(),
            period_secs: pulse_period(self.speed),
        }
    }

    /// Handle a value reported by the slider
    ///
    /// Rejected values leave the held speed untouched and notify nobody.
    pub fn on_slider_change(&mut self, raw: f32) -> Result<f32, ControlError> {
        let value = self.slider.report(raw)?;
        self.set_speed(value);
        Ok(value)
    }

    /// Restore the freshly mounted state, keeping subscriptions
    pub fn remount(&mut self) {
        self.set_speed(self.slider.initial);
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn(&SpeedChanged) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false if the subscription was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn set_speed(&mut self, speed: f32) {
        debug_assert!(self.slider.contains(speed));
        self.speed = speed;
        let change = SpeedChanged {
            speed,
            readout: self.readout(),
            period_secs: pulse_period(speed),
        };
        for (_, observer) in &self.observers {
            observer(&change);
        }
    }
}

pub fn format_readout(speed: f32) -> String {
    format!("{READOUT_LABEL}: {speed:.2}")
}
