//! Shared state structures for communication between Tauri and Bevy
//!
//! This module defines thread-safe data structures that allow bidirectional
//! communication between the Tauri frontend and the Bevy render backend.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::BridgeError;
use crate::screen::{ScreenController, SpeedControlView};

// =============================================================================
// Frame Buffer
// =============================================================================

/// Thread-safe RGBA frame buffer shared between Bevy and Tauri
/// Stores raw RGBA8 pixel data (4 bytes per pixel)
#[derive(Clone, Default)]
pub struct SharedFrameBuffer(pub Arc<Mutex<Option<Vec<u8>>>>);

impl SharedFrameBuffer {
    /// Copy of the latest frame
    pub fn latest(&self) -> Result<Vec<u8>, BridgeError> {
        let guard = self
            .0
            .lock()
            .map_err(|_| BridgeError::LockPoisoned("frame buffer"))?;
        guard.clone().ok_or(BridgeError::FrameNotReady)
    }

    pub fn store(&self, rgba: Vec<u8>) -> Result<(), BridgeError> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| BridgeError::LockPoisoned("frame buffer"))?;
        *guard = Some(rgba);
        Ok(())
    }
}

/// Frame response containing Base64-encoded RGBA pixel data
#[derive(Serialize, Deserialize)]
pub struct FrameResponse {
    /// Base64-encoded RGBA pixel data (avoids slow JSON array serialization)
    pub data: String,
    pub width: u32,
    pub height: u32,
}

// =============================================================================
// Mouse Input
// =============================================================================

/// Mouse input state received from frontend
#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq)]
pub struct MouseInput {
    /// Accumulated X movement delta
    pub delta_x: f32,
    /// Accumulated Y movement delta
    pub delta_y: f32,
    /// Accumulated scroll wheel delta
    pub scroll_delta: f32,
    /// Left mouse button is pressed (orbit)
    pub left_button: bool,
    /// Right mouse button is pressed (pan)
    pub right_button: bool,
}

/// Thread-safe mouse input shared between Tauri and Bevy
#[derive(Clone, Default)]
pub struct SharedMouseInput(pub Arc<Mutex<MouseInput>>);

impl SharedMouseInput {
    /// Add deltas from the frontend; buttons take the latest state
    pub fn accumulate(&self, input: MouseInput) -> Result<(), BridgeError> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| BridgeError::LockPoisoned("mouse input"))?;
        guard.delta_x += input.delta_x;
        guard.delta_y += input.delta_y;
        guard.scroll_delta += input.scroll_delta;
        guard.left_button = input.left_button;
        guard.right_button = input.right_button;
        Ok(())
    }

    /// Read the accumulated input and clear the deltas
    pub fn take(&self) -> Result<MouseInput, BridgeError> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| BridgeError::LockPoisoned("mouse input"))?;
        let input = guard.clone();
        guard.delta_x = 0.0;
        guard.delta_y = 0.0;
        guard.scroll_delta = 0.0;
        Ok(input)
    }
}

// =============================================================================
// Screen Controller
// =============================================================================

/// The screen's speed controller, written by commands and read every frame
#[derive(Clone, Default)]
pub struct SharedScreenController(pub Arc<Mutex<ScreenController>>);

impl SharedScreenController {
    pub fn lock(&self) -> Result<MutexGuard<'_, ScreenController>, BridgeError> {
        self.0
            .lock()
            .map_err(|_| BridgeError::LockPoisoned("screen controller"))
    }

    /// Current speed for the frame callback
    pub fn speed(&self) -> Result<f32, BridgeError> {
        Ok(self.lock()?.speed())
    }

    pub fn view(&self) -> Result<SpeedControlView, BridgeError> {
        Ok(self.lock()?.view())
    }

    /// Route a raw slider value through the controller
    pub fn apply_slider_input(&self, raw: f32) -> Result<SpeedControlView, BridgeError> {
        let mut controller = self.lock()?;
        controller.on_slider_change(raw)?;
        Ok(controller.view())
    }

    pub fn remount(&self) -> Result<SpeedControlView, BridgeError> {
        let mut controller = self.lock()?;
        controller.remount();
        Ok(controller.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_buffer_reports_missing_frame() {
        let buffer = SharedFrameBuffer::default();
        assert!(matches!(buffer.latest(), Err(BridgeError::FrameNotReady)));
        buffer.store(vec![1, 2, 3, 4]).unwrap();
        assert_eq!(buffer.latest().unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn mouse_deltas_accumulate_until_taken() {
        let shared = SharedMouseInput::default();
        let drag = MouseInput {
            delta_x: 3.0,
            delta_y: -1.0,
            scroll_delta: 0.5,
            left_button: true,
            right_button: false,
        };
        shared.accumulate(drag.clone()).unwrap();
        shared.accumulate(drag).unwrap();

        let taken = shared.take().unwrap();
        assert_eq!(taken.delta_x, 6.0);
        assert_eq!(taken.delta_y, -2.0);
        assert_eq!(taken.scroll_delta, 1.0);
        assert!(taken.left_button);

        let cleared = shared.take().unwrap();
        assert_eq!(cleared.delta_x, 0.0);
        assert_eq!(cleared.scroll_delta, 0.0);
        assert!(cleared.left_button);
    }

    #[test]
    fn slider_input_is_validated_before_reaching_state() {
        let shared = SharedScreenController::default();
        let view = shared.apply_slider_input(2.0).unwrap();
        assert_eq!(view.readout, "Animation Speed: 2.00");

        let err = shared.apply_slider_input(0.01).unwrap_err();
        assert!(matches!(err, BridgeError::Control(_)));
        assert!((shared.speed().unwrap() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn remount_resets_shared_controller() {
        let shared = SharedScreenController::default();
        shared.apply_slider_input(0.3).unwrap();
        let view = shared.remount().unwrap();
        assert_eq!(view.value, 1.0);
        assert_eq!(view.readout, "Animation Speed: 1.00");
    }
}
