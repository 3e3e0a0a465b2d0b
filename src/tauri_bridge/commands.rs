//! Tauri command handlers
//!
//! This module contains all the Tauri command functions that can be invoked
//! from the frontend JavaScript/TypeScript code.

use base64::{engine::general_purpose::STANDARD, Engine};
use tauri::State;

use super::shared_state::{
    FrameResponse, MouseInput, SharedFrameBuffer, SharedMouseInput, SharedScreenController,
};
use crate::config::{RENDER_HEIGHT, RENDER_WIDTH};
use crate::error::BridgeError;
use crate::screen::SpeedControlView;

/// Get the current rendered frame as Base64-encoded RGBA data
#[tauri::command]
pub fn get_frame(state: State<SharedFrameBuffer>) -> Result<FrameResponse, BridgeError> {
    let rgba_data = state.latest()?;
    Ok(FrameResponse {
        data: STANDARD.encode(rgba_data),
        width: RENDER_WIDTH,
        height: RENDER_HEIGHT,
    })
}

/// Get the render resolution
#[tauri::command]
pub fn get_render_size() -> (u32, u32) {
    (RENDER_WIDTH, RENDER_HEIGHT)
}

/// Receive mouse input from frontend for camera control
/// Input deltas are accumulated until consumed by Bevy
#[tauri::command]
pub fn send_mouse_input(
    state: State<SharedMouseInput>,
    delta_x: f32,
    delta_y: f32,
    scroll_delta: f32,
    left_button: bool,
    right_button: bool,
) -> Result<(), BridgeError> {
    state.accumulate(MouseInput {
        delta_x,
        delta_y,
        scroll_delta,
        left_button,
        right_button,
    })
}

/// Start a fresh screen session: default speed, readout re-broadcast
#[tauri::command]
pub fn mount_screen(state: State<SharedScreenController>) -> Result<SpeedControlView, BridgeError> {
    tracing::info!("[Tauri] Screen mounted");
    state.remount()
}

/// Slider bounds, current speed and readout
#[tauri::command]
pub fn get_speed_control(
    state: State<SharedScreenController>,
) -> Result<SpeedControlView, BridgeError> {
    state.view()
}

/// Slider change from the frontend
#[tauri::command]
pub fn set_animation_speed(
    state: State<SharedScreenController>,
    value: f32,
) -> Result<SpeedControlView, BridgeError> {
    state.apply_slider_input(value).inspect_err(|err| {
        tracing::warn!("[Tauri] Rejected slider value {}: {}", value, err);
    })
}
