//! Pulse Sphere: a pulsing 3D sphere with an adjustable animation speed
//!
//! A single screen renders a sphere whose uniform scale follows
//! `1 + 0.5 * sin(speed * t)`. A slider in the frontend sets `speed`.
//!
//! Architecture:
//! - Bevy runs in a background thread with NO window (true headless mode)
//! - Each frame the pulse system reads the speed from the screen controller
//! - GPU texture -> Buffer -> CPU channel -> Tauri frontend via `frame://`
//! - Speed changes are pushed to the frontend as `speed-changed` events
//!
//! # Module Structure
//!
//! - `config`: Configuration constants and settings
//! - `error`: Control and bridge error types
//! - `pulse`: The pulse animation function
//! - `screen`: Speed slider and observable screen controller
//! - `tauri_bridge`: Bridge layer between Tauri and Bevy
//!   - `shared_state`: Thread-safe data structures
//!   - `commands`: Tauri command handlers
//!   - `protocol`: Custom protocol handlers
//! - `bevy`: Bevy engine integration
//!   - `components`: ECS components
//!   - `resources`: Global resources
//!   - `plugins`: Custom plugins
//!   - `systems`: Scene, camera, animation and frame systems
//!   - `app`: Application setup

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod bevy;
mod config;
mod error;
mod pulse;
mod screen;
mod tauri_bridge;

use std::{thread, time::Duration};
use tauri::Emitter;

use config::animation::SPEED_CHANGED_EVENT;
use tauri_bridge::{SharedFrameBuffer, SharedMouseInput, SharedScreenController};

/// Main entry point for the Tauri application
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Create shared state
    let buffer = SharedFrameBuffer::default();
    let mouse_input = SharedMouseInput::default();
    let controller = SharedScreenController::default();

    // Start Bevy in background thread
    bevy::start_bevy(buffer.clone(), mouse_input.clone(), controller.clone());

    // Wait for Bevy to initialize (it also installs the log subscriber)
    thread::sleep(Duration::from_millis(1000));
    tracing::info!("[Tauri] Starting...");

    // Clone for the custom protocol handler
    let protocol_buffer = buffer.clone();
    let protocol_controller = controller.clone();
    let observed_controller = controller.clone();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(buffer)
        .manage(mouse_input)
        .manage(controller)
        .setup(move |app| {
            // Bind the frontend readout to the speed
            let handle = app.handle().clone();
            observed_controller.lock()?.subscribe(move |change| {
                tracing::debug!("[Tauri] {}", change.readout);
                if let Err(err) = handle.emit(SPEED_CHANGED_EVENT, change) {
                    tracing::warn!("[Tauri] Failed to emit {}: {}", SPEED_CHANGED_EVENT, err);
                }
            });
            Ok(())
        })
        // Register custom protocol "frame://" for direct binary transfer
        .register_asynchronous_uri_scheme_protocol("frame", move |_ctx, request, responder| {
            let buffer = protocol_buffer.clone();
            let controller = protocol_controller.clone();

            // Handle the request in a separate thread to avoid blocking
            std::thread::spawn(move || {
                // For Tauri v2 on Windows, URL format is: http://frame.localhost/path
                let response = tauri_bridge::protocol::handle_frame_protocol(
                    request.uri().path(),
                    &buffer,
                    &controller,
                );
                responder.respond(response);
            });
        })
        .invoke_handler(tauri::generate_handler![
            tauri_bridge::commands::get_frame,
            tauri_bridge::commands::get_render_size,
            tauri_bridge::commands::send_mouse_input,
            tauri_bridge::commands::mount_screen,
            tauri_bridge::commands::get_speed_control,
            tauri_bridge::commands::set_animation_speed
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
