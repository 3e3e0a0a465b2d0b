//! Bevy application setup and execution
//!
//! This module handles the creation and configuration of the Bevy app,
//! including plugin registration and system scheduling.

use bevy::{
    app::{App, ScheduleRunnerPlugin},
    prelude::*,
    window::ExitCondition,
};
use std::thread;
use std::time::Duration;

use crate::bevy::plugins::ImageCopyPlugin;
use crate::bevy::resources::*;
use crate::bevy::systems::*;
use crate::config::{PRE_ROLL_FRAMES, TARGET_FPS};
use crate::tauri_bridge::shared_state::{
    SharedFrameBuffer, SharedMouseInput, SharedScreenController,
};

/// Create and configure the Bevy application
pub fn create_app(
    frame_buffer: SharedFrameBuffer,
    mouse_input: SharedMouseInput,
    controller: SharedScreenController,
) -> App {
    let mut app = App::new();

    // Use DefaultPlugins but configure for headless operation
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: None,
                exit_condition: ExitCondition::DontExit,
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    );

    // Add schedule runner for controlled frame rate
    app.add_plugins(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
        1.0 / TARGET_FPS,
    )));

    app.add_plugins(ImageCopyPlugin);

    // Resources first: setup_scene reads the orbit state
    app.insert_resource(FrameBufferRes(frame_buffer));
    app.insert_resource(MouseInputRes(mouse_input));
    app.insert_resource(ScreenControllerRes(controller));
    app.insert_resource(OrbitCameraState::default());
    app.insert_resource(FrameCount::default());
    app.insert_resource(PreRollFrames(PRE_ROLL_FRAMES));
    app.insert_resource(FrameRateLimiter::default());

    app.add_systems(Startup, setup_scene);
    app.add_systems(Update, (pulse_spheres, update_camera_from_input));
    app.add_systems(Last, extract_and_process_frame);

    info!("[Bevy] App configured (headless offscreen rendering)");
    app
}

/// Start Bevy in a background thread
pub fn start_bevy(
    buffer: SharedFrameBuffer,
    mouse_input: SharedMouseInput,
    controller: SharedScreenController,
) {
    thread::spawn(move || {
        let mut app = create_app(buffer, mouse_input, controller);
        info!("[Bevy] Running render loop...");
        app.run();
    });
}
