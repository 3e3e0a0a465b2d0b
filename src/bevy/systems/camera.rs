//! Camera control system
//!
//! This module implements orbit camera controls that respond to mouse input
//! from the frontend, allowing users to rotate, pan and zoom the camera.

use bevy::{math::Vec3, prelude::*};

use crate::bevy::components::CameraController;
use crate::bevy::resources::{MouseInputRes, OrbitCameraState};
use crate::config::camera::*;
use crate::tauri_bridge::shared_state::MouseInput;

/// Update camera transform based on mouse input
/// Implements orbit camera control:
/// - Left button drag: rotate camera (yaw/pitch)
/// - Right button drag: pan the orbit center
/// - Scroll wheel: zoom (adjust distance)
pub fn update_camera_from_input(
    mouse_input_res: Option<Res<MouseInputRes>>,
    mut orbit_state: ResMut<OrbitCameraState>,
    mut camera_query: Query<&mut Transform, With<CameraController>>,
) {
    let Some(mouse_res) = mouse_input_res else {
        return;
    };

    // Read and clear accumulated input
    let Ok(input) = mouse_res.0.take() else {
        return;
    };

    apply_input(&mut orbit_state, &input);

    for mut transform in camera_query.iter_mut() {
        *transform =
            Transform::from_translation(orbit_state.eye()).looking_at(orbit_state.center, Vec3::Y);
    }
}

fn apply_input(orbit: &mut OrbitCameraState, input: &MouseInput) {
    let dragging = input.delta_x != 0.0 || input.delta_y != 0.0;

    if input.left_button && dragging {
        orbit.yaw -= input.delta_x * ROTATION_SPEED;
        orbit.pitch -= input.delta_y * ROTATION_SPEED;

        // Clamp pitch to prevent camera flipping
        orbit.pitch = orbit.pitch.clamp(MIN_PITCH, MAX_PITCH);
    } else if input.right_button && dragging {
        // Pan faster when zoomed out so the scene tracks the cursor
        let scale = PAN_SPEED * orbit.distance;
        let (right, up) = (orbit.right(), orbit.up());
        orbit.center += (-input.delta_x * right + input.delta_y * up) * scale;
    }

    if input.scroll_delta != 0.0 {
        orbit.distance -= input.scroll_delta * ZOOM_SPEED;
        orbit.distance = orbit.distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}
