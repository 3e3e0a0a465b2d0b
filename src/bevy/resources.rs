//! Bevy resource definitions
//!
//! This module contains all global resources used by Bevy systems.
//! Resources are singleton data that can be accessed by any system.

use bevy::prelude::*;
use std::time::Duration;

use crate::config::{scene::CAMERA_POSITION, TARGET_FPS};
use crate::tauri_bridge::shared_state::{
    SharedFrameBuffer, SharedMouseInput, SharedScreenController,
};

// =============================================================================
// Camera Control
// =============================================================================

/// Orbit camera state for spherical coordinate camera control
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrbitCameraState {
    /// Horizontal rotation angle (radians)
    pub yaw: f32,
    /// Vertical rotation angle (radians), clamped to avoid gimbal lock
    pub pitch: f32,
    /// Distance from the camera to the center point
    pub distance: f32,
    /// The point the camera orbits around, moved by panning
    pub center: Vec3,
}

impl OrbitCameraState {
    /// Orbit state that places the camera at `position`, looking at `center`
    pub fn looking_from(position: Vec3, center: Vec3) -> Self {
        let offset = position - center;
        let distance = offset.length();
        let pitch = if distance > 0.0 {
            (offset.y / distance).clamp(-1.0, 1.0).asin()
        } else {
            0.0
        };
        Self {
            yaw: offset.x.atan2(offset.z),
            pitch,
            distance,
            center,
        }
    }

    /// Camera position in world space
    pub fn eye(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.center + Vec3::new(x, y, z)
    }

    /// Horizontal screen-right direction for the current yaw
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin())
    }

    /// Screen-up direction, perpendicular to both `right` and the view axis
    pub fn up(&self) -> Vec3 {
        let forward = (self.center - self.eye()).normalize_or_zero();
        self.right().cross(forward).normalize_or(Vec3::Y)
    }
}

impl Default for OrbitCameraState {
    fn default() -> Self {
        Self::looking_from(Vec3::from_array(CAMERA_POSITION), Vec3::ZERO)
    }
}

/// Resource to hold shared mouse input in Bevy
#[derive(Resource)]
pub struct MouseInputRes(pub SharedMouseInput);

// =============================================================================
// Animation
// =============================================================================

/// Screen controller whose speed drives the pulse
#[derive(Resource, Clone)]
pub struct ScreenControllerRes(pub SharedScreenController);

// =============================================================================
// Rendering
// =============================================================================

/// Shared frame buffer resource for Bevy
#[derive(Resource, Clone)]
pub struct FrameBufferRes(pub SharedFrameBuffer);

// =============================================================================
// Frame Management
// =============================================================================

/// Counter for total frames rendered
#[derive(Resource, Default)]
pub struct FrameCount(pub u32);

/// Number of pre-roll frames to skip before starting output
#[derive(Resource, Default)]
pub struct PreRollFrames(pub u32);

/// Frame rate limiter to control output FPS
#[derive(Resource)]
pub struct FrameRateLimiter {
    pub last_frame_time: std::time::Instant,
    pub min_frame_interval: Duration,
}

impl FrameRateLimiter {
    pub fn new(target_fps: f64) -> Self {
        Self {
            last_frame_time: std::time::Instant::now(),
            min_frame_interval: Duration::from_secs_f64(1.0 / target_fps),
        }
    }

    /// Whether enough time has passed since the last accepted frame
    pub fn ready(&mut self, now: std::time::Instant) -> bool {
        if now.duration_since(self.last_frame_time) < self.min_frame_interval {
            return false;
        }
        self.last_frame_time = now;
        true
    }
}

impl Default for FrameRateLimiter {
    fn default() -> Self {
        Self::new(TARGET_FPS)
    }
}

// =============================================================================
// Channel Communication (Main World <-> Render World)
// =============================================================================

use crossbeam_channel::{Receiver, Sender};

/// Receives data from render world
#[derive(Resource, Deref)]
pub struct MainWorldReceiver(pub Receiver<Vec<u8>>);

/// Sends data to main world
#[derive(Resource, Deref)]
pub struct RenderWorldSender(pub Sender<Vec<u8>>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_orbit_places_camera_at_configured_position() {
        let eye = OrbitCameraState::default().eye();
        assert!(eye.abs_diff_eq(Vec3::new(3.0, 3.0, 3.0), 1e-4), "{eye}");
    }

    #[test]
    fn right_vector_is_horizontal_and_perpendicular_to_view() {
        let orbit = OrbitCameraState::default();
        let right = orbit.right();
        let view = (orbit.center - orbit.eye()).normalize();
        assert_eq!(right.y, 0.0);
        assert!(right.dot(view).abs() < 1e-5);
    }

    #[test]
    fn up_vector_points_up_and_is_perpendicular_to_view() {
        let orbit = OrbitCameraState::default();
        let up = orbit.up();
        let view = (orbit.center - orbit.eye()).normalize();
        assert!(up.y > 0.0);
        assert!(up.dot(view).abs() < 1e-5);
        assert!(up.dot(orbit.right()).abs() < 1e-5);
        assert!((up.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn limiter_skips_frames_inside_interval() {
        let mut limiter = FrameRateLimiter::new(10.0);
        let start = limiter.last_frame_time;
        assert!(!limiter.ready(start + Duration::from_millis(50)));
        assert!(limiter.ready(start + Duration::from_millis(101)));
        assert!(!limiter.ready(start + Duration::from_millis(150)));
    }
}
