//! Configuration constants and settings for the pulse sphere screen
//!
//! This module contains all configurable parameters such as render resolution,
//! frame rates, slider bounds and the static scene description.

/// Width of the offscreen render target in pixels
pub const RENDER_WIDTH: u32 = 800;

/// Height of the offscreen render target in pixels
pub const RENDER_HEIGHT: u32 = 600;

/// Target frames per second for the Bevy render loop
pub const TARGET_FPS: f64 = 60.0;

/// Number of pre-roll frames to skip before starting output
/// This allows the scene to fully load and stabilize
pub const PRE_ROLL_FRAMES: u32 = 30;

/// Camera control settings
pub mod camera {
    /// Rotation speed multiplier for mouse drag
    pub const ROTATION_SPEED: f32 = 0.005;

    /// Pan speed multiplier, scaled by the current orbit distance
    pub const PAN_SPEED: f32 = 0.0015;

    /// Zoom speed multiplier for scroll wheel
    pub const ZOOM_SPEED: f32 = 0.5;

    /// Minimum camera distance from center point
    pub const MIN_DISTANCE: f32 = 2.0;

    /// Maximum camera distance from center point
    pub const MAX_DISTANCE: f32 = 20.0;

    /// Maximum pitch angle (radians) to prevent camera flipping
    pub const MAX_PITCH: f32 = 1.5;

    /// Minimum pitch angle (radians) to prevent camera flipping
    pub const MIN_PITCH: f32 = -1.5;
}

/// Image compression settings
pub mod compression {
    /// JPEG quality level (0-100, higher = better quality but larger size)
    pub const JPEG_QUALITY: u8 = 85;
}

/// Pulse animation and speed slider settings
pub mod animation {
    /// Scale of the sphere when the pulse crosses zero
    pub const BASE_SCALE: f32 = 1.0;

    /// Peak deviation from the base scale
    pub const PULSE_AMPLITUDE: f32 = 0.5;

    /// Lowest speed the slider accepts
    pub const SPEED_MIN: f32 = 0.1;

    /// Highest speed the slider accepts
    pub const SPEED_MAX: f32 = 3.0;

    /// Slider step granularity
    pub const SPEED_STEP: f32 = 0.1;

    /// Speed on mount
    pub const DEFAULT_SPEED: f32 = 1.0;

    /// Label shown in front of the speed readout
    pub const READOUT_LABEL: &str = "Animation Speed";

    /// Event emitted to the frontend whenever the speed changes
    pub const SPEED_CHANGED_EVENT: &str = "speed-changed";
}

/// Static scene description
///
/// Light intensities are in Bevy's photometric units, so they are scaled
/// up from the unitless intensities a WebGL scene would use.
pub mod scene {
    /// Initial camera position, looking at the origin
    pub const CAMERA_POSITION: [f32; 3] = [3.0, 3.0, 3.0];

    /// Vertical field of view in degrees
    pub const CAMERA_FOV_DEGREES: f32 = 50.0;

    /// Background clear color (sRGB)
    pub const CLEAR_COLOR: [f32; 3] = [0.0, 0.0, 0.0];

    /// Ambient light brightness
    pub const AMBIENT_BRIGHTNESS: f32 = 300.0;

    pub const SPOT_LIGHT_POSITION: [f32; 3] = [5.0, 5.0, 5.0];
    pub const SPOT_LIGHT_INTENSITY: f32 = 1_500_000.0;
    /// Outer cone angle (radians)
    pub const SPOT_LIGHT_ANGLE: f32 = 0.3;
    /// Fraction of the cone that fades out; 1.0 fades from the axis outward
    pub const SPOT_LIGHT_PENUMBRA: f32 = 1.0;

    pub const DIRECTIONAL_LIGHT_POSITION: [f32; 3] = [-5.0, 5.0, 5.0];
    pub const DIRECTIONAL_LIGHT_ILLUMINANCE: f32 = 3000.0;

    /// Side length of the square ground plane
    pub const GROUND_SIZE: f32 = 10.0;
    /// Height of the ground plane
    pub const GROUND_HEIGHT: f32 = -1.0;
    /// How strongly the ground darkens the background
    pub const GROUND_OPACITY: f32 = 0.2;

    pub const SPHERE_RADIUS: f32 = 1.0;
    /// Longitudinal and latitudinal segment count
    pub const SPHERE_SEGMENTS: u32 = 64;
    /// Royal blue
    pub const SPHERE_COLOR: [u8; 3] = [65, 105, 225];
    pub const SPHERE_METALLIC: f32 = 0.6;
    pub const SPHERE_ROUGHNESS: f32 = 0.4;
}
