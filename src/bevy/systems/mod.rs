//! Bevy systems
//!
//! This module contains all the systems that operate on entities
//! and resources in the Bevy ECS.

pub mod animation;
pub mod camera;
pub mod frame_extraction;
pub mod scene;

pub use animation::pulse_spheres;
pub use camera::update_camera_from_input;
pub use frame_extraction::extract_and_process_frame;
pub use scene::setup_scene;
