//! Bevy component definitions
//!
//! This module contains all component markers and data structures used
//! to tag and identify entities in the Bevy ECS (Entity Component System).

use bevy::prelude::*;

/// Marker component for cameras that can be controlled by user input
///
/// Entities with this component will respond to mouse input for
/// orbit camera control (rotation, pan, zoom).
#[derive(Component)]
pub struct CameraController;

/// Marker component for the pulsing sphere
///
/// Entities with this component get a uniform scale from the pulse
/// function every frame.
#[derive(Component)]
pub struct PulsingSphere;
