//! Animation systems
//!
//! This module contains systems that animate entities in the scene.

use bevy::{prelude::*, time::Time};

use crate::bevy::components::PulsingSphere;
use crate::bevy::resources::ScreenControllerRes;
use crate::pulse::pulse_transform_scale;

/// Scale every sphere marked with PulsingSphere by the pulse function
///
/// Runs once per frame with Bevy's elapsed time and the controller's
/// current speed.
pub fn pulse_spheres(
    time: Res<Time>,
    controller: Res<ScreenControllerRes>,
    mut query: Query<&mut Transform, With<PulsingSphere>>,
) {
    let speed = match controller.0.speed() {
        Ok(speed) => speed,
        Err(err) => {
            warn_once!("[Bevy] Pulse skipped: {}", err);
            return;
        }
    };

    let scale = pulse_transform_scale(speed, time.elapsed_secs());
    for mut transform in query.iter_mut() {
        transform.scale = scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    use crate::pulse::pulse_scale;
    use crate::tauri_bridge::SharedScreenController;

    fn world_at(elapsed: f32, controller: &SharedScreenController) -> World {
        let mut world = World::new();
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_secs_f32(elapsed));
        world.insert_resource(time);
        world.insert_resource(ScreenControllerRes(controller.clone()));
        world
    }

    #[test]
    fn sphere_scale_follows_pulse() {
        let controller = SharedScreenController::default();
        controller.apply_slider_input(2.0).unwrap();
        let mut world = world_at(0.6, &controller);
        let sphere = world.spawn((Transform::default(), PulsingSphere)).id();
        let other = world.spawn(Transform::default()).id();

        world.run_system_once(pulse_spheres).unwrap();

        let expected = pulse_scale(2.0, 0.6);
        let scale = world.get::<Transform>(sphere).unwrap().scale;
        assert!(scale.abs_diff_eq(Vec3::splat(expected), 1e-5), "{scale}");
        assert_eq!(world.get::<Transform>(other).unwrap().scale, Vec3::ONE);
    }

    #[test]
    fn speed_change_is_picked_up_next_frame() {
        let controller = SharedScreenController::default();
        let mut world = world_at(1.0, &controller);
        let sphere = world.spawn((Transform::default(), PulsingSphere)).id();

        world.run_system_once(pulse_spheres).unwrap();
        let slow = world.get::<Transform>(sphere).unwrap().scale.x;

        controller.apply_slider_input(3.0).unwrap();
        world.run_system_once(pulse_spheres).unwrap();
        let fast = world.get::<Transform>(sphere).unwrap().scale.x;

        assert!((slow - pulse_scale(1.0, 1.0)).abs() < 1e-5);
        assert!((fast - pulse_scale(3.0, 1.0)).abs() < 1e-5);
    }

    #[test]
    fn scale_is_base_at_startup() {
        let controller = SharedScreenController::default();
        let mut world = world_at(0.0, &controller);
        let sphere = world.spawn((Transform::default(), PulsingSphere)).id();

        world.run_system_once(pulse_spheres).unwrap();

        assert_eq!(world.get::<Transform>(sphere).unwrap().scale, Vec3::ONE);
    }
}
