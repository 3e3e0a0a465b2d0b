//! Scene setup system
//!
//! This module handles the initial setup of the 3D scene including
//! the camera, the ground plane, the pulsing sphere and the lights.

use bevy::{
    asset::Assets,
    camera::RenderTarget,
    core_pipeline::tonemapping::Tonemapping,
    image::Image,
    math::{primitives::Sphere, Vec3},
    pbr::{MeshMaterial3d, StandardMaterial},
    prelude::*,
    render::{
        render_resource::{Extent3d, TextureFormat, TextureUsages},
        renderer::RenderDevice,
    },
};

use crate::bevy::components::{CameraController, PulsingSphere};
use crate::bevy::plugins::image_copy::ImageCopier;
use crate::bevy::resources::OrbitCameraState;
use crate::config::scene::*;
use crate::config::{RENDER_HEIGHT, RENDER_WIDTH};

/// Setup the 3D scene with camera, objects, and lights
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    render_device: Res<RenderDevice>,
    orbit_state: Res<OrbitCameraState>,
) {
    info!("[Bevy] Setting up scene...");

    let size = Extent3d {
        width: RENDER_WIDTH,
        height: RENDER_HEIGHT,
        depth_or_array_layers: 1,
    };

    // Create render target texture
    let mut render_target_image =
        Image::new_target_texture(size.width, size.height, TextureFormat::bevy_default());
    render_target_image.texture_descriptor.usage |= TextureUsages::COPY_SRC;
    let render_target_image_handle = images.add(render_target_image);

    // Spawn image copier for GPU-to-CPU transfer
    commands.spawn(ImageCopier::new(
        render_target_image_handle.clone(),
        size,
        &render_device,
    ));

    let [r, g, b] = CLEAR_COLOR;

    // Camera with orbit controller; ambient light rides on the camera
    commands.spawn((
        Camera3d::default(),
        Camera {
            target: RenderTarget::Image(render_target_image_handle.into()),
            clear_color: ClearColorConfig::Custom(Color::srgb(r, g, b)),
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        AmbientLight {
            brightness: AMBIENT_BRIGHTNESS,
            ..default()
        },
        Tonemapping::None,
        Transform::from_translation(orbit_state.eye()).looking_at(orbit_state.center, Vec3::Y),
        CameraController,
    ));

    // Ground plane, a faint dark layer that mostly shows where shadows fall
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(0.0, 0.0, 0.0, GROUND_OPACITY),
            alpha_mode: AlphaMode::Blend,
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_xyz(0.0, GROUND_HEIGHT, 0.0),
    ));

    // Pulsing sphere
    let [r, g, b] = SPHERE_COLOR;
    commands.spawn((
        Mesh3d(
            meshes.add(
                Sphere::new(SPHERE_RADIUS)
                    .mesh()
                    .uv(SPHERE_SEGMENTS, SPHERE_SEGMENTS),
            ),
        ),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(r, g, b),
            metallic: SPHERE_METALLIC,
            perceptual_roughness: SPHERE_ROUGHNESS,
            ..default()
        })),
        Transform::IDENTITY,
        PulsingSphere,
    ));

    // Spot light aimed at the sphere
    commands.spawn((
        SpotLight {
            intensity: SPOT_LIGHT_INTENSITY,
            shadows_enabled: true,
            outer_angle: SPOT_LIGHT_ANGLE,
            inner_angle: SPOT_LIGHT_ANGLE * (1.0 - SPOT_LIGHT_PENUMBRA),
            ..default()
        },
        Transform::from_translation(Vec3::from_array(SPOT_LIGHT_POSITION))
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Directional light
    commands.spawn((
        DirectionalLight {
            illuminance: DIRECTIONAL_LIGHT_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(DIRECTIONAL_LIGHT_POSITION))
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!("[Bevy] Scene setup complete!");
}
