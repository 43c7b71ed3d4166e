//! Perspective camera for the mounted panel

use bevy::prelude::*;
use tannenbaum_core::{CameraSettings, PanelSize};

/// Marker component for the panel's camera
#[derive(Component)]
pub struct MainCamera;

/// Camera on +Z looking at the origin. Ambient light and the background
/// color live on the camera so they go away with it.
pub fn camera_bundle(
    settings: &CameraSettings,
    size: PanelSize,
    background: Color,
    ambient: AmbientLight,
) -> impl Bundle {
    let [x, y, z] = settings.position();
    (
        Camera3d::default(),
        Camera {
            clear_color: ClearColorConfig::Custom(background),
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: settings.field_of_view_radians(),
            aspect_ratio: size.aspect_ratio(),
            near: settings.near,
            far: settings.far,
            ..default()
        }),
        Transform::from_xyz(x, y, z).looking_at(Vec3::ZERO, Vec3::Y),
        ambient,
        MainCamera,
        Name::new("Tree Camera"),
    )
}

/// Point the camera's projection at a new panel size
pub fn apply_aspect_ratio(projection: &mut Projection, size: PanelSize) {
    if let Projection::Perspective(perspective) = projection {
        perspective.aspect_ratio = size.aspect_ratio();
    }
}
