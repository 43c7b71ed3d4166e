//! Scene setup - lights and colors

use bevy::prelude::*;
use tannenbaum_core::lighting::{light_rig, LightKind, LightSpec};
use tannenbaum_core::Rgb;

/// Ambient brightness (cd/m²) for a relative intensity of 1.0
const AMBIENT_BRIGHTNESS_SCALE: f32 = 400.0;
/// Directional illuminance (lux) for a relative intensity of 1.0
const DIRECTIONAL_LUX_SCALE: f32 = 4_000.0;
/// Point light power (lumens) for a relative intensity of 1.0
const POINT_LUMEN_SCALE: f32 = 400_000.0;
/// The glow above the tree has to reach the ornaments at the bottom tier
const POINT_RANGE: f32 = 30.0;

/// Marker component for the directional "sun"
#[derive(Component)]
pub struct MainDirectionalLight;

/// Marker component for the warm light above the tree
#[derive(Component)]
pub struct StarGlow;

pub fn to_color(rgb: Rgb) -> Color {
    let [r, g, b] = rgb.to_bytes();
    Color::srgb_u8(r, g, b)
}

/// Ambient part of the rig, meant to be attached to the camera
pub fn ambient_light() -> AmbientLight {
    light_rig()
        .iter()
        .find(|l| l.kind == LightKind::Ambient)
        .map(|l| AmbientLight {
            color: to_color(l.color),
            brightness: l.intensity * AMBIENT_BRIGHTNESS_SCALE,
            ..default()
        })
        .unwrap_or_default()
}

/// Spawn the positioned lights of the rig, each carrying `tag`
pub fn spawn_lights<B: Bundle + Clone>(commands: &mut Commands, tag: B) -> Vec<Entity> {
    light_rig()
        .iter()
        .filter_map(|light| spawn_light(commands, light, tag.clone()))
        .collect()
}

fn spawn_light<B: Bundle>(commands: &mut Commands, light: &LightSpec, tag: B) -> Option<Entity> {
    let position = Vec3::from_array(light.position?);
    let entity = match light.kind {
        LightKind::Ambient => return None,
        LightKind::Directional => commands
            .spawn((
                DirectionalLight {
                    color: to_color(light.color),
                    illuminance: light.intensity * DIRECTIONAL_LUX_SCALE,
                    shadows_enabled: false,
                    ..default()
                },
                Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y),
                MainDirectionalLight,
                Name::new("Sun"),
                tag,
            ))
            .id(),
        LightKind::Point => commands
            .spawn((
                PointLight {
                    color: to_color(light.color),
                    intensity: light.intensity * POINT_LUMEN_SCALE,
                    range: POINT_RANGE,
                    shadows_enabled: false,
                    ..default()
                },
                Transform::from_translation(position),
                StarGlow,
                Name::new("Star Glow"),
                tag,
            ))
            .id(),
    };
    Some(entity)
}
