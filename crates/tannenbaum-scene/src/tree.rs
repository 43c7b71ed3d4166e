//! Tree group: the meshes built from a [`TreeLayout`] and the per-frame spin

use bevy::prelude::*;
use tannenbaum_core::layout::{MeshSpec, PartKind, Primitive};
use tannenbaum_core::{Rgb, Spin, TreeLayout};
use tracing::warn;

use crate::scene::to_color;

/// Root of the tree hierarchy. Every part is a child, so despawning the
/// group despawns the whole tree.
#[derive(Component, Debug)]
pub struct TreeGroup {
    pub spin: Spin,
}

/// One mesh of the tree
#[derive(Component, Debug, Clone, Copy)]
pub struct TreePart(pub PartKind);

/// Render loop body: advance the spin one step and apply it about +Y
pub fn spin_tree(mut trees: Query<(&mut Transform, &mut TreeGroup)>) {
    for (mut transform, mut tree) in &mut trees {
        let angle = tree.spin.tick();
        transform.rotation = Quat::from_rotation_y(angle);
    }
}

/// Spawn the tree group and all of its parts, returning the group entity
pub fn spawn_tree<B: Bundle>(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    layout: &TreeLayout,
    spin: Spin,
    tag: B,
) -> Entity {
    commands
        .spawn((
            TreeGroup { spin },
            Transform::from_rotation(Quat::from_rotation_y(spin.angle())),
            Visibility::default(),
            Name::new("Tree"),
            tag,
        ))
        .with_children(|tree| {
            for part in layout.parts() {
                tree.spawn(part_bundle(part, meshes, materials));
            }
        })
        .id()
}

fn part_bundle(
    part: &MeshSpec,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> impl Bundle {
    (
        Mesh3d(meshes.add(build_mesh(&part.primitive))),
        MeshMaterial3d(materials.add(solid_material(part.color))),
        Transform::from_translation(Vec3::from_array(part.position)),
        TreePart(part.kind),
    )
}

/// Matte, non-metallic single color
fn solid_material(color: Rgb) -> StandardMaterial {
    StandardMaterial {
        base_color: to_color(color),
        perceptual_roughness: 1.0,
        metallic: 0.0,
        ..default()
    }
}

pub fn build_mesh(primitive: &Primitive) -> Mesh {
    match *primitive {
        Primitive::Frustum {
            radius_top,
            radius_bottom,
            height,
            segments,
        } => ConicalFrustum {
            radius_top,
            radius_bottom,
            height,
        }
        .mesh()
        .resolution(segments)
        .build(),
        Primitive::Cone {
            radius,
            height,
            segments,
        } => Cone { radius, height }.mesh().resolution(segments).build(),
        Primitive::Icosahedron { radius, detail } => match Sphere::new(radius).mesh().ico(detail) {
            // Faceted like a cut gem
            Ok(mesh) => mesh.with_duplicated_vertices().with_computed_flat_normals(),
            Err(e) => {
                warn!(error = %e, detail, "Icosphere rejected, falling back to a UV sphere");
                Sphere::new(radius).mesh().build()
            }
        },
        Primitive::Sphere {
            radius,
            width_segments,
            height_segments,
        } => Sphere::new(radius).mesh().uv(width_segments, height_segments),
    }
}
