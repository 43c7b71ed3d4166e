//! Tree layout - the fixed trunk/tiers/star and randomized ornaments
//!
//! Everything here is plain data. The scene crate turns each [`MeshSpec`]
//! into a mesh + material entity under the tree group.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

use crate::color::Rgb;

/// Ornament colors, picked uniformly per ornament
pub const ORNAMENT_PALETTE: [Rgb; 6] = [
    Rgb(0xFF0000),
    Rgb(0x00FF00),
    Rgb(0x0000FF),
    Rgb(0xFFFF00),
    Rgb(0xFF00FF),
    Rgb(0x00FFFF),
];

pub const DEFAULT_ORNAMENT_COUNT: usize = 20;

pub const TRUNK_COLOR: Rgb = Rgb(0x8B4513);
pub const FOLIAGE_COLOR: Rgb = Rgb(0x228B22);
pub const STAR_COLOR: Rgb = Rgb::GOLD;

/// Radial segments used by the trunk and the tiers
const RADIAL_SEGMENTS: u32 = 16;
const ORNAMENT_RADIUS: f32 = 0.15;
const STAR_HEIGHT: f32 = 4.2;

/// Geometric primitive with its construction parameters.
/// All shapes are centered on their local origin, Y up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Truncated cone (cylinder with distinct end radii)
    Frustum {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        segments: u32,
    },
    /// Icosahedron; `detail` 0 is the plain 20-face solid
    Icosahedron { radius: f32, detail: u32 },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
}

/// Which part of the tree a mesh is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    Trunk,
    /// Foliage tier, 0 is the bottom (widest) one
    Tier(u8),
    Star,
    Ornament(usize),
}

/// One renderable mesh: shape, solid color and position relative to the tree group
#[derive(Debug, Clone, PartialEq)]
pub struct MeshSpec {
    pub kind: PartKind,
    pub primitive: Primitive,
    pub color: Rgb,
    pub position: [f32; 3],
}

/// A placed ornament, in polar form around the trunk axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ornament {
    pub index: usize,
    /// Evenly spaced: `index / count * 2π`
    pub angle: f32,
    /// Distance from the trunk axis, in `[1, 2)`
    pub radius: f32,
    /// Height, in `[-0.5, 2.5)`
    pub height: f32,
    pub color: Rgb,
}

impl Ornament {
    pub fn position(&self) -> [f32; 3] {
        [
            self.angle.cos() * self.radius,
            self.height,
            self.angle.sin() * self.radius,
        ]
    }
}

/// Place `count` ornaments in a jittered ring.
///
/// Draw order per ornament is color, radius, height, so a given seed always
/// yields the same layout.
pub fn place_ornaments<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Ornament> {
    (0..count)
        .map(|index| {
            let color = ORNAMENT_PALETTE[rng.gen_range(0..ORNAMENT_PALETTE.len())];
            let angle = (index as f32 / count as f32) * TAU;
            let radius = 1.0 + rng.gen::<f32>();
            let height = -0.5 + rng.gen::<f32>() * 3.0;
            Ornament {
                index,
                angle,
                radius,
                height,
                color,
            }
        })
        .collect()
}

/// The full set of meshes making up one tree
#[derive(Debug, Clone)]
pub struct TreeLayout {
    seed: u64,
    parts: Vec<MeshSpec>,
}

impl TreeLayout {
    /// Build the tree with ornaments drawn from a generator seeded with `seed`
    pub fn generate(ornament_count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let ornaments = place_ornaments(ornament_count, &mut rng);

        let mut parts = fixed_parts();
        parts.extend(ornaments.iter().map(|o| MeshSpec {
            kind: PartKind::Ornament(o.index),
            primitive: Primitive::Sphere {
                radius: ORNAMENT_RADIUS,
                width_segments: 16,
                height_segments: 16,
            },
            color: o.color,
            position: o.position(),
        }));

        Self { seed, parts }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn parts(&self) -> &[MeshSpec] {
        &self.parts
    }

    pub fn ornaments(&self) -> impl Iterator<Item = &MeshSpec> {
        self.parts
            .iter()
            .filter(|p| matches!(p.kind, PartKind::Ornament(_)))
    }

    pub fn ornament_count(&self) -> usize {
        self.ornaments().count()
    }
}

/// Trunk, the three foliage tiers and the star
fn fixed_parts() -> Vec<MeshSpec> {
    let tiers = [(2.0, 3.0, 0.0), (1.5, 2.5, 1.5), (1.0, 2.0, 3.0)];

    let mut parts = Vec::with_capacity(5);
    parts.push(MeshSpec {
        kind: PartKind::Trunk,
        primitive: Primitive::Frustum {
            radius_top: 0.2,
            radius_bottom: 0.3,
            height: 1.0,
            segments: RADIAL_SEGMENTS,
        },
        color: TRUNK_COLOR,
        position: [0.0, -1.5, 0.0],
    });

    for (i, (radius, height, y)) in tiers.into_iter().enumerate() {
        parts.push(MeshSpec {
            kind: PartKind::Tier(i as u8),
            primitive: Primitive::Cone {
                radius,
                height,
                segments: RADIAL_SEGMENTS,
            },
            color: FOLIAGE_COLOR,
            position: [0.0, y, 0.0],
        });
    }

    parts.push(MeshSpec {
        kind: PartKind::Star,
        primitive: Primitive::Icosahedron {
            radius: 0.5,
            detail: 0,
        },
        color: STAR_COLOR,
        position: [0.0, STAR_HEIGHT, 0.0],
    });

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_counts() {
        let layout = TreeLayout::generate(DEFAULT_ORNAMENT_COUNT, 7);
        assert_eq!(layout.ornament_count(), 20);
        // trunk + 3 tiers + star + ornaments
        assert_eq!(layout.parts().len(), 25);
        assert_eq!(layout.seed(), 7);
    }

    #[test]
    fn test_tiers_shrink_and_rise() {
        let layout = TreeLayout::generate(0, 1);
        let tiers: Vec<_> = layout
            .parts()
            .iter()
            .filter(|p| matches!(p.kind, PartKind::Tier(_)))
            .collect();
        assert_eq!(tiers.len(), 3);

        for pair in tiers.windows(2) {
            let (Primitive::Cone { radius: r0, .. }, Primitive::Cone { radius: r1, .. }) =
                (pair[0].primitive, pair[1].primitive)
            else {
                panic!("tiers must be cones");
            };
            assert!(r1 < r0);
            assert!(pair[1].position[1] > pair[0].position[1]);
        }
    }

    #[test]
    fn test_star_on_top() {
        let layout = TreeLayout::generate(0, 1);
        let star = layout
            .parts()
            .iter()
            .find(|p| p.kind == PartKind::Star)
            .unwrap();
        assert_eq!(star.position, [0.0, 4.2, 0.0]);
        assert_eq!(star.color, STAR_COLOR);
    }

    #[test]
    fn test_ornament_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let ornaments = place_ornaments(DEFAULT_ORNAMENT_COUNT, &mut rng);
        assert_eq!(ornaments.len(), 20);

        for (i, o) in ornaments.iter().enumerate() {
            assert_eq!(o.index, i);
            let expected_angle = (i as f32 / 20.0) * TAU;
            assert!((o.angle - expected_angle).abs() < 1e-6);
            assert!((1.0..2.0).contains(&o.radius));
            assert!((-0.5..2.5).contains(&o.height));
            assert!(ORNAMENT_PALETTE.contains(&o.color));
        }
    }

    #[test]
    fn test_ornament_position_polar() {
        let o = Ornament {
            index: 5,
            angle: TAU / 4.0,
            radius: 1.5,
            height: 0.25,
            color: ORNAMENT_PALETTE[0],
        };
        let [x, y, z] = o.position();
        assert!(x.abs() < 1e-6);
        assert_eq!(y, 0.25);
        assert!((z - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = TreeLayout::generate(20, 1234);
        let b = TreeLayout::generate(20, 1234);
        assert_eq!(a.parts(), b.parts());

        let c = TreeLayout::generate(20, 4321);
        assert_ne!(a.parts(), c.parts());
    }
}
