//! The fixed light rig: dim ambient fill, a sun, and a warm glow above the tree

use crate::color::Rgb;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Uniform, positionless
    Ambient,
    /// Parallel rays shining from `position` toward the origin
    Directional,
    /// Omnidirectional from `position`
    Point,
}

/// A static light. Intensities are relative (1.0 = full sun); the renderer
/// maps them onto its own photometric units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSpec {
    pub kind: LightKind,
    pub color: Rgb,
    pub intensity: f32,
    pub position: Option<[f32; 3]>,
}

/// Ambient, directional and point lights, in that order
pub fn light_rig() -> [LightSpec; 3] {
    [
        LightSpec {
            kind: LightKind::Ambient,
            color: Rgb::WHITE,
            intensity: 0.5,
            position: None,
        },
        LightSpec {
            kind: LightKind::Directional,
            color: Rgb::WHITE,
            intensity: 1.0,
            position: Some([10.0, 10.0, 5.0]),
        },
        LightSpec {
            kind: LightKind::Point,
            color: Rgb::GOLD,
            intensity: 0.5,
            position: Some([0.0, 5.0, 0.0]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rig_shape() {
        let rig = light_rig();
        assert_eq!(rig[0].kind, LightKind::Ambient);
        assert!(rig[0].position.is_none());
        assert_eq!(rig[1].position, Some([10.0, 10.0, 5.0]));
        assert_eq!(rig[2].color, Rgb::GOLD);
        assert_eq!(rig[2].position, Some([0.0, 5.0, 0.0]));
    }
}
