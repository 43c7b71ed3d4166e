//! Per-frame rotation of the tree group about the vertical axis

use std::f32::consts::TAU;

/// Radians added every rendered frame
pub const DEFAULT_ROTATION_STEP: f32 = 0.01;

/// Rotation angle that advances by a fixed step each tick, wrapped into `[0, 2π)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    angle: f32,
    step: f32,
    ticks: u64,
}

impl Spin {
    pub fn new(step: f32) -> Self {
        Self::starting_at(0.0, step)
    }

    pub fn starting_at(angle: f32, step: f32) -> Self {
        Self {
            angle: angle.rem_euclid(TAU),
            step,
            ticks: 0,
        }
    }

    /// Advance one frame and return the new angle
    pub fn tick(&mut self) -> f32 {
        self.angle = (self.angle + self.step).rem_euclid(TAU);
        self.ticks += 1;
        self.angle
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Frames advanced since creation
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Default for Spin {
    fn default() -> Self {
        Self::new(DEFAULT_ROTATION_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hundred_ticks_is_one_radian() {
        let mut spin = Spin::default();
        for _ in 0..100 {
            spin.tick();
        }
        assert_eq!(spin.ticks(), 100);
        assert!((spin.angle() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_wraps_past_full_turn() {
        let mut spin = Spin::starting_at(TAU - 0.005, 0.01);
        let angle = spin.tick();
        assert!((angle - 0.005).abs() < 1e-5);
        assert!(angle < TAU);
    }

    #[test]
    fn test_angle_stays_in_range() {
        let mut spin = Spin::new(0.7);
        for _ in 0..1_000 {
            let a = spin.tick();
            assert!((0.0..TAU).contains(&a));
        }
    }

    #[test]
    fn test_zero_ticks_keeps_initial_angle() {
        let spin = Spin::starting_at(0.3, 0.01);
        assert_eq!(spin.angle(), 0.3);
        assert_eq!(spin.ticks(), 0);
    }
}
