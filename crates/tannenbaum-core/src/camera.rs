//! Perspective camera settings and panel dimensions

/// Vertical field of view, degrees
pub const DEFAULT_FIELD_OF_VIEW: f32 = 75.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 1000.0;
/// Camera sits on +Z looking at the origin
pub const DEFAULT_CAMERA_DISTANCE: f32 = 8.0;

/// Pixel dimensions of the host panel (CSS pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelSize {
    pub width: u32,
    pub height: u32,
}

impl PanelSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// `width / height`, or 1.0 while either dimension is zero
    pub fn aspect_ratio(&self) -> f32 {
        if self.is_empty() {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Size the rendering surface is set to; never below 1x1
    pub fn surface_size(&self) -> (f32, f32) {
        (self.width.max(1) as f32, self.height.max(1) as f32)
    }
}

/// Perspective projection parameters plus the camera's distance from the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    pub field_of_view: f32,
    pub near: f32,
    pub far: f32,
    pub distance: f32,
}

impl CameraSettings {
    pub fn field_of_view_radians(&self) -> f32 {
        self.field_of_view.to_radians()
    }

    pub fn position(&self) -> [f32; 3] {
        [0.0, 0.0, self.distance]
    }
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            field_of_view: DEFAULT_FIELD_OF_VIEW,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            distance: DEFAULT_CAMERA_DISTANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(PanelSize::new(800, 600).aspect_ratio(), 800.0 / 600.0);
        assert_eq!(PanelSize::new(400, 300).aspect_ratio(), 400.0 / 300.0);
    }

    #[test]
    fn test_zero_dimensions_clamp() {
        assert_eq!(PanelSize::new(0, 600).aspect_ratio(), 1.0);
        assert_eq!(PanelSize::new(800, 0).aspect_ratio(), 1.0);
        assert_eq!(PanelSize::new(0, 0).surface_size(), (1.0, 1.0));
    }

    #[test]
    fn test_default_camera() {
        let camera = CameraSettings::default();
        assert_eq!(camera.field_of_view, 75.0);
        assert_eq!(camera.near, 0.1);
        assert_eq!(camera.far, 1000.0);
        assert_eq!(camera.position(), [0.0, 0.0, 8.0]);
    }
}
