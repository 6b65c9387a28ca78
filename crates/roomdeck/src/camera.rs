use std::f32::consts::PI;

use glam::{Vec2, Vec3};

/// Radians per pixel of orbit drag
pub const DRAG_SENSITIVITY: f32 = 0.005;
/// Distance per unit of scroll
pub const ZOOM_SENSITIVITY: f32 = 0.01;

/// Spherical orbit around a fixed target. `distance` and `polar` are
/// clamped after every mutation, so they are never out of range.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    distance: f32,
    azimuth: f32,
    polar: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar: f32,
    pub max_polar: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::new(0.0, 1.2, 0.0),
            distance: 14.0,
            azimuth: PI / 4.0,
            polar: PI / 3.0,
            min_distance: 6.0,
            max_distance: 24.0,
            min_polar: 0.3,
            max_polar: PI / 2.1,
        }
    }
}

impl OrbitCamera {
    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    fn clamp(&mut self) {
        self.polar = self.polar.clamp(self.min_polar, self.max_polar);
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
    }

    /// Apply a drag of `delta` screen pixels.
    pub fn drag(&mut self, delta: Vec2) {
        self.azimuth -= delta.x * DRAG_SENSITIVITY;
        self.polar += delta.y * DRAG_SENSITIVITY;
        self.clamp();
    }

    pub fn zoom(&mut self, wheel: f32) {
        self.distance += wheel * ZOOM_SENSITIVITY;
        self.clamp();
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        self.target + self.distance * Vec3::new(sin_p * cos_a, cos_p, sin_p * sin_a)
    }

    /// Perspective camera looking at the target from the current eye.
    pub fn to_camera(&self) -> renderbud::Camera {
        renderbud::Camera::new(self.eye(), self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_eye_is_on_the_sphere() {
        let cam = OrbitCamera::default();
        let eye = cam.eye();
        assert!(((eye - cam.target).length() - 14.0).abs() < 1e-4);
        // azimuth pi/4 puts the eye equally far along +x and +z
        assert!((eye.x - eye.z).abs() < 1e-4);
        assert!(eye.y > cam.target.y);
    }

    #[test]
    fn drag_direction() {
        let mut cam = OrbitCamera::default();
        let (a, p) = (cam.azimuth(), cam.polar());
        cam.drag(Vec2::new(10.0, -10.0));
        assert!((cam.azimuth() - (a - 0.05)).abs() < 1e-6);
        assert!((cam.polar() - (p - 0.05)).abs() < 1e-6);
    }

    #[test]
    fn polar_and_distance_are_clamped_immediately() {
        let mut cam = OrbitCamera::default();
        cam.drag(Vec2::new(0.0, 10_000.0));
        assert_eq!(cam.polar(), PI / 2.1);
        cam.drag(Vec2::new(0.0, -10_000.0));
        assert_eq!(cam.polar(), 0.3);

        cam.zoom(10_000.0);
        assert_eq!(cam.distance(), 24.0);
        cam.zoom(-10_000.0);
        assert_eq!(cam.distance(), 6.0);
    }

    #[test]
    fn zoom_scales_wheel() {
        let mut cam = OrbitCamera::default();
        cam.zoom(100.0);
        assert!((cam.distance() - 15.0).abs() < 1e-5);
    }
}
