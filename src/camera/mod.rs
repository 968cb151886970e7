//! Camera state for the first-person view
//!
//! `CameraState` is the plain data the frame loop threads through each
//! update; `CameraUpdater` turns pointer input into a new state.

mod updater;

pub use updater::{CameraUpdater, ProCameraUpdater};

use macroquad::prelude::*;
use serde::Deserialize;

use crate::config::CameraConfig;

/// How the camera reacts to input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    Free,
    #[default]
    FirstPerson,
    ThirdPerson,
    Orbital,
    Custom,
}

impl CameraMode {
    /// Status-panel name. `Custom` doubles as the catch-all, so no other
    /// fallback is needed.
    pub fn label(&self) -> &'static str {
        match self {
            CameraMode::Free => "FREE",
            CameraMode::FirstPerson => "FIRST_PERSON",
            CameraMode::ThirdPerson => "THIRD_PERSON",
            CameraMode::Orbital => "ORBITAL",
            CameraMode::Custom => "CUSTOM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum CameraProjection {
    #[default]
    Perspective,
    Orthographic,
}

impl CameraProjection {
    pub fn label(&self) -> &'static str {
        match self {
            CameraProjection::Perspective => "PERSPECTIVE",
            CameraProjection::Orthographic => "ORTHOGRAPHIC",
        }
    }
}

/// Camera pose and lens
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees (world-space height when orthographic)
    pub fovy: f32,
    pub projection: CameraProjection,
}

impl CameraState {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            position: Vec3::from_array(config.position),
            target: Vec3::from_array(config.target),
            up: Vec3::from_array(config.up),
            fovy: config.fovy,
            projection: config.projection,
        }
    }

    /// Unit vector from position towards target
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    pub fn up_dir(&self) -> Vec3 {
        self.up.normalize_or_zero()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up_dir()).normalize_or_zero()
    }

    /// Camera for `set_camera`. Macroquad takes the perspective angle in
    /// radians; orthographic height stays in world units.
    pub fn to_camera3d(&self) -> Camera3D {
        let (fovy, projection) = match self.projection {
            CameraProjection::Perspective => (self.fovy.to_radians(), Projection::Perspective),
            CameraProjection::Orthographic => (self.fovy, Projection::Orthographics),
        };
        Camera3D {
            position: self.position,
            target: self.target,
            up: self.up,
            fovy,
            projection,
            ..Default::default()
        }
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_labels_distinct() {
        let modes = [
            CameraMode::Free,
            CameraMode::FirstPerson,
            CameraMode::ThirdPerson,
            CameraMode::Orbital,
            CameraMode::Custom,
        ];
        for (i, a) in modes.iter().enumerate() {
            assert!(!a.label().is_empty());
            for b in &modes[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
        assert_eq!(CameraMode::default().label(), "FIRST_PERSON");
    }

    #[test]
    fn test_projection_labels() {
        assert_eq!(CameraProjection::Perspective.label(), "PERSPECTIVE");
        assert_eq!(CameraProjection::Orthographic.label(), "ORTHOGRAPHIC");
    }

    #[test]
    fn test_initial_pose() {
        let cam = CameraState::default();
        assert_eq!(cam.position, vec3(1.0, 2.0, 4.0));
        assert_eq!(cam.target, vec3(0.0, 2.0, 0.0));
        assert_eq!(cam.up, Vec3::Y);
        assert_eq!(cam.projection, CameraProjection::Perspective);
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let cam = CameraState::default();
        let (f, r) = (cam.forward(), cam.right());
        assert!((f.length() - 1.0).abs() < 0.001);
        assert!((r.length() - 1.0).abs() < 0.001);
        assert!(f.dot(r).abs() < 0.001);
        assert!(r.y.abs() < 0.001);
    }

    #[test]
    fn test_camera3d_uses_radians() {
        let cam3d = CameraState::default().to_camera3d();
        assert!((cam3d.fovy - 60.0f32.to_radians()).abs() < 0.0001);
        assert_eq!(cam3d.position, vec3(1.0, 2.0, 4.0));
    }

    #[test]
    fn test_orthographic_from_config() {
        let config = CameraConfig {
            projection: CameraProjection::Orthographic,
            fovy: 20.0,
            ..CameraConfig::default()
        };
        let cam = CameraState::from_config(&config);
        assert_eq!(cam.projection.label(), "ORTHOGRAPHIC");

        // Orthographic height stays in world units
        let cam3d = cam.to_camera3d();
        assert!(matches!(cam3d.projection, Projection::Orthographics));
        assert!((cam3d.fovy - 20.0).abs() < 0.0001);
    }
}
