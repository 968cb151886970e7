//! Pro-style camera update
//!
//! Takes explicit movement, rotation and zoom values instead of reading
//! input itself, so any input source (or a test) can drive it.

use macroquad::prelude::*;

use super::CameraState;

/// Keeps pitch this far (radians) from straight up/down when the view is locked
const PITCH_POLE_MARGIN: f32 = 0.001;

/// Zoom never pulls the camera closer than this to its target
const MIN_TARGET_DISTANCE: f32 = 0.001;

/// Produces the next camera state from per-frame input.
///
/// - `movement`: (forward, right, up) distances
/// - `rotation`: (yaw, pitch, roll) in degrees
/// - `zoom`: change in distance to target
pub trait CameraUpdater {
    fn update(&self, state: CameraState, movement: Vec3, rotation: Vec3, zoom: f32) -> CameraState;
}

/// First-person updater: the eye stays put and the target swings around it.
#[derive(Debug, Clone, Copy)]
pub struct ProCameraUpdater {
    /// Clamp pitch short of the poles so the view never flips
    pub lock_view: bool,
    /// Orbit the position around the target instead of turning the target
    pub rotate_around_target: bool,
    /// Pitch the up vector along with the view
    pub rotate_up: bool,
    /// Flatten forward/right movement onto the XZ plane
    pub move_in_world_plane: bool,
}

impl Default for ProCameraUpdater {
    fn default() -> Self {
        Self {
            lock_view: true,
            rotate_around_target: false,
            rotate_up: false,
            move_in_world_plane: true,
        }
    }
}

impl CameraUpdater for ProCameraUpdater {
    fn update(
        &self,
        mut state: CameraState,
        movement: Vec3,
        rotation: Vec3,
        zoom: f32,
    ) -> CameraState {
        // Zero inputs are skipped outright so a camera at rest never drifts
        if rotation.y != 0.0 {
            self.pitch(&mut state, -rotation.y.to_radians());
        }
        if rotation.x != 0.0 {
            self.yaw(&mut state, -rotation.x.to_radians());
        }
        if rotation.z != 0.0 {
            roll(&mut state, rotation.z.to_radians());
        }

        if movement.x != 0.0 {
            let forward = self.planar(state.forward());
            translate(&mut state, forward * movement.x);
        }
        if movement.y != 0.0 {
            let right = self.planar(state.right());
            translate(&mut state, right * movement.y);
        }
        if movement.z != 0.0 {
            let up = state.up_dir();
            translate(&mut state, up * movement.z);
        }

        if zoom != 0.0 {
            move_to_target(&mut state, zoom);
        }

        state
    }
}

impl ProCameraUpdater {
    fn yaw(&self, state: &mut CameraState, angle: f32) {
        let up = state.up_dir();
        if up == Vec3::ZERO {
            return;
        }
        let offset = Quat::from_axis_angle(up, angle) * (state.target - state.position);
        self.apply_offset(state, offset);
    }

    fn pitch(&self, state: &mut CameraState, mut angle: f32) {
        let up = state.up_dir();
        let offset = state.target - state.position;

        if self.lock_view {
            let max_up = up.angle_between(offset) - PITCH_POLE_MARGIN;
            if angle > max_up {
                angle = max_up;
            }
            let max_down = -(-up).angle_between(offset) + PITCH_POLE_MARGIN;
            if angle < max_down {
                angle = max_down;
            }
        }

        let right = state.right();
        if right == Vec3::ZERO {
            return;
        }
        let rotation = Quat::from_axis_angle(right, angle);
        self.apply_offset(state, rotation * offset);

        if self.rotate_up {
            state.up = rotation * state.up;
        }
    }

    fn apply_offset(&self, state: &mut CameraState, offset: Vec3) {
        if self.rotate_around_target {
            state.position = state.target - offset;
        } else {
            state.target = state.position + offset;
        }
    }

    fn planar(&self, dir: Vec3) -> Vec3 {
        if self.move_in_world_plane {
            vec3(dir.x, 0.0, dir.z).normalize_or_zero()
        } else {
            dir
        }
    }
}

fn roll(state: &mut CameraState, angle: f32) {
    let forward = state.forward();
    if forward == Vec3::ZERO {
        return;
    }
    state.up = Quat::from_axis_angle(forward, angle) * state.up;
}

fn translate(state: &mut CameraState, step: Vec3) {
    state.position += step;
    state.target += step;
}

fn move_to_target(state: &mut CameraState, delta: f32) {
    let mut distance = state.position.distance(state.target) + delta;
    if distance <= 0.0 {
        distance = MIN_TARGET_DISTANCE;
    }
    let forward = state.forward();
    state.position = state.target - forward * distance;
}
