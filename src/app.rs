//! Session state and the frame loop
//!
//! `Session` owns everything that lives across frames (camera, scene, HUD
//! layout). `FrameHost` is the window it runs in: macroquad in the real
//! binary, a scripted stand-in under test.

use std::ops::ControlFlow;

use macroquad::prelude::*;

use crate::camera::{CameraMode, CameraState, CameraUpdater};
use crate::config::DemoConfig;
use crate::hud::{build_frame, Frame, HudLayout};
use crate::input::InputState;
use crate::render::draw_frame;
use crate::scene::{RandomSource, Scene};

/// FPS limit setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FpsLimit {
    Fps30,
    #[default]
    Fps60,
    /// As fast as possible
    Unlocked,
}

impl FpsLimit {
    /// Nearest supported limit; 0 means unlocked
    pub fn from_target(fps: u32) -> Self {
        match fps {
            0 => FpsLimit::Unlocked,
            1..=45 => FpsLimit::Fps30,
            _ => FpsLimit::Fps60,
        }
    }

    /// Get the target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        match self {
            FpsLimit::Fps30 => Some(1.0 / 30.0),
            FpsLimit::Fps60 => Some(1.0 / 60.0),
            FpsLimit::Unlocked => None,
        }
    }
}

/// The window the session draws into
#[allow(async_fn_in_trait)]
pub trait FrameHost {
    /// Checked once at the top of every frame
    fn close_requested(&mut self) -> bool;

    /// Pointer movement since last frame, in pixels
    fn pointer_delta(&mut self) -> Vec2;

    fn present(&mut self, frame: &Frame, camera: &CameraState);

    /// Pace and flip; returns when the next frame may start
    async fn end_frame(&mut self);

    /// Release the window. Takes the host by value so it happens once.
    fn shutdown(self);
}

/// Everything that persists between frames
pub struct Session<U> {
    pub camera: CameraState,
    pub mode: CameraMode,
    pub scene: Scene,
    pub layout: HudLayout,
    updater: U,
    look_sensitivity: f32,
    draw_columns: bool,
}

impl<U: CameraUpdater> Session<U> {
    pub fn new(config: &DemoConfig, rng: &mut impl RandomSource, updater: U) -> Self {
        let scene = Scene::generate(config.scene.column_count, rng);
        log::info!(
            "Scene ready: {} columns, {} drawn",
            scene.columns.len(),
            if config.render.draw_columns { "all" } else { "none" }
        );

        Self {
            camera: CameraState::from_config(&config.camera),
            mode: CameraMode::FirstPerson,
            scene,
            layout: HudLayout::new(config.window.width, config.window.height, &config.hud),
            updater,
            look_sensitivity: config.camera.look_sensitivity,
            draw_columns: config.render.draw_columns,
        }
    }

    /// Mouse look: yaw from horizontal motion, pitch from vertical. No
    /// movement, roll or zoom.
    pub fn update(&mut self, pointer_delta: Vec2) {
        let rotation = vec3(
            pointer_delta.x * self.look_sensitivity,
            pointer_delta.y * self.look_sensitivity,
            0.0,
        );
        self.camera = self.updater.update(self.camera, Vec3::ZERO, rotation, 0.0);
    }

    pub fn frame(&self) -> Frame {
        build_frame(&self.scene, &self.camera, self.mode, &self.layout, self.draw_columns)
    }

    /// One iteration: close check, update, draw
    pub fn tick(&mut self, host: &mut impl FrameHost) -> ControlFlow<()> {
        if host.close_requested() {
            return ControlFlow::Break(());
        }
        let delta = host.pointer_delta();
        self.update(delta);
        log::trace!("delta {:?} -> target {:?}", delta, self.camera.target);
        host.present(&self.frame(), &self.camera);
        ControlFlow::Continue(())
    }
}

/// Run until the host asks to close, then shut it down. Returns the number
/// of frames presented.
pub async fn run<U: CameraUpdater, H: FrameHost>(mut session: Session<U>, mut host: H) -> u64 {
    let mut frames = 0u64;
    while session.tick(&mut host).is_continue() {
        frames += 1;
        host.end_frame().await;
    }
    log::info!("Close requested after {} frames", frames);
    host.shutdown();
    frames
}

/// The real window
pub struct MacroquadHost {
    input: InputState,
    fps_limit: FpsLimit,
    frame_start: f64,
}

impl MacroquadHost {
    pub fn new(fps_limit: FpsLimit) -> Self {
        let mut input = InputState::new();
        input.capture();
        Self { input, fps_limit, frame_start: get_time() }
    }

    /// Sleep for the bulk of the remaining frame time, then spin-wait for precision
    fn pace(&self) {
        let Some(target_frame_time) = self.fps_limit.frame_time() else { return };
        #[cfg(not(target_arch = "wasm32"))]
        {
            let spin_margin = 0.002; // 2ms
            while get_time() - self.frame_start + spin_margin < target_frame_time {
                std::thread::sleep(std::time::Duration::from_millis(1));
            }
        }
        while get_time() - self.frame_start < target_frame_time {
            std::hint::spin_loop();
        }
    }
}

impl FrameHost for MacroquadHost {
    fn close_requested(&mut self) -> bool {
        self.input.close_requested()
    }

    fn pointer_delta(&mut self) -> Vec2 {
        self.input.pointer_delta()
    }

    fn present(&mut self, frame: &Frame, camera: &CameraState) {
        draw_frame(frame, &camera.to_camera3d());
    }

    async fn end_frame(&mut self) {
        self.pace();
        next_frame().await;
        self.frame_start = get_time();
    }

    fn shutdown(mut self) {
        self.input.release();
        log::info!("Window released");
    }
}
