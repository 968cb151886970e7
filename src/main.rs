//! LOOKAROUND: first-person camera demo
//!
//! Mouse-look around a lime ground plane with a gold wall cube, under a
//! HUD with a crosshair, a flat weapon sprite aimed at it and live camera
//! readouts. Escape or the window close button quits.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod camera;
mod config;
mod hud;
mod input;
mod render;
mod scene;
mod ui;

use app::{FpsLimit, MacroquadHost, Session};
use camera::ProCameraUpdater;
use config::DemoConfig;
use scene::MacroquadRandom;

fn main() {
    // Crash logging goes in before anything else can panic
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DemoConfig::load();
    log::info!(
        "LOOKAROUND v{}: {}x{} window, {} fps target",
        VERSION,
        config.window.width,
        config.window.height,
        config.window.target_fps
    );

    macroquad::Window::from_config(config.window_conf(), async move {
        let seed = config
            .scene
            .seed
            .unwrap_or_else(|| (macroquad::miniquad::date::now() * 1000.0) as u64);
        log::info!("Column seed {}", seed);
        let mut rng = MacroquadRandom::seeded(seed);

        let session = Session::new(&config, &mut rng, ProCameraUpdater::default());
        let host = MacroquadHost::new(FpsLimit::from_target(config.window.target_fps));
        app::run(session, host).await;
    });
}
