//! Input state management
//!
//! Tracks the pointer between frames so callers get a per-frame delta
//! instead of absolute positions.

use macroquad::prelude::*;

/// Pointer tracking plus the close-request check
#[derive(Debug, Default)]
pub struct InputState {
    last_mouse: Option<Vec2>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the cursor to the window and hide it, so motion is relative.
    /// Also takes over the window close button so the loop can shut down
    /// on its own terms.
    pub fn capture(&mut self) {
        prevent_quit();
        set_cursor_grab(true);
        show_mouse(false);
        self.last_mouse = Some(Vec2::from(mouse_position()));
    }

    pub fn release(&mut self) {
        set_cursor_grab(false);
        show_mouse(true);
        self.last_mouse = None;
    }

    /// Pointer movement since the previous call, in pixels
    pub fn pointer_delta(&mut self) -> Vec2 {
        self.track(Vec2::from(mouse_position()))
    }

    fn track(&mut self, current: Vec2) -> Vec2 {
        let delta = self.last_mouse.map_or(Vec2::ZERO, |last| current - last);
        self.last_mouse = Some(current);
        delta
    }

    /// Window close button or Escape
    pub fn close_requested(&self) -> bool {
        is_quit_requested() || is_key_pressed(KeyCode::Escape)
    }
}
