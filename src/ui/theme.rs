//! Demo palette - shared colors and text sizes
//!
//! Centralized so the 3D pass and the HUD agree on one look.

use macroquad::prelude::*;

/// Same color with its alpha replaced by `alpha`
pub const fn fade(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, alpha)
}

// =============================================================================
// World
// =============================================================================

/// Frame clear color (245, 245, 245)
pub const BACKGROUND: Color = Color::new(245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0, 1.0);

/// Ground plane
pub const GROUND: Color = LIME;

/// The wall cube
pub const WALL: Color = GOLD;

/// Column outlines when columns are drawn
pub const COLUMN_WIRES: Color = MAROON;

// =============================================================================
// HUD
// =============================================================================

/// Crosshair lines
pub const CROSSHAIR: Color = BLACK;

/// Info panel fill (half-transparent sky blue)
pub const PANEL_FILL: Color = fade(SKYBLUE, 0.5);

/// Info panel outline
pub const PANEL_BORDER: Color = BLUE;

/// Panel text
pub const TEXT_COLOR: Color = BLACK;

/// Panel text size
pub const FONT_SIZE: f32 = 10.0;

// =============================================================================
// Weapon
// =============================================================================

pub const WEAPON_HANDLE: Color = DARKGRAY;
pub const WEAPON_BODY: Color = GRAY;
pub const WEAPON_BARREL: Color = BLACK;
pub const WEAPON_SHADE: Color = DARKGRAY;
pub const WEAPON_SIGHT: Color = RED;

/// Dashed aiming line from barrel to crosshair
pub const AIM_LINE: Color = RED;
