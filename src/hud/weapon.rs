//! Weapon sprite layout
//!
//! A pistol-ish silhouette built from flat rectangles, centered horizontally
//! near the bottom of the screen with the barrel pointing at the crosshair.
//! All math is integer pixels, matching the crosshair.

use macroquad::prelude::*;

use crate::ui::Rect;

const WEAPON_WIDTH: i32 = 60;
const WEAPON_HEIGHT: i32 = 100;
const BOTTOM_MARGIN: i32 = 20;
const BARREL_WIDTH: i32 = 12;
const BARREL_HEIGHT: i32 = 40;
/// How far the barrel sinks into the body
const BARREL_OVERLAP: i32 = 10;
const SHADE_HEIGHT: i32 = 8;
const BARREL_SHADE_HEIGHT: i32 = 6;
const SIGHT_WIDTH: i32 = 6;
const SIGHT_HEIGHT: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponLayout {
    pub handle: Rect,
    pub body: Rect,
    pub barrel: Rect,
    pub top_shade: Rect,
    pub barrel_shade: Rect,
    pub sight: Rect,
    /// Center of the barrel's top edge
    pub barrel_tip: Vec2,
}

impl WeaponLayout {
    pub fn new(screen_width: i32, screen_height: i32) -> Self {
        let x = screen_width / 2 - WEAPON_WIDTH / 2;
        let y = screen_height - WEAPON_HEIGHT - BOTTOM_MARGIN;
        let body_y = y + WEAPON_HEIGHT / 4;

        let barrel_x = screen_width / 2 - BARREL_WIDTH / 2;
        let barrel_y = body_y - BARREL_HEIGHT + BARREL_OVERLAP;

        Self {
            handle: Rect::px(
                x + WEAPON_WIDTH / 3,
                y + WEAPON_HEIGHT / 2,
                WEAPON_WIDTH / 3,
                WEAPON_HEIGHT / 2,
            ),
            body: Rect::px(x, body_y, WEAPON_WIDTH, WEAPON_HEIGHT / 3),
            barrel: Rect::px(barrel_x, barrel_y, BARREL_WIDTH, BARREL_HEIGHT),
            top_shade: Rect::px(x, body_y, WEAPON_WIDTH, SHADE_HEIGHT),
            barrel_shade: Rect::px(barrel_x, barrel_y, BARREL_WIDTH, BARREL_SHADE_HEIGHT),
            sight: Rect::px(
                screen_width / 2 - SIGHT_WIDTH / 2,
                barrel_y - SIGHT_HEIGHT,
                SIGHT_WIDTH,
                SIGHT_HEIGHT,
            ),
            barrel_tip: vec2(screen_width as f32 / 2.0, barrel_y as f32),
        }
    }
}
