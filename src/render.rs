//! Replays a `Frame` against macroquad

use macroquad::prelude::*;

use crate::hud::{Frame, OverlayShape, WorldShape};

const LINE_THICKNESS: f32 = 1.0;

pub fn draw_frame(frame: &Frame, camera: &Camera3D) {
    clear_background(frame.clear);

    set_camera(camera);
    for shape in &frame.world {
        match *shape {
            WorldShape::Plane { center, size, color } => draw_plane(center, size, None, color),
            WorldShape::Cube { center, size, color } => draw_cube(center, size, None, color),
            WorldShape::CubeWires { center, size, color } => draw_cube_wires(center, size, color),
        }
    }
    set_default_camera();

    for shape in &frame.overlay {
        match shape {
            OverlayShape::Line { start, end, color } => {
                draw_line(start.x, start.y, end.x, end.y, LINE_THICKNESS, *color);
            }
            OverlayShape::Rect { rect, color } => {
                draw_rectangle(rect.x, rect.y, rect.w, rect.h, *color);
            }
            OverlayShape::RectLines { rect, color } => {
                draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, LINE_THICKNESS, *color);
            }
            OverlayShape::Text { text, x, y, size, color } => {
                // draw_text positions the baseline; shift down so (x, y) is the top-left
                let dims = measure_text(text, None, *size as u16, 1.0);
                draw_text(text, *x, *y + dims.offset_y, *size, *color);
            }
        }
    }
}
