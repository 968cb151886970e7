//! Per-frame display list
//!
//! `build_frame` turns the session state into an ordered list of draw
//! commands; the renderer replays them against macroquad. Keeping the list
//! as plain data lets the draw order be checked without a window.

mod dash;
mod weapon;

pub use dash::{dash_segments, is_valid_pattern};
pub use weapon::WeaponLayout;

use macroquad::prelude::*;

use crate::camera::{CameraMode, CameraState};
use crate::config::HudConfig;
use crate::scene::Scene;
use crate::ui::{theme, Rect};

/// Something drawn under the 3D camera
#[derive(Debug, Clone, PartialEq)]
pub enum WorldShape {
    Plane { center: Vec3, size: Vec2, color: Color },
    Cube { center: Vec3, size: Vec3, color: Color },
    CubeWires { center: Vec3, size: Vec3, color: Color },
}

/// Something drawn in screen space, after the 3D pass
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayShape {
    Line { start: Vec2, end: Vec2, color: Color },
    Rect { rect: Rect, color: Color },
    RectLines { rect: Rect, color: Color },
    /// `x`, `y` is the top-left of the text
    Text { text: String, x: f32, y: f32, size: f32, color: Color },
}

/// One frame worth of drawing, in paint order
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub clear: Color,
    pub world: Vec<WorldShape>,
    pub overlay: Vec<OverlayShape>,
}

/// Legend shown in the left panel
pub const CONTROL_LINES: [&str; 6] = [
    "Camera controls:",
    "- Move keys: W, A, S, D, Space, Left-Ctrl",
    "- Look around: arrow keys or mouse",
    "- Camera mode keys: 1, 2, 3, 4",
    "- Zoom keys: num-plus, num-minus or mouse scroll",
    "- Camera projection key: P",
];

const CONTROLS_PANEL: Rect = Rect::new(5.0, 5.0, 330.0, 100.0);
const STATUS_PANEL: Rect = Rect::new(600.0, 5.0, 195.0, 100.0);
const TEXT_INSET: f32 = 10.0;
const LINE_SPACING: f32 = 15.0;

/// Fixed-width camera vector readout, e.g. `(01.000, 02.000, -4.500)`
pub fn format_vec3(v: Vec3) -> String {
    format!("({:06.3}, {:06.3}, {:06.3})", v.x, v.y, v.z)
}

/// Lines of the camera status panel
pub fn status_lines(camera: &CameraState, mode: CameraMode) -> [String; 6] {
    [
        "Camera status:".to_string(),
        format!("- Mode: {}", mode.label()),
        format!("- Projection: {}", camera.projection.label()),
        format!("- Position: {}", format_vec3(camera.position)),
        format!("- Target: {}", format_vec3(camera.target)),
        format!("- Up: {}", format_vec3(camera.up)),
    ]
}

/// Screen-space settings that don't change between frames
#[derive(Debug, Clone)]
pub struct HudLayout {
    pub screen_width: i32,
    pub screen_height: i32,
    pub crosshair_size: i32,
    pub dash_length: f32,
    pub gap_length: f32,
    pub weapon: WeaponLayout,
}

impl HudLayout {
    pub fn new(screen_width: i32, screen_height: i32, config: &HudConfig) -> Self {
        Self {
            screen_width,
            screen_height,
            crosshair_size: config.crosshair_size,
            dash_length: config.dash_length,
            gap_length: config.gap_length,
            weapon: WeaponLayout::new(screen_width, screen_height),
        }
    }

    /// Integer screen center, where the crosshair sits
    pub fn center(&self) -> (i32, i32) {
        (self.screen_width / 2, self.screen_height / 2)
    }

    /// Crosshair point the aiming line runs to
    pub fn aim_point(&self) -> Vec2 {
        vec2(self.screen_width as f32 / 2.0, self.screen_height as f32 / 2.0)
    }
}

/// Assemble the frame: world pass, then crosshair, panels, weapon,
/// aiming line and text, each painted over the last.
pub fn build_frame(
    scene: &Scene,
    camera: &CameraState,
    mode: CameraMode,
    layout: &HudLayout,
    draw_columns: bool,
) -> Frame {
    let mut world = vec![WorldShape::Plane {
        center: scene.ground.center,
        size: scene.ground.size,
        color: scene.ground.color,
    }];
    world.extend(scene.walls.iter().map(|wall| WorldShape::Cube {
        center: wall.center,
        size: wall.size,
        color: wall.color,
    }));
    if draw_columns {
        for column in &scene.columns {
            world.push(WorldShape::Cube {
                center: column.position,
                size: column.size(),
                color: column.rgba(),
            });
            world.push(WorldShape::CubeWires {
                center: column.position,
                size: column.size(),
                color: theme::COLUMN_WIRES,
            });
        }
    }

    let mut overlay = Vec::new();

    // Crosshair
    let (cx, cy) = layout.center();
    let s = layout.crosshair_size;
    overlay.push(line(cx - s, cy, cx + s, cy, theme::CROSSHAIR));
    overlay.push(line(cx, cy - s, cx, cy + s, theme::CROSSHAIR));

    push_panel(&mut overlay, CONTROLS_PANEL);

    let w = &layout.weapon;
    overlay.extend([
        OverlayShape::Rect { rect: w.handle, color: theme::WEAPON_HANDLE },
        OverlayShape::Rect { rect: w.body, color: theme::WEAPON_BODY },
        OverlayShape::Rect { rect: w.barrel, color: theme::WEAPON_BARREL },
        OverlayShape::Rect { rect: w.top_shade, color: theme::WEAPON_SHADE },
        OverlayShape::Rect { rect: w.barrel_shade, color: theme::WEAPON_SHADE },
        OverlayShape::Rect { rect: w.sight, color: theme::WEAPON_SIGHT },
    ]);

    overlay.extend(
        dash_segments(w.barrel_tip, layout.aim_point(), layout.dash_length, layout.gap_length)
            .into_iter()
            .map(|(start, end)| OverlayShape::Line { start, end, color: theme::AIM_LINE }),
    );

    push_text_block(&mut overlay, CONTROLS_PANEL, CONTROL_LINES.iter().map(|s| s.to_string()));

    push_panel(&mut overlay, STATUS_PANEL);
    push_text_block(&mut overlay, STATUS_PANEL, status_lines(camera, mode));

    Frame { clear: theme::BACKGROUND, world, overlay }
}

fn line(x1: i32, y1: i32, x2: i32, y2: i32, color: Color) -> OverlayShape {
    OverlayShape::Line {
        start: vec2(x1 as f32, y1 as f32),
        end: vec2(x2 as f32, y2 as f32),
        color,
    }
}

fn push_panel(overlay: &mut Vec<OverlayShape>, rect: Rect) {
    overlay.push(OverlayShape::Rect { rect, color: theme::PANEL_FILL });
    overlay.push(OverlayShape::RectLines { rect, color: theme::PANEL_BORDER });
}

fn push_text_block(
    overlay: &mut Vec<OverlayShape>,
    panel: Rect,
    lines: impl IntoIterator<Item = String>,
) {
    let x = panel.x + TEXT_INSET;
    let top = panel.y + TEXT_INSET;
    for (i, text) in lines.into_iter().enumerate() {
        overlay.push(OverlayShape::Text {
            text,
            x,
            y: top + i as f32 * LINE_SPACING,
            size: theme::FONT_SIZE,
            color: theme::TEXT_COLOR,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoConfig;
    use crate::scene::tests::Lcg;

    fn default_frame(draw_columns: bool) -> (Frame, Scene) {
        let config = DemoConfig::default();
        let scene = Scene::generate(20, &mut Lcg(3));
        let layout = HudLayout::new(800, 450, &config.hud);
        let camera = CameraState::default();
        let frame = build_frame(&scene, &camera, CameraMode::FirstPerson, &layout, draw_columns);
        (frame, scene)
    }

    fn texts(frame: &Frame) -> Vec<(&str, f32, f32)> {
        frame
            .overlay
            .iter()
            .filter_map(|s| match s {
                OverlayShape::Text { text, x, y, .. } => Some((text.as_str(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_world_pass_draws_ground_then_wall_only() {
        let (frame, _) = default_frame(false);
        assert_eq!(frame.clear, theme::BACKGROUND);
        assert_eq!(frame.world.len(), 2);
        assert!(matches!(
            frame.world[0],
            WorldShape::Plane { size, .. } if size == vec2(48.0, 48.0)
        ));
        assert!(matches!(
            frame.world[1],
            WorldShape::Cube { center, .. } if center == vec3(8.0, 2.5, 4.0)
        ));
    }

    #[test]
    fn test_columns_drawn_when_enabled() {
        let (frame, scene) = default_frame(true);
        assert_eq!(frame.world.len(), 2 + scene.columns.len() * 2);
        match &frame.world[2] {
            WorldShape::Cube { center, .. } => assert_eq!(*center, scene.columns[0].position),
            other => panic!("expected column cube, got {:?}", other),
        }
    }

    #[test]
    fn test_overlay_order() {
        let (frame, _) = default_frame(false);
        let o = &frame.overlay;

        // Crosshair through (400, 225)
        let black_line = |start, end| OverlayShape::Line { start, end, color: BLACK };
        assert_eq!(o[0], black_line(vec2(390.0, 225.0), vec2(410.0, 225.0)));
        assert_eq!(o[1], black_line(vec2(400.0, 215.0), vec2(400.0, 235.0)));

        // Controls panel, then the six weapon rectangles
        assert!(matches!(o[2], OverlayShape::Rect { rect, .. } if rect == CONTROLS_PANEL));
        assert!(matches!(o[3], OverlayShape::RectLines { rect, .. } if rect == CONTROLS_PANEL));
        assert!(o[4..10].iter().all(|s| matches!(s, OverlayShape::Rect { .. })));
        assert!(matches!(o[9], OverlayShape::Rect { color, .. } if color == RED));

        // Six aiming dashes before any text
        assert!(o[10..16]
            .iter()
            .all(|s| matches!(s, OverlayShape::Line { color, .. } if *color == RED)));
        assert!(matches!(o[16], OverlayShape::Text { .. }));

        // Status panel drawn after the controls text, before its own text
        let status_fill = o
            .iter()
            .position(|s| matches!(s, OverlayShape::Rect { rect, .. } if *rect == STATUS_PANEL))
            .unwrap();
        assert!(matches!(o[status_fill - 1], OverlayShape::Text { .. }));
        assert!(matches!(o[status_fill + 2], OverlayShape::Text { .. }));
    }

    #[test]
    fn test_text_positions() {
        let (frame, _) = default_frame(false);
        let t = texts(&frame);
        assert_eq!(t.len(), 12);
        assert_eq!(t[0], ("Camera controls:", 15.0, 15.0));
        assert_eq!(t[5], ("- Camera projection key: P", 15.0, 90.0));
        assert_eq!(t[6], ("Camera status:", 610.0, 15.0));
        assert_eq!(t[7], ("- Mode: FIRST_PERSON", 610.0, 30.0));
        assert_eq!(t[8], ("- Projection: PERSPECTIVE", 610.0, 45.0));
        assert_eq!(t[11].2, 90.0);
    }

    #[test]
    fn test_status_readouts() {
        let lines = status_lines(&CameraState::default(), CameraMode::FirstPerson);
        assert_eq!(lines[3], "- Position: (01.000, 02.000, 04.000)");
        assert_eq!(lines[4], "- Target: (00.000, 02.000, 00.000)");
        assert_eq!(lines[5], "- Up: (00.000, 01.000, 00.000)");
    }

    #[test]
    fn test_format_negative_and_wide() {
        assert_eq!(format_vec3(vec3(-1.5, 12.25, -0.0626)), "(-1.500, 12.250, -0.063)");
    }
}
