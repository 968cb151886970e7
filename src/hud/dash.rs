//! Dashed line segmentation

use macroquad::prelude::*;

/// Shortest dash + gap period that still draws a visible pattern, in pixels
pub const MIN_DASH_PERIOD: f32 = 1.0;

/// Whether `dash`/`gap` describe a pattern `dash_segments` will draw
pub fn is_valid_pattern(dash: f32, gap: f32) -> bool {
    dash.is_finite()
        && gap.is_finite()
        && dash > 0.0
        && gap >= 0.0
        && dash + gap >= MIN_DASH_PERIOD
}

/// Split the line `from -> to` into dashes of `dash` length separated by
/// `gap`. The last dash is clipped at `to`; a trailing gap gets no dash.
///
/// Returns no segments when the endpoints coincide, or when the pattern
/// fails `is_valid_pattern`.
pub fn dash_segments(from: Vec2, to: Vec2, dash: f32, gap: f32) -> Vec<(Vec2, Vec2)> {
    let delta = to - from;
    let total = delta.length();
    if total <= 0.0 || !total.is_finite() || !is_valid_pattern(dash, gap) {
        return Vec::new();
    }
    let dir = delta / total;
    // Walk in f64 so the step still advances on very long lines
    let (total, dash, step) = (total as f64, dash as f64, (dash + gap) as f64);

    let mut segments = Vec::new();
    let mut drawn = 0.0f64;
    while drawn < total {
        let end = (drawn + dash).min(total);
        segments.push((from + dir * drawn as f32, from + dir * end as f32));
        drawn += step;
    }
    segments
}
