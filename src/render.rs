// Renderer: AppState -> pixels. Reads state only; always redraws the full scene.

use crate::draw::{clear, draw_text_5x7, fill_circle, LINE_HEIGHT};
use crate::input::SHORTCUTS;
use crate::state::AppState;
use crate::types::{FrameBuffer, BACKGROUND, HELP_TEXT_COLOR};

/// Top-left corner of the help overlay.
pub const HELP_ORIGIN: (i32, i32) = (10, 10);
/// Pixel scale of the help font (5x7 glyphs become 10x14).
pub const HELP_SCALE: u32 = 2;

/// Help overlay, one line per shortcut.
pub fn help_lines() -> Vec<String> {
    SHORTCUTS
        .iter()
        .map(|s| format!("{}: {}", s.label, s.description))
        .collect()
}

/// Draw the whole frame into `fb`: background, shapes in order, then help.
/// The caller presents `fb` in one go, so a half-drawn frame is never shown.
pub fn render(state: &AppState, fb: &mut FrameBuffer) {
    clear(fb, BACKGROUND);

    for shape in state.shapes().iter() {
        let (x, y) = shape.position();
        fill_circle(fb, x, y, shape.radius(), shape.color());
    }

    if state.help_visible() {
        let (x, mut y) = HELP_ORIGIN;
        for line in help_lines() {
            draw_text_5x7(fb, x, y, &line, HELP_SCALE, HELP_TEXT_COLOR);
            y += LINE_HEIGHT * HELP_SCALE as i32;
        }
    }
}
