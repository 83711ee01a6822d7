// Host window: the only part of the app that talks to minifb.
// It turns raw window state into InputEvent batches and shows finished frames.

use crate::error::Error;
use crate::input::{InputEvent, KeyCode};
use crate::types::FrameBuffer;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

/// What the event loop needs from a window. Tests plug in a scripted one.
pub trait Host {
    /// Everything that happened since the previous poll, in order.
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Show a finished frame.
    fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error>;
}

pub struct Drawer {
    window: Window,      // the on-screen window you see
    left_was_down: bool, // to turn button state into release edges
}

impl Drawer {
    /// Create a window of the given size. Pacing is left to FrameClock.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(0);
        Ok(Self { window, left_was_down: false })
    }

    /// Current mouse position in window pixel coordinates (clamped to the window).
    fn mouse_pos(&self) -> Option<(i32, i32)> {
        self.window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| (x as i32, y as i32))
    }
}

impl Host for Drawer {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        let left_down = self.window.get_mouse_down(MouseButton::Left);
        if self.left_was_down && !left_down {
            if let Some((x, y)) = self.mouse_pos() {
                events.push(InputEvent::PointerReleased { x, y });
            }
        }
        self.left_was_down = left_down;

        events.extend(
            self.window
                .get_keys_pressed(KeyRepeat::No)
                .into_iter()
                .map(|k| InputEvent::KeyPressed(map_key(k))),
        );

        if !self.window.is_open() {
            events.push(InputEvent::CloseRequested);
        }
        events
    }

    fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }
}

fn map_key(key: Key) -> KeyCode {
    match key {
        Key::Right => KeyCode::Right,
        Key::Left => KeyCode::Left,
        Key::Up => KeyCode::Up,
        Key::Escape => KeyCode::Escape,
        Key::H => KeyCode::H,
        Key::Q => KeyCode::Q,
        _ => KeyCode::Other,
    }
}
