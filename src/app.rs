// Event loop: pull events -> dispatch -> render -> present -> throttle.
// Runs until a close request or the quit key; the caller owns process exit.

use crate::config::Config;
use crate::error::Error;
use crate::input::{dispatch, Control};
use crate::render::render;
use crate::state::AppState;
use crate::types::FrameBuffer;
use crate::window::Host;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Caps the loop at a fixed frame rate and measures the rate actually achieved.
pub struct FrameClock {
    frame_interval: Duration,
    last_tick: Instant,
    last_fps_time: Instant,
    frames_this_second: u32,
    fps: f32,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        let now = Instant::now();
        Self {
            frame_interval: Duration::from_secs(1) / target_fps.max(1),
            last_tick: now,
            last_fps_time: now,
            frames_this_second: 0,
            fps: 0.0,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Last measured frames per second (0 until a full second has passed).
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Sleep away whatever is left of this frame's interval, at most one interval.
    pub fn tick(&mut self) {
        let elapsed = self.last_tick.elapsed();
        if let Some(rest) = self.frame_interval.checked_sub(elapsed) {
            thread::sleep(rest);
        }
        let now = Instant::now();
        self.last_tick = now;

        self.frames_this_second += 1;
        if now.duration_since(self.last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(self.last_fps_time).as_secs_f32();
            self.fps = self.frames_this_second as f32 / secs;
            log::debug!("FPS: {:.1}", self.fps);
            self.frames_this_second = 0;
            self.last_fps_time = now;
        }
    }
}

pub struct EventLoop<H: Host> {
    host: H,
    state: AppState,
    screen: FrameBuffer, // reused every frame; presented whole
    clock: FrameClock,
    status: LoopState,
}

impl<H: Host> EventLoop<H> {
    pub fn new(host: H, config: &Config) -> Self {
        Self {
            host,
            state: AppState::new(config.default_radius),
            screen: FrameBuffer::new(config.width, config.height),
            clock: FrameClock::new(config.fps),
            status: LoopState::Running,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn status(&self) -> LoopState {
        self.status
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Run one frame. Once terminated, further calls do nothing.
    pub fn step(&mut self) -> Result<LoopState, Error> {
        if self.status == LoopState::Terminated {
            return Ok(LoopState::Terminated);
        }

        // All pending events are applied before this frame is drawn.
        let events = self.host.poll_events();
        if dispatch(&mut self.state, &events) == Control::Quit {
            self.status = LoopState::Terminated;
            return Ok(self.status);
        }

        render(&self.state, &mut self.screen);
        self.host.present(&self.screen)?;
        self.clock.tick();
        Ok(self.status)
    }

    /// Step until terminated; hands back the final state.
    pub fn run(mut self) -> Result<AppState, Error> {
        while self.step()? == LoopState::Running {}
        log::info!(
            "event loop terminated with {} shapes placed (last measured {:.1} fps)",
            self.state.shapes().len(),
            self.clock.fps()
        );
        Ok(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, KeyCode};
    use crate::types::{BACKGROUND, PALETTE};
    use std::collections::VecDeque;

    /// Replays scripted batches, then reports a close request.
    struct ScriptedHost {
        batches: VecDeque<Vec<InputEvent>>,
        presented: Vec<FrameBuffer>,
    }

    impl ScriptedHost {
        fn new(batches: Vec<Vec<InputEvent>>) -> Self {
            Self { batches: batches.into(), presented: Vec::new() }
        }
    }

    impl Host for ScriptedHost {
        fn poll_events(&mut self) -> Vec<InputEvent> {
            self.batches
                .pop_front()
                .unwrap_or_else(|| vec![InputEvent::CloseRequested])
        }

        fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
            self.presented.push(framebuffer.clone());
            Ok(())
        }
    }

    struct FailingHost;

    impl Host for FailingHost {
        fn poll_events(&mut self) -> Vec<InputEvent> {
            Vec::new()
        }

        fn present(&mut self, _framebuffer: &FrameBuffer) -> Result<(), Error> {
            Err(Error::WindowUpdate("gone".into()))
        }
    }

    fn fast_config() -> Config {
        Config { width: 64, height: 64, fps: 1000, ..Config::default() }
    }

    #[test]
    fn one_frame_per_batch_until_close() {
        let host = ScriptedHost::new(vec![
            vec![InputEvent::PointerReleased { x: 10, y: 10 }],
            vec![],
            vec![InputEvent::KeyPressed(KeyCode::Right), InputEvent::PointerReleased { x: 30, y: 30 }],
        ]);
        let mut el = EventLoop::new(host, &fast_config());

        assert_eq!(el.step().unwrap(), LoopState::Running);
        assert_eq!(el.step().unwrap(), LoopState::Running);
        assert_eq!(el.step().unwrap(), LoopState::Running);
        assert_eq!(el.step().unwrap(), LoopState::Terminated);

        assert_eq!(el.host().presented.len(), 3);
        let shapes = el.state().shapes().as_slice();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[1].radius(), 4);
    }

    #[test]
    fn events_show_up_in_the_same_frame() {
        let host = ScriptedHost::new(vec![vec![InputEvent::PointerReleased { x: 20, y: 20 }]]);
        let mut el = EventLoop::new(host, &fast_config());
        el.step().unwrap();
        let frame = &el.host().presented[0];
        assert_eq!(frame.get(20, 20), Some(PALETTE[0].to_u32()));
        assert_eq!(frame.get(0, 0), Some(BACKGROUND.to_u32()));
    }

    #[test]
    fn quit_terminates_without_rendering() {
        let host = ScriptedHost::new(vec![vec![
            InputEvent::KeyPressed(KeyCode::Q),
            InputEvent::PointerReleased { x: 1, y: 1 },
        ]]);
        let mut el = EventLoop::new(host, &fast_config());
        assert_eq!(el.step().unwrap(), LoopState::Terminated);
        assert!(el.host().presented.is_empty());
        assert!(el.state().shapes().is_empty());

        // stays terminated
        assert_eq!(el.step().unwrap(), LoopState::Terminated);
        assert_eq!(el.status(), LoopState::Terminated);
    }

    #[test]
    fn run_returns_final_state() {
        let host = ScriptedHost::new(vec![
            vec![InputEvent::PointerReleased { x: 100, y: 100 }],
            vec![InputEvent::KeyPressed(KeyCode::Up), InputEvent::PointerReleased { x: 5, y: 5 }],
        ]);
        let state = EventLoop::new(host, &fast_config()).run().unwrap();
        assert_eq!(state.shapes().len(), 2);
        assert_eq!(state.brush_color(), PALETTE[1]);
    }

    #[test]
    fn present_failure_is_reported() {
        let mut el = EventLoop::new(FailingHost, &fast_config());
        assert!(matches!(el.step(), Err(Error::WindowUpdate(_))));
    }

    #[test]
    fn clock_throttles_to_target_rate() {
        let mut clock = FrameClock::new(50);
        assert_eq!(clock.frame_interval(), Duration::from_millis(20));
        let start = Instant::now();
        for _ in 0..3 {
            clock.tick();
        }
        assert!(start.elapsed() >= Duration::from_millis(40));
    }
}
