// What you SEE:
// • A grey 600x600 window.
// • Click (release Left Mouse) to drop a circle with the current brush.
// • Right/Left grow/shrink the brush (never below 1), Up cycles red -> green -> blue.
// • ESC resets everything, H toggles the help overlay, Q or closing the window quits.

mod app;
mod config;
mod draw;
mod error;
mod input;
mod render;
mod state;
mod types;
mod window;

use app::EventLoop;
use clap::Parser;
use config::Config;
use error::Error;
use window::Drawer;

fn main() -> Result<(), Error> {
    env_logger::init();
    let config = Config::parse();

    /* --- Window setup ---
       Failing here is fatal: nothing has been drawn yet. */
    let drawer = Drawer::new(&config.title, config.width, config.height)?;
    log::info!(
        "window {}x{} open, target {} fps, brush radius {}",
        config.width,
        config.height,
        config.fps,
        config.default_radius
    );

    /* ------------------------------ Main loop ------------------------------ */
    let final_state = EventLoop::new(drawer, &config).run()?;
    log::debug!("exiting with brush radius {}", final_state.brush_radius());

    // Window is dropped with the event loop; returning Ok exits with status 0.
    Ok(())
}
