use clap::Parser;

pub const DEFAULT_SIZE: usize = 600;
pub const DEFAULT_FPS: u32 = 24;
pub const DEFAULT_RADIUS: u32 = 3;
pub const DEFAULT_TITLE: &str = "Clicker";

#[derive(Parser, Debug, Clone)]
#[command(name = "clicker", about = "Click to place circles; arrows resize and recolor the brush")]
pub struct Config {
    /// Drawing surface width in pixels
    #[arg(long, env = "CLICKER_WIDTH", default_value_t = DEFAULT_SIZE,
          value_parser = parse_nonzero_usize)]
    pub width: usize,

    /// Drawing surface height in pixels
    #[arg(long, env = "CLICKER_HEIGHT", default_value_t = DEFAULT_SIZE,
          value_parser = parse_nonzero_usize)]
    pub height: usize,

    /// Target frames per second
    #[arg(long, env = "CLICKER_FPS", default_value_t = DEFAULT_FPS,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Brush radius at startup and after a reset
    #[arg(long, env = "CLICKER_DEFAULT_RADIUS", default_value_t = DEFAULT_RADIUS,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub default_radius: u32,

    /// Window title
    #[arg(long, env = "CLICKER_TITLE", default_value = DEFAULT_TITLE)]
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            fps: DEFAULT_FPS,
            default_radius: DEFAULT_RADIUS,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

fn parse_nonzero_usize(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
