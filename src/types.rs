// Core value types shared by state, input and rendering.

/// An RGB color, each channel in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack as 0x00RRGGBB, the layout minifb expects.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// Brush colors, cycled in order by the "cycle color" key.
pub const PALETTE: [Rgb; 3] = [
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 0, 255),
];

pub const BACKGROUND: Rgb = Rgb::new(128, 128, 128);
pub const HELP_TEXT_COLOR: Rgb = Rgb::new(255, 255, 255);

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Pixel at (x,y), or None when outside the surface.
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}

/// A placed circle. Immutable once created; radius is always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    position: (i32, i32),
    radius: u32,
    color: Rgb,
}

impl Shape {
    /// A zero radius is raised to 1 so no stored shape can violate the floor.
    pub fn new(position: (i32, i32), radius: u32, color: Rgb) -> Self {
        Self { position, radius: radius.max(1), color }
    }

    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn color(&self) -> Rgb {
        self.color
    }
}
