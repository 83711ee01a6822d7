// Application state: everything the renderer needs to draw a frame.
// Mutated only by the input dispatcher, one command at a time.

use crate::types::{Rgb, Shape, PALETTE};

/// Ordered, append-only collection of placed shapes (until cleared).
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn as_slice(&self) -> &[Shape] {
        &self.shapes
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    shapes: ShapeStore,
    brush_radius: u32,
    brush_color: usize, // index into PALETTE
    help_visible: bool,
    default_radius: u32,
}

impl AppState {
    /// Fresh state: no shapes, `default_radius`, first palette color, help hidden.
    pub fn new(default_radius: u32) -> Self {
        let default_radius = default_radius.max(1);
        Self {
            shapes: ShapeStore::new(),
            brush_radius: default_radius,
            brush_color: 0,
            help_visible: false,
            default_radius,
        }
    }

    pub fn shapes(&self) -> &ShapeStore {
        &self.shapes
    }

    pub fn brush_radius(&self) -> u32 {
        self.brush_radius
    }

    pub fn brush_color(&self) -> Rgb {
        PALETTE[self.brush_color]
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn default_radius(&self) -> u32 {
        self.default_radius
    }

    /// Place a circle with the current brush radius and color.
    pub fn place_shape(&mut self, x: i32, y: i32) -> Shape {
        let shape = Shape::new((x, y), self.brush_radius, self.brush_color());
        self.shapes.append(shape);
        shape
    }

    pub fn grow_brush(&mut self) {
        self.brush_radius = self.brush_radius.saturating_add(1);
    }

    /// Shrink by one; stays put at the floor of 1.
    pub fn shrink_brush(&mut self) {
        if self.brush_radius > 1 {
            self.brush_radius -= 1;
        }
    }

    pub fn cycle_color(&mut self) {
        self.brush_color = (self.brush_color + 1) % PALETTE.len();
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Back to the startup state: drops every shape.
    pub fn reset(&mut self) {
        self.brush_radius = self.default_radius;
        self.brush_color = 0;
        self.shapes.clear();
        self.help_visible = false;
    }
}
