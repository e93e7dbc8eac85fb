//! Drawing surface abstraction.
//!
//! The engine only ever clears the surface and fills squares. [`Canvas`] keeps the last
//! drawn frame so an immediate-mode host can replay it every frame.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paint {
    Background,
    Snake,
    Food,
}

/// Axis-aligned filled square in board pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

pub trait RenderSurface {
    fn clear(&mut self, paint: Paint);
    fn fill_square(&mut self, square: Square, paint: Paint);
}

/// Retained surface: remembers the background and every square of the current frame.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    background: Option<Paint>,
    squares: Vec<(Square, Paint)>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(&self) -> Option<Paint> {
        self.background
    }

    pub fn squares(&self) -> &[(Square, Paint)] {
        &self.squares
    }

    pub fn count(&self, paint: Paint) -> usize {
        self.squares.iter().filter(|(_, p)| *p == paint).count()
    }
}

impl RenderSurface for Canvas {
    fn clear(&mut self, paint: Paint) {
        self.background = Some(paint);
        self.squares.clear();
    }

    fn fill_square(&mut self, square: Square, paint: Paint) {
        self.squares.push((square, paint));
    }
}
