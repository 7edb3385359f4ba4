//! Rendering module
//!
//! The game draws through the [`Renderer`] trait. [`DrawList`] records frames
//! headlessly; [`WgpuRenderer`] tessellates the same commands and presents
//! them to a window surface.

pub mod draw_list;
pub mod font;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use draw_list::{DrawCommand, DrawList};
pub use pipeline::{RenderState, WgpuRenderer};

use glam::Vec2;

use crate::sim::Rect;
use crate::theme::Color;

/// Rasterized text with a known size, ready to blit
#[derive(Debug, Clone, PartialEq)]
pub struct TextImage {
    /// Source string
    pub text: String,
    pub size: Vec2,
    pub color: Color,
    /// Filled cells relative to the image's top-left corner
    pub cells: Vec<Rect>,
}

impl TextImage {
    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }
}

/// Drawing surface used by the game loop
pub trait Renderer {
    /// Start a new frame filled with `color`
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Ellipse inscribed in `rect`
    fn fill_ellipse(&mut self, rect: Rect, color: Color);

    fn draw_text(&mut self, text: &str, font_size: f32, color: Color) -> TextImage {
        font::render_text(text, font_size, color)
    }

    /// Draw `image` with its top-left corner at `pos`
    fn blit(&mut self, image: &TextImage, pos: Vec2);

    /// Show the finished frame
    fn present(&mut self) -> anyhow::Result<()>;
}
