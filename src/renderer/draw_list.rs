//! Recorded draw commands
//!
//! Backend-neutral description of one frame. Used directly as a headless
//! renderer and as the input to GPU tessellation.

use glam::Vec2;

use super::{Renderer, TextImage};
use crate::sim::Rect;
use crate::theme::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Rect(Rect, Color),
    Ellipse(Rect, Color),
    Text { image: TextImage, pos: Vec2 },
}

/// Commands for the frame being built
#[derive(Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
    /// Frames handed to `present`
    pub frames_presented: u64,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Background color of the current frame
    pub fn clear_color(&self) -> Option<Color> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Clear(color) => Some(*color),
            _ => None,
        })
    }

    /// Strings blitted this frame, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { image, .. } => Some(image.text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Position and image of the first blit of `text`
    pub fn find_text(&self, text: &str) -> Option<(Vec2, &TextImage)> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Text { image, pos } if image.text == text => Some((*pos, image)),
            _ => None,
        })
    }
}

impl Renderer for DrawList {
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect(rect, color));
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Ellipse(rect, color));
    }

    fn blit(&mut self, image: &TextImage, pos: Vec2) {
        self.commands.push(DrawCommand::Text {
            image: image.clone(),
            pos,
        });
    }

    fn present(&mut self) -> anyhow::Result<()> {
        self.frames_presented += 1;
        Ok(())
    }
}
