//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list in screen pixels.

use std::f32::consts::PI;

use super::draw_list::DrawCommand;
use super::vertex::Vertex;
use crate::sim::Rect;
use crate::theme::Color;

/// Segments used for ellipses
pub const ELLIPSE_SEGMENTS: u32 = 32;

/// Generate vertices for a filled rectangle (two triangles)
pub fn rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (l, r, t, b) = (rect.left(), rect.right(), rect.top(), rect.bottom());
    vec![
        Vertex::new(l, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, b, color),
    ]
}

/// Generate vertices for a filled ellipse inscribed in `rect`
pub fn ellipse(rect: &Rect, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let center = rect.center();
    let radii = rect.size / 2.0;
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radii.x * theta1.cos(),
            center.y + radii.y * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radii.x * theta2.cos(),
            center.y + radii.y * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// One tessellated frame
#[derive(Debug, Default)]
pub struct Mesh {
    /// Background color from the last clear
    pub clear: Option<Color>,
    pub vertices: Vec<Vertex>,
}

/// Turn recorded commands into a triangle list
pub fn tessellate(commands: &[DrawCommand]) -> Mesh {
    let mut mesh = Mesh::default();

    for command in commands {
        match command {
            DrawCommand::Clear(color) => {
                mesh.clear = Some(*color);
                mesh.vertices.clear();
            }
            DrawCommand::Rect(r, color) => {
                mesh.vertices.extend(rect(r, color.to_linear()));
            }
            DrawCommand::Ellipse(r, color) => {
                mesh.vertices
                    .extend(ellipse(r, color.to_linear(), ELLIPSE_SEGMENTS));
            }
            DrawCommand::Text { image, pos } => {
                let color = image.color.to_linear();
                for cell in &image.cells {
                    mesh.vertices.extend(rect(&cell.translated(*pos), color));
                }
            }
        }
    }

    mesh
}
