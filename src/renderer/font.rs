//! Built-in 5x7 bitmap font
//!
//! Text is rasterized into filled cells, so any backend that can fill
//! rectangles can draw it. Lowercase letters render as capitals.

use glam::Vec2;

use super::TextImage;
use crate::sim::Rect;
use crate::theme::Color;

const GLYPH_COLS: usize = 5;
const GLYPH_ROWS: usize = 7;
/// Horizontal advance per character, in cells
const ADVANCE: usize = GLYPH_COLS + 1;
/// Cell size is `font_size / CELLS_PER_EM`
const CELLS_PER_EM: f32 = 10.0;

/// Row bitmaps, top to bottom. Bit 4 is the leftmost column.
fn glyph(c: char) -> [u8; GLYPH_ROWS] {
    match c.to_ascii_uppercase() {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        // Space and anything unsupported
        _ => [0x00; GLYPH_ROWS],
    }
}

/// Rasterize `text` at `font_size` into an image anchored at its top-left
pub fn render_text(text: &str, font_size: f32, color: Color) -> TextImage {
    let cell = font_size / CELLS_PER_EM;
    let chars = text.chars().count();
    let width_cells = (chars * ADVANCE).saturating_sub(1);

    let mut cells = Vec::new();
    for (i, c) in text.chars().enumerate() {
        let origin_col = i * ADVANCE;
        for (row, bits) in glyph(c).iter().enumerate() {
            // Merge horizontal runs so each row is as few rects as possible
            let mut col = 0;
            while col < GLYPH_COLS {
                if bits & (0x10 >> col) == 0 {
                    col += 1;
                    continue;
                }
                let start = col;
                while col < GLYPH_COLS && bits & (0x10 >> col) != 0 {
                    col += 1;
                }
                cells.push(Rect::new(
                    (origin_col + start) as f32 * cell,
                    row as f32 * cell,
                    (col - start) as f32 * cell,
                    cell,
                ));
            }
        }
    }

    TextImage {
        text: text.to_string(),
        size: Vec2::new(
            width_cells as f32 * cell,
            if chars == 0 { 0.0 } else { GLYPH_ROWS as f32 * cell },
        ),
        color,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digit_size() {
        let image = render_text("7", 74.0, Color::WHITE);
        assert!((image.width() - 5.0 * 7.4).abs() < 1e-4);
        assert!((image.height() - 7.0 * 7.4).abs() < 1e-4);
        assert_eq!(image.color, Color::WHITE);
    }

    #[test]
    fn test_width_grows_by_advance() {
        let one = render_text("1", 10.0, Color::WHITE);
        let two = render_text("10", 10.0, Color::WHITE);
        assert_eq!(one.width(), 5.0);
        assert_eq!(two.width(), 11.0);
    }

    #[test]
    fn test_empty_text_has_no_size() {
        let image = render_text("", 74.0, Color::WHITE);
        assert_eq!(image.size, Vec2::ZERO);
        assert!(image.cells.is_empty());
    }

    #[test]
    fn test_rows_merge_into_runs() {
        // 'T' is a full top bar plus a one-cell stem in each lower row
        let image = render_text("T", 10.0, Color::WHITE);
        assert_eq!(image.cells.len(), 7);
        assert_eq!(image.cells[0], Rect::new(0.0, 0.0, 5.0, 1.0));
        assert_eq!(image.cells[1], Rect::new(2.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_lowercase_matches_uppercase() {
        let lower = render_text("wins", 36.0, Color::WHITE);
        let upper = render_text("WINS", 36.0, Color::WHITE);
        assert_eq!(lower.cells, upper.cells);
        assert_eq!(lower.text, "wins");
    }

    #[test]
    fn test_space_is_blank_but_takes_room() {
        let image = render_text(" ", 10.0, Color::WHITE);
        assert!(image.cells.is_empty());
        assert_eq!(image.width(), 5.0);
    }

    #[test]
    fn test_cells_stay_inside_image() {
        let image = render_text("Press R to Restart or Q to Quit", 36.0, Color::WHITE);
        for cell in &image.cells {
            assert!(cell.left() >= 0.0 && cell.right() <= image.width() + 1e-3);
            assert!(cell.top() >= 0.0 && cell.bottom() <= image.height() + 1e-3);
        }
    }
}
