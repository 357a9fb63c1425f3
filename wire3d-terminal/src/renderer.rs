/// Character-cell rasterizer for projected wireframes
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wire3d_core::ProjectedWireframe;

const AXIS_COLORS: [Color; 3] = [Color::Red, Color::Green, Color::Blue];
const AXIS_CHAR: char = '+';
const EDGE_CHAR: char = '#';

/// Rasterizes normalized device coordinates into a char + color cell
/// buffer and flushes it with queued terminal commands.
pub struct WireRenderer {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
    color_buffer: Vec<Color>,
}

impl WireRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            char_buffer: vec![' '; size],
            color_buffer: vec![Color::Reset; size],
        }
    }

    pub fn clear(&mut self) {
        for i in 0..self.char_buffer.len() {
            self.char_buffer[i] = ' ';
            self.color_buffer[i] = Color::Reset;
        }
    }

    /// Map a normalized x in [-1, 1] to a column.
    fn denormalize_x(&self, x: f64) -> i32 {
        ((self.width as f64 * (x + 1.0)) / 2.0) as i32
    }

    /// Map a normalized y in [-1, 1] to a row. Screen rows grow
    /// downward, so y is flipped.
    fn denormalize_y(&self, y: f64) -> i32 {
        (self.height as f64 - (self.height as f64 * (y + 1.0)) / 2.0) as i32
    }

    fn plot(&mut self, x: i32, y: i32, character: char, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        self.char_buffer[idx] = character;
        self.color_buffer[idx] = color;
    }

    /// Integer Bresenham walk between two cells.
    fn stroke_line(&mut self, (x0, y0): (i32, i32), (x1, y1): (i32, i32), character: char, color: Color) {
        let mut x0 = x0;
        let mut y0 = y0;
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            self.plot(x0, y0, character, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x0 += sx;
            }
            if e2 < dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn to_cell(&self, x: f64, y: f64) -> (i32, i32) {
        (self.denormalize_x(x), self.denormalize_y(y))
    }

    /// Stroke the three colored axis rays (red = x, green = y, blue = z)
    /// from the projected origin, then every mesh edge.
    pub fn render_wireframe(&mut self, projected: &ProjectedWireframe) {
        let origin = self.to_cell(projected.origin.x, projected.origin.y);

        for (i, axis) in projected.axes.iter().enumerate() {
            let end = self.to_cell(axis.x, axis.y);
            self.stroke_line(origin, end, AXIS_CHAR, AXIS_COLORS[i]);
        }

        for edge in &projected.edges {
            let a = projected.vertices[edge[0]];
            let b = projected.vertices[edge[1]];
            self.stroke_line(
                self.to_cell(a.x, a.y),
                self.to_cell(b.x, b.y),
                EDGE_CHAR,
                Color::White,
            );
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                let idx = y * self.width + x;
                writer.queue(SetForegroundColor(self.color_buffer[idx]))?;
                writer.queue(Print(self.char_buffer[idx]))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire3d_core::{Camera, Vec4, Wireframe};

    fn cell(renderer: &WireRenderer, x: usize, y: usize) -> char {
        renderer.char_buffer[y * renderer.width + x]
    }

    #[test]
    fn test_denormalize_corners() {
        let renderer = WireRenderer::new(80, 24);
        assert_eq!(renderer.denormalize_x(-1.0), 0);
        assert_eq!(renderer.denormalize_x(1.0), 80);
        assert_eq!(renderer.denormalize_y(1.0), 0);
        assert_eq!(renderer.denormalize_y(-1.0), 24);
    }

    #[test]
    fn test_out_of_bounds_cells_are_clipped() {
        let mut renderer = WireRenderer::new(10, 10);
        renderer.stroke_line((-5, 3), (14, 3), '#', Color::White);
        assert_eq!(cell(&renderer, 0, 3), '#');
        assert_eq!(cell(&renderer, 9, 3), '#');
    }

    #[test]
    fn test_horizontal_and_vertical_lines() {
        let mut renderer = WireRenderer::new(10, 10);
        renderer.stroke_line((1, 2), (8, 2), '#', Color::White);
        for x in 1..=8 {
            assert_eq!(cell(&renderer, x, 2), '#');
        }
        renderer.stroke_line((4, 0), (4, 9), '+', Color::Red);
        for y in 0..=9 {
            assert_eq!(cell(&renderer, 4, y), '+');
        }
    }

    #[test]
    fn test_wireframe_marks_cells() {
        let cube = Wireframe::cube(2.0, Vec4::point(0.0, 0.0, 4.0));
        let projected = wire3d_core::project(&cube, &Camera::default(), 90.0);

        let mut renderer = WireRenderer::new(40, 40);
        renderer.render_wireframe(&projected);

        let edges = renderer.char_buffer.iter().filter(|&&c| c == EDGE_CHAR).count();
        let axes = renderer.char_buffer.iter().filter(|&&c| c == AXIS_CHAR).count();
        assert!(edges > 0);
        assert!(axes > 0);
    }

    #[test]
    fn test_clear_resets_buffer() {
        let mut renderer = WireRenderer::new(5, 5);
        renderer.stroke_line((0, 0), (4, 4), '#', Color::White);
        renderer.clear();
        assert!(renderer.char_buffer.iter().all(|&c| c == ' '));
    }
}
