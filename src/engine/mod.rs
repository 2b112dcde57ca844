//! Host-side drawing and input primitives the game is written against.

pub mod input;
pub mod screen;

pub use input::{Input, Key, Keyboard};
pub use screen::Screen;

/// Something the game can draw on: a fixed-size grid of monochrome pixels plus
/// text overlays.
pub trait Surface {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn clear(&mut self);
    /// Plot a single pixel. Pixels outside the surface are dropped.
    fn draw(&mut self, x: i32, y: i32);
    fn draw_string(&mut self, x: i32, y: i32, text: &str);

    /// Rasterise a segment by plotting every cell through [`Surface::draw`],
    /// so implementations that remap `draw` also remap lines.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        for (x, y) in line_cells(x0, y0, x1, y1) {
            self.draw(x, y);
        }
    }
}

/// Bresenham cells from (x0, y0) to (x1, y1), both endpoints included.
pub fn line_cells(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let mut cells = Vec::new();
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let mut cx = x0;
    let mut cy = y0;
    loop {
        cells.push((cx, cy));
        if cx == x1 && cy == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; cx += sx; }
        if e2 <= dx { err += dx; cy += sy; }
    }
    cells
}
