use super::Surface;

/// A string placed on the screen at a logical pixel position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOverlay {
    pub x: i32,
    pub y: i32,
    pub text: String,
}

/// Logical framebuffer: one bit per pixel, plus text drawn on top.
///
/// The game draws here at its fixed resolution; the UI later scales the lit
/// pixels down to whatever the terminal offers.
pub struct Screen {
    width: i32,
    height: i32,
    pixels: Vec<bool>,
    texts: Vec<TextOverlay>,
}

impl Screen {
    pub fn new(width: i32, height: i32) -> Self {
        let len = (width.max(0) * height.max(0)) as usize;
        Self {
            width,
            height,
            pixels: vec![false; len],
            texts: Vec::new(),
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    pub fn is_lit(&self, x: i32, y: i32) -> bool {
        self.index(x, y).map_or(false, |i| self.pixels[i])
    }

    /// All lit pixels in row-major order.
    pub fn lit_pixels(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let w = self.width;
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, lit)| **lit)
            .map(move |(i, _)| (i as i32 % w, i as i32 / w))
    }

    pub fn texts(&self) -> &[TextOverlay] {
        &self.texts
    }
}

impl Surface for Screen {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn clear(&mut self) {
        self.pixels.fill(false);
        self.texts.clear();
    }

    fn draw(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = true;
        }
    }

    fn draw_string(&mut self, x: i32, y: i32, text: &str) {
        self.texts.push(TextOverlay { x, y, text: text.to_string() });
    }
}
