//! Toroidal screen space
//!
//! The playfield's opposite edges are joined: anything leaving one side comes
//! back in on the other.

use glam::Vec2;

use crate::engine::Surface;

/// The playfield rectangle `[0, width) × [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Single-step wrap. Positions are assumed to be at most one screen out of
    /// range, which holds while per-frame motion stays well below the screen
    /// size.
    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        Vec2::new(wrap_axis(pos.x, self.width), wrap_axis(pos.y, self.height))
    }

    /// Bullets live only inside the screen shrunk by a one pixel margin.
    pub fn keeps_bullet(&self, pos: Vec2) -> bool {
        let m = crate::consts::BULLET_MARGIN;
        pos.x >= m && pos.y >= m && pos.x <= self.width - m && pos.y <= self.height - m
    }
}

fn wrap_axis(v: f32, extent: f32) -> f32 {
    if v < 0.0 {
        let wrapped = v + extent;
        // -ε + extent can round up to extent itself, which is the same spot as 0
        if wrapped >= extent { 0.0 } else { wrapped }
    } else if v >= extent {
        v - extent
    } else {
        v
    }
}

/// Surface adapter that wraps every plotted pixel onto the screen.
///
/// Lines are rasterised through `draw`, so a wireframe straddling an edge is
/// drawn partly on each side.
pub struct Wrapped<'a, S: Surface + ?Sized> {
    inner: &'a mut S,
}

impl<'a, S: Surface + ?Sized> Wrapped<'a, S> {
    pub fn new(inner: &'a mut S) -> Self {
        Self { inner }
    }
}

impl<S: Surface + ?Sized> Surface for Wrapped<'_, S> {
    fn width(&self) -> i32 {
        self.inner.width()
    }

    fn height(&self) -> i32 {
        self.inner.height()
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn draw(&mut self, x: i32, y: i32) {
        let (w, h) = (self.inner.width(), self.inner.height());
        if w <= 0 || h <= 0 {
            return;
        }
        self.inner.draw(x.rem_euclid(w), y.rem_euclid(h));
    }

    fn draw_string(&mut self, x: i32, y: i32, text: &str) {
        self.inner.draw_string(x, y, text);
    }
}
