//! Wireframe models and their model → world transform

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::consts::ASTEROID_VERTS;
use crate::engine::Surface;

/// A closed polygon in model space, immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    points: Vec<Vec2>,
}

impl Model {
    pub fn new(points: Vec<Vec2>) -> Self {
        debug_assert!(points.len() >= 3, "a model needs at least three points");
        Self { points }
    }

    /// Isosceles triangle with its nose pointing up.
    pub fn ship() -> Self {
        Self::new(vec![
            Vec2::new(0.0, -5.0),
            Vec2::new(-2.5, 2.5),
            Vec2::new(2.5, 2.5),
        ])
    }

    /// Lumpy unit circle: each vertex sits at a random radius in [0.8, 1.2].
    pub fn asteroid<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let points = (0..ASTEROID_VERTS)
            .map(|i| {
                let radius = rng.gen::<f32>() * 0.4 + 0.8;
                let a = i as f32 / ASTEROID_VERTS as f32 * TAU;
                Vec2::new(radius * a.sin(), radius * a.cos())
            })
            .collect();
        Self::new(points)
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Rotate, then scale, then translate every point.
    pub fn transform(&self, angle: f32, scale: f32, at: Vec2) -> Vec<Vec2> {
        let rotation = Vec2::from_angle(angle);
        self.points
            .iter()
            .map(|&p| rotation.rotate(p) * scale + at)
            .collect()
    }

    /// Draw the closed outline: point i to point (i + 1) mod N.
    pub fn draw_wireframe<S: Surface + ?Sized>(&self, surface: &mut S, at: Vec2, angle: f32, scale: f32) {
        let world = self.transform(angle, scale, at);
        let n = world.len();
        for i in 0..n {
            let a = world[i];
            let b = world[(i + 1) % n];
            surface.draw_line(a.x as i32, a.y as i32, b.x as i32, b.y as i32);
        }
    }
}
