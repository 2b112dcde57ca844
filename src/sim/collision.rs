//! Collision tests
//!
//! Asteroids are treated as circles of radius `size`; the ship and bullets as
//! points. The wireframe silhouette is not consulted.

use glam::Vec2;

/// True when `point` lies strictly inside the circle.
#[inline]
pub fn point_in_circle(center: Vec2, radius: f32, point: Vec2) -> bool {
    center.distance(point) < radius
}
