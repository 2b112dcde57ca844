use glam::Vec2;

/// A kinematic body: the ship, an asteroid or a bullet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaceObject {
    /// Radius class. 0 for bullets, the ship's draw scale for the ship,
    /// collision radius and draw scale for asteroids.
    pub size: u32,
    pub pos: Vec2,
    /// Units per second
    pub vel: Vec2,
    /// Heading in radians, 0 pointing up the screen
    pub angle: f32,
    /// Cleared to mark the body for removal at the end of the frame
    pub alive: bool,
}

impl SpaceObject {
    pub fn new(size: u32, pos: Vec2, vel: Vec2, angle: f32) -> Self {
        Self {
            size,
            pos,
            vel,
            angle,
            alive: true,
        }
    }

    pub fn bullet(pos: Vec2, vel: Vec2) -> Self {
        Self::new(0, pos, vel, 0.0)
    }

    pub fn asteroid(size: u32, pos: Vec2, vel: Vec2) -> Self {
        Self::new(size, pos, vel, 0.0)
    }

    /// Unit vector along the heading. Screen y grows downward, so angle 0
    /// points at negative y.
    pub fn heading(&self) -> Vec2 {
        Vec2::new(self.angle.sin(), -self.angle.cos())
    }

    /// Euler step: velocity changes position.
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    pub fn radius(&self) -> f32 {
        self.size as f32
    }
}
