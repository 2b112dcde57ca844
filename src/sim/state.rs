//! Game state and its reset / level-clear transitions

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::SpaceObject;
use super::space::Bounds;
use crate::consts::*;

/// Things that happened during a tick, for whoever is listening (the host
/// logs them).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    AsteroidDestroyed { size: u32 },
    ShipDestroyed { score: u32 },
    LevelCleared { score: u32 },
}

/// Everything the simulation mutates.
#[derive(Debug, Clone)]
pub struct GameState {
    pub bounds: Bounds,
    /// Seed the RNG was created from
    pub seed: u64,
    pub score: u32,
    /// Set when the ship hits an asteroid; the next tick resets the game
    pub dead: bool,
    pub player: SpaceObject,
    pub asteroids: Vec<SpaceObject>,
    pub bullets: Vec<SpaceObject>,
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    pub fn new(bounds: Bounds, seed: u64) -> Self {
        let mut state = Self {
            bounds,
            seed,
            score: 0,
            dead: false,
            player: Self::fresh_player(bounds),
            asteroids: Vec::new(),
            bullets: Vec::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset();
        state
    }

    fn fresh_player(bounds: Bounds) -> SpaceObject {
        SpaceObject::new(SHIP_SIZE, bounds.center(), Vec2::ZERO, 0.0)
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Back to the starting field: seed asteroids, no bullets, centred ship,
    /// zero score. The RNG keeps running.
    pub fn reset(&mut self) {
        self.asteroids.clear();
        self.bullets.clear();
        self.asteroids.extend(SEED_ASTEROIDS.iter().map(|&(size, x, y, dx, dy)| {
            SpaceObject::asteroid(size, Vec2::new(x, y), Vec2::new(dx, dy))
        }));
        self.player = Self::fresh_player(self.bounds);
        self.dead = false;
        self.score = 0;
    }

    /// Award the level bonus and drop two new asteroids a quarter turn to
    /// either side of the ship's heading. They get wrapped on their first
    /// update.
    pub fn clear_level(&mut self) {
        self.score += LEVEL_CLEAR_POINTS;
        self.asteroids.clear();
        self.bullets.clear();

        let p = self.player.pos;
        let a = self.player.angle;
        let offset = |angle: f32| Vec2::new(angle.sin(), angle.cos()) * LEVEL_SPAWN_DISTANCE;
        let drift = |angle: f32| Vec2::new(angle.sin(), angle.cos()) * LEVEL_ASTEROID_SPEED;

        self.asteroids.push(SpaceObject::asteroid(
            LEVEL_ASTEROID_SIZE,
            p + offset(a - FRAC_PI_2),
            drift(a),
        ));
        self.asteroids.push(SpaceObject::asteroid(
            LEVEL_ASTEROID_SIZE,
            p + offset(a + FRAC_PI_2),
            drift(-a),
        ));
        self.events.push(GameEvent::LevelCleared { score: self.score });
    }

    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
