//! Per-frame simulation step
//!
//! Input → integration → collisions → spawn/despawn → level check, in that
//! order. Drawing is a separate pass over the resulting state.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::collision::point_in_circle;
use super::entity::SpaceObject;
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub quit: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    /// Fire key came up this frame. Shots go off on release, not press.
    pub fire: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    /// Quit was requested; the rest of the frame was skipped
    Quit,
}

/// Advance the game by `dt` seconds.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickOutcome {
    if state.dead {
        state.reset();
    }

    if input.quit {
        return TickOutcome::Quit;
    }

    steer(&mut state.player, input, dt);

    // Ship against every asteroid. A hit resets on the spot and the rest of
    // the frame runs on the fresh field.
    let ship = state.player.pos;
    if state
        .asteroids
        .iter()
        .any(|a| a.alive && point_in_circle(a.pos, a.radius(), ship))
    {
        state.dead = true;
        state.events.push(GameEvent::ShipDestroyed { score: state.score });
        state.reset();
    }

    if input.fire {
        let p = &state.player;
        let bullet = SpaceObject::bullet(p.pos, p.heading() * BULLET_SPEED);
        state.bullets.push(bullet);
    }

    let bounds = state.bounds;
    state.player.integrate(dt);
    state.player.pos = bounds.wrap(state.player.pos);

    for asteroid in &mut state.asteroids {
        asteroid.integrate(dt);
        asteroid.pos = bounds.wrap(asteroid.pos);
    }

    // Fragments join the field only after every bullet has been checked, so
    // they can't be hit in the frame they appear.
    let parents = shoot(state, dt);
    let fragments = split(state, &parents);
    state.asteroids.extend(fragments);

    state.bullets.retain(|b| b.alive && bounds.keeps_bullet(b.pos));
    state.asteroids.retain(|a| a.alive && a.pos.x >= 0.0);

    if state.asteroids.is_empty() {
        state.clear_level();
    }

    TickOutcome::Running
}

fn steer(player: &mut SpaceObject, input: &TickInput, dt: f32) {
    if input.rotate_left {
        player.angle -= ROTATION_RATE * dt;
    }
    if input.rotate_right {
        player.angle += ROTATION_RATE * dt;
    }
    if input.thrust {
        // Acceleration changes velocity
        player.vel += player.heading() * THRUST_ACCEL * dt;
    }
}

/// Move bullets and resolve hits. Returns (position, size) of every
/// destroyed asteroid big enough to split.
///
/// A bullet keeps testing the remaining asteroids after a hit, so one shot
/// through overlapping asteroids destroys all of them.
fn shoot(state: &mut GameState, dt: f32) -> Vec<(Vec2, u32)> {
    let mut parents = Vec::new();
    for bullet in &mut state.bullets {
        bullet.integrate(dt);
        for asteroid in &mut state.asteroids {
            if !asteroid.alive || !point_in_circle(asteroid.pos, asteroid.radius(), bullet.pos) {
                continue;
            }
            bullet.alive = false;
            asteroid.alive = false;
            state.score += ASTEROID_POINTS;
            state.events.push(GameEvent::AsteroidDestroyed { size: asteroid.size });
            if asteroid.size > MIN_SPLIT_SIZE {
                parents.push((asteroid.pos, asteroid.size));
            }
        }
    }
    parents
}

/// Two half-size fragments per parent, each drifting off on a random heading.
fn split(state: &mut GameState, parents: &[(Vec2, u32)]) -> Vec<SpaceObject> {
    let mut fragments = Vec::with_capacity(parents.len() * 2);
    for &(pos, size) in parents {
        for _ in 0..2 {
            let theta = state.rng().gen::<f32>() * TAU;
            let vel = Vec2::new(theta.sin(), theta.cos()) * FRAGMENT_SPEED;
            fragments.push(SpaceObject::asteroid(size >> 1, pos, vel));
        }
    }
    fragments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::space::Bounds;

    fn new_state() -> GameState {
        GameState::new(Bounds::new(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32), 12345)
    }

    fn still_asteroid(size: u32, x: f32, y: f32) -> SpaceObject {
        SpaceObject::asteroid(size, Vec2::new(x, y), Vec2::ZERO)
    }

    fn still_bullet(x: f32, y: f32) -> SpaceObject {
        SpaceObject::bullet(Vec2::new(x, y), Vec2::ZERO)
    }

    #[test]
    fn test_quit_skips_the_frame() {
        let mut state = new_state();
        let before = state.asteroids.clone();
        let input = TickInput {
            quit: true,
            thrust: true,
            ..Default::default()
        };
        assert_eq!(tick(&mut state, &input, 0.5), TickOutcome::Quit);
        assert_eq!(state.asteroids, before);
        assert_eq!(state.player.vel, Vec2::ZERO);
    }

    #[test]
    fn test_dead_state_resets_before_anything_else() {
        let mut state = new_state();
        state.dead = true;
        state.score = 500;
        state.asteroids.clear();
        let input = TickInput {
            quit: true,
            ..Default::default()
        };
        tick(&mut state, &input, 0.0);
        assert!(!state.dead);
        assert_eq!(state.score, 0);
        assert_eq!(state.asteroids.len(), 4);
    }

    #[test]
    fn test_rotation() {
        let mut state = new_state();
        let left = TickInput {
            rotate_left: true,
            ..Default::default()
        };
        tick(&mut state, &left, 0.1);
        assert!((state.player.angle + 0.5).abs() < 1e-6);

        let right = TickInput {
            rotate_right: true,
            ..Default::default()
        };
        tick(&mut state, &right, 0.2);
        assert!((state.player.angle - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_thrust_accelerates_along_heading() {
        let mut state = new_state();
        let input = TickInput {
            thrust: true,
            ..Default::default()
        };
        tick(&mut state, &input, 0.5);
        assert!(state.player.vel.x.abs() < 1e-5);
        assert!((state.player.vel.y + 30.0).abs() < 1e-4);
        // Velocity is applied in the same frame
        assert!((state.player.pos.y - 225.0).abs() < 1e-3);
    }

    #[test]
    fn test_player_wraps() {
        let mut state = new_state();
        state.player.pos = Vec2::new(639.0, 240.0);
        state.player.vel = Vec2::new(20.0, 0.0);
        tick(&mut state, &TickInput::default(), 0.1);
        assert!((state.player.pos.x - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_asteroids_move_and_wrap() {
        let mut state = new_state();
        state.asteroids = vec![SpaceObject::asteroid(8, Vec2::new(2.0, 100.0), Vec2::new(-40.0, 0.0))];
        tick(&mut state, &TickInput::default(), 0.1);
        assert_eq!(state.asteroids.len(), 1);
        assert!((state.asteroids[0].pos.x - 638.0).abs() < 1e-3);
    }

    #[test]
    fn test_fire_on_release_edge() {
        let mut state = new_state();
        tick(&mut state, &TickInput::default(), 0.1);
        assert!(state.bullets.is_empty());

        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire, 0.1);
        assert_eq!(state.bullets.len(), 1);
        let b = state.bullets[0];
        assert_eq!(b.size, 0);
        assert_eq!(b.angle, 0.0);
        assert!(b.vel.x.abs() < 1e-4);
        assert!((b.vel.y + 100.0).abs() < 1e-4);
        // Spawned at the ship, then moved with the other bullets
        assert!((b.pos.y - 230.0).abs() < 1e-3);
        assert!((b.pos.x - 320.0).abs() < 1e-3);
    }

    #[test]
    fn test_ship_collision_resets_immediately() {
        let mut state = new_state();
        state.score = 900;
        state.asteroids = vec![still_asteroid(8, 322.0, 241.0)];
        tick(&mut state, &TickInput::default(), 0.0);

        assert!(!state.dead);
        assert_eq!(state.score, 0);
        assert_eq!(state.asteroids, GameState::new(state.bounds, 1).asteroids);
        assert!(state.bullets.is_empty());
        assert_eq!(state.take_events(), vec![GameEvent::ShipDestroyed { score: 900 }]);
    }

    #[test]
    fn test_large_asteroid_splits_in_two() {
        let mut state = new_state();
        state.asteroids = vec![still_asteroid(32, 100.0, 400.0), still_asteroid(8, 600.0, 50.0)];
        state.bullets = vec![still_bullet(110.0, 405.0)];
        tick(&mut state, &TickInput::default(), 0.0);

        assert_eq!(state.score, 100);
        assert!(state.bullets.is_empty());
        assert_eq!(state.asteroids.len(), 3);
        let fragments: Vec<_> = state.asteroids.iter().filter(|a| a.size == 16).collect();
        assert_eq!(fragments.len(), 2);
        for f in fragments {
            assert_eq!(f.pos, Vec2::new(100.0, 400.0));
            assert!((f.vel.length() - 10.0).abs() < 1e-4);
            assert_eq!(f.angle, 0.0);
        }
        assert_eq!(state.take_events(), vec![GameEvent::AsteroidDestroyed { size: 32 }]);
    }

    #[test]
    fn test_small_asteroid_does_not_split() {
        let mut state = new_state();
        state.asteroids = vec![still_asteroid(4, 100.0, 400.0), still_asteroid(8, 600.0, 50.0)];
        state.bullets = vec![still_bullet(100.0, 400.0)];
        tick(&mut state, &TickInput::default(), 0.0);

        assert_eq!(state.score, 100);
        assert_eq!(state.asteroids.len(), 1);
        assert_eq!(state.asteroids[0].size, 8);
    }

    #[test]
    fn test_size_eight_splits_into_fours() {
        let mut state = new_state();
        state.asteroids = vec![still_asteroid(8, 100.0, 400.0)];
        state.bullets = vec![still_bullet(100.0, 400.0)];
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.asteroids.len(), 2);
        assert!(state.asteroids.iter().all(|a| a.size == 4));
    }

    #[test]
    fn test_last_asteroid_scores_hit_and_level_clear() {
        let mut state = new_state();
        state.asteroids = vec![still_asteroid(4, 100.0, 400.0)];
        state.bullets = vec![still_bullet(100.0, 400.0), still_bullet(500.0, 300.0)];
        tick(&mut state, &TickInput::default(), 0.0);

        assert_eq!(state.score, 1100);
        assert!(state.bullets.is_empty());
        assert_eq!(state.asteroids.len(), 2);
        assert!(state.asteroids.iter().all(|a| a.size == 16));
        let ship = state.player.pos;
        assert!((state.asteroids[0].pos - (ship - Vec2::new(30.0, 0.0))).length() < 1e-3);
        assert!((state.asteroids[1].pos - (ship + Vec2::new(30.0, 0.0))).length() < 1e-3);
        assert_eq!(
            state.take_events(),
            vec![
                GameEvent::AsteroidDestroyed { size: 4 },
                GameEvent::LevelCleared { score: 1100 },
            ]
        );
    }

    #[test]
    fn test_one_bullet_through_overlapping_asteroids() {
        let mut state = new_state();
        state.asteroids = vec![still_asteroid(16, 100.0, 400.0), still_asteroid(16, 110.0, 400.0)];
        state.bullets = vec![still_bullet(105.0, 400.0)];
        tick(&mut state, &TickInput::default(), 0.0);

        assert_eq!(state.score, 200);
        assert_eq!(state.asteroids.len(), 4);
        assert!(state.asteroids.iter().all(|a| a.size == 8));
    }

    #[test]
    fn test_fragments_are_not_hit_in_their_first_frame() {
        let mut state = new_state();
        state.asteroids = vec![still_asteroid(32, 100.0, 400.0)];
        state.bullets = vec![still_bullet(100.0, 400.0), still_bullet(100.0, 400.0)];
        tick(&mut state, &TickInput::default(), 0.0);

        // The second bullet finds its target already gone
        assert_eq!(state.score, 100);
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.asteroids.len(), 2);

        // Next frame the fragments are fair game
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.score, 300);
        assert!(state.bullets.is_empty());
        assert_eq!(state.asteroids.len(), 4);
    }

    #[test]
    fn test_bullets_pruned_at_margin() {
        let mut state = new_state();
        state.bullets = vec![
            SpaceObject::bullet(Vec2::new(2.0, 300.0), Vec2::new(-20.0, 0.0)),
            SpaceObject::bullet(Vec2::new(600.0, 470.0), Vec2::new(0.0, 20.0)),
            SpaceObject::bullet(Vec2::new(600.0, 470.0), Vec2::new(0.0, 100.0)),
        ];
        tick(&mut state, &TickInput::default(), 0.1);

        // x = 0 is inside the screen but outside the margin; y = 480 is off screen
        assert_eq!(state.bullets.len(), 1);
        assert!((state.bullets[0].pos.y - 472.0).abs() < 1e-3);
    }

    #[test]
    fn test_bullets_do_not_wrap() {
        let mut state = new_state();
        state.bullets = vec![SpaceObject::bullet(Vec2::new(600.0, 5.0), Vec2::new(0.0, -100.0))];
        tick(&mut state, &TickInput::default(), 0.1);
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_end_to_end_split_from_start() {
        let mut state = new_state();
        state.bullets.push(still_bullet(30.0, 60.0));
        tick(&mut state, &TickInput::default(), 0.0);

        assert_eq!(state.score, 100);
        assert_eq!(state.asteroids.len(), 5);
        assert!(!state.asteroids.iter().any(|a| a.size == 32 && a.pos == Vec2::new(30.0, 60.0)));
        let fragments: Vec<_> = state.asteroids.iter().filter(|a| a.size == 16).collect();
        assert_eq!(fragments.len(), 2);
        assert!(fragments.iter().all(|f| f.pos == Vec2::new(30.0, 60.0)));
    }

    #[test]
    fn test_determinism() {
        let mut a = new_state();
        let mut b = new_state();
        let inputs = [
            TickInput { rotate_left: true, ..Default::default() },
            TickInput { fire: true, ..Default::default() },
            TickInput { thrust: true, ..Default::default() },
            TickInput::default(),
        ];
        for state in [&mut a, &mut b] {
            state.bullets.push(still_bullet(30.0, 60.0));
            state.bullets.push(still_bullet(120.0, 20.0));
        }
        for _ in 0..50 {
            for input in &inputs {
                tick(&mut a, input, 1.0 / 60.0);
                tick(&mut b, input, 1.0 / 60.0);
            }
        }
        assert_eq!(a.score, b.score);
        assert_eq!(a.asteroids, b.asteroids);
        assert_eq!(a.bullets, b.bullets);
        assert_eq!(a.player, b.player);
    }
}
