//! Draw calls for one frame of game state

use super::geometry::Model;
use super::space::Wrapped;
use super::state::GameState;
use crate::engine::Surface;

/// Wireframe shapes, built once at startup. Every asteroid shares one shape
/// and differs only by scale.
#[derive(Debug, Clone)]
pub struct Models {
    pub ship: Model,
    pub asteroid: Model,
}

/// Clear the surface and draw asteroids, bullets, the ship and the score.
/// All pixels go through the wrapping adapter, so outlines straddling an edge
/// show up on both sides.
pub fn render<S: Surface + ?Sized>(state: &GameState, models: &Models, surface: &mut S) {
    surface.clear();
    let mut screen = Wrapped::new(surface);

    for asteroid in &state.asteroids {
        models
            .asteroid
            .draw_wireframe(&mut screen, asteroid.pos, asteroid.angle, asteroid.size as f32);
    }

    for bullet in &state.bullets {
        screen.draw(bullet.pos.x as i32, bullet.pos.y as i32);
    }

    let player = &state.player;
    models
        .ship
        .draw_wireframe(&mut screen, player.pos, player.angle, player.size as f32);

    screen.draw_string(2, 2, &format!("SCORE: {}", state.score));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::engine::Screen;
    use crate::sim::entity::SpaceObject;
    use crate::sim::space::Bounds;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup() -> (GameState, Models, Screen) {
        let state = GameState::new(Bounds::new(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32), 3);
        let models = Models {
            ship: Model::ship(),
            asteroid: Model::asteroid(&mut Pcg32::seed_from_u64(3)),
        };
        (state, models, Screen::new(SCREEN_WIDTH, SCREEN_HEIGHT))
    }

    #[test]
    fn test_ship_bullets_and_score_are_drawn() {
        let (mut state, models, mut screen) = setup();
        state.asteroids.clear();
        state.bullets.push(SpaceObject::bullet(Vec2::new(400.5, 300.2), Vec2::ZERO));
        state.score = 1200;

        render(&state, &models, &mut screen);
        // Ship nose, scaled by 2 above the centre
        assert!(screen.is_lit(320, 230));
        // Ship base corners
        assert!(screen.is_lit(315, 245));
        assert!(screen.is_lit(325, 245));
        assert!(screen.is_lit(400, 300));
        assert_eq!(screen.texts().len(), 1);
        assert_eq!(screen.texts()[0].text, "SCORE: 1200");
        assert_eq!((screen.texts()[0].x, screen.texts()[0].y), (2, 2));
    }

    #[test]
    fn test_render_clears_previous_frame() {
        let (mut state, models, mut screen) = setup();
        screen.draw(600, 400);
        screen.draw_string(0, 0, "stale");
        state.asteroids.clear();

        render(&state, &models, &mut screen);
        assert!(!screen.is_lit(600, 400));
        assert_eq!(screen.texts().len(), 1);
    }

    #[test]
    fn test_asteroid_on_edge_wraps_outline() {
        let (mut state, models, mut screen) = setup();
        state.asteroids = vec![SpaceObject::asteroid(32, Vec2::new(2.0, 200.0), Vec2::ZERO)];

        render(&state, &models, &mut screen);
        let right_side = screen.lit_pixels().filter(|&(x, _)| x > 600).count();
        let left_side = screen.lit_pixels().filter(|&(x, _)| x < 40).count();
        assert!(right_side > 0);
        assert!(left_side > 0);
    }
}
