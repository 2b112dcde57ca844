use crate::engine::{Input, Key, Screen, Surface};
use crate::games::Game;
use crate::sim::{self, Bounds, GameEvent, GameState, Model, Models, TickInput, TickOutcome};

struct Session {
    state: GameState,
    models: Models,
}

/// Wires terminal input and the screen to the simulation.
pub struct Asteroids {
    seed: u64,
    session: Option<Session>,
}

impl Asteroids {
    pub fn new(seed: u64) -> Self {
        Self { seed, session: None }
    }

    pub fn state(&self) -> Option<&GameState> {
        self.session.as_ref().map(|s| &s.state)
    }

    fn tick_input(input: &Input) -> TickInput {
        TickInput {
            // A tap shorter than a frame shows up only as a press edge
            quit: input.held(Key::Quit) || input.pressed(Key::Quit),
            rotate_left: input.held(Key::Left),
            rotate_right: input.held(Key::Right),
            thrust: input.held(Key::Thrust),
            fire: input.released(Key::Fire),
        }
    }

    fn log_event(event: GameEvent) {
        match event {
            GameEvent::AsteroidDestroyed { size } => log::debug!("asteroid destroyed (size {})", size),
            GameEvent::ShipDestroyed { score } => log::info!("ship destroyed at score {}, resetting", score),
            GameEvent::LevelCleared { score } => log::info!("level cleared, score {}", score),
        }
    }
}

impl Game for Asteroids {
    fn on_create(&mut self, screen: &mut Screen) -> bool {
        let (w, h) = (screen.width(), screen.height());
        if w <= 0 || h <= 0 {
            log::error!("unusable screen size {}x{}", w, h);
            return false;
        }

        let mut state = GameState::new(Bounds::new(w as f32, h as f32), self.seed);
        let models = Models {
            ship: Model::ship(),
            asteroid: Model::asteroid(state.rng()),
        };
        log::info!("asteroid field ready: {}x{}, seed {}", w, h, state.seed);
        self.session = Some(Session { state, models });
        true
    }

    fn on_update(&mut self, dt: f32, input: &Input, screen: &mut Screen) -> bool {
        let Some(session) = self.session.as_mut() else {
            log::error!("on_update called before on_create");
            return false;
        };

        let outcome = sim::tick(&mut session.state, &Self::tick_input(input), dt);
        for event in session.state.take_events() {
            Self::log_event(event);
        }
        if outcome == TickOutcome::Quit {
            log::info!("quit with score {}", session.state.score);
            return false;
        }

        sim::render(&session.state, &session.models, screen);
        true
    }
}
