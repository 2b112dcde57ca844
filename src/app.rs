use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::consts::{MAX_FRAME_DT, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::engine::{Keyboard, Screen};
use crate::games::asteroids::Asteroids;
use crate::games::Game;

pub struct App {
    pub should_quit: bool,
    pub game: Asteroids,
    pub screen: Screen,
    keyboard: Keyboard,
    last_frame: Instant,
}

impl App {
    /// `reports_release` says whether the terminal delivers key release
    /// events.
    pub fn new(seed: u64, reports_release: bool) -> Self {
        Self {
            should_quit: false,
            game: Asteroids::new(seed),
            screen: Screen::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            keyboard: Keyboard::new(reports_release),
            last_frame: Instant::now(),
        }
    }

    pub fn on_create(&mut self) -> bool {
        self.last_frame = Instant::now();
        self.game.on_create(&mut self.screen)
    }

    pub fn on_tick(&mut self, now: Instant) {
        // Elapsed time drives the simulation, clamped so a stalled terminal
        // doesn't turn into one giant step
        let dt = now
            .saturating_duration_since(self.last_frame)
            .as_secs_f32()
            .min(MAX_FRAME_DT);
        self.last_frame = now;

        let input = self.keyboard.poll(now);
        if !self.game.on_update(dt, &input, &mut self.screen) {
            self.should_quit = true;
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, now: Instant) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        self.keyboard.handle(key, now);
    }
}
