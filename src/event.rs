use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, KeyEvent};

pub enum Event {
    /// Any key event: press, repeat or release
    Key(KeyEvent),
    /// Time for a frame; carries the instant the tick was emitted
    Tick(Instant),
}

pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        let tick_rate = Duration::from_millis(tick_rate_ms);

        thread::spawn(move || {
            let mut next_tick = Instant::now() + tick_rate;
            loop {
                // Wait for input only until the next frame is due, so a held
                // key flooding the terminal can't starve the ticks.
                let timeout = next_tick.saturating_duration_since(Instant::now());
                if event::poll(timeout).unwrap_or(false) {
                    if let Ok(crossterm::event::Event::Key(key)) = event::read() {
                        if tx.send(Event::Key(key)).is_err() {
                            return;
                        }
                    }
                }

                let now = Instant::now();
                if now >= next_tick {
                    if tx.send(Event::Tick(now)).is_err() {
                        return;
                    }
                    next_tick = now + tick_rate;
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx
            .recv()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}
