pub mod asteroids;

use crate::engine::{Input, Screen};

/// Hooks the host loop drives.
pub trait Game {
    /// One-time setup before the first frame. Returning false ends the
    /// program without entering the loop.
    fn on_create(&mut self, screen: &mut Screen) -> bool;

    /// One frame. `dt` is the wall-clock time since the previous frame in
    /// seconds. Returning false stops the loop.
    fn on_update(&mut self, dt: f32, input: &Input, screen: &mut Screen) -> bool;
}
