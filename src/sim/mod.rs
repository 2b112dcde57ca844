//! Asteroids simulation
//!
//! Pure game logic: no terminal, no clock. The RNG is owned by the state and
//! seeded by the caller, so a given seed and input sequence always plays out
//! the same way.

pub mod collision;
pub mod entity;
pub mod geometry;
pub mod render;
pub mod space;
pub mod state;
pub mod tick;

pub use geometry::Model;
pub use render::{Models, render};
pub use space::Bounds;
pub use state::{GameEvent, GameState};
pub use tick::{TickInput, TickOutcome, tick};
