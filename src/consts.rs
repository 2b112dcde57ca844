//! Fixed game constants. None of these are configurable at runtime.

/// Logical screen size in pixels
pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;

/// Target frame interval for the host loop (~60 FPS)
pub const FRAME_INTERVAL_MS: u64 = 16;
/// Largest Δt handed to the simulation. Keeps the single-step wrap valid
/// after the terminal stalls.
pub const MAX_FRAME_DT: f32 = 0.1;

/// Ship rotation rate, radians/second
pub const ROTATION_RATE: f32 = 5.0;
/// Ship thrust acceleration, units/second²
pub const THRUST_ACCEL: f32 = 60.0;
pub const SHIP_SIZE: u32 = 2;

pub const BULLET_SPEED: f32 = 100.0;
/// Bullets are kept while inside the screen shrunk by this margin
pub const BULLET_MARGIN: f32 = 1.0;

pub const FRAGMENT_SPEED: f32 = 10.0;
/// Asteroids at or below this size are destroyed without splitting
pub const MIN_SPLIT_SIZE: u32 = 4;
pub const ASTEROID_VERTS: usize = 20;

pub const ASTEROID_POINTS: u32 = 100;
pub const LEVEL_CLEAR_POINTS: u32 = 1000;

pub const LEVEL_ASTEROID_SIZE: u32 = 16;
pub const LEVEL_SPAWN_DISTANCE: f32 = 30.0;
pub const LEVEL_ASTEROID_SPEED: f32 = 10.0;

/// Starting asteroid field: (size, x, y, dx, dy)
pub const SEED_ASTEROIDS: [(u32, f32, f32, f32, f32); 4] = [
    (32, 30.0, 60.0, 20.0, -6.0),
    (32, 120.0, 20.0, 80.0, 5.0),
    (32, 20.0, 20.0, 8.0, -6.0),
    (32, 100.0, 20.0, -5.0, 3.0),
];
