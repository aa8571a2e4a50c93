//! Drop Dash - A side-scrolling jump-and-collect arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, spawning, game state)
//! - `session`: Frame driver that owns the simulation and its spawn timer
//! - `snapshot`: Read-only frame view and static scene fixtures for hosts
//! - `settings`: Startup configuration with validation

pub mod session;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use session::Session;
pub use settings::{Settings, SettingsError};
pub use snapshot::FrameSnapshot;

/// Game configuration constants
pub mod consts {
    /// Nominal display frame time (the simulation advances one tick per frame)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Largest frame delta the session accepts (tab switches, debugger pauses)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 400.0;
    /// Ground line as a fraction of playfield height
    pub const GROUND_RATIO: f32 = 0.65;

    /// Lives at the start of a run
    pub const STARTING_LIVES: i32 = 5;

    /// Actor defaults
    pub const ACTOR_START_X: f32 = 50.0;
    pub const ACTOR_WIDTH: f32 = 32.0;
    pub const ACTOR_HEIGHT: f32 = 40.0;
    /// Downward acceleration (units/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Upward impulse applied by a jump (units/tick)
    pub const JUMP_VELOCITY: f32 = -10.0;

    /// Item defaults
    pub const ITEM_RADIUS: f32 = 16.0;
    /// Leftward item speed (units/tick)
    pub const ITEM_SPEED: f32 = 3.0;
    /// Seconds between spawns
    pub const SPAWN_INTERVAL: f32 = 1.2;
    /// Share of spawns that are reward items
    pub const REWARD_PROBABILITY: f64 = 0.6;

    /// Score gained per reward item
    pub const REWARD_POINTS: u64 = 2;
    /// Lives lost per penalty item
    pub const PENALTY_LIVES: i32 = 1;
}
