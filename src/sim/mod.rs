//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay headless:
//! - One tick per display frame
//! - Seeded RNG only (in the spawner)
//! - Spawns arrive as requests drained at the start of a tick
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Aabb, ItemOutcome, step_item};
pub use physics::integrate;
pub use spawner::{ItemSpawner, SpawnTimer};
pub use state::{Actor, GameEvent, GamePhase, GameState, Item, ItemCategory, Playfield};
pub use tick::{TickInput, tick};
