//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives here; hosts only read it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::{Settings, SettingsError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended (lives exhausted). Only `reset` leaves this phase.
    GameOver,
}

/// Item categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    /// Blue drop, worth points
    Reward,
    /// Black drop, costs a life
    Penalty,
}

impl ItemCategory {
    /// Display color for renderers
    pub fn color(&self) -> &'static str {
        match self {
            ItemCategory::Reward => "#1cc6f7",
            ItemCategory::Penalty => "#111",
        }
    }

    /// Glow color for renderers
    pub fn glow(&self) -> &'static str {
        match self {
            ItemCategory::Reward => "#1cc6f7",
            ItemCategory::Penalty => "#000",
        }
    }

    /// Height above the ground line at which this category spawns.
    /// Both categories currently spawn on the ground line.
    pub fn spawn_lift(&self) -> f32 {
        match self {
            ItemCategory::Reward => 0.0,
            ItemCategory::Penalty => 0.0,
        }
    }
}

/// Visible playfield geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
    pub ground_y: f32,
}

impl Playfield {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            width: settings.playfield_width,
            height: settings.playfield_height,
            ground_y: settings.ground_y(),
        }
    }

    /// Lowest y the actor's top edge may reach
    #[inline]
    pub fn floor_for(&self, height: f32) -> f32 {
        self.ground_y - height
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// The player-controlled actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner
    pub pos: Vec2,
    /// Width/height (fixed)
    pub size: Vec2,
    /// Vertical velocity (positive is down)
    pub vy: f32,
    /// Mid-jump; blocks further jumps until landing
    pub airborne: bool,
}

impl Actor {
    /// Actor resting on the ground at its start column
    pub fn on_ground(playfield: &Playfield) -> Self {
        let size = Vec2::new(ACTOR_WIDTH, ACTOR_HEIGHT);
        Self {
            pos: Vec2::new(ACTOR_START_X, playfield.floor_for(size.y)),
            size,
            vy: 0.0,
            airborne: false,
        }
    }

    /// Start a jump. Returns false (and changes nothing) while airborne.
    pub fn jump(&mut self) -> bool {
        if self.airborne {
            return false;
        }
        self.vy = JUMP_VELOCITY;
        self.airborne = true;
        true
    }
}

/// An item travelling toward the actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Anchor point (left/top of its collision extent)
    pub pos: Vec2,
    pub radius: f32,
    pub category: ItemCategory,
}

impl Item {
    /// New item just past the right edge of the playfield
    pub fn spawn(category: ItemCategory, playfield: &Playfield) -> Self {
        Self {
            pos: Vec2::new(
                playfield.width + ITEM_RADIUS,
                playfield.ground_y - category.spawn_lift(),
            ),
            radius: ITEM_RADIUS,
            category,
        }
    }

    /// Fully past the left edge
    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.pos.x < -self.radius
    }
}

/// Things that happened during a tick, for hosts to log or animate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ItemSpawned { category: ItemCategory },
    Jumped,
    Landed,
    RewardCollected { score: u64 },
    PenaltyTaken { lives: i32 },
    ItemExpired { category: ItemCategory },
    GameOver { score: u64 },
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Playfield geometry
    pub playfield: Playfield,
    /// Lives restored on reset
    pub starting_lives: i32,
    /// Player lives
    pub lives: i32,
    /// Score
    pub score: u64,
    /// Simulation tick counter (ticks processed this run)
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Player actor
    pub actor: Actor,
    /// Active items (order carries no meaning)
    pub items: Vec<Item>,
    /// Events recorded since the last drain
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state, rejecting invalid settings
    pub fn new(settings: &Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let playfield = Playfield::from_settings(settings);
        Ok(Self {
            playfield,
            starting_lives: settings.starting_lives,
            lives: settings.starting_lives,
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Running,
            actor: Actor::on_ground(&playfield),
            items: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Reinitialize lives, score, actor and items for a fresh run
    pub fn reset(&mut self) {
        self.lives = self.starting_lives;
        self.score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Running;
        self.actor = Actor::on_ground(&self.playfield);
        self.items.clear();
        self.events.clear();
    }

    /// Jump trigger. No-op while airborne or after game over.
    pub fn jump(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        let jumped = self.actor.jump();
        if jumped {
            self.push_event(GameEvent::Jumped);
        }
        jumped
    }

    /// Add an item of the given category at the spawn point
    pub fn spawn_item(&mut self, category: ItemCategory) {
        self.items.push(Item::spawn(category, &self.playfield));
        self.push_event(GameEvent::ItemSpawned { category });
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events recorded since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for GameState {
    fn default() -> Self {
        let playfield = Playfield::default();
        Self {
            playfield,
            starting_lives: STARTING_LIVES,
            lives: STARTING_LIVES,
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Running,
            actor: Actor::on_ground(&playfield),
            items: Vec::new(),
            events: Vec::new(),
        }
    }
}
