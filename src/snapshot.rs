//! Read-only frame view for presentation hosts
//!
//! Hosts draw from a [`FrameSnapshot`] and never touch [`GameState`] directly.
//! Scene fixtures (platforms, palette) are decorative and never simulated.

use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState, ItemCategory, Playfield};

/// Background and scenery colors
pub mod palette {
    pub const SKY_TOP: &str = "#1a406a";
    pub const SKY_MID: &str = "#7ec1e3";
    pub const SKY_BOTTOM: &str = "#4ecb3c";
    pub const HILLS: &str = "#3cb13c";
    pub const GROUND: &str = "#4ecb3c";
    pub const PLATFORM: &str = "#fff7e0";
    pub const ACTOR_BODY: &str = "#f77e7e";
    pub const ACTOR_HEAD: &str = "#eee";
}

/// Decorative platform rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// The fixed scenery platforms for a playfield
pub fn platforms(playfield: &Playfield) -> [Platform; 2] {
    let g = playfield.ground_y;
    [
        Platform { x: 120.0, y: g - 60.0, w: 90.0, h: 18.0 },
        Platform { x: 220.0, y: g - 110.0, w: 90.0, h: 18.0 },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorView {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub airborne: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub category: ItemCategory,
    pub color: String,
}

/// Everything a renderer/HUD needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub width: f32,
    pub height: f32,
    pub ground_y: f32,
    pub actor: ActorView,
    pub items: Vec<ItemView>,
    pub platforms: Vec<Platform>,
    pub lives: i32,
    pub score: u64,
    pub phase: GamePhase,
    pub game_over: bool,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let actor = &state.actor;
        Self {
            width: state.playfield.width,
            height: state.playfield.height,
            ground_y: state.playfield.ground_y,
            actor: ActorView {
                x: actor.pos.x,
                y: actor.pos.y,
                w: actor.size.x,
                h: actor.size.y,
                airborne: actor.airborne,
            },
            items: state
                .items
                .iter()
                .map(|item| ItemView {
                    x: item.pos.x,
                    y: item.pos.y,
                    radius: item.radius,
                    category: item.category,
                    color: item.category.color().to_string(),
                })
                .collect(),
            platforms: platforms(&state.playfield).to_vec(),
            lives: state.lives,
            score: state.score,
            phase: state.phase,
            game_over: state.is_game_over(),
        }
    }
}
