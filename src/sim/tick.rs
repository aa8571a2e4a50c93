//! Per-frame simulation tick
//!
//! One tick: drain spawn requests, apply jump, integrate physics, move and
//! score items, then check for game over.

use super::collision::{ItemOutcome, step_item};
use super::physics;
use super::state::{GameEvent, GamePhase, GameState, ItemCategory};
use crate::consts::{PENALTY_LIVES, REWARD_POINTS};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump trigger (button, key, autopilot)
    pub jump: bool,
    /// Spawn requests queued since the last tick, oldest first
    pub spawns: Vec<ItemCategory>,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Nothing advances after game over; only reset leaves this phase
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    for &category in &input.spawns {
        state.spawn_item(category);
    }

    if input.jump {
        state.jump();
    }

    if physics::integrate(&mut state.actor, &state.playfield) {
        state.push_event(GameEvent::Landed);
    }

    update_items(state);

    if state.lives <= 0 {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over after {} ticks, final score {}",
            state.time_ticks,
            state.score
        );
        state.push_event(GameEvent::GameOver { score: state.score });
    }
}

/// Move every item, apply hit effects and drop consumed/expired items
fn update_items(state: &mut GameState) {
    let mut i = 0;
    while i < state.items.len() {
        let outcome = step_item(&mut state.items[i], &state.actor);
        match outcome {
            ItemOutcome::Active => {
                i += 1;
            }
            ItemOutcome::Hit => {
                let item = state.items.swap_remove(i);
                match item.category {
                    ItemCategory::Reward => {
                        state.score += REWARD_POINTS;
                        log::debug!("Reward collected, score {}", state.score);
                        state.push_event(GameEvent::RewardCollected { score: state.score });
                    }
                    ItemCategory::Penalty => {
                        state.lives -= PENALTY_LIVES;
                        log::debug!("Penalty taken, lives {}", state.lives);
                        state.push_event(GameEvent::PenaltyTaken { lives: state.lives });
                    }
                }
            }
            ItemOutcome::Expired => {
                let item = state.items.swap_remove(i);
                state.push_event(GameEvent::ItemExpired {
                    category: item.category,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Item;
    use glam::Vec2;

    /// Item that will overlap a grounded actor after this tick's move
    fn item_on_actor(category: ItemCategory) -> Item {
        Item {
            pos: Vec2::new(63.0, 230.0),
            radius: 16.0,
            category,
        }
    }

    #[test]
    fn test_reward_collision() {
        let mut state = GameState::default();
        state.items.push(item_on_actor(ItemCategory::Reward));
        tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 2);
        assert_eq!(state.lives, 5);
        assert!(state.items.is_empty());
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_each_hit_applies_once() {
        let mut state = GameState::default();
        state.items.push(item_on_actor(ItemCategory::Penalty));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.lives, 4);
        assert_eq!(state.score, 0);

        // Consumed item cannot trigger again
        tick(&mut state, &TickInput::default());
        assert_eq!(state.lives, 4);
    }

    #[test]
    fn test_five_penalties_end_the_game() {
        let mut state = GameState::default();
        for hit in 1..=5 {
            state.items.push(item_on_actor(ItemCategory::Penalty));
            tick(&mut state, &TickInput::default());
            assert_eq!(state.lives, 5 - hit);
        }
        assert_eq!(state.lives, 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events().contains(&GameEvent::GameOver { score: 0 }));
    }

    #[test]
    fn test_game_over_freezes_simulation() {
        let mut state = GameState::default();
        state.lives = 1;
        state.items.push(item_on_actor(ItemCategory::Penalty));
        state.items.push(Item {
            pos: Vec2::new(300.0, 260.0),
            radius: 16.0,
            category: ItemCategory::Reward,
        });
        tick(&mut state, &TickInput::default());
        assert!(state.is_game_over());

        let frozen_ticks = state.time_ticks;
        let frozen_items = state.items.clone();
        let input = TickInput {
            jump: true,
            spawns: vec![ItemCategory::Reward],
        };
        tick(&mut state, &input);
        assert_eq!(state.time_ticks, frozen_ticks);
        assert_eq!(state.items, frozen_items);
        assert!(!state.actor.airborne);
    }

    #[test]
    fn test_simultaneous_hits_all_apply() {
        let mut state = GameState::default();
        state.items.push(item_on_actor(ItemCategory::Reward));
        state.items.push(item_on_actor(ItemCategory::Penalty));
        state.items.push(item_on_actor(ItemCategory::Reward));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 4);
        assert_eq!(state.lives, 4);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_untouched_item_expires_without_effect() {
        let mut state = GameState::default();
        state.items.push(Item {
            pos: Vec2::new(-14.0, 100.0),
            radius: 16.0,
            category: ItemCategory::Penalty,
        });
        tick(&mut state, &TickInput::default());
        assert!(state.items.is_empty());
        assert_eq!(state.lives, 5);
        assert_eq!(state.score, 0);
        assert!(state.events().contains(&GameEvent::ItemExpired {
            category: ItemCategory::Penalty
        }));
    }

    #[test]
    fn test_spawned_items_cross_the_field_and_expire() {
        let mut state = GameState::default();
        let input = TickInput {
            jump: false,
            spawns: vec![ItemCategory::Penalty],
        };
        tick(&mut state, &input);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].pos.x, 413.0);

        // Ground-level items slide under the actor; x = 416 - 3k drops below -16 at k = 145
        let mut ticks = 1;
        while !state.items.is_empty() {
            tick(&mut state, &TickInput::default());
            ticks += 1;
            assert!(ticks < 200);
        }
        assert_eq!(ticks, 145);
        assert_eq!(state.lives, 5);
    }

    #[test]
    fn test_jump_then_land() {
        let mut state = GameState::default();
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &jump);
        assert!(state.actor.airborne);
        assert_eq!(state.actor.pos.y, 210.5);

        // Holding jump mid-air changes nothing
        let vy = state.actor.vy;
        tick(&mut state, &jump);
        assert_eq!(state.actor.vy, vy + 0.5);

        for _ in 0..60 {
            tick(&mut state, &TickInput::default());
        }
        assert!(!state.actor.airborne);
        assert_eq!(state.actor.pos.y, 220.0);
        let events = state.drain_events();
        assert_eq!(events.iter().filter(|e| **e == GameEvent::Jumped).count(), 1);
        assert_eq!(events.iter().filter(|e| **e == GameEvent::Landed).count(), 1);
    }

    #[test]
    fn test_reset_after_game_over() {
        let mut state = GameState::default();
        let initial = state.clone();
        for _ in 0..5 {
            state.items.push(item_on_actor(ItemCategory::Penalty));
        }
        tick(&mut state, &TickInput::default());
        assert!(state.is_game_over());

        state.reset();
        assert_eq!(state.lives, initial.lives);
        assert_eq!(state.score, initial.score);
        assert_eq!(state.actor, initial.actor);
        assert!(state.items.is_empty());
        assert_eq!(state.phase, GamePhase::Running);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, 1);
    }
}
