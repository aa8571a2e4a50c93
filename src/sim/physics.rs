//! Vertical physics for the actor

use super::state::{Actor, Playfield};
use crate::consts::GRAVITY;

/// Apply one tick of gravity and clamp the actor to the ground.
///
/// Returns true if the actor was airborne and touched down this tick.
pub fn integrate(actor: &mut Actor, playfield: &Playfield) -> bool {
    actor.vy += GRAVITY;
    actor.pos.y += actor.vy;

    let floor = playfield.floor_for(actor.size.y);
    if actor.pos.y > floor {
        let was_airborne = actor.airborne;
        actor.pos.y = floor;
        actor.vy = 0.0;
        actor.airborne = false;
        return was_airborne;
    }
    false
}
