//! Actor/item overlap and per-item motion
//!
//! Items are tested as axis-aligned boxes whose width and height both equal
//! the item radius, anchored at the item position (not as circles).

use glam::Vec2;

use super::state::{Actor, Item};
use crate::consts::ITEM_SPEED;

/// Axis-aligned rectangle (min corner + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap: touching edges do not count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

impl Actor {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

impl Item {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(self.radius))
    }
}

/// What happened to an item this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    /// Still travelling
    Active,
    /// Touched the actor; its effect applies and it is consumed
    Hit,
    /// Left the playfield untouched
    Expired,
}

/// Move an item one tick to the left and classify it.
///
/// The hit test runs before the off-screen test, so an item can never both
/// score and expire.
pub fn step_item(item: &mut Item, actor: &Actor) -> ItemOutcome {
    item.pos.x -= ITEM_SPEED;

    if item.bounds().overlaps(&actor.bounds()) {
        ItemOutcome::Hit
    } else if item.is_offscreen() {
        ItemOutcome::Expired
    } else {
        ItemOutcome::Active
    }
}
