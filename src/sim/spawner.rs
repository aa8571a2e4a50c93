//! Timed item spawning
//!
//! The spawner never touches the item list. It turns elapsed host time into
//! spawn requests, which the tick drains before moving anything.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::ItemCategory;
use crate::consts::{REWARD_PROBABILITY, SPAWN_INTERVAL};

/// Fixed-period timer driven by frame deltas
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval: f32,
    elapsed: f32,
}

impl SpawnTimer {
    /// Timer with the given period. Returns `None` unless the period is
    /// finite and positive.
    pub fn new(interval: f32) -> Option<Self> {
        (interval.is_finite() && interval > 0.0).then_some(Self {
            interval,
            elapsed: 0.0,
        })
    }

    /// Advance by `dt` seconds and return how many periods completed.
    /// Negative or non-finite deltas count as zero.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }

    /// Restart the current period
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }
}

impl Default for SpawnTimer {
    fn default() -> Self {
        Self {
            interval: SPAWN_INTERVAL,
            elapsed: 0.0,
        }
    }
}

/// Seeded spawner: one item per timer period, category drawn 60/40
#[derive(Debug, Clone)]
pub struct ItemSpawner {
    seed: u64,
    rng: Pcg32,
    timer: SpawnTimer,
}

impl ItemSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            timer: SpawnTimer::default(),
        }
    }

    /// Run seed for reproducibility
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Weighted category draw
    pub fn draw_category(&mut self) -> ItemCategory {
        if self.rng.random_bool(REWARD_PROBABILITY) {
            ItemCategory::Reward
        } else {
            ItemCategory::Penalty
        }
    }

    /// Advance the timer and push one request per completed period
    pub fn advance(&mut self, dt: f32, requests: &mut Vec<ItemCategory>) {
        let due = self.timer.advance(dt);
        for _ in 0..due {
            let category = self.draw_category();
            requests.push(category);
        }
    }

    /// Restart the timer; the RNG stream carries on so runs differ
    pub fn restart(&mut self) {
        self.timer.restart();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_fires_every_interval() {
        let mut timer = SpawnTimer::new(1.2).unwrap();
        assert_eq!(timer.advance(1.0), 0);
        assert_eq!(timer.advance(0.25), 1);
        assert_eq!(timer.advance(2.5), 2);
        assert_eq!(timer.advance(-5.0), 0);
    }

    #[test]
    fn test_timer_rejects_degenerate_interval() {
        assert!(SpawnTimer::new(0.0).is_none());
        assert!(SpawnTimer::new(-1.2).is_none());
        assert!(SpawnTimer::new(f32::NAN).is_none());
        assert!(SpawnTimer::new(f32::INFINITY).is_none());
    }

    #[test]
    fn test_timer_ignores_non_finite_delta() {
        let mut timer = SpawnTimer::default();
        assert_eq!(timer.advance(f32::INFINITY), 0);
        assert_eq!(timer.advance(f32::NAN), 0);
        assert_eq!(timer.advance(1.3), 1);
    }

    #[test]
    fn test_timer_restart() {
        let mut timer = SpawnTimer::new(1.2).unwrap();
        timer.advance(1.1);
        timer.restart();
        assert_eq!(timer.advance(1.1), 0);
    }

    #[test]
    fn test_one_spawn_per_period_at_60fps() {
        let mut spawner = ItemSpawner::new(7);
        let mut requests = Vec::new();
        // 12 seconds of frames
        for _ in 0..720 {
            spawner.advance(1.0 / 60.0, &mut requests);
        }
        assert!((9..=10).contains(&requests.len()), "got {}", requests.len());
    }

    #[test]
    fn test_same_seed_same_categories() {
        let mut a = ItemSpawner::new(99999);
        let mut b = ItemSpawner::new(99999);
        for _ in 0..50 {
            assert_eq!(a.draw_category(), b.draw_category());
        }
    }

    #[test]
    fn test_category_weighting() {
        let mut spawner = ItemSpawner::new(12345);
        let n = 20_000;
        let rewards = (0..n)
            .filter(|_| spawner.draw_category() == ItemCategory::Reward)
            .count();
        let ratio = rewards as f64 / n as f64;
        assert!((ratio - 0.6).abs() < 0.02, "reward ratio {}", ratio);
    }
}
