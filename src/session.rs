//! Frame driver
//!
//! A `Session` is the single owner of the simulation. Hosts feed it jump
//! presses and frame deltas; the spawn timer queues requests that are
//! drained at the start of the next tick.

use crate::consts::MAX_FRAME_DT;
use crate::settings::{Settings, SettingsError};
use crate::sim::{GameEvent, GameState, ItemSpawner, TickInput, tick};
use crate::snapshot::FrameSnapshot;

pub struct Session {
    state: GameState,
    spawner: ItemSpawner,
    /// Input gathered since the last frame
    input: TickInput,
}

impl Session {
    /// Start a session, validating settings first
    pub fn new(settings: &Settings) -> Result<Self, SettingsError> {
        let state = GameState::new(settings)?;
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!(
            "Session started: seed {}, {} lives, playfield {}x{}",
            seed,
            state.starting_lives,
            state.playfield.width,
            state.playfield.height
        );
        Ok(Self {
            state,
            spawner: ItemSpawner::new(seed),
            input: TickInput::default(),
        })
    }

    /// Jump signal from any bound source. Repeated presses before the
    /// next frame collapse into one.
    pub fn press_jump(&mut self) {
        self.input.jump = true;
    }

    /// Run one display frame: queue due spawns, tick, return the tick's events
    pub fn advance_frame(&mut self, dt: f32) -> Vec<GameEvent> {
        if self.state.is_game_over() {
            self.input = TickInput::default();
            return Vec::new();
        }

        let dt = if dt > MAX_FRAME_DT {
            log::warn!("Frame delta {:.3}s clamped to {:.3}s", dt, MAX_FRAME_DT);
            MAX_FRAME_DT
        } else {
            dt
        };
        self.spawner.advance(dt, &mut self.input.spawns);

        let input = std::mem::take(&mut self.input);
        tick(&mut self.state, &input);

        let events = self.state.drain_events();
        for event in &events {
            log::debug!("{:?}", event);
        }
        events
    }

    /// Start a fresh run (valid from any phase)
    pub fn reset(&mut self) {
        self.state.reset();
        self.spawner.restart();
        self.input = TickInput::default();
        log::info!("Session reset");
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.spawner.seed()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }
}
