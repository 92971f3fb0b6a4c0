//! Session state machine and frame scheduling
//!
//! A `Session` owns the simulation and its random source. The host calls
//! [`Session::frame`] from its per-frame callback; each call runs at most one
//! whole tick before returning, so ticks never overlap.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::config::{ConfigError, FieldConfig, GameConfig};
use crate::sim::{
    Adversary, Effect, GameEvent, GamePhase, GameState, Intents, Pickup, Player, Projectile, tick,
};

/// Read-only view of a frame for renderers and HUDs
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub field: FieldConfig,
    pub score: u32,
    pub lives: u32,
    pub max_lives: u32,
    pub level: u32,
    pub enemy_speed_multiplier: f32,
    /// Score of the last finished game
    pub final_score: Option<u32>,
    pub player: &'a Player,
    pub projectiles: &'a [Projectile],
    pub adversaries: &'a [Adversary],
    pub effects: &'a [Effect],
    pub pickups: &'a [Pickup],
}

/// A game session: idle, running, paused or over
#[derive(Debug)]
pub struct Session<R = Pcg32> {
    state: GameState,
    rng: R,
    /// Host timestamp of the previous tick; `None` right after start/resume
    last_frame_ms: Option<f64>,
    final_score: Option<u32>,
    games_started: u32,
}

impl Session<Pcg32> {
    /// Create an idle session with a seeded RNG
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        log::info!("Session created with seed: {}", seed);
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    /// Create an idle session drawing from the given random source
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(config),
            rng,
            last_frame_ms: None,
            final_score: None,
            games_started: 0,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.state.config
    }

    /// Score of the most recent game that ended
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    /// Start a fresh game. From any phase this is a full reset.
    pub fn start_or_restart(&mut self) {
        self.state.reset();
        self.state.phase = GamePhase::Running;
        self.last_frame_ms = None;
        self.games_started += 1;
        log::info!("Game {} started", self.games_started);
    }

    /// Running <-> Paused. Ignored while idle or over.
    pub fn toggle_pause(&mut self) {
        match self.state.phase {
            GamePhase::Running => {
                self.state.phase = GamePhase::Paused;
                log::info!("Paused at tick {}", self.state.time_ticks);
            }
            GamePhase::Paused => {
                self.state.phase = GamePhase::Running;
                // Paused time must not reach the next tick's delta
                self.last_frame_ms = None;
                log::info!("Resumed at tick {}", self.state.time_ticks);
            }
            GamePhase::Idle | GamePhase::Over => {
                log::debug!("Pause request ignored in {:?}", self.state.phase);
            }
        }
    }

    /// Per-frame entry point. `now_ms` is the host's monotonic timestamp.
    ///
    /// Returns true if a tick ran.
    pub fn frame(&mut self, now_ms: f64, intents: &Intents) -> bool {
        if self.state.phase != GamePhase::Running {
            return false;
        }

        let dt_ms = match self.last_frame_ms {
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);
        let dt_ms = dt_ms as f32;
        log::trace!("Tick {} dt={:.2}ms", self.state.time_ticks + 1, dt_ms);

        tick(&mut self.state, intents, dt_ms, &mut self.rng);

        if self.state.phase == GamePhase::Over {
            self.final_score = Some(self.state.score);
            log::info!(
                "Game over: score {} at level {} after {} ticks",
                self.state.score,
                self.state.level,
                self.state.time_ticks
            );
        }
        true
    }

    /// Take every event raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.events.drain(..).collect()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let s = &self.state;
        Snapshot {
            phase: s.phase,
            field: s.config.field,
            score: s.score,
            lives: s.lives,
            max_lives: s.config.player.max_lives,
            level: s.level,
            enemy_speed_multiplier: s.enemy_speed_multiplier,
            final_score: self.final_score,
            player: &s.player,
            projectiles: &s.world.projectiles,
            adversaries: &s.world.adversaries,
            effects: &s.world.effects,
            pickups: &s.world.pickups,
        }
    }
}
