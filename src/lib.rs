//! Skyline Sortie - a side-scrolling arcade shooter
//!
//! Core modules:
//! - `sim`: Per-tick simulation (spawning, motion, collisions, difficulty)
//! - `session`: Idle/running/paused/over state machine and frame scheduling
//! - `config`: Data-driven game balance with validation
//! - `autopilot`: Demo-mode input source
//! - `logging`: Logger bootstrap for hosts

pub mod autopilot;
pub mod config;
pub mod logging;
pub mod session;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use session::{Session, Snapshot};
pub use sim::{GameEvent, GamePhase, Intents};

/// Game configuration constants
pub mod consts {
    /// Default field dimensions
    pub const FIELD_WIDTH: f32 = 1200.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Player craft defaults
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_MAX_LIVES: u32 = 3;
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 300.0;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 20.0;
    pub const PROJECTILE_HEIGHT: f32 = 4.0;
    pub const PROJECTILE_SPEED: f32 = 8.0;
    /// Minimum time between two shots (ms)
    pub const FIRE_COOLDOWN_MS: f32 = 150.0;

    /// Adversary defaults
    pub const ADVERSARY_WIDTH: f32 = 40.0;
    pub const ADVERSARY_HEIGHT: f32 = 40.0;
    pub const ADVERSARY_SPEED: f32 = 3.0;
    /// Spawn chance per tick at level 1 (scaled by level)
    pub const ADVERSARY_SPAWN_RATE: f32 = 0.02;
    pub const ADVERSARY_VARIANTS: u8 = 3;

    /// Pickup defaults
    pub const PICKUP_WIDTH: f32 = 25.0;
    pub const PICKUP_HEIGHT: f32 = 25.0;
    pub const PICKUP_SPEED: f32 = 2.0;
    pub const PICKUP_SPAWN_RATE: f32 = 0.005;

    /// Explosion marker defaults
    pub const EFFECT_DURATION_TICKS: u32 = 20;
    pub const EFFECT_SIZE: f32 = 30.0;

    /// Score awards
    pub const SCORE_PER_ADVERSARY: u32 = 10;
    pub const SCORE_PER_BONUS: u32 = 50;
    /// Score needed per difficulty level
    pub const SCORE_PER_LEVEL: u32 = 100;
    /// Adversary speed gained per level above the first
    pub const MULTIPLIER_STEP: f32 = 0.2;
}
