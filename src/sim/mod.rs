//! Simulation module
//!
//! All gameplay logic lives here:
//! - Randomness only through an injected `Rng`
//! - Time only through the `dt_ms` handed to each tick
//! - No rendering or input-device dependencies

pub mod collision;
pub mod difficulty;
pub mod geometry;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::resolve_collisions;
pub use difficulty::{level_for_score, multiplier_for_level, update_difficulty};
pub use geometry::{Bounds, Rect, intersects};
pub use spawn::spawn_entities;
pub use state::{
    Adversary, Effect, GameEvent, GamePhase, GameState, Pickup, PickupKind, Player, Projectile,
    World, MAX_PENDING_EVENTS,
};
pub use tick::{Intents, tick};
