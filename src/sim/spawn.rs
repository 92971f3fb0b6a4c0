//! Probabilistic entry of adversaries and pickups
//!
//! One Bernoulli draw per pool per tick, so gaps between spawns vary
//! naturally. Only the adversary chance scales with level.

use glam::Vec2;
use rand::Rng;

use super::state::{Adversary, GameState, Pickup, PickupKind};

/// Chance that an adversary enters this tick
pub fn adversary_chance(spawn_rate: f32, level: u32) -> f32 {
    spawn_rate * level as f32
}

/// Roll for an adversary at the right edge
pub fn spawn_adversary(state: &mut GameState, rng: &mut impl Rng) {
    let cfg = state.config.adversary;
    let field = state.config.field;

    if rng.random::<f32>() >= adversary_chance(cfg.spawn_rate, state.level) {
        return;
    }

    let y = rng.random::<f32>() * (field.height - cfg.height);
    let variant = rng.random_range(0..cfg.variant_count);
    let id = state.next_entity_id();

    state.world.adversaries.push(Adversary {
        id,
        pos: Vec2::new(field.width, y),
        width: cfg.width,
        height: cfg.height,
        speed: cfg.speed,
        variant,
    });
    log::debug!("Adversary {} (variant {}) enters at y={:.1}", id, variant, y);
}

/// Roll for a pickup at the right edge
pub fn spawn_pickup(state: &mut GameState, rng: &mut impl Rng) {
    let cfg = state.config.pickup;
    let field = state.config.field;

    if rng.random::<f32>() >= cfg.spawn_rate {
        return;
    }

    let y = rng.random::<f32>() * (field.height - cfg.height);
    let kind = if rng.random::<f32>() < 0.5 {
        PickupKind::Restorative
    } else {
        PickupKind::ScoreBonus
    };
    let id = state.next_entity_id();

    state.world.pickups.push(Pickup {
        id,
        kind,
        pos: Vec2::new(field.width, y),
        width: cfg.width,
        height: cfg.height,
        speed: cfg.speed,
    });
    log::debug!("{:?} pickup {} enters at y={:.1}", kind, id, y);
}

/// Run both spawn rolls for a tick
pub fn spawn_entities(state: &mut GameState, rng: &mut impl Rng) {
    spawn_adversary(state, rng);
    spawn_pickup(state, rng);
}
