//! Per-tick movement and expiry
//!
//! Speeds are in pixels per tick. Pools are compacted with a single `retain`
//! after moving, so no entity is skipped or visited twice.

use super::state::{GameState, Projectile};
use super::tick::Intents;

/// Move the craft from held intents and fire if the cooldown allows.
///
/// Directions apply in the order up, down, left, right and each is applied
/// in full, so opposite intents held together cancel out. The result is
/// clamped to the field.
pub fn update_player(state: &mut GameState, intents: &Intents, dt_ms: f32) {
    let speed = state.player.speed;
    let mut pos = state.player.pos;
    if intents.up {
        pos.y -= speed;
    }
    if intents.down {
        pos.y += speed;
    }
    if intents.left {
        pos.x -= speed;
    }
    if intents.right {
        pos.x += speed;
    }
    pos.x = pos.x.clamp(0.0, state.player_max_x());
    pos.y = pos.y.clamp(0.0, state.player_max_y());
    state.player.pos = pos;

    let player = &mut state.player;
    player.fire_cooldown_ms = (player.fire_cooldown_ms - dt_ms).max(0.0);

    if intents.fire && player.fire_cooldown_ms <= 0.0 {
        fire(state);
    }
}

/// Spawn a projectile at the muzzle and restart the cooldown
fn fire(state: &mut GameState) {
    let cfg = state.config.projectile;
    let id = state.next_entity_id();
    state.world.projectiles.push(Projectile {
        id,
        pos: state.player.muzzle(),
        width: cfg.width,
        height: cfg.height,
        speed: cfg.speed,
    });
    state.player.fire_cooldown_ms = cfg.cooldown_ms;
}

/// Projectiles fly right and expire past the right edge
pub fn update_projectiles(state: &mut GameState) {
    let field_width = state.config.field.width;
    for projectile in &mut state.world.projectiles {
        projectile.pos.x += projectile.speed;
    }
    state
        .world
        .projectiles
        .retain(|p| p.pos.x <= field_width);
}

/// Adversaries fly left at the difficulty-scaled speed
pub fn update_adversaries(state: &mut GameState) {
    let multiplier = state.enemy_speed_multiplier;
    for adversary in &mut state.world.adversaries {
        adversary.pos.x -= adversary.speed * multiplier;
    }
    state
        .world
        .adversaries
        .retain(|a| a.pos.x + a.width >= 0.0);
}

/// Count down explosion markers
pub fn update_effects(state: &mut GameState) {
    for effect in &mut state.world.effects {
        effect.timer = effect.timer.saturating_sub(1);
    }
    state.world.effects.retain(|e| e.timer > 0);
}

/// Pickups drift left at a fixed speed
pub fn update_pickups(state: &mut GameState) {
    for pickup in &mut state.world.pickups {
        pickup.pos.x -= pickup.speed;
    }
    state.world.pickups.retain(|p| p.pos.x + p.width >= 0.0);
}
