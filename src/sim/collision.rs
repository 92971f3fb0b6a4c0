//! Collision resolution between entity pools
//!
//! Three passes run in a fixed order each tick: projectiles against
//! adversaries, the player against adversaries, the player against pickups.
//! Each pass first decides what was hit, then applies the consequences and
//! compacts the touched pools once, so nothing is removed (or scored) twice.

use glam::Vec2;

use super::geometry::{Bounds, intersects};
use super::state::{GameEvent, GamePhase, GameState, PickupKind};
use crate::consts::{SCORE_PER_ADVERSARY, SCORE_PER_BONUS};

/// A projectile that struck an adversary
#[derive(Debug, Clone, Copy)]
struct Hit {
    projectile: u32,
    adversary: u32,
    variant: u8,
    center: Vec2,
}

/// Run all collision passes for a tick.
///
/// If the player loses their last life, the phase becomes `Over` and the
/// pickup pass is skipped.
pub fn resolve_collisions(state: &mut GameState) {
    resolve_projectile_hits(state);
    if resolve_player_hits(state) {
        return;
    }
    resolve_pickups(state);
}

/// Each projectile destroys at most one adversary, and each adversary can be
/// claimed by only one projectile.
fn resolve_projectile_hits(state: &mut GameState) {
    let mut hits: Vec<Hit> = Vec::new();
    for projectile in &state.world.projectiles {
        let bounds = projectile.rect();
        let target = state.world.adversaries.iter().find(|a| {
            !hits.iter().any(|h| h.adversary == a.id) && intersects(&bounds, &a.rect())
        });
        if let Some(adversary) = target {
            hits.push(Hit {
                projectile: projectile.id,
                adversary: adversary.id,
                variant: adversary.variant,
                center: adversary.rect().center(),
            });
        }
    }

    if hits.is_empty() {
        return;
    }

    for hit in &hits {
        state.spawn_effect(hit.center);
        state.score += SCORE_PER_ADVERSARY;
        state.push_event(GameEvent::AdversaryDestroyed {
            id: hit.adversary,
            variant: hit.variant,
            at: hit.center,
        });
        log::debug!(
            "Projectile {} destroyed adversary {}",
            hit.projectile,
            hit.adversary
        );
    }

    state
        .world
        .projectiles
        .retain(|p| !hits.iter().any(|h| h.projectile == p.id));
    state
        .world
        .adversaries
        .retain(|a| !hits.iter().any(|h| h.adversary == a.id));
}

/// Returns true if the game ended during this pass
fn resolve_player_hits(state: &mut GameState) -> bool {
    let player = state.player.rect();
    let rammed: Vec<(u32, Vec2)> = state
        .world
        .adversaries
        .iter()
        .filter(|a| intersects(&player, &a.rect()))
        .map(|a| (a.id, a.rect().center()))
        .collect();

    if rammed.is_empty() {
        return false;
    }

    let mut removed: Vec<u32> = Vec::with_capacity(rammed.len());
    let mut game_over = false;
    for (id, center) in rammed {
        removed.push(id);
        state.spawn_effect(center);
        state.lives = state.lives.saturating_sub(1);
        state.push_event(GameEvent::PlayerHit {
            lives_left: state.lives,
        });
        log::debug!("Player rammed by adversary {}, {} lives left", id, state.lives);

        if state.lives == 0 {
            state.phase = GamePhase::Over;
            state.push_event(GameEvent::GameOver {
                final_score: state.score,
            });
            game_over = true;
            break;
        }
    }

    state.world.adversaries.retain(|a| !removed.contains(&a.id));
    game_over
}

fn resolve_pickups(state: &mut GameState) {
    let player = state.player.rect();
    let collected: Vec<(u32, PickupKind)> = state
        .world
        .pickups
        .iter()
        .filter(|p| intersects(&player, &p.rect()))
        .map(|p| (p.id, p.kind))
        .collect();

    if collected.is_empty() {
        return;
    }

    let max_lives = state.config.player.max_lives;
    for &(id, kind) in &collected {
        match kind {
            PickupKind::Restorative => {
                if state.lives < max_lives {
                    state.lives += 1;
                }
            }
            PickupKind::ScoreBonus => state.score += SCORE_PER_BONUS,
        }
        state.push_event(GameEvent::PickupCollected { kind });
        log::debug!("Collected {:?} pickup {}", kind, id);
    }

    state
        .world
        .pickups
        .retain(|p| !collected.iter().any(|&(id, _)| id == p.id));
}
