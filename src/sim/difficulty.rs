//! Score-driven difficulty

use super::state::{GameEvent, GameState};
use crate::consts::{MULTIPLIER_STEP, SCORE_PER_LEVEL};

/// One level per 100 points, starting at 1
pub fn level_for_score(score: u32) -> u32 {
    score / SCORE_PER_LEVEL + 1
}

/// Adversary speed multiplier for a level
pub fn multiplier_for_level(level: u32) -> f32 {
    1.0 + level.saturating_sub(1) as f32 * MULTIPLIER_STEP
}

/// Raise the stored level if the score has earned it. Never lowers it.
pub fn update_difficulty(state: &mut GameState) {
    let level = level_for_score(state.score);
    if level <= state.level {
        return;
    }
    state.level = level;
    state.enemy_speed_multiplier = multiplier_for_level(level);
    state.push_event(GameEvent::LevelUp { level });
    log::info!(
        "Level {} reached (score {}, enemy speed x{:.1})",
        level,
        state.score,
        state.enemy_speed_multiplier
    );
}
