//! Simulation tick
//!
//! One call advances every subsystem exactly once, in a fixed order.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::resolve_collisions;
use super::difficulty::update_difficulty;
use super::motion::{
    update_adversaries, update_effects, update_pickups, update_player, update_projectiles,
};
use super::spawn::spawn_entities;
use super::state::{GamePhase, GameState};

/// Held controls, sampled once at the start of a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intents {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Advance the game state by one tick.
///
/// `dt_ms` is the wall-clock time since the previous tick; only the fire
/// cooldown consumes it. Does nothing unless the phase is `Running`.
pub fn tick(state: &mut GameState, intents: &Intents, dt_ms: f32, rng: &mut impl Rng) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    update_player(state, intents, dt_ms);
    update_projectiles(state);
    update_adversaries(state);
    update_effects(state);
    update_pickups(state);
    spawn_entities(state, rng);
    resolve_collisions(state);
    // Runs even on the tick the game ends, so level always matches score
    update_difficulty(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::Adversary;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn quiet_config() -> GameConfig {
        let mut config = GameConfig::default();
        config.adversary.spawn_rate = 0.0;
        config.pickup.spawn_rate = 0.0;
        config
    }

    fn running(config: GameConfig) -> GameState {
        let mut state = GameState::new(config);
        state.phase = GamePhase::Running;
        state
    }

    #[test]
    fn test_tick_ignored_unless_running() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = GameState::new(quiet_config());
        let fire = Intents {
            fire: true,
            right: true,
            ..Default::default()
        };

        tick(&mut state, &fire, 16.0, &mut rng);
        assert_eq!(state.time_ticks, 0);
        assert!(state.world.projectiles.is_empty());

        state.phase = GamePhase::Paused;
        tick(&mut state, &fire, 16.0, &mut rng);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.player.pos, Vec2::new(100.0, 300.0));
    }

    #[test]
    fn test_shot_fired_this_tick_moves_before_collisions() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = running(quiet_config());
        // Adversary sitting just ahead of the muzzle after both have moved
        let id = state.next_entity_id();
        state.world.adversaries.push(Adversary {
            id,
            pos: Vec2::new(171.0, 300.0),
            width: 40.0,
            height: 40.0,
            speed: 3.0,
            variant: 0,
        });
        let fire = Intents {
            fire: true,
            ..Default::default()
        };

        tick(&mut state, &fire, 16.0, &mut rng);

        assert!(state.world.adversaries.is_empty());
        assert!(state.world.projectiles.is_empty());
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_level_up_speeds_up_adversaries() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = running(quiet_config());
        state.score = 100;

        tick(&mut state, &Intents::default(), 16.0, &mut rng);

        assert_eq!(state.level, 2);
        assert!((state.enemy_speed_multiplier - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let config = GameConfig::default();
        let mut a = running(config.clone());
        let mut b = running(config);
        let mut rng_a = Pcg32::seed_from_u64(99999);
        let mut rng_b = Pcg32::seed_from_u64(99999);
        let inputs = [
            Intents {
                up: true,
                fire: true,
                ..Default::default()
            },
            Intents::default(),
            Intents {
                down: true,
                right: true,
                ..Default::default()
            },
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            tick(&mut a, input, 16.0, &mut rng_a);
            tick(&mut b, input, 16.0, &mut rng_b);
        }

        assert_eq!(a.score, b.score);
        assert_eq!(a.lives, b.lives);
        assert_eq!(a.world.adversaries.len(), b.world.adversaries.len());
        assert_eq!(a.player.pos, b.player.pos);
    }
}
