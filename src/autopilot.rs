//! Demo-mode pilot
//!
//! Produces intents from a snapshot so the game can play itself (attract
//! screen, soak runs in the headless host). Pure and deterministic.

use crate::session::Snapshot;
use crate::sim::{Bounds, Intents, Rect, intersects};

/// How far ahead of the craft an adversary counts as a threat
const THREAT_LOOKAHEAD: f32 = 220.0;
/// Extra vertical clearance kept around the craft when judging threats
const LANE_MARGIN: f32 = 12.0;
/// Preferred column, as a fraction of field width
const HOME_FRACTION: f32 = 0.1;

/// Decide this frame's controls
pub fn steer(snapshot: &Snapshot<'_>) -> Intents {
    let player = snapshot.player.rect();
    let field = snapshot.field;
    let speed = snapshot.player.speed;
    let mut intents = Intents {
        fire: true,
        ..Default::default()
    };

    let home_x = field.width * HOME_FRACTION;
    if player.x < home_x - speed {
        intents.right = true;
    } else if player.x > home_x + speed {
        intents.left = true;
    }

    let lane = Rect::new(
        player.x,
        player.y - LANE_MARGIN,
        player.width + THREAT_LOOKAHEAD,
        player.height + 2.0 * LANE_MARGIN,
    );
    let threat = snapshot
        .adversaries
        .iter()
        .map(|a| a.rect())
        .filter(|r| r.right() >= player.x && intersects(&lane, r))
        .min_by(|a, b| a.x.total_cmp(&b.x));

    let player_mid = player.center().y;
    if let Some(threat) = threat {
        // Dodge away from the threat's center, unless pinned against an edge
        let go_up = threat.center().y >= player_mid;
        let max_y = field.height - player.height;
        if go_up && player.y > 0.0 {
            intents.up = true;
        } else if !go_up && player.y < max_y {
            intents.down = true;
        } else if go_up {
            intents.down = true;
        } else {
            intents.up = true;
        }
        return intents;
    }

    let target_y = snapshot
        .pickups
        .iter()
        .map(|p| p.rect())
        .filter(|r| r.right() >= player.x)
        .min_by(|a, b| a.x.total_cmp(&b.x))
        .map(|r| r.center().y)
        .or_else(|| {
            snapshot
                .adversaries
                .iter()
                .map(|a| a.rect())
                .filter(|r| r.x > player.right())
                .min_by(|a, b| a.x.total_cmp(&b.x))
                .map(|r| r.center().y)
        });

    if let Some(target_y) = target_y {
        track(&mut intents, player_mid, target_y, speed);
    }
    intents
}

fn track(intents: &mut Intents, current: f32, target: f32, deadzone: f32) {
    if target < current - deadzone {
        intents.up = true;
    } else if target > current + deadzone {
        intents.down = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::{Adversary, GamePhase, Pickup, PickupKind, Player};
    use glam::Vec2;

    fn snapshot<'a>(
        config: &GameConfig,
        player: &'a Player,
        adversaries: &'a [Adversary],
        pickups: &'a [Pickup],
    ) -> Snapshot<'a> {
        Snapshot {
            phase: GamePhase::Running,
            field: config.field,
            score: 0,
            lives: 3,
            max_lives: 3,
            level: 1,
            enemy_speed_multiplier: 1.0,
            final_score: None,
            player,
            projectiles: &[],
            adversaries,
            effects: &[],
            pickups,
        }
    }

    fn adversary(x: f32, y: f32) -> Adversary {
        Adversary {
            id: 1,
            pos: Vec2::new(x, y),
            width: 40.0,
            height: 40.0,
            speed: 3.0,
            variant: 0,
        }
    }

    #[test]
    fn test_always_fires() {
        let config = GameConfig::default();
        let player = Player::new(&config);
        let intents = steer(&snapshot(&config, &player, &[], &[]));
        assert!(intents.fire);
        assert!(!intents.up && !intents.down);
    }

    #[test]
    fn test_dodges_threat_in_lane() {
        let config = GameConfig::default();
        let player = Player::new(&config);
        // Slightly below the craft's middle, close ahead
        let threats = [adversary(250.0, 310.0)];
        let intents = steer(&snapshot(&config, &player, &threats, &[]));
        assert!(intents.up);
        assert!(!intents.down);
    }

    #[test]
    fn test_dodges_the_other_way_when_pinned() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        player.pos.y = 0.0;
        let threats = [adversary(250.0, 10.0)];
        let intents = steer(&snapshot(&config, &player, &threats, &[]));
        assert!(intents.down);
    }

    #[test]
    fn test_heads_for_pickup_when_safe() {
        let config = GameConfig::default();
        let player = Player::new(&config);
        let pickups = [Pickup {
            id: 2,
            kind: PickupKind::Restorative,
            pos: Vec2::new(700.0, 50.0),
            width: 25.0,
            height: 25.0,
            speed: 2.0,
        }];
        let intents = steer(&snapshot(&config, &player, &[], &pickups));
        assert!(intents.up);
    }

    #[test]
    fn test_lines_up_distant_adversary() {
        let config = GameConfig::default();
        let player = Player::new(&config);
        let targets = [adversary(1000.0, 500.0)];
        let intents = steer(&snapshot(&config, &player, &targets, &[]));
        assert!(intents.down);
    }

    #[test]
    fn test_returns_to_home_column() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        player.pos.x = 600.0;
        let intents = steer(&snapshot(&config, &player, &[], &[]));
        assert!(intents.left);
    }
}
