//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in `GameState`.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Bounds, Rect};
use crate::config::GameConfig;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Nothing started yet
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Ticks suspended until resumed
    Paused,
    /// Lives ran out
    Over,
}

/// The player's craft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Pixels per tick
    pub speed: f32,
    /// Milliseconds until the next shot is allowed
    pub fire_cooldown_ms: f32,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        let p = &config.player;
        Self {
            pos: Vec2::new(p.start_x, p.start_y),
            width: p.width,
            height: p.height,
            speed: p.speed,
            fire_cooldown_ms: 0.0,
        }
    }

    /// Where new projectiles appear: leading edge, vertical middle
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.width, self.pos.y + self.height / 2.0)
    }
}

impl Bounds for Player {
    fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.width, self.height)
    }
}

/// A shot travelling right
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Bounds for Projectile {
    fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.width, self.height)
    }
}

/// An enemy craft travelling left
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Adversary {
    pub id: u32,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Base speed, scaled by the difficulty multiplier when moving
    pub speed: f32,
    /// Cosmetic palette index
    pub variant: u8,
}

impl Bounds for Adversary {
    fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.width, self.height)
    }
}

/// Pickup types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    /// +1 life, up to the maximum
    Restorative,
    /// Flat score award
    ScoreBonus,
}

/// A pickup drifting left
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub id: u32,
    pub kind: PickupKind,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Bounds for Pickup {
    fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.width, self.height)
    }
}

/// Explosion marker left where an adversary died
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Effect {
    /// Center of the destroyed adversary
    pub pos: Vec2,
    /// Ticks remaining
    pub timer: u32,
    pub size: f32,
}

/// Things that happened during a tick, for hosts (sound, HUD, logs)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    AdversaryDestroyed { id: u32, variant: u8, at: Vec2 },
    PlayerHit { lives_left: u32 },
    PickupCollected { kind: PickupKind },
    LevelUp { level: u32 },
    GameOver { final_score: u32 },
}

/// Most events held before the host drains them
pub const MAX_PENDING_EVENTS: usize = 256;

/// Live entity pools
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    pub projectiles: Vec<Projectile>,
    pub adversaries: Vec<Adversary>,
    pub effects: Vec<Effect>,
    pub pickups: Vec<Pickup>,
}

impl World {
    pub fn clear(&mut self) {
        self.projectiles.clear();
        self.adversaries.clear();
        self.effects.clear();
        self.pickups.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
            && self.adversaries.is_empty()
            && self.effects.is_empty()
            && self.pickups.is_empty()
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    /// Difficulty level, starts at 1
    pub level: u32,
    /// Applied to adversary speed only
    pub enemy_speed_multiplier: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub world: World,
    /// Undrained events, oldest first
    #[serde(skip)]
    pub events: VecDeque<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Fresh state in the `Idle` phase. The config must already be validated.
    pub fn new(config: GameConfig) -> Self {
        let player = Player::new(&config);
        let lives = config.player.max_lives;
        Self {
            config,
            phase: GamePhase::Idle,
            score: 0,
            lives,
            level: 1,
            enemy_speed_multiplier: 1.0,
            time_ticks: 0,
            player,
            world: World::default(),
            events: VecDeque::new(),
            next_id: 1,
        }
    }

    /// Back to start-of-game values; the phase is left to the caller
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = self.config.player.max_lives;
        self.level = 1;
        self.enemy_speed_multiplier = 1.0;
        self.time_ticks = 0;
        self.player = Player::new(&self.config);
        self.world.clear();
        self.events.clear();
        self.next_id = 1;
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Drop an explosion marker centered on `at`
    pub fn spawn_effect(&mut self, at: Vec2) {
        self.world.effects.push(Effect {
            pos: at,
            timer: self.config.effect.duration_ticks,
            size: self.config.effect.size,
        });
    }

    pub fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            let dropped = self.events.pop_front();
            log::trace!("Event queue full, dropping {:?}", dropped);
        }
        self.events.push_back(event);
    }

    /// Largest x the player may occupy
    pub fn player_max_x(&self) -> f32 {
        self.config.field.width - self.player.width
    }

    /// Largest y the player may occupy
    pub fn player_max_y(&self) -> f32 {
        self.config.field.height - self.player.height
    }
}
