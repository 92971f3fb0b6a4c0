//! Game balance configuration
//!
//! Supplied once when a session is built. Every section falls back to the
//! stock values so partial JSON files only need to name what they change.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a configuration is rejected at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must be at least 1")]
    Zero { field: &'static str },
    #[error("{field} must be within [0, 1], got {value}")]
    InvalidRate { field: &'static str, value: f32 },
    #[error("{entity} ({width}x{height}) does not fit inside the field")]
    DoesNotFit {
        entity: &'static str,
        width: f32,
        height: f32,
    },
    #[error("player start ({x}, {y}) lies outside the field")]
    StartOutsideField { x: f32, y: f32 },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Play field dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

/// Player craft
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub width: f32,
    pub height: f32,
    /// Pixels per tick
    pub speed: f32,
    pub max_lives: u32,
    pub start_x: f32,
    pub start_y: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed: PLAYER_SPEED,
            max_lives: PLAYER_MAX_LIVES,
            start_x: PLAYER_START_X,
            start_y: PLAYER_START_Y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    /// Minimum wall-clock gap between shots
    pub cooldown_ms: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            width: PROJECTILE_WIDTH,
            height: PROJECTILE_HEIGHT,
            speed: PROJECTILE_SPEED,
            cooldown_ms: FIRE_COOLDOWN_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdversaryConfig {
    pub width: f32,
    pub height: f32,
    /// Base speed before the difficulty multiplier
    pub speed: f32,
    /// Spawn chance per tick at level 1
    pub spawn_rate: f32,
    pub variant_count: u8,
}

impl Default for AdversaryConfig {
    fn default() -> Self {
        Self {
            width: ADVERSARY_WIDTH,
            height: ADVERSARY_HEIGHT,
            speed: ADVERSARY_SPEED,
            spawn_rate: ADVERSARY_SPAWN_RATE,
            variant_count: ADVERSARY_VARIANTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickupConfig {
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub spawn_rate: f32,
}

impl Default for PickupConfig {
    fn default() -> Self {
        Self {
            width: PICKUP_WIDTH,
            height: PICKUP_HEIGHT,
            speed: PICKUP_SPEED,
            spawn_rate: PICKUP_SPAWN_RATE,
        }
    }
}

/// Explosion markers left behind by destroyed adversaries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    pub duration_ticks: u32,
    pub size: f32,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            duration_ticks: EFFECT_DURATION_TICKS,
            size: EFFECT_SIZE,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field: FieldConfig,
    pub player: PlayerConfig,
    pub projectile: ProjectileConfig,
    pub adversary: AdversaryConfig,
    pub pickup: PickupConfig,
    pub effect: EffectConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            player: PlayerConfig::default(),
            projectile: ProjectileConfig::default(),
            adversary: AdversaryConfig::default(),
            pickup: PickupConfig::default(),
            effect: EffectConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse a JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Pretty JSON, suitable as a starting point for a config file
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configurations the simulation can't run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sizes = [
            ("field.width", self.field.width),
            ("field.height", self.field.height),
            ("player.width", self.player.width),
            ("player.height", self.player.height),
            ("player.speed", self.player.speed),
            ("projectile.width", self.projectile.width),
            ("projectile.height", self.projectile.height),
            ("projectile.speed", self.projectile.speed),
            ("adversary.width", self.adversary.width),
            ("adversary.height", self.adversary.height),
            ("adversary.speed", self.adversary.speed),
            ("pickup.width", self.pickup.width),
            ("pickup.height", self.pickup.height),
            ("pickup.speed", self.pickup.speed),
            ("effect.size", self.effect.size),
        ];
        for (field, value) in sizes {
            // Negated so NaN is rejected too
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if !(self.projectile.cooldown_ms >= 0.0 && self.projectile.cooldown_ms.is_finite()) {
            return Err(ConfigError::NonPositive {
                field: "projectile.cooldown_ms",
                value: self.projectile.cooldown_ms,
            });
        }

        if self.player.max_lives == 0 {
            return Err(ConfigError::Zero {
                field: "player.max_lives",
            });
        }
        if self.adversary.variant_count == 0 {
            return Err(ConfigError::Zero {
                field: "adversary.variant_count",
            });
        }
        if self.effect.duration_ticks == 0 {
            return Err(ConfigError::Zero {
                field: "effect.duration_ticks",
            });
        }

        for (field, value) in [
            ("adversary.spawn_rate", self.adversary.spawn_rate),
            ("pickup.spawn_rate", self.pickup.spawn_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidRate { field, value });
            }
        }

        for (entity, width, height) in [
            ("player", self.player.width, self.player.height),
            ("adversary", self.adversary.width, self.adversary.height),
            ("pickup", self.pickup.width, self.pickup.height),
        ] {
            if width > self.field.width || height > self.field.height {
                return Err(ConfigError::DoesNotFit {
                    entity,
                    width,
                    height,
                });
            }
        }

        let (x, y) = (self.player.start_x, self.player.start_y);
        if !(0.0..=self.field.width - self.player.width).contains(&x)
            || !(0.0..=self.field.height - self.player.height).contains(&y)
        {
            return Err(ConfigError::StartOutsideField { x, y });
        }

        Ok(())
    }
}
