use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failure for a table configuration. Raised at setup, never
/// silently clamped away.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("table_width must be positive, got {0}")]
    NonPositiveTableWidth(f32),
    #[error("world dimensions must be positive, got {0}x{1}")]
    NonPositiveWorldDims(f32, f32),
    #[error("table of width {table} does not fit the {world_w}x{world_h} world")]
    TableLargerThanWorld {
        table: f32,
        world_w: f32,
        world_h: f32,
    },
    #[error("fixed_dt must be positive, got {0}")]
    NonPositiveFixedDt(f32),
    #[error("ball_restitution must be within [0, 1], got {0}")]
    RestitutionOutOfRange(f32),
    #[error("ball_friction must be non-negative, got {0}")]
    NegativeFriction(f32),
    #[error("capture_margin_ratio must be within [0, 1), got {0}")]
    CaptureMarginOutOfRange(f32),
    #[error("strike_strength must be positive, got {0}")]
    NonPositiveStrikeStrength(f32),
}

/// Table configuration. Loaded from JSON or built in code; every field has
/// a default matching the classic 800-unit table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Width of the playing surface; every other dimension derives from it.
    #[serde(default = "default_table_width")]
    pub table_width: f32,
    /// World (canvas-equivalent) width the table is centered in.
    #[serde(default = "default_world_width")]
    pub world_width: f32,
    /// World height the table is centered in.
    #[serde(default = "default_world_height")]
    pub world_height: f32,
    /// Restitution of every ball.
    #[serde(default = "default_ball_restitution")]
    pub ball_restitution: f32,
    /// Per-step rolling friction of every ball.
    #[serde(default = "default_ball_friction")]
    pub ball_friction: f32,
    /// Seed for the object-ball scatter. Same seed, same table.
    #[serde(default = "default_rack_seed")]
    pub rack_seed: u64,
    /// Fixed simulation timestep in seconds.
    #[serde(default = "default_fixed_dt")]
    pub fixed_dt: f32,
    /// Scale from drag vector to strike impulse.
    #[serde(default = "default_strike_strength")]
    pub strike_strength: f32,
    /// Capture margin as a fraction of ball radius: a ball drops only once
    /// its center is within `pocket_radius - ratio * ball_radius`.
    #[serde(default = "default_capture_margin_ratio")]
    pub capture_margin_ratio: f32,
}

fn default_table_width() -> f32 {
    800.0
}

fn default_world_width() -> f32 {
    1000.0
}

fn default_world_height() -> f32 {
    600.0
}

fn default_ball_restitution() -> f32 {
    0.9
}

fn default_ball_friction() -> f32 {
    0.005
}

fn default_rack_seed() -> u64 {
    0x5eed
}

fn default_fixed_dt() -> f32 {
    1.0 / 60.0
}

fn default_strike_strength() -> f32 {
    0.2
}

fn default_capture_margin_ratio() -> f32 {
    // Must stay below (pocket_radius - ball_radius * sqrt(2)) / ball_radius
    // (~0.086 at classic proportions): the solid corner cushions keep a
    // cornered ball's center ball_radius * sqrt(2) from the pocket center,
    // and a larger margin would make corner pockets uncapturable.
    0.05
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            table_width: default_table_width(),
            world_width: default_world_width(),
            world_height: default_world_height(),
            ball_restitution: default_ball_restitution(),
            ball_friction: default_ball_friction(),
            rack_seed: default_rack_seed(),
            fixed_dt: default_fixed_dt(),
            strike_strength: default_strike_strength(),
            capture_margin_ratio: default_capture_margin_ratio(),
        }
    }
}

impl TableConfig {
    /// Parse a configuration from a JSON string. Missing fields take their
    /// defaults; validation is a separate, explicit step.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check every field, returning the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table_width <= 0.0 {
            return Err(ConfigError::NonPositiveTableWidth(self.table_width));
        }
        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            return Err(ConfigError::NonPositiveWorldDims(
                self.world_width,
                self.world_height,
            ));
        }
        if self.table_width > self.world_width || self.table_width / 2.0 > self.world_height {
            return Err(ConfigError::TableLargerThanWorld {
                table: self.table_width,
                world_w: self.world_width,
                world_h: self.world_height,
            });
        }
        if self.fixed_dt <= 0.0 {
            return Err(ConfigError::NonPositiveFixedDt(self.fixed_dt));
        }
        if !(0.0..=1.0).contains(&self.ball_restitution) {
            return Err(ConfigError::RestitutionOutOfRange(self.ball_restitution));
        }
        if self.ball_friction < 0.0 {
            return Err(ConfigError::NegativeFriction(self.ball_friction));
        }
        if !(0.0..1.0).contains(&self.capture_margin_ratio) {
            return Err(ConfigError::CaptureMarginOutOfRange(
                self.capture_margin_ratio,
            ));
        }
        if self.strike_strength <= 0.0 {
            return Err(ConfigError::NonPositiveStrikeStrength(self.strike_strength));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(TableConfig::default().validate(), Ok(()));
    }

    #[test]
    fn parse_empty_object_takes_all_defaults() {
        let config = TableConfig::from_json("{}").unwrap();
        assert_eq!(config.table_width, 800.0);
        assert_eq!(config.world_width, 1000.0);
        assert!((config.ball_restitution - 0.9).abs() < 1e-6);
    }

    #[test]
    fn parse_partial_override() {
        let config = TableConfig::from_json(r#"{ "table_width": 400.0, "rack_seed": 99 }"#).unwrap();
        assert_eq!(config.table_width, 400.0);
        assert_eq!(config.rack_seed, 99);
        assert_eq!(config.world_height, 600.0);
    }

    #[test]
    fn negative_width_is_rejected_not_clamped() {
        let config = TableConfig {
            table_width: -1.0,
            ..TableConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveTableWidth(-1.0))
        );
    }

    #[test]
    fn oversized_table_is_rejected() {
        let config = TableConfig {
            table_width: 2000.0,
            ..TableConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TableLargerThanWorld { .. })
        ));
    }

    #[test]
    fn bad_restitution_and_friction_are_rejected() {
        let config = TableConfig {
            ball_restitution: 1.5,
            ..TableConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::RestitutionOutOfRange(1.5)));

        let config = TableConfig {
            ball_friction: -0.1,
            ..TableConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NegativeFriction(-0.1)));
    }

    #[test]
    fn zero_dt_is_rejected() {
        let config = TableConfig {
            fixed_dt: 0.0,
            ..TableConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveFixedDt(0.0)));
    }
}
