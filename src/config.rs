//! Tunable game parameters. Every field has a default so a host page can pass
//! a partial JSON object.

use serde::Deserialize;

use crate::error::GameError;

/// Inclusive upper bounds of `distance / max_rank` for burn, hot, warm,
/// normal, windy and cold. Anything above the last is freezing.
pub const DEFAULT_THRESHOLDS: [f64; 6] = [0.01, 0.03, 0.07, 0.15, 0.30, 0.60];

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    pub check_delay_ms: u32,
    pub slide_out_ms: u32,
    pub particle_lifetime_ms: u32,
    pub toast_ms: u32,
    pub thresholds: [f64; 6],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 6,
            check_delay_ms: 700,
            slide_out_ms: 300,
            particle_lifetime_ms: 1500,
            toast_ms: 2000,
            thresholds: DEFAULT_THRESHOLDS,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let cfg: GameConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.board_size == 0 {
            return Err(GameError::InvalidConfig("board_size must be at least 1"));
        }
        if self
            .thresholds
            .iter()
            .any(|t| !t.is_finite() || *t < 0.0)
        {
            return Err(GameError::InvalidConfig(
                "thresholds must be finite and non-negative",
            ));
        }
        if self.thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(GameError::InvalidConfig(
                "thresholds must be strictly ascending",
            ));
        }
        Ok(())
    }
}
