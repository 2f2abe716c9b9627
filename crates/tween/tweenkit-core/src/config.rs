//! Core configuration for tweenkit-core.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TweenError};

/// Tuning knobs shared by runs and the runner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TweenConfig {
    /// Endpoints closer than this complete immediately (degenerate range).
    pub epsilon: f32,

    /// Initial capacity hint for the runner's run list.
    pub runner_capacity: usize,
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            epsilon: f32::EPSILON,
            runner_capacity: 64,
        }
    }
}

impl TweenConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: TweenConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(TweenError::InvalidConfig {
                reason: format!("epsilon must be finite and >= 0, got {}", self.epsilon),
            });
        }
        Ok(())
    }
}
