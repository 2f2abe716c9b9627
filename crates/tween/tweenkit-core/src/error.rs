//! Error types for easing and interpolation.

use serde::{Deserialize, Serialize};

use crate::easing::{EasingDirection, EasingFamily};

/// Errors surfaced by curve construction and configuration.
///
/// Degenerate interpolation inputs (zero duration, equal endpoints) are not
/// errors; they complete immediately.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TweenError {
    /// The family has no formula for the requested direction.
    #[error("Unsupported easing combination: {family:?} {direction:?}")]
    UnsupportedEasingCombination {
        family: EasingFamily,
        direction: EasingDirection,
    },

    /// Easing name could not be parsed.
    #[error("Unknown easing: {name}")]
    UnknownEasing { name: String },

    /// Bezier control x-coordinates must stay inside [0, 1].
    #[error("Invalid cubic bezier control points: x1={x1}, x2={x2}")]
    InvalidBezier { x1: f32, x2: f32 },

    /// Configuration failed validation.
    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    /// Serialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl TweenError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnsupportedEasingCombination { .. }
            | Self::UnknownEasing { .. }
            | Self::InvalidBezier { .. } => "curve",
            Self::InvalidConfig { .. } => "config",
            Self::Serialization { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for TweenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TweenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let curve_error = TweenError::UnsupportedEasingCombination {
            family: EasingFamily::Bounce,
            direction: EasingDirection::In,
        };
        assert_eq!(curve_error.category(), "curve");

        let config_error = TweenError::InvalidConfig {
            reason: "negative epsilon".to_string(),
        };
        assert_eq!(config_error.category(), "config");
    }

    #[test]
    fn test_error_display_names_combination() {
        let error = TweenError::UnsupportedEasingCombination {
            family: EasingFamily::Elastic,
            direction: EasingDirection::InOut,
        };
        assert_eq!(
            error.to_string(),
            "Unsupported easing combination: Elastic InOut"
        );
    }

    #[test]
    fn test_serialization() {
        let error = TweenError::UnknownEasing {
            name: "quintic".to_string(),
        };
        let serialized = serde_json::to_string(&error).unwrap();
        let deserialized: TweenError = serde_json::from_str(&serialized).unwrap();
        assert_eq!(error, deserialized);
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let error: TweenError = err.into();
        assert_eq!(error.category(), "serialization");
    }
}
