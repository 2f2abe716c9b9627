use bevy::prelude::*;
use tweenkit_core::TweenConfig;

/// Clock the tween systems read, in seconds.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct TweenTime(pub f32);

/// Adapter settings.
#[derive(Resource, Debug, Clone)]
pub struct TweenSettings {
    pub config: TweenConfig,
    /// Copy `Time::elapsed_seconds` into [`TweenTime`] each frame. Disable
    /// to drive `TweenTime` manually (fixed-step hosts, tests).
    pub follow_bevy_time: bool,
}

impl Default for TweenSettings {
    fn default() -> Self {
        Self {
            config: TweenConfig::default(),
            follow_bevy_time: true,
        }
    }
}
