//! Bevy adapter for tweenkit: Bevy's `Update` schedule is the per-frame
//! scheduler that resumes runs, and components hold the values they write.

use bevy::prelude::*;

pub mod components;
pub mod resources;
pub mod systems;

pub use components::{Tween, TweenBundle, TweenFinished, TweenValue};
pub use resources::{TweenSettings, TweenTime};

/// Sent once per tween when it reaches its target.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct TweenCompleted {
    pub entity: Entity,
    pub value: f32,
}

#[derive(Default)]
pub struct TweenPlugin {
    pub settings: TweenSettings,
}

impl TweenPlugin {
    /// Plugin whose clock is driven by writing [`TweenTime`] directly.
    pub fn manual_time() -> Self {
        Self {
            settings: TweenSettings {
                follow_bevy_time: false,
                ..TweenSettings::default()
            },
        }
    }
}

impl Plugin for TweenPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.settings.clone())
            .init_resource::<TweenTime>()
            .add_event::<TweenCompleted>()
            .add_systems(
                Update,
                (
                    systems::sync_tween_time_system,
                    systems::advance_tweens_system,
                )
                    .chain(),
            );
    }
}
