use bevy::prelude::*;
use tracing::debug;
use tweenkit_core::{InterpolationRun, LatestValue};

use crate::components::{Tween, TweenFinished, TweenValue};
use crate::resources::{TweenSettings, TweenTime};
use crate::TweenCompleted;

/// Mirrors Bevy's elapsed time into TweenTime when enabled.
pub fn sync_tween_time_system(
    settings: Res<TweenSettings>,
    time: Option<Res<Time>>,
    mut now: ResMut<TweenTime>,
) {
    if !settings.follow_bevy_time {
        return;
    }
    if let Some(time) = time {
        now.0 = time.elapsed_seconds();
    }
}

/// Starts pending tweens and ticks running ones once per frame. Completed
/// tweens are removed, marked with TweenFinished and reported as events.
pub fn advance_tweens_system(
    mut commands: Commands,
    now: Res<TweenTime>,
    settings: Res<TweenSettings>,
    mut tweens: Query<(Entity, &mut Tween, &mut TweenValue)>,
    mut completed: EventWriter<TweenCompleted>,
) {
    for (entity, mut tween, mut value) in tweens.iter_mut() {
        let tween = &mut *tween;
        if let Some(run) = tween.run.as_mut() {
            run.tick(now.0);
        } else {
            let Some(request) = tween.request.take() else {
                continue;
            };
            // First frame only starts the run; ticking resumes next frame.
            tween.run = Some(InterpolationRun::start_with_config(
                request,
                LatestValue::default(),
                now.0,
                &settings.config,
            ));
        }

        let Some(run) = tween.run.as_mut() else {
            continue;
        };
        if let Some(v) = run.sink_mut().take() {
            value.0 = v;
        }
        if run.is_complete() {
            debug!(?entity, target = value.0, "tween finished");
            commands
                .entity(entity)
                .remove::<Tween>()
                .insert(TweenFinished);
            completed.send(TweenCompleted {
                entity,
                value: value.0,
            });
        }
    }
}
