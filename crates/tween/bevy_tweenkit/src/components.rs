use bevy::prelude::*;
use tweenkit_core::{EasingSpec, InterpolationRequest, InterpolationRun, LatestValue};

pub(crate) type ScalarRun = InterpolationRun<f32, EasingSpec, LatestValue<f32>>;

/// Scalar interpolation attached to an entity. The request is started on
/// the first frame the tween is seen and ticked on every frame after that;
/// each tick writes into the entity's [`TweenValue`].
#[derive(Component, Debug)]
pub struct Tween {
    pub(crate) request: Option<InterpolationRequest<f32, EasingSpec>>,
    pub(crate) run: Option<ScalarRun>,
}

impl Tween {
    pub fn new(request: InterpolationRequest<f32, EasingSpec>) -> Self {
        Self {
            request: Some(request),
            run: None,
        }
    }

    /// Elapsed fraction, or `None` until the tween has started.
    pub fn progress(&self) -> Option<f32> {
        self.run.as_ref().map(|run| run.elapsed_fraction())
    }
}

/// The value a tween writes to. Only the tween system should write it while
/// a [`Tween`] is present on the entity.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct TweenValue(pub f32);

/// Marker inserted when a tween reaches its target and is removed.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct TweenFinished;

#[derive(Bundle)]
pub struct TweenBundle {
    pub tween: Tween,
    pub value: TweenValue,
}

impl TweenBundle {
    /// The value starts at the request's initial value.
    pub fn new(request: InterpolationRequest<f32, EasingSpec>) -> Self {
        Self {
            value: TweenValue(request.initial_value),
            tween: Tween::new(request),
        }
    }
}
