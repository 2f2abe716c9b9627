//! Tick-driven interpolation of a value from a start to a target.
//!
//! A run is an explicit state machine: the host calls [`InterpolationRun::tick`]
//! once per frame with the current time and the run emits one value per tick
//! into its sink. When the elapsed fraction reaches 1 the run emits the exact
//! target and completes. Degenerate requests (non-positive duration or
//! endpoints closer than epsilon) emit the target once at start and never
//! tick.
//!
//! The sink is the only writer of whatever storage it updates; callers must
//! not mutate that storage elsewhere while the run is active.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::clock::Clock;
use crate::config::TweenConfig;
use crate::curve::{Curve, Linear};
use crate::lerp::Lerp;

/// Receives the values produced by a run, synchronously, inside a tick.
pub trait Sink<T> {
    fn emit(&mut self, value: T);
}

impl<T, F: FnMut(T)> Sink<T> for F {
    #[inline]
    fn emit(&mut self, value: T) {
        self(value)
    }
}

/// Sink that keeps only the most recent value until taken.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LatestValue<T>(pub Option<T>);

impl<T> LatestValue<T> {
    pub fn take(&mut self) -> Option<T> {
        self.0.take()
    }
}

impl<T> Sink<T> for LatestValue<T> {
    #[inline]
    fn emit(&mut self, value: T) {
        self.0 = Some(value);
    }
}

/// What to interpolate. `zero_to_one_duration` is normalized: the real
/// duration is `zero_to_one_duration * distance(initial, target)`, so a
/// request covering twice the distance takes twice as long.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterpolationRequest<T, C = Linear> {
    pub initial_value: T,
    pub target_value: T,
    pub zero_to_one_duration: f32,
    #[serde(default)]
    pub curve: Option<C>,
}

impl<T: Lerp> InterpolationRequest<T> {
    pub fn new(initial_value: T, target_value: T, zero_to_one_duration: f32) -> Self {
        Self {
            initial_value,
            target_value,
            zero_to_one_duration,
            curve: None,
        }
    }
}

impl<T: Lerp, C: Curve> InterpolationRequest<T, C> {
    pub fn with_curve<C2: Curve>(self, curve: C2) -> InterpolationRequest<T, C2> {
        InterpolationRequest {
            initial_value: self.initial_value,
            target_value: self.target_value,
            zero_to_one_duration: self.zero_to_one_duration,
            curve: Some(curve),
        }
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.initial_value.distance(self.target_value)
    }

    /// Wall-clock seconds the run will take, or `None` for degenerate requests.
    /// NaN durations and durations that overflow to infinity are degenerate.
    pub fn actual_duration(&self, epsilon: f32) -> Option<f32> {
        if self.zero_to_one_duration <= 0.0 {
            return None;
        }
        let distance = self.distance();
        if distance < epsilon {
            return None;
        }
        // NaN inputs propagate here
        let duration = self.zero_to_one_duration * distance;
        duration.is_finite().then_some(duration)
    }

    #[inline]
    fn shape(&self, fraction: f32) -> f32 {
        match &self.curve {
            Some(curve) => curve.evaluate(fraction),
            None => fraction,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Running,
    Completed,
}

/// Object-safe view of a run, used by hosts that keep heterogeneous runs.
pub trait Advance {
    fn tick(&mut self, now: f32) -> RunState;
    fn state(&self) -> RunState;
    fn elapsed_fraction(&self) -> f32;
    fn tick_count(&self) -> u32;

    #[inline]
    fn is_complete(&self) -> bool {
        self.state() == RunState::Completed
    }
}

/// One in-flight interpolation. Owned by whoever ticks it; dropping it
/// cancels the run without further callbacks.
#[derive(Debug)]
pub struct InterpolationRun<T, C, S> {
    request: InterpolationRequest<T, C>,
    sink: S,
    start_time: f32,
    duration: f32,
    elapsed_fraction: f32,
    ticks: u32,
    state: RunState,
}

impl<T, C, S> InterpolationRun<T, C, S>
where
    T: Lerp + std::fmt::Debug,
    C: Curve,
    S: Sink<T>,
{
    /// Start a run at `now` with the default config.
    pub fn start(request: InterpolationRequest<T, C>, sink: S, now: f32) -> Self {
        Self::start_with_config(request, sink, now, &TweenConfig::default())
    }

    /// Start a run at `now`. Degenerate requests emit the target right away
    /// and return an already completed run.
    pub fn start_with_config(
        request: InterpolationRequest<T, C>,
        mut sink: S,
        now: f32,
        cfg: &TweenConfig,
    ) -> Self {
        let (duration, state, elapsed_fraction) = match request.actual_duration(cfg.epsilon) {
            Some(duration) => {
                debug!(
                    duration,
                    target = ?request.target_value,
                    "interpolation started"
                );
                (duration, RunState::Running, 0.0)
            }
            None => {
                debug!(
                    zero_to_one_duration = request.zero_to_one_duration,
                    target = ?request.target_value,
                    "degenerate interpolation, completing immediately"
                );
                sink.emit(request.target_value);
                (0.0, RunState::Completed, 1.0)
            }
        };
        Self {
            request,
            sink,
            start_time: now,
            duration,
            elapsed_fraction,
            ticks: 0,
            state,
        }
    }

    /// Start a run reading the start time from `clock`.
    pub fn start_on<K: Clock>(request: InterpolationRequest<T, C>, sink: S, clock: &K) -> Self {
        Self::start(request, sink, clock.now())
    }

    /// Advance the run to `now`. Emits the interpolated value for this tick;
    /// on the tick that reaches the end it additionally emits the exact
    /// target and completes. Completed runs ignore further ticks.
    pub fn tick(&mut self, now: f32) -> RunState {
        if self.state == RunState::Completed {
            return RunState::Completed;
        }
        self.ticks += 1;
        self.elapsed_fraction = ((now - self.start_time) / self.duration).max(0.0);

        let shaped = self.request.shape(self.elapsed_fraction.min(1.0));
        let value = self
            .request
            .initial_value
            .lerp(self.request.target_value, shaped);
        trace!(fraction = self.elapsed_fraction, value = ?value, "interpolation tick");
        self.sink.emit(value);

        if self.elapsed_fraction >= 1.0 {
            self.sink.emit(self.request.target_value);
            self.state = RunState::Completed;
            debug!(
                ticks = self.ticks,
                target = ?self.request.target_value,
                "interpolation completed"
            );
        }
        self.state
    }

    /// Lazy per-tick view: each `next()` ticks the run at `clock.now()`.
    pub fn ticks<K: Clock>(&mut self, clock: K) -> Ticks<'_, T, C, S, K> {
        Ticks { run: self, clock }
    }

    /// Drive the run to completion with a fixed frame step, as a host
    /// rendering at `1 / dt` fps would. Returns the number of ticks taken.
    pub fn drive_fixed_step(&mut self, dt: f32) -> u32 {
        let before = self.ticks;
        if !(dt > 0.0 && dt.is_finite()) {
            self.tick(self.start_time + self.duration);
            return self.ticks - before;
        }
        let mut frame = 0u32;
        while self.state == RunState::Running {
            frame += 1;
            self.tick(self.start_time + frame as f32 * dt);
        }
        self.ticks - before
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.state == RunState::Completed
    }

    #[inline]
    pub fn elapsed_fraction(&self) -> f32 {
        self.elapsed_fraction
    }

    #[inline]
    pub fn start_time(&self) -> f32 {
        self.start_time
    }

    /// Actual duration in seconds (0 for degenerate runs).
    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    pub fn tick_count(&self) -> u32 {
        self.ticks
    }

    #[inline]
    pub fn request(&self) -> &InterpolationRequest<T, C> {
        &self.request
    }

    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<T, C, S> Advance for InterpolationRun<T, C, S>
where
    T: Lerp + std::fmt::Debug,
    C: Curve,
    S: Sink<T>,
{
    fn tick(&mut self, now: f32) -> RunState {
        InterpolationRun::tick(self, now)
    }

    fn state(&self) -> RunState {
        self.state
    }

    fn elapsed_fraction(&self) -> f32 {
        self.elapsed_fraction
    }

    fn tick_count(&self) -> u32 {
        self.ticks
    }
}

/// Iterator over the ticks of a run; yields the elapsed fraction after each
/// tick and ends once the run has completed.
pub struct Ticks<'a, T, C, S, K> {
    run: &'a mut InterpolationRun<T, C, S>,
    clock: K,
}

impl<'a, T, C, S, K> Iterator for Ticks<'a, T, C, S, K>
where
    T: Lerp + std::fmt::Debug,
    C: Curve,
    S: Sink<T>,
    K: Clock,
{
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.run.is_complete() {
            return None;
        }
        self.run.tick(self.clock.now());
        Some(self.run.elapsed_fraction())
    }
}

/// Start a run and drive it to completion against a fixed frame step.
/// Convenience for headless hosts and baking.
pub fn interpolate<T, C, S>(request: InterpolationRequest<T, C>, sink: S, dt: f32) -> S
where
    T: Lerp + std::fmt::Debug,
    C: Curve,
    S: Sink<T>,
{
    let mut run = InterpolationRun::start(request, sink, 0.0);
    run.drive_fixed_step(dt);
    run.into_sink()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::easing::EasingSpec;

    #[test]
    fn zero_duration_emits_target_once() {
        let mut seen = Vec::new();
        let run = InterpolationRun::start(
            InterpolationRequest::new(0.0f32, 10.0, 0.0),
            |v: f32| seen.push(v),
            0.0,
        );
        assert!(run.is_complete());
        assert_eq!(run.tick_count(), 0);
        drop(run);
        assert_eq!(seen, vec![10.0]);
    }

    #[test]
    fn negative_duration_is_degenerate() {
        let seen = interpolate(
            InterpolationRequest::new(3.0f32, -1.0, -2.0),
            LatestValue::<f32>::default(),
            0.1,
        );
        assert_eq!(seen, LatestValue(Some(-1.0)));
    }

    #[test]
    fn non_finite_durations_are_degenerate() {
        for zero_to_one_duration in [f32::NAN, f32::INFINITY] {
            let mut run = InterpolationRun::start(
                InterpolationRequest::new(0.0f32, 1.0, zero_to_one_duration),
                LatestValue::<f32>::default(),
                0.0,
            );
            assert!(run.is_complete(), "{zero_to_one_duration} should complete at start");
            assert_eq!(run.sink_mut().take(), Some(1.0));
            assert_eq!(run.tick(1e9), RunState::Completed);
            assert_eq!(run.sink_mut().take(), None);
        }

        // distance overflows to infinity
        let request = InterpolationRequest::new([-f32::MAX, 0.0], [f32::MAX, 0.0], 1.0);
        assert_eq!(request.actual_duration(f32::EPSILON), None);
        let seen = interpolate(request, LatestValue::<[f32; 2]>::default(), 0.1);
        assert_eq!(seen, LatestValue(Some([f32::MAX, 0.0])));
    }

    #[test]
    fn completed_run_ignores_ticks() {
        let mut count = 0;
        let mut run = InterpolationRun::start(
            InterpolationRequest::new(0.0f32, 1.0, 1.0),
            |_v: f32| count += 1,
            0.0,
        );
        assert_eq!(run.tick(2.0), RunState::Completed);
        assert_eq!(run.tick(3.0), RunState::Completed);
        assert_eq!(run.tick_count(), 1);
        drop(run);
        // one interpolated value plus the exact target
        assert_eq!(count, 2);
    }

    #[test]
    fn duration_scales_with_distance() {
        let request = InterpolationRequest::new(0.0f32, 4.0, 0.5);
        assert_eq!(request.actual_duration(f32::EPSILON), Some(2.0));
        let request = InterpolationRequest::new([0.0f32, 0.0], [3.0, 4.0], 0.2);
        assert_eq!(request.actual_duration(f32::EPSILON), Some(1.0));
    }

    #[test]
    fn time_before_start_clamps_to_initial() {
        let mut run = InterpolationRun::start(
            InterpolationRequest::new(2.0f32, 4.0, 1.0),
            LatestValue::<f32>::default(),
            5.0,
        );
        run.tick(4.0);
        assert_eq!(run.elapsed_fraction(), 0.0);
        assert_eq!(run.sink_mut().take(), Some(2.0));
    }

    #[test]
    fn ticks_iterator_tracks_clock() {
        let clock = ManualClock::new();
        let mut values = Vec::new();
        let mut run = InterpolationRun::start_on(
            InterpolationRequest::new(0.0f32, 1.0, 1.0).with_curve(EasingSpec::linear()),
            |v: f32| values.push(v),
            &clock,
        );
        let mut fractions = Vec::new();
        {
            let mut ticks = run.ticks(clock.clone());
            loop {
                clock.advance(0.25);
                match ticks.next() {
                    Some(f) => fractions.push(f),
                    None => break,
                }
            }
        }
        assert_eq!(fractions, vec![0.25, 0.5, 0.75, 1.0]);
        assert!(run.is_complete());
        drop(run);
        assert_eq!(values, vec![0.25, 0.5, 0.75, 1.0, 1.0]);
    }
}
