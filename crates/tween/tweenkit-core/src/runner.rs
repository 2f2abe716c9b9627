//! Runner: owns many runs and advances them from a host tick.
//!
//! Methods:
//! - spawn / spawn_eased (start a run now), cancel, tick (advance all runs)
//!
//! Runs advance independently in spawn order; each run's callbacks are
//! ordered by tick. The lifetime parameter lets sinks borrow host state.

use tracing::{debug, warn};

use crate::config::TweenConfig;
use crate::curve::Curve;
use crate::easing::EasingSpec;
use crate::error::Result;
use crate::events::TweenEvent;
use crate::ids::{IdAllocator, RunId};
use crate::interpolator::{Advance, InterpolationRequest, InterpolationRun, RunState, Sink};
use crate::lerp::Lerp;

pub struct TweenRunner<'a> {
    cfg: TweenConfig,
    ids: IdAllocator,
    runs: Vec<(RunId, Box<dyn Advance + 'a>)>,
    // Events raised between ticks (spawn/cancel), flushed by the next tick.
    pending: Vec<TweenEvent>,
    // Events returned by the last tick.
    frame: Vec<TweenEvent>,
}

impl<'a> TweenRunner<'a> {
    pub fn new(cfg: TweenConfig) -> Self {
        Self {
            runs: Vec::with_capacity(cfg.runner_capacity),
            cfg,
            ids: IdAllocator::new(),
            pending: Vec::new(),
            frame: Vec::new(),
        }
    }

    pub fn config(&self) -> &TweenConfig {
        &self.cfg
    }

    /// Start a run at `now`. Returns `None` when the request is degenerate:
    /// the sink has already received the target and nothing is scheduled.
    pub fn spawn<T, C, S>(
        &mut self,
        request: InterpolationRequest<T, C>,
        sink: S,
        now: f32,
    ) -> Option<RunId>
    where
        T: Lerp + std::fmt::Debug + 'a,
        C: Curve + 'a,
        S: Sink<T> + 'a,
    {
        let run = InterpolationRun::start_with_config(request, sink, now, &self.cfg);
        if run.is_complete() {
            return None;
        }
        let id = self.ids.alloc_run();
        self.pending.push(TweenEvent::Spawned {
            run: id,
            duration: run.duration(),
        });
        self.runs.push((id, Box::new(run)));
        Some(id)
    }

    /// Like [`spawn`](Self::spawn) with the curve given by name
    /// (e.g. `"sine-in-out"`). Fails before anything runs if the name does
    /// not resolve to a supported easing.
    pub fn spawn_eased<T, S>(
        &mut self,
        request: InterpolationRequest<T>,
        easing: &str,
        sink: S,
        now: f32,
    ) -> Result<Option<RunId>>
    where
        T: Lerp + std::fmt::Debug + 'a,
        S: Sink<T> + 'a,
    {
        let curve: EasingSpec = easing.parse()?;
        Ok(self.spawn(request.with_curve(curve), sink, now))
    }

    /// Stop a run between ticks. Its sink receives nothing further.
    pub fn cancel(&mut self, id: RunId) -> bool {
        match self.runs.iter().position(|(rid, _)| *rid == id) {
            Some(idx) => {
                self.runs.remove(idx);
                self.pending.push(TweenEvent::Cancelled { run: id });
                debug!(run = id.0, "run cancelled");
                true
            }
            None => {
                warn!(run = id.0, "cancel requested for unknown or finished run");
                false
            }
        }
    }

    /// Cancel every active run.
    pub fn clear(&mut self) {
        for (id, _) in self.runs.drain(..) {
            self.pending.push(TweenEvent::Cancelled { run: id });
        }
    }

    /// Advance every active run to `now` and drop the ones that completed.
    /// Returns the lifecycle events since the previous tick.
    pub fn tick(&mut self, now: f32) -> &[TweenEvent] {
        self.frame.clear();
        self.frame.append(&mut self.pending);
        let frame = &mut self.frame;
        self.runs.retain_mut(|(id, run)| match run.tick(now) {
            RunState::Running => true,
            RunState::Completed => {
                frame.push(TweenEvent::Completed {
                    run: *id,
                    ticks: run.tick_count(),
                });
                false
            }
        });
        &self.frame
    }

    pub fn contains(&self, id: RunId) -> bool {
        self.runs.iter().any(|(rid, _)| *rid == id)
    }

    /// Elapsed fraction of an active run.
    pub fn progress(&self, id: RunId) -> Option<f32> {
        self.runs
            .iter()
            .find(|(rid, _)| *rid == id)
            .map(|(_, run)| run.elapsed_fraction())
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

impl Default for TweenRunner<'_> {
    fn default() -> Self {
        Self::new(TweenConfig::default())
    }
}

impl std::fmt::Debug for TweenRunner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweenRunner")
            .field("cfg", &self.cfg)
            .field("active", &self.runs.iter().map(|(id, _)| *id).collect::<Vec<_>>())
            .finish()
    }
}
