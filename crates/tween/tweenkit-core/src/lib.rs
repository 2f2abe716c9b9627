//! tweenkit core (engine-agnostic)
//!
//! Closed-form easing curves plus a tick-driven interpolator. Hosts own the
//! frame loop: they start runs, call `tick(now)` once per frame and receive
//! values through each run's sink. Adapters (Bevy) live in their own crates.

pub mod clock;
pub mod config;
pub mod curve;
pub mod easing;
pub mod error;
pub mod events;
pub mod ids;
pub mod interpolator;
pub mod lerp;
pub mod runner;

// Re-exports for consumers (adapters)
pub use clock::{Clock, InstantClock, ManualClock};
pub use config::TweenConfig;
pub use curve::{CubicBezier, Curve, FnCurve, Linear};
pub use easing::{ease, EasingDirection, EasingFamily, EasingSpec};
pub use error::{Result, TweenError};
pub use events::TweenEvent;
pub use ids::RunId;
pub use interpolator::{
    interpolate, Advance, InterpolationRequest, InterpolationRun, LatestValue, RunState, Sink,
    Ticks,
};
pub use lerp::{lerp_f32, Lerp};
pub use runner::TweenRunner;
