//! Time sources for runs. Times are seconds as `f32`, measured from an
//! arbitrary origin; only differences matter.

use std::cell::Cell;
use std::rc::Rc;

pub trait Clock {
    fn now(&self) -> f32;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> f32 {
        (**self).now()
    }
}

/// Monotonic wall clock. Uses `instant` so it also works on wasm32.
#[derive(Copy, Clone, Debug)]
pub struct InstantClock {
    origin: instant::Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        Self {
            origin: instant::Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for InstantClock {
    #[inline]
    fn now(&self) -> f32 {
        self.origin.elapsed().as_secs_f32()
    }
}

/// Manually advanced clock. Clones share the same time, so a host can keep
/// one handle while a run reads another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    time: Rc<Cell<f32>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(seconds: f32) -> Self {
        Self {
            time: Rc::new(Cell::new(seconds)),
        }
    }

    #[inline]
    pub fn set(&self, seconds: f32) {
        self.time.set(seconds);
    }

    #[inline]
    pub fn advance(&self, dt: f32) {
        self.time.set(self.time.get() + dt);
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> f32 {
        self.time.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let host = ManualClock::starting_at(2.0);
        let reader = host.clone();
        host.advance(0.5);
        assert_eq!(reader.now(), 2.5);
        host.set(0.0);
        assert_eq!(reader.now(), 0.0);
    }

    #[test]
    fn instant_clock_is_monotonic() {
        let clock = InstantClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
        assert!(a >= 0.0);
    }
}
