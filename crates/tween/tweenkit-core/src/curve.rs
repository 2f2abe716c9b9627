//! Curve abstraction used to reshape interpolation progress.
//!
//! - [`Linear`]: identity
//! - [`EasingSpec`]: closed-form easing families
//! - [`CubicBezier`]: CSS-style timing curve (x inverted by bisection)
//! - [`FnCurve`]: any `Fn(f32) -> f32`

use serde::{Deserialize, Serialize};

use crate::easing::EasingSpec;
use crate::error::{Result, TweenError};

/// Maps normalized progress to shaped progress.
pub trait Curve {
    fn evaluate(&self, x: f32) -> f32;
}

/// Identity curve. Behaves exactly like having no curve.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Linear;

impl Curve for Linear {
    #[inline]
    fn evaluate(&self, x: f32) -> f32 {
        x
    }
}

impl Curve for EasingSpec {
    #[inline]
    fn evaluate(&self, x: f32) -> f32 {
        EasingSpec::evaluate(self, x)
    }
}

impl<C: Curve + ?Sized> Curve for &C {
    #[inline]
    fn evaluate(&self, x: f32) -> f32 {
        (**self).evaluate(x)
    }
}

impl<C: Curve + ?Sized> Curve for Box<C> {
    #[inline]
    fn evaluate(&self, x: f32) -> f32 {
        (**self).evaluate(x)
    }
}

/// Wraps a closure as a curve.
#[derive(Copy, Clone, Debug)]
pub struct FnCurve<F>(pub F);

impl<F: Fn(f32) -> f32> Curve for FnCurve<F> {
    #[inline]
    fn evaluate(&self, x: f32) -> f32 {
        (self.0)(x)
    }
}

/// Cubic Bezier timing curve through (0,0), (x1,y1), (x2,y2), (1,1).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f32; 4]", into = "[f32; 4]")]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    pub const EASE: CubicBezier = CubicBezier::from_raw(0.25, 0.1, 0.25, 1.0);
    pub const EASE_IN: CubicBezier = CubicBezier::from_raw(0.42, 0.0, 1.0, 1.0);
    pub const EASE_OUT: CubicBezier = CubicBezier::from_raw(0.0, 0.0, 0.58, 1.0);
    pub const EASE_IN_OUT: CubicBezier = CubicBezier::from_raw(0.42, 0.0, 0.58, 1.0);

    const fn from_raw(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Control x-coordinates must lie in [0, 1] so x(t) stays monotonic.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Result<Self> {
        let in_unit = |v: f32| (0.0..=1.0).contains(&v);
        if !in_unit(x1) || !in_unit(x2) || !y1.is_finite() || !y2.is_finite() {
            return Err(TweenError::InvalidBezier { x1, x2 });
        }
        Ok(Self::from_raw(x1, y1, x2, y2))
    }

    pub fn control_points(&self) -> [f32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }
}

impl TryFrom<[f32; 4]> for CubicBezier {
    type Error = TweenError;

    fn try_from(ctrl: [f32; 4]) -> Result<Self> {
        CubicBezier::new(ctrl[0], ctrl[1], ctrl[2], ctrl[3])
    }
}

impl From<CubicBezier> for [f32; 4] {
    fn from(curve: CubicBezier) -> Self {
        curve.control_points()
    }
}

/// Cubic Bezier basis with fixed endpoints p0 = 0, p3 = 1.
#[inline]
fn cubic_bezier(p1: f32, p2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

impl Curve for CubicBezier {
    fn evaluate(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        // Bezier(0,0,1,1) is exactly linear
        if self.x1 == 0.0 && self.y1 == 0.0 && self.x2 == 1.0 && self.y2 == 1.0 {
            return x;
        }
        let mut lo = 0.0f32;
        let mut hi = 1.0f32;
        let mut mid = x;
        for _ in 0..24 {
            let bx = cubic_bezier(self.x1, self.x2, mid);
            if (bx - x).abs() < 1e-6 {
                break;
            }
            if bx < x {
                lo = mid;
            } else {
                hi = mid;
            }
            mid = 0.5 * (lo + hi);
        }
        cubic_bezier(self.y1, self.y2, mid)
    }
}
