//! Closed-form easing curves.
//!
//! Every curve maps normalized progress `x ∈ [0, 1]` to shaped progress.
//! Results are nominally in `[0, 1]`; Elastic and Bounce overshoot or dip
//! inside the range on purpose.
//!
//! Direction only changes the shape for Sine, Cubic and Expo. Bounce and
//! Elastic define a single shape, addressed as [`EasingDirection::Out`].

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TweenError};

const BOUNCE_N1: f32 = 7.5625;
const BOUNCE_D1: f32 = 2.75;
const ELASTIC_C4: f32 = (2.0 * PI) / 3.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingFamily {
    Linear,
    Sine,
    Cubic,
    Expo,
    Bounce,
    Elastic,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingDirection {
    In,
    Out,
    InOut,
}

impl EasingFamily {
    pub const ALL: [EasingFamily; 6] = [
        EasingFamily::Linear,
        EasingFamily::Sine,
        EasingFamily::Cubic,
        EasingFamily::Expo,
        EasingFamily::Bounce,
        EasingFamily::Elastic,
    ];

    /// Whether a formula exists for `direction`.
    #[inline]
    pub fn supports(self, direction: EasingDirection) -> bool {
        match self {
            EasingFamily::Bounce | EasingFamily::Elastic => direction == EasingDirection::Out,
            _ => true,
        }
    }

    fn name(self) -> &'static str {
        match self {
            EasingFamily::Linear => "linear",
            EasingFamily::Sine => "sine",
            EasingFamily::Cubic => "cubic",
            EasingFamily::Expo => "expo",
            EasingFamily::Bounce => "bounce",
            EasingFamily::Elastic => "elastic",
        }
    }

    /// Families whose shape ignores direction.
    fn is_single_shape(self) -> bool {
        matches!(
            self,
            EasingFamily::Linear | EasingFamily::Bounce | EasingFamily::Elastic
        )
    }
}

impl EasingDirection {
    pub const ALL: [EasingDirection; 3] = [
        EasingDirection::In,
        EasingDirection::Out,
        EasingDirection::InOut,
    ];

    fn name(self) -> &'static str {
        match self {
            EasingDirection::In => "in",
            EasingDirection::Out => "out",
            EasingDirection::InOut => "in-out",
        }
    }
}

/// Machine-epsilon comparison used for the boundary snapping.
#[inline]
pub(crate) fn approximately(a: f32, b: f32) -> bool {
    (a - b).abs() < f32::EPSILON
}

/// Evaluate the easing curve for `(family, direction)` at `x`.
///
/// Fails with [`TweenError::UnsupportedEasingCombination`] when the family
/// has no formula for `direction`.
pub fn ease(family: EasingFamily, direction: EasingDirection, x: f32) -> Result<f32> {
    if !family.supports(direction) {
        return Err(TweenError::UnsupportedEasingCombination { family, direction });
    }
    Ok(eval(family, direction, x))
}

fn eval(family: EasingFamily, direction: EasingDirection, x: f32) -> f32 {
    match family {
        EasingFamily::Linear => x,
        EasingFamily::Sine => sine(direction, x),
        EasingFamily::Cubic => cubic(direction, x),
        EasingFamily::Expo => expo(direction, x),
        EasingFamily::Bounce => bounce_out(x),
        EasingFamily::Elastic => elastic_out(x),
    }
}

#[inline]
fn sine(direction: EasingDirection, x: f32) -> f32 {
    match direction {
        EasingDirection::In => 1.0 - (x * PI / 2.0).cos(),
        EasingDirection::Out => (x * PI / 2.0).sin(),
        EasingDirection::InOut => -((PI * x).cos() - 1.0) / 2.0,
    }
}

#[inline]
fn cubic(direction: EasingDirection, x: f32) -> f32 {
    match direction {
        EasingDirection::In => x * x * x,
        EasingDirection::Out => 1.0 - (1.0 - x).powi(3),
        EasingDirection::InOut => {
            if x < 0.5 {
                4.0 * x * x * x
            } else {
                1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
            }
        }
    }
}

fn expo(direction: EasingDirection, x: f32) -> f32 {
    match direction {
        EasingDirection::In => {
            if approximately(x, 0.0) {
                0.0
            } else {
                2f32.powf(10.0 * x - 10.0)
            }
        }
        EasingDirection::Out => {
            if approximately(x, 1.0) {
                1.0
            } else {
                1.0 - 2f32.powf(-10.0 * x)
            }
        }
        EasingDirection::InOut => {
            if approximately(x, 0.0) {
                0.0
            } else if approximately(x, 1.0) {
                1.0
            } else if x < 0.5 {
                2f32.powf(20.0 * x - 10.0) / 2.0
            } else {
                (2.0 - 2f32.powf(-20.0 * x + 10.0)) / 2.0
            }
        }
    }
}

fn elastic_out(x: f32) -> f32 {
    if approximately(x, 0.0) {
        0.0
    } else if approximately(x, 1.0) {
        1.0
    } else {
        2f32.powf(-10.0 * x) * ((x * 10.0 - 0.75) * ELASTIC_C4).sin() + 1.0
    }
}

fn bounce_out(x: f32) -> f32 {
    if x < 1.0 / BOUNCE_D1 {
        BOUNCE_N1 * x * x
    } else if x < 2.0 / BOUNCE_D1 {
        let x = x - 1.5 / BOUNCE_D1;
        BOUNCE_N1 * x * x + 0.75
    } else if x < 2.5 / BOUNCE_D1 {
        let x = x - 2.25 / BOUNCE_D1;
        BOUNCE_N1 * x * x + 0.9375
    } else {
        let x = x - 2.625 / BOUNCE_D1;
        BOUNCE_N1 * x * x + 0.984375
    }
}

/// A validated `(family, direction)` pair.
///
/// Construction goes through [`EasingSpec::new`] (or deserialization, which
/// runs the same check), so evaluating a spec cannot fail. Linear ignores
/// direction and is always stored as [`EasingDirection::InOut`], so every
/// spelling of it compares equal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EasingSpecRepr", into = "EasingSpecRepr")]
pub struct EasingSpec {
    family: EasingFamily,
    direction: EasingDirection,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct EasingSpecRepr {
    family: EasingFamily,
    #[serde(default = "default_repr_direction")]
    direction: EasingDirection,
}

fn default_repr_direction() -> EasingDirection {
    EasingDirection::Out
}

impl TryFrom<EasingSpecRepr> for EasingSpec {
    type Error = TweenError;

    fn try_from(repr: EasingSpecRepr) -> Result<Self> {
        EasingSpec::new(repr.family, repr.direction)
    }
}

impl From<EasingSpec> for EasingSpecRepr {
    fn from(spec: EasingSpec) -> Self {
        Self {
            family: spec.family,
            direction: spec.direction,
        }
    }
}

impl EasingSpec {
    pub fn new(family: EasingFamily, direction: EasingDirection) -> Result<Self> {
        if !family.supports(direction) {
            return Err(TweenError::UnsupportedEasingCombination { family, direction });
        }
        let direction = match family {
            EasingFamily::Linear => EasingDirection::InOut,
            _ => direction,
        };
        Ok(Self { family, direction })
    }

    pub const fn linear() -> Self {
        Self {
            family: EasingFamily::Linear,
            direction: EasingDirection::InOut,
        }
    }

    pub const fn bounce() -> Self {
        Self {
            family: EasingFamily::Bounce,
            direction: EasingDirection::Out,
        }
    }

    pub const fn elastic() -> Self {
        Self {
            family: EasingFamily::Elastic,
            direction: EasingDirection::Out,
        }
    }

    #[inline]
    pub fn family(&self) -> EasingFamily {
        self.family
    }

    #[inline]
    pub fn direction(&self) -> EasingDirection {
        self.direction
    }

    #[inline]
    pub fn evaluate(&self, x: f32) -> f32 {
        eval(self.family, self.direction, x)
    }

    /// Every distinct curve, in family order. Linear appears once.
    pub fn all() -> impl Iterator<Item = EasingSpec> {
        EasingFamily::ALL.into_iter().flat_map(|family| {
            EasingDirection::ALL
                .into_iter()
                .filter(move |d| family != EasingFamily::Linear || *d == EasingDirection::InOut)
                .filter_map(move |direction| EasingSpec::new(family, direction).ok())
        })
    }
}

impl Default for EasingSpec {
    fn default() -> Self {
        Self::linear()
    }
}

impl fmt::Display for EasingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.family.is_single_shape() {
            f.write_str(self.family.name())
        } else {
            write!(f, "{}-{}", self.family.name(), self.direction.name())
        }
    }
}

/// Parses names like `"linear"`, `"bounce"`, `"cubic-in-out"` or
/// `"expo_out"`. Case-insensitive; `_` and `-` are interchangeable.
impl FromStr for EasingSpec {
    type Err = TweenError;

    fn from_str(s: &str) -> Result<Self> {
        let unknown = || TweenError::UnknownEasing {
            name: s.to_string(),
        };
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let (family_name, direction_name) = match normalized.split_once('-') {
            Some((family, rest)) => (family, Some(rest)),
            None => (normalized.as_str(), None),
        };
        let family = EasingFamily::ALL
            .into_iter()
            .find(|f| f.name() == family_name)
            .ok_or_else(unknown)?;
        let direction = match direction_name {
            Some(name) => EasingDirection::ALL
                .into_iter()
                .find(|d| d.name() == name)
                .ok_or_else(unknown)?,
            None if family.is_single_shape() => EasingDirection::Out,
            None => return Err(unknown()),
        };
        EasingSpec::new(family, direction)
    }
}
