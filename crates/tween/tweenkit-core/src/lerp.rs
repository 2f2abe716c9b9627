//! Linear interpolation for the value kinds a run can drive.

/// A value that can be blended linearly and measured against another.
///
/// `distance` scales the normalized duration of a run, so it must be a
/// non-negative metric (Euclidean for vectors).
pub trait Lerp: Copy {
    fn lerp(self, other: Self, t: f32) -> Self;
    fn distance(self, other: Self) -> f32;
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

impl Lerp for f32 {
    #[inline]
    fn lerp(self, other: Self, t: f32) -> Self {
        lerp_f32(self, other, t)
    }

    #[inline]
    fn distance(self, other: Self) -> f32 {
        (other - self).abs()
    }
}

impl<const N: usize> Lerp for [f32; N] {
    #[inline]
    fn lerp(self, other: Self, t: f32) -> Self {
        let mut out = self;
        for (o, b) in out.iter_mut().zip(other) {
            *o = lerp_f32(*o, b, t);
        }
        out
    }

    #[inline]
    fn distance(self, other: Self) -> f32 {
        self.iter()
            .zip(other.iter())
            .map(|(a, b)| (b - a) * (b - a))
            .sum::<f32>()
            .sqrt()
    }
}
