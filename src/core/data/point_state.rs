use crate::core::data::complex::Complex;

/// When a point left the escape radius.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EscapeTime {
    /// The sample itself was already outside the radius.
    Seed,
    /// `f` pushed the point outside the radius during round `k`.
    Round(u32),
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointState {
    Alive(Complex),
    Escaped(EscapeTime),
}

/// True when `z` lies outside the disc of the given radius. A non-finite
/// magnitude counts as outside.
#[inline]
#[must_use]
pub fn escapes(z: Complex, radius: f64) -> bool {
    let magnitude = z.magnitude();
    !magnitude.is_finite() || magnitude > radius
}

impl PointState {
    #[must_use]
    pub fn seed(z: Complex, radius: f64) -> Self {
        if escapes(z, radius) {
            Self::Escaped(EscapeTime::Seed)
        } else {
            Self::Alive(z)
        }
    }

    /// Applies `z² + c` once. Escaped points are left untouched. Returns
    /// true only if the point escaped during this call.
    #[inline]
    pub fn advance(&mut self, c: Complex, radius: f64, round: u32) -> bool {
        let Self::Alive(z) = *self else {
            return false;
        };

        let next = z * z + c;

        if escapes(next, radius) {
            *self = Self::Escaped(EscapeTime::Round(round));
            true
        } else {
            *self = Self::Alive(next);
            false
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        matches!(self, Self::Alive(_))
    }
}
