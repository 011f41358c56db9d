use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    NonFiniteCorner { corner: Complex },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteCorner { corner } => {
                write!(f, "complex rect corner must be finite: {}", corner)
            }
        }
    }
}

impl Error for ComplexRectError {}

/// A window of the complex plane, stored as its lower-left and upper-right
/// corners. Zero width or height is allowed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    lower_left: Complex,
    upper_right: Complex,
}

impl ComplexRect {
    /// Builds a window from two opposite corners given in any order.
    pub fn from_corners(z0: Complex, z1: Complex) -> Result<Self, ComplexRectError> {
        for corner in [z0, z1] {
            if !corner.is_finite() {
                return Err(ComplexRectError::NonFiniteCorner { corner });
            }
        }

        Ok(Self {
            lower_left: Complex::new(z0.real.min(z1.real), z0.imag.min(z1.imag)),
            upper_right: Complex::new(z0.real.max(z1.real), z0.imag.max(z1.imag)),
        })
    }

    #[must_use]
    pub fn lower_left(&self) -> Complex {
        self.lower_left
    }

    #[must_use]
    pub fn upper_right(&self) -> Complex {
        self.upper_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper_right.real - self.lower_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.upper_right.imag - self.lower_left.imag
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }
}
