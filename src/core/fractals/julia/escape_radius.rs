use crate::core::data::complex::Complex;

/// Radius beyond which every orbit of `z² + c` diverges:
/// `r = (1 + sqrt(1 + 4|c|)) / 2`, the positive root of `r² - r = |c|`,
/// evaluated as `1/2 + sqrt(1/4 + |c|)` so it stays finite for any finite `c`.
#[must_use]
pub fn escape_radius(c: Complex) -> f64 {
    0.5 + (0.25 + c.magnitude()).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_for_zero_is_one() {
        assert_eq!(escape_radius(Complex::new(0.0, 0.0)), 1.0);
    }

    #[test]
    fn test_radius_for_magnitude_two() {
        // |c| = 2 -> (1 + sqrt(9)) / 2 = 2
        assert_eq!(escape_radius(Complex::new(0.0, -2.0)), 2.0);
    }

    #[test]
    fn test_radius_for_large_parameter_is_finite() {
        // |c| = 4e154 -> r ~= 2e77, while 4|c| squared would overflow
        let r = escape_radius(Complex::new(4e154, 0.0));

        assert!(r.is_finite());
        assert!((r / 2e77 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_radius_satisfies_defining_equation() {
        let c = Complex::new(-0.7, 0.27);
        let r = escape_radius(c);

        assert!((r * r - r - c.magnitude()).abs() < 1e-12);
        assert!(r > 1.0);
    }
}
