use crate::core::{
    actions::compute_field::execution_kind::ExecutionKind,
    data::complex::Complex,
    fractals::julia::{errors::julia::JuliaError, params::JuliaParams},
};

const DEFAULT_MAX_ITERATIONS: u32 = 256;
const DEFAULT_STEP: f64 = 0.01;

pub(crate) const fn default_c() -> Complex {
    Complex::new(-0.7, 0.27)
}

pub(crate) const fn default_corners() -> (Complex, Complex) {
    (Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0))
}

/// Unvalidated settings for a run, as collected from the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaConfig {
    pub c: Complex,
    pub z0: Complex,
    pub z1: Complex,
    pub dx: f64,
    pub max_iterations: u32,
    pub execution: ExecutionKind,
}

impl Default for JuliaConfig {
    fn default() -> Self {
        let (z0, z1) = default_corners();

        Self {
            c: default_c(),
            z0,
            z1,
            dx: DEFAULT_STEP,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            execution: ExecutionKind::default(),
        }
    }
}

impl JuliaConfig {
    pub fn build_params(&self) -> Result<JuliaParams, JuliaError> {
        JuliaParams::new(self.c, self.z0, self.z1, self.dx, self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builds_valid_params() {
        let params = JuliaConfig::default().build_params().unwrap();

        assert_eq!(params.c(), default_c());
        assert_eq!(params.max_iterations(), DEFAULT_MAX_ITERATIONS);
        assert_eq!(params.shape().rows(), params.shape().cols());
        assert!(!params.shape().is_empty());
    }

    #[test]
    fn test_build_params_reports_invalid_step() {
        let config = JuliaConfig {
            dx: 0.0,
            ..JuliaConfig::default()
        };

        assert_eq!(
            config.build_params(),
            Err(JuliaError::NonPositiveStep { dx: 0.0 })
        );
    }
}
