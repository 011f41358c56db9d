use crate::core::actions::compute_field::execution_kind::ExecutionKind;
use crate::core::data::classification_field::ClassificationField;
use crate::core::fractals::julia::errors::julia::JuliaError;
use crate::core::fractals::julia::field::EscapeTimeField;
use crate::core::fractals::julia::params::JuliaParams;

/// Classifies every grid point on the calling thread, one round at a time.
pub fn compute_field(params: &JuliaParams) -> Result<ClassificationField, JuliaError> {
    compute_field_with(params, ExecutionKind::Serial)
}

pub fn compute_field_with(
    params: &JuliaParams,
    execution: ExecutionKind,
) -> Result<ClassificationField, JuliaError> {
    let mut field = EscapeTimeField::new(params)?;
    field.run(execution);
    field.into_classification()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::classification_field::Classification;
    use crate::core::data::complex::Complex;
    use crate::core::data::point_state::EscapeTime;

    fn origin_params(max_iterations: u32) -> JuliaParams {
        JuliaParams::new(
            Complex::new(0.0, 0.0),
            Complex::new(-2.0, -2.0),
            Complex::new(2.0, 2.0),
            1.0,
            max_iterations,
        )
        .unwrap()
    }

    #[test]
    fn test_origin_scenario() {
        let field = compute_field(&origin_params(10)).unwrap();

        assert_eq!(field.shape().rows(), 4);
        assert_eq!(field.shape().cols(), 4);
        assert_eq!(
            field.get(0, 0),
            Some(Classification::Escaped(EscapeTime::Seed))
        );
        assert_eq!(field.value(0, 0), Some(0.0));
        // (0, 0) is a fixed point of z²
        assert_eq!(field.get(2, 2), Some(Classification::Bounded));
        assert_eq!(field.value(2, 2), Some(1.0));
    }

    #[test]
    fn test_origin_scenario_unit_circle_is_bounded() {
        // with c = 0 and r = 1, exactly the samples with |z| <= 1 stay bounded
        let field = compute_field(&origin_params(10)).unwrap();

        let bounded: Vec<(usize, usize)> = (0..4)
            .flat_map(|row| (0..4).map(move |col| (row, col)))
            .filter(|&(row, col)| field.get(row, col) == Some(Classification::Bounded))
            .collect();

        // (0, -1), (-1, 0), (0, 0), (1, 0), (0, 1)
        assert_eq!(bounded, vec![(1, 2), (2, 1), (2, 2), (2, 3), (3, 2)]);
    }

    #[test]
    fn test_swapped_corners_give_identical_fields() {
        let c = Complex::new(-0.7, 0.27);
        let a = Complex::new(-1.5, 1.0);
        let b = Complex::new(1.5, -1.0);

        let forward = compute_field(&JuliaParams::new(c, a, b, 0.05, 50).unwrap()).unwrap();
        let backward = compute_field(&JuliaParams::new(c, b, a, 0.05, 50).unwrap()).unwrap();

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let params = JuliaParams::new(
            Complex::new(-0.8, 0.156),
            Complex::new(-1.6, -0.9),
            Complex::new(1.6, 0.9),
            0.04,
            100,
        )
        .unwrap();

        assert_eq!(
            compute_field(&params).unwrap(),
            compute_field(&params).unwrap()
        );
    }

    #[test]
    fn test_escape_values_are_below_one() {
        let params = JuliaParams::new(
            Complex::new(0.285, 0.01),
            Complex::new(-1.5, -1.5),
            Complex::new(1.5, 1.5),
            0.1,
            40,
        )
        .unwrap();
        let field = compute_field(&params).unwrap();

        for cell in field.cells() {
            let value = cell.value(field.max_iterations());
            match cell {
                Classification::Bounded => assert_eq!(value, 1.0),
                Classification::Escaped(_) => assert!((0.0..1.0).contains(&value)),
            }
        }
    }

    #[test]
    fn test_every_execution_kind_agrees() {
        let params = JuliaParams::new(
            Complex::new(-0.4, 0.6),
            Complex::new(-1.2, -1.2),
            Complex::new(1.2, 1.2),
            0.05,
            80,
        )
        .unwrap();

        let serial = compute_field(&params).unwrap();

        for execution in ExecutionKind::ALL {
            assert_eq!(compute_field_with(&params, *execution).unwrap(), serial);
        }
    }
}
