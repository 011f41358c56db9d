use crate::core::actions::compute_field::compute_field::compute_field_with;
use crate::core::actions::compute_field::execution_kind::ExecutionKind;
use crate::core::data::classification_field::ClassificationField;
use crate::core::fractals::julia::errors::julia::JuliaError;
use crate::core::fractals::julia::params::JuliaParams;

/// Classifies every grid point using rayon's work-stealing scheduler.
///
/// Rows are independent, so each worker takes whole rows and carries them
/// through the full iteration budget. The result matches [`compute_field`]
/// exactly.
///
/// [`compute_field`]: crate::core::actions::compute_field::compute_field::compute_field
pub fn compute_field_parallel_rayon(
    params: &JuliaParams,
) -> Result<ClassificationField, JuliaError> {
    compute_field_with(params, ExecutionKind::Rayon)
}
