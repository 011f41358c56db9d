mod controllers;
mod core;
mod presenters;

pub use crate::controllers::cli::julia_cli::CliController;
pub use crate::controllers::ports::field_presenter::FieldPresenterPort;
pub use crate::core::actions::compute_field::compute_field::{compute_field, compute_field_with};
pub use crate::core::actions::compute_field::compute_field_parallel_rayon::compute_field_parallel_rayon;
pub use crate::core::actions::compute_field::execution_kind::ExecutionKind;
pub use crate::core::data::classification_field::{
    BOUNDED_VALUE, Classification, ClassificationField, ClassificationFieldError,
};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::grid_shape::{GridShape, GridShapeError};
pub use crate::core::data::point_state::{EscapeTime, PointState};
pub use crate::core::fractals::julia::errors::julia::JuliaError;
pub use crate::core::fractals::julia::escape_radius::escape_radius;
pub use crate::core::fractals::julia::field::EscapeTimeField;
pub use crate::core::fractals::julia::julia_config::JuliaConfig;
pub use crate::core::fractals::julia::params::JuliaParams;
pub use crate::presenters::file::tsv::TsvFilePresenter;
