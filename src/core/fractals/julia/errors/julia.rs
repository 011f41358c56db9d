use crate::core::data::classification_field::ClassificationFieldError;
use crate::core::data::complex_rect::ComplexRectError;
use crate::core::data::grid_shape::GridShapeError;
use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum JuliaError {
    ZeroMaxIterationsError,
    NonPositiveStep { dx: f64 },
    NonFiniteParameter { name: &'static str },
    Window(ComplexRectError),
    Grid(GridShapeError),
    Field(ClassificationFieldError),
}

impl fmt::Display for JuliaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::NonPositiveStep { dx } => {
                write!(f, "Step size must be a positive finite number, got {}", dx)
            }
            Self::NonFiniteParameter { name } => {
                write!(f, "Parameter {} must be finite", name)
            }
            Self::Window(e) => write!(f, "Invalid window: {}", e),
            Self::Grid(e) => write!(f, "Invalid grid: {}", e),
            Self::Field(e) => write!(f, "Invalid classification field: {}", e),
        }
    }
}

impl Error for JuliaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Window(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Field(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ComplexRectError> for JuliaError {
    fn from(e: ComplexRectError) -> Self {
        Self::Window(e)
    }
}

impl From<GridShapeError> for JuliaError {
    fn from(e: GridShapeError) -> Self {
        Self::Grid(e)
    }
}

impl From<ClassificationFieldError> for JuliaError {
    fn from(e: ClassificationFieldError) -> Self {
        Self::Field(e)
    }
}
