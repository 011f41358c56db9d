use crate::core::data::grid_shape::GridShape;
use crate::core::data::point_state::{EscapeTime, PointState};
use std::error::Error;
use std::fmt;

/// Output value for points that never escaped.
pub const BOUNDED_VALUE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationFieldError {
    BoundsMismatch { shape_size: usize, cells_size: usize },
}

impl fmt::Display for ClassificationFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                shape_size,
                cells_size,
            } => {
                write!(
                    f,
                    "grid shape size {} does not match cell count {}",
                    shape_size, cells_size
                )
            }
        }
    }
}

impl Error for ClassificationFieldError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Classification {
    Bounded,
    Escaped(EscapeTime),
}

impl Classification {
    /// `1` for bounded points, `k / max_iterations` for escapes. Seed-time
    /// escapes share the value `0` with round-zero escapes.
    #[must_use]
    pub fn value(&self, max_iterations: u32) -> f64 {
        match self {
            Self::Bounded => BOUNDED_VALUE,
            Self::Escaped(EscapeTime::Seed) => 0.0,
            Self::Escaped(EscapeTime::Round(k)) => f64::from(*k) / f64::from(max_iterations),
        }
    }
}

impl From<PointState> for Classification {
    fn from(state: PointState) -> Self {
        match state {
            PointState::Alive(_) => Self::Bounded,
            PointState::Escaped(time) => Self::Escaped(time),
        }
    }
}

/// The finished per-point result of an escape-time run, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationField {
    shape: GridShape,
    max_iterations: u32,
    cells: Vec<Classification>,
}

impl ClassificationField {
    pub fn from_cells(
        shape: GridShape,
        max_iterations: u32,
        cells: Vec<Classification>,
    ) -> Result<Self, ClassificationFieldError> {
        if shape.len() != cells.len() {
            return Err(ClassificationFieldError::BoundsMismatch {
                shape_size: shape.len(),
                cells_size: cells.len(),
            });
        }

        Ok(Self {
            shape,
            max_iterations,
            cells,
        })
    }

    #[must_use]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn cells(&self) -> &[Classification] {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Classification> {
        self.shape.index(row, col).map(|index| self.cells[index])
    }

    #[must_use]
    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        self.get(row, col)
            .map(|classification| classification.value(self.max_iterations))
    }

    /// Rows of cells, top to bottom in construction order.
    pub fn rows(&self) -> impl Iterator<Item = &[Classification]> {
        // chunks() rejects a zero chunk size, and a zero-column field has no cells anyway
        self.cells.chunks(self.shape.cols().max(1))
    }

    #[must_use]
    pub fn bounded_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Classification::Bounded)
            .count()
    }
}
