use crate::core::data::complex_rect::ComplexRect;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridShapeError {
    TooLarge { rows: usize, cols: usize },
}

impl fmt::Display for GridShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLarge { rows, cols } => {
                write!(f, "grid of {}x{} points does not fit in memory", rows, cols)
            }
        }
    }
}

impl Error for GridShapeError {}

/// Rows and columns of sample points laid over a window, stored row-major.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridShape {
    rows: usize,
    cols: usize,
}

impl GridShape {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridShapeError> {
        if rows.checked_mul(cols).is_none() {
            return Err(GridShapeError::TooLarge { rows, cols });
        }

        Ok(Self { rows, cols })
    }

    /// Truncates the window size by the step: `floor(height / dx)` rows and
    /// `floor(width / dx)` columns. `dx` must already be positive and finite.
    pub fn from_window(window: &ComplexRect, dx: f64) -> Result<Self, GridShapeError> {
        let rows = (window.height() / dx).floor() as usize;
        let cols = (window.width() / dx).floor() as usize;

        Self::new(rows, cols)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}
