use crate::controllers::ports::field_presenter::FieldPresenterPort;
use crate::core::data::classification_field::{Classification, ClassificationField};
use std::io::Write;

pub const DEFAULT_DELIMITER: char = '\t';

/// Writes one line per grid row with the classification values joined by a
/// delimiter, ready for `numpy.loadtxt` and similar tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TsvFilePresenter {
    delimiter: char,
    precision: Option<usize>,
}

impl FieldPresenterPort for TsvFilePresenter {
    fn present<W: Write>(&self, field: &ClassificationField, out: &mut W) -> std::io::Result<()> {
        let max_iterations = field.max_iterations();

        for row in field.rows() {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(out, "{}", self.delimiter)?;
                }
                self.write_value(out, *cell, max_iterations)?;
            }
            writeln!(out)?;
        }

        Ok(())
    }
}

impl Default for TsvFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl TsvFilePresenter {
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            precision: None,
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Fixes the number of decimals of escape values. The bounded marker is
    /// always written as `1`.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    fn write_value<W: Write>(
        &self,
        out: &mut W,
        cell: Classification,
        max_iterations: u32,
    ) -> std::io::Result<()> {
        match (cell, self.precision) {
            (Classification::Bounded, _) => write!(out, "1"),
            (Classification::Escaped(_), None) => write!(out, "{}", cell.value(max_iterations)),
            (Classification::Escaped(_), Some(precision)) => {
                write!(out, "{:.*}", precision, cell.value(max_iterations))
            }
        }
    }
}
