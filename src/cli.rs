use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use julia_field::{Complex, ExecutionKind, JuliaConfig, TsvFilePresenter};

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum ExecutionArg {
    Serial,
    #[default]
    Rayon,
}

impl From<ExecutionArg> for ExecutionKind {
    fn from(arg: ExecutionArg) -> Self {
        match arg {
            ExecutionArg::Serial => ExecutionKind::Serial,
            ExecutionArg::Rayon => ExecutionKind::Rayon,
        }
    }
}

/// Classify each point of a window by how fast it escapes under f(z) = z^2 + c
#[derive(Debug, Parser)]
#[command(name = "julia_field", version, allow_negative_numbers = true)]
pub struct JuliaCli {
    /// Real part of c in f(z) = z^2 + c
    pub c_re: f64,
    /// Imaginary part of c
    pub c_im: f64,
    /// Real part of the first window corner
    pub z0_re: f64,
    /// Imaginary part of the first window corner
    pub z0_im: f64,
    /// Real part of the opposite window corner
    pub z1_re: f64,
    /// Imaginary part of the opposite window corner
    pub z1_im: f64,
    /// Step size between evaluated points
    pub dx: f64,
    /// Maximum iterations to compute
    pub maxiters: u32,

    /// Output file
    #[arg(short = 'o', long = "output", value_name = "FILE", default_value = "out.txt")]
    pub output: PathBuf,

    #[arg(long = "execution", value_enum, default_value_t = ExecutionArg::default())]
    pub execution: ExecutionArg,

    /// Fixed number of decimals for escape values
    #[arg(long = "precision", value_name = "DIGITS")]
    pub precision: Option<usize>,

    /// Column delimiter
    #[arg(long = "delimiter", default_value_t = '\t')]
    pub delimiter: char,
}

impl JuliaCli {
    pub fn config(&self) -> JuliaConfig {
        JuliaConfig {
            c: Complex::new(self.c_re, self.c_im),
            z0: Complex::new(self.z0_re, self.z0_im),
            z1: Complex::new(self.z1_re, self.z1_im),
            dx: self.dx,
            max_iterations: self.maxiters,
            execution: self.execution.into(),
        }
    }

    pub fn presenter(&self) -> TsvFilePresenter {
        let presenter = TsvFilePresenter::new().with_delimiter(self.delimiter);

        match self.precision {
            Some(precision) => presenter.with_precision(precision),
            None => presenter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_negative_positionals() {
        let cli = JuliaCli::try_parse_from([
            "julia_field", "-0.7", "0.27", "-2", "-2", "2", "2", "0.01", "256",
        ])
        .unwrap();
        let config = cli.config();

        assert_eq!(config.c, Complex::new(-0.7, 0.27));
        assert_eq!(config.z0, Complex::new(-2.0, -2.0));
        assert_eq!(config.z1, Complex::new(2.0, 2.0));
        assert_eq!(config.dx, 0.01);
        assert_eq!(config.max_iterations, 256);
        assert_eq!(config.execution, ExecutionKind::Rayon);
        assert_eq!(cli.output, PathBuf::from("out.txt"));
    }

    #[test]
    fn test_parses_options() {
        let cli = JuliaCli::try_parse_from([
            "julia_field",
            "0",
            "0",
            "-1",
            "-1",
            "1",
            "1",
            "0.5",
            "10",
            "--output",
            "field.txt",
            "--execution",
            "serial",
            "--precision",
            "4",
        ])
        .unwrap();

        assert_eq!(cli.output, PathBuf::from("field.txt"));
        assert_eq!(cli.config().execution, ExecutionKind::Serial);
        assert_eq!(cli.precision, Some(4));
    }

    #[test]
    fn test_missing_arguments_fail() {
        let result = JuliaCli::try_parse_from(["julia_field", "0", "0", "-1", "-1"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_negative_iteration_count() {
        let result = JuliaCli::try_parse_from([
            "julia_field", "0", "0", "-1", "-1", "1", "1", "0.5", "-3",
        ]);

        assert!(result.is_err());
    }
}
