use crate::core::{
    data::{complex::Complex, complex_rect::ComplexRect, grid_shape::GridShape},
    fractals::julia::errors::julia::JuliaError,
};

/// Validated inputs of one escape-time run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JuliaParams {
    c: Complex,
    window: ComplexRect,
    dx: f64,
    max_iterations: u32,
    shape: GridShape,
}

impl JuliaParams {
    pub fn new(
        c: Complex,
        z0: Complex,
        z1: Complex,
        dx: f64,
        max_iterations: u32,
    ) -> Result<Self, JuliaError> {
        if max_iterations == 0 {
            return Err(JuliaError::ZeroMaxIterationsError);
        }

        if !dx.is_finite() || dx <= 0.0 {
            return Err(JuliaError::NonPositiveStep { dx });
        }

        if !c.is_finite() {
            return Err(JuliaError::NonFiniteParameter { name: "c" });
        }

        let window = ComplexRect::from_corners(z0, z1)?;
        let shape = GridShape::from_window(&window, dx)?;

        Ok(Self {
            c,
            window,
            dx,
            max_iterations,
            shape,
        })
    }

    pub fn c(&self) -> Complex {
        self.c
    }

    pub fn window(&self) -> ComplexRect {
        self.window
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// The sample point at `(row, col)`: `lower_left + (col·dx, row·dx)`.
    pub fn point(&self, row: usize, col: usize) -> Complex {
        let lower_left = self.window.lower_left();

        Complex::new(
            lower_left.real + col as f64 * self.dx,
            lower_left.imag + row as f64 * self.dx,
        )
    }
}
