use log::{debug, info, warn};
use rayon::prelude::*;

use crate::core::actions::compute_field::execution_kind::ExecutionKind;
use crate::core::data::classification_field::{Classification, ClassificationField};
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid_shape::{GridShape, GridShapeError};
use crate::core::data::point_state::PointState;
use crate::core::fractals::julia::errors::julia::JuliaError;
use crate::core::fractals::julia::escape_radius::escape_radius;
use crate::core::fractals::julia::params::JuliaParams;

fn lower_left_line(window: &ComplexRect) -> String {
    format!("lower-left corner: {}", window.lower_left())
}

/// Escape-time state of every sample point of a window under `z² + c`.
///
/// Points are seeded once, then advanced one round at a time. Round `k`
/// only reads the values left by round `k - 1` of the same point, so a
/// round can be split across threads freely. Once no point is alive the
/// remaining rounds are skipped.
#[derive(Debug, Clone)]
pub struct EscapeTimeField {
    c: Complex,
    radius: f64,
    shape: GridShape,
    max_iterations: u32,
    rounds_completed: u32,
    alive: usize,
    states: Vec<PointState>,
}

impl EscapeTimeField {
    pub fn new(params: &JuliaParams) -> Result<Self, JuliaError> {
        let c = params.c();
        let radius = escape_radius(c);
        let window = params.window();
        let shape = params.shape();

        info!("{}", lower_left_line(&window));

        if shape.is_empty() {
            warn!(
                "window of {}x{} holds no step of {}, the field is empty",
                window.width(),
                window.height(),
                params.dx()
            );
        }

        let mut states = Vec::new();
        states
            .try_reserve_exact(shape.len())
            .map_err(|_| GridShapeError::TooLarge {
                rows: shape.rows(),
                cols: shape.cols(),
            })?;

        for row in 0..shape.rows() {
            for col in 0..shape.cols() {
                states.push(PointState::seed(params.point(row, col), radius));
            }
        }

        let alive = states.iter().filter(|state| state.is_alive()).count();

        debug!(
            "seeded {}x{} grid, escape radius {}, {} points alive",
            shape.rows(),
            shape.cols(),
            radius,
            alive
        );

        Ok(Self {
            c,
            radius,
            shape,
            max_iterations: params.max_iterations(),
            rounds_completed: 0,
            alive,
            states,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    pub fn alive_count(&self) -> usize {
        self.alive
    }

    pub fn states(&self) -> &[PointState] {
        &self.states
    }

    pub fn is_settled(&self) -> bool {
        self.alive == 0 || self.rounds_completed >= self.max_iterations
    }

    /// Runs the next round on the calling thread. Returns false when there
    /// was nothing left to run.
    pub fn step(&mut self) -> bool {
        self.step_with(|states, c, radius, round| {
            states
                .iter_mut()
                .map(|state| usize::from(state.advance(c, radius, round)))
                .sum()
        })
    }

    /// Runs the next round with points spread over the rayon pool.
    pub fn step_parallel(&mut self) -> bool {
        self.step_with(|states, c, radius, round| {
            states
                .par_iter_mut()
                .map(|state| usize::from(state.advance(c, radius, round)))
                .sum()
        })
    }

    fn step_with<F>(&mut self, advance_all: F) -> bool
    where
        F: FnOnce(&mut [PointState], Complex, f64, u32) -> usize,
    {
        if self.is_settled() {
            self.rounds_completed = self.max_iterations;
            return false;
        }

        let round = self.rounds_completed;
        let escaped = advance_all(self.states.as_mut_slice(), self.c, self.radius, round);

        self.alive -= escaped;
        self.rounds_completed += 1;

        debug!("round {}: {} escaped, {} alive", round, escaped, self.alive);

        true
    }

    /// Runs every remaining round on the calling thread.
    pub fn run_serial(&mut self) {
        while self.step() {}
    }

    /// Runs every remaining round with rows spread over the rayon pool. Each
    /// row is carried through all of its rounds before the worker moves on,
    /// which gives the same states as running round by round.
    pub fn run_rayon(&mut self) {
        if self.is_settled() {
            self.rounds_completed = self.max_iterations;
            return;
        }

        let (c, radius) = (self.c, self.radius);
        let rounds = self.rounds_completed..self.max_iterations;

        let escaped: usize = self
            .states
            .par_chunks_mut(self.shape.cols())
            .map(|row| {
                let mut escaped = 0;

                for round in rounds.clone() {
                    let mut any_alive = false;

                    for state in row.iter_mut() {
                        if state.advance(c, radius, round) {
                            escaped += 1;
                        }
                        any_alive |= state.is_alive();
                    }

                    if !any_alive {
                        break;
                    }
                }

                escaped
            })
            .sum();

        self.alive -= escaped;
        self.rounds_completed = self.max_iterations;

        debug!("rayon run finished, {} points alive", self.alive);
    }

    pub fn run(&mut self, execution: ExecutionKind) {
        match execution {
            ExecutionKind::Serial => self.run_serial(),
            ExecutionKind::Rayon => self.run_rayon(),
        }
    }

    /// Freezes the current states. Points still alive are reported as bounded.
    pub fn into_classification(self) -> Result<ClassificationField, JuliaError> {
        let cells = self.states.into_iter().map(Classification::from).collect();

        ClassificationField::from_cells(self.shape, self.max_iterations, cells)
            .map_err(JuliaError::from)
    }
}
