use std::{io::Write, path::Path, time::Instant};

use log::info;

use crate::{
    controllers::ports::field_presenter::FieldPresenterPort,
    core::{
        actions::compute_field::compute_field::compute_field_with,
        data::classification_field::ClassificationField,
        fractals::julia::{errors::julia::JuliaError, julia_config::JuliaConfig},
    },
};

pub struct CliController<P: FieldPresenterPort> {
    presenter: P,
    field: Option<ClassificationField>,
}

impl<P: FieldPresenterPort> CliController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            field: None,
        }
    }

    pub fn generate(&mut self, config: &JuliaConfig) -> Result<(), JuliaError> {
        let params = config.build_params()?;

        info!("Generating a Julia set for c = {}", params.c());
        info!(
            "Grid size: {}x{}",
            params.shape().rows(),
            params.shape().cols()
        );
        info!("Max iterations: {}", params.max_iterations());
        info!("Execution: {}", config.execution.display_name());

        let start = Instant::now();
        let field = compute_field_with(&params, config.execution)?;
        let duration = start.elapsed();

        info!("Duration:   {:?}", duration);
        info!(
            "Bounded points: {} of {}",
            field.bounded_count(),
            field.cells().len()
        );

        self.field = Some(field);

        Ok(())
    }

    pub fn field(&self) -> Option<&ClassificationField> {
        self.field.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let field = self.field.as_ref().ok_or_else(not_generated)?;

        self.presenter.present_to_file(field, &filepath)?;
        info!("Saved to {}", filepath.as_ref().display());

        Ok(())
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let field = self.field.as_ref().ok_or_else(not_generated)?;

        self.presenter.present(field, out)
    }
}

fn not_generated() -> std::io::Error {
    std::io::Error::other("no field generated")
}
