mod cli;

use anyhow::Context;
use clap::Parser;

use cli::JuliaCli;
use julia_field::CliController;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = JuliaCli::parse();
    let mut controller = CliController::new(args.presenter());

    controller.generate(&args.config())?;
    controller
        .write(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    Ok(())
}
