use clap::Parser;
use color_eyre::Result;
use env_logger::Target;
use toolclock::{cli::input::CliArgs, utils::logger::config_logger, worker::run_toolclock};

/// The entry point for the binary generated
/// for the program
fn main() -> Result<()> {
    color_eyre::install()?;
    let cli_args = CliArgs::parse();
    config_logger(cli_args.verbose, Target::Stderr)?;
    log::info!("Launching a new toolclock run");
    let summary = run_toolclock(&cli_args)?;
    log::info!(
        "Run finished: {} of {} attempted targets succeeded",
        summary.successful(),
        summary.attempted()
    );

    Ok(())
}
