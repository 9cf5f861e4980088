use std::io;
use std::process::ExitCode;

use design_patterns::demo::run_main;
use design_patterns::{logging, DemoConfig, DemoError};

fn run() -> Result<(), DemoError> {
    let config = DemoConfig::embedded()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_main(&config, &mut out)?;
    Ok(())
}

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
