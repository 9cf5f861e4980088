// Strategy walkthrough: the unset-strategy notice, then every configured
// strategy applied to the sample text.

use std::io;
use std::process::ExitCode;

use design_patterns::demo::run_encryption_demo;
use design_patterns::{logging, DemoConfig, DemoError};

fn run() -> Result<(), DemoError> {
    let config = DemoConfig::embedded()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_encryption_demo(&config, &mut out)?;
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
