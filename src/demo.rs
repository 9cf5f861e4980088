// Demo runner: each section writes to any `io::Write`, so the binaries and
// the tests produce identical text.

use std::io::{self, Write};

use crate::config::DemoConfig;
use crate::encryption::Encryptor;

pub const FACTORY_HEADER: &str = "=== Factory Method ===";
pub const COMPOSITE_HEADER: &str = "=== Composite (File System) ===";
pub const STRATEGY_HEADER: &str = "=== Strategy (Encryption) ===";

pub fn run_factory_demo(config: &DemoConfig, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{FACTORY_HEADER}")?;
    for kind in &config.roles {
        let role = kind.creator().create_role();
        role.display_role(out)?;
    }
    Ok(())
}

pub fn run_composite_demo(config: &DemoConfig, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{COMPOSITE_HEADER}")?;
    config
        .build_tree()
        .display(config.file_system.start_depth, out)
}

pub fn run_encryption_demo(config: &DemoConfig, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{STRATEGY_HEADER}")?;
    let sample = config.encryption.sample.as_str();

    let mut encryptor = Encryptor::new();
    encryptor.encrypt_data(sample, out)?;

    for kind in &config.encryption.strategies {
        encryptor.set_strategy(kind.strategy());
        if let Some(name) = encryptor.strategy_name() {
            writeln!(out, "Strategy: {name}")?;
        }
        encryptor.encrypt_data(sample, out)?;
    }
    Ok(())
}

/// Output of the main binary: the factory section, then the composite one.
pub fn run_main(config: &DemoConfig, out: &mut dyn Write) -> io::Result<()> {
    run_factory_demo(config, out)?;
    run_composite_demo(config, out)?;
    out.flush()
}
