use anyhow::Context;
use std::io::stdout;

use ribbon::{Driver, DriverConfig, StopToken};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut driver = Driver::new(DriverConfig::default(), rand::rng());
    let stop = StopToken::new();
    let mut out = stdout();
    driver
        .run(&mut out, &stop)
        .context("Failed to write automata to stdout.")?;
    Ok(())
}
