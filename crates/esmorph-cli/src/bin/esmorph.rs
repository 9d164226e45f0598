use anyhow::Result;
use clap::Parser;

use esmorph_cli::args::CliArgs;
use esmorph_cli::{driver, tracing_config};

fn main() -> Result<()> {
    // Initialize tracing if ESMORPH_LOG or RUST_LOG is set (zero cost otherwise).
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    driver::run(&args)?;
    Ok(())
}
