use anyhow::Result;
use clap::Parser;

use rsel::cli::{self, Config};
use rsel::display::PrimaryDisplay;
use rsel::{overlay, selection};

fn main() -> Result<()> {
    let config = Config::parse();
    cli::init_logging(&config);

    log::debug!("Starting application...");
    log::debug!("Creating window...");
    // fatal before any window exists; anyhow prints the message and exits non-zero
    let display = PrimaryDisplay::detect()?;

    let picked = overlay::run(&display)?;
    println!("{}", selection::report(picked));
    Ok(())
}
