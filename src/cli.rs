use std::io::Write;

use clap::Parser;
use env_logger::{Env, Target};

/// Drag a rectangle over the primary display and print its origin and size.
#[derive(Parser, Debug, Clone, Copy, Default)]
#[command(name = "rsel", version)]
pub struct Config {
    /// Trace mouse events and setup steps to stdout
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    fn default_filter(&self) -> &'static str {
        // dependencies stay at warn either way
        if self.verbose { "warn,rsel=debug" } else { "warn" }
    }

    fn log_target(&self) -> Target {
        // traces go ahead of the result line; otherwise stdout holds only the result
        if self.verbose { Target::Stdout } else { Target::Stderr }
    }
}

pub fn init_logging(config: &Config) {
    env_logger::Builder::from_env(Env::default().default_filter_or(config.default_filter()))
        .target(config.log_target())
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}
