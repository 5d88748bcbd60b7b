//! Minimal CLI parsing for run mode overrides.

use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Serve the HTTP API
    #[default]
    Server,
    /// Seed the menu catalog once and exit
    SeedOnly,
}

#[derive(Debug, Default)]
pub struct CliOptions {
    pub run_mode: RunMode,
}

impl CliOptions {
    pub fn from_args() -> Self {
        Self::parse(env::args().skip(1))
    }

    pub fn parse<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = CliOptions::default();
        for arg in args {
            match arg.as_str() {
                "--seed-only" => options.run_mode = RunMode::SeedOnly,
                "--server" => options.run_mode = RunMode::Server,
                _ => {}
            }
        }
        options
    }
}
