//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Jsonl,
    Json,
}

/// How a lane's pinfalls are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RollStyle {
    /// Uniform over the standing pins.
    Random,
    /// League-night average: occasional strikes, decent spare conversion.
    House,
    /// Strike-heavy with strong spare conversion.
    Pro,
}

impl RollStyle {
    pub fn name(&self) -> &'static str {
        match self {
            RollStyle::Random => "random",
            RollStyle::House => "house",
            RollStyle::Pro => "pro",
        }
    }
}
