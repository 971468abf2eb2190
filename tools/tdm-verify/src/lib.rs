pub mod checks;
pub mod config;
pub mod reporter;

use config::VerifyConfig;
use std::io::{self, Write};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub structural: bool,
    pub health: bool,
}

impl Verdict {
    pub fn passed(&self) -> bool {
        self.structural && self.health
    }

    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            0
        } else {
            1
        }
    }
}

/// Wall-clock time spent in one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTiming {
    pub name: &'static str,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub verdict: Verdict,
    pub timings: Vec<PhaseTiming>,
}

/// Structural phase, then health phase regardless of the first verdict, then
/// the closing banner.
pub fn run_all<W: Write>(writer: &mut W, config: &VerifyConfig) -> io::Result<RunOutcome> {
    reporter::print_start(writer)?;
    let mut timings = Vec::new();

    let start = Instant::now();
    let structural = checks::structural::run(writer, config)?;
    timings.push(PhaseTiming {
        name: "structural",
        elapsed: start.elapsed(),
    });

    let start = Instant::now();
    let health = checks::health::run(writer, config)?;
    timings.push(PhaseTiming {
        name: "health",
        elapsed: start.elapsed(),
    });

    let verdict = Verdict { structural, health };
    reporter::print_final(writer, verdict.passed())?;
    Ok(RunOutcome { verdict, timings })
}
