use std::fmt;
use std::time::Duration;

pub const PROG_NAME: &str = "vmsim";

/// Counters for one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    // Records consumed, rejected ones included
    pub references: u64,
    pub faults: u64,
    pub writes: u64,
    // Evictions of dirty frames
    pub flushes: u64,
    pub accumulator: i64,
    // Times the unbounded table was extended
    pub growths: u64,
    // Records with an unrecognized operation tag
    pub rejected: u64,
}

impl Stats {
    pub fn hits(&self) -> u64 {
        self.references - self.rejected - self.faults
    }
}

pub struct Report<'a> {
    pub strategy: &'a str,
    pub stats: &'a Stats,
    pub elapsed: Duration,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "[{}] {} references processed using '{}' in {:.2} sec.",
            PROG_NAME,
            self.stats.references,
            self.strategy,
            self.elapsed.as_secs_f64()
        )?;
        writeln!(
            f,
            "[{}] page faults= {}, write count= {}, flushes= {}",
            PROG_NAME, self.stats.faults, self.stats.writes, self.stats.flushes
        )?;
        write!(f, "[{}] Accumulator= {}", PROG_NAME, self.stats.accumulator)
    }
}
