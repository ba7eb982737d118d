//! Harvest run statistics
//!
//! Summarizes a finished run for terminal display: how many papers the
//! index listed, how many records survived, and how many were dropped.

use crate::record::HarvestOutcome;
use std::time::Duration;

/// Summary statistics for a harvest run
#[derive(Debug, Clone)]
pub struct HarvestStats {
    /// Entries discovered on the index page
    pub discovered: usize,

    /// Records successfully harvested
    pub harvested: usize,

    /// Papers dropped due to detail fetch failures
    pub dropped: usize,

    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

impl HarvestStats {
    pub fn from_outcome(outcome: &HarvestOutcome) -> Self {
        Self {
            discovered: outcome.discovered,
            harvested: outcome.records.len(),
            dropped: outcome.dropped(),
            elapsed: outcome.elapsed,
        }
    }

    /// Share of discovered papers that produced a record, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.discovered == 0 {
            return 0.0;
        }
        (self.harvested as f64 / self.discovered as f64) * 100.0
    }
}

/// Prints run statistics to stdout
pub fn print_statistics(stats: &HarvestStats) {
    println!("=== Harvest Summary ===");
    println!(
        "Finished at:     {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!("Papers listed:   {}", stats.discovered);
    println!("Records written: {}", stats.harvested);
    println!("Dropped:         {}", stats.dropped);
    println!("Success rate:    {:.1}%", stats.success_rate());
    println!("Elapsed:         {:.2}s", stats.elapsed.as_secs_f64());
}
