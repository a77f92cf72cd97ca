//! Streaming latency and success statistics for the IICP simulator.
//! Latency samples are folded into an HDR histogram as they arrive, so memory
//! stays bounded regardless of how many messages a scenario simulates.

use hdrhistogram::Histogram;

// ------------------------------------------------------------------------------------------------
// Statistics Tracking
// ------------------------------------------------------------------------------------------------

/// Accumulates per-message outcomes into percentile and success-rate
/// aggregates.
pub struct LatencyStats {
    /// Latency histogram in microseconds, 3 significant digits
    histogram: Histogram<u64>,
    successful_messages: u64,
    failed_messages: u64,
}

impl LatencyStats {
    /// Creates an empty accumulator
    pub fn new() -> Self {
        Self {
            histogram: Histogram::new(3).expect("histogram creation should succeed"),
            successful_messages: 0,
            failed_messages: 0,
        }
    }

    /// Records one message outcome
    pub fn record(&mut self, latency_ms: f64, success: bool) {
        let micros = (latency_ms * 1000.0).round().max(1.0) as u64;
        self.histogram
            .record(micros)
            .expect("auto-resizing histogram accepts any value");
        if success {
            self.successful_messages += 1;
        } else {
            self.failed_messages += 1;
        }
    }

    /// Total messages recorded
    pub fn total_messages(&self) -> u64 {
        self.successful_messages + self.failed_messages
    }

    pub fn successful_messages(&self) -> u64 {
        self.successful_messages
    }

    pub fn failed_messages(&self) -> u64 {
        self.failed_messages
    }

    /// Share of successful messages as a percentage; 0 when nothing was
    /// recorded
    pub fn success_rate(&self) -> f64 {
        if self.total_messages() == 0 {
            return 0.0;
        }
        (self.successful_messages as f64 / self.total_messages() as f64) * 100.0
    }

    /// Median latency in milliseconds
    pub fn median_latency_ms(&self) -> f64 {
        self.histogram.value_at_quantile(0.5) as f64 / 1000.0
    }

    /// 95th-percentile latency in milliseconds
    pub fn p95_latency_ms(&self) -> f64 {
        self.histogram.value_at_quantile(0.95) as f64 / 1000.0
    }
}

impl Default for LatencyStats {
    fn default() -> Self {
        Self::new()
    }
}

// ------------------------------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_success_rate() {
        let mut stats = LatencyStats::new();
        for i in 0..10 {
            stats.record(50.0 + i as f64, i % 4 != 0);
        }
        assert_eq!(stats.total_messages(), 10);
        assert_eq!(stats.failed_messages(), 3);
        assert_eq!(stats.successful_messages(), 7);
        assert!((stats.success_rate() - 70.0).abs() < 1e-9);
    }

    #[test]
    fn empty_stats_report_zero_success_rate() {
        let stats = LatencyStats::new();
        assert_eq!(stats.total_messages(), 0);
        assert_eq!(stats.success_rate(), 0.0);
    }

    #[test]
    fn percentiles_track_recorded_values() {
        let mut stats = LatencyStats::new();
        for latency in 1..=100 {
            stats.record(latency as f64, true);
        }
        // 3 significant digits keep single-millisecond values exact
        assert!((stats.median_latency_ms() - 50.0).abs() <= 1.0);
        assert!((stats.p95_latency_ms() - 95.0).abs() <= 1.0);
    }
}
