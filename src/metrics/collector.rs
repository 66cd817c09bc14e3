//! Metrics collector - thread-safe collection with latency tracking

use std::sync::Arc;
use std::time::Instant;

use hdrhistogram::Histogram;
use parking_lot::RwLock;
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

use super::types::TestMetrics;
use crate::workflow::CycleReport;

#[derive(Clone)]
pub struct MetricsCollector {
    metrics: Arc<RwLock<TestMetrics>>,
    cycle_latencies: Arc<RwLock<Histogram<u64>>>,
    request_latencies: Arc<RwLock<Histogram<u64>>>,
    system: Arc<RwLock<System>>,
    start_time: Instant,
}

impl MetricsCollector {
    pub fn new() -> Self {
        // Create histograms with 3 significant digits of precision
        let cycle_hist = Histogram::new(3).expect("Failed to create cycle histogram");
        let request_hist = Histogram::new(3).expect("Failed to create request histogram");

        // Initialize system monitor
        let system = System::new_with_specifics(
            RefreshKind::new()
                .with_cpu(CpuRefreshKind::everything())
                .with_memory(MemoryRefreshKind::everything()),
        );

        Self {
            metrics: Arc::new(RwLock::new(TestMetrics::default())),
            cycle_latencies: Arc::new(RwLock::new(cycle_hist)),
            request_latencies: Arc::new(RwLock::new(request_hist)),
            system: Arc::new(RwLock::new(system)),
            start_time: Instant::now(),
        }
    }

    pub fn cycle_started(&self) {
        let mut metrics = self.metrics.write();
        metrics.cycles.started += 1;
        metrics.cycles.in_flight += 1;
    }

    /// Fold one finished cycle into the counters: cycle pass/fail, one
    /// pass/fail tally per recorded check, and all latencies.
    pub fn cycle_finished(&self, report: &CycleReport, duration_ms: u64) {
        let mut metrics = self.metrics.write();
        metrics.cycles.completed += 1;
        metrics.cycles.in_flight = metrics.cycles.in_flight.saturating_sub(1);
        if report.passed() {
            metrics.cycles.passed += 1;
        } else {
            metrics.cycles.failed += 1;
        }

        for check in &report.checks {
            let counts = metrics.checks.entry(check.operation).or_default();
            if check.passed {
                counts.passed += 1;
            } else {
                counts.failed += 1;
            }
        }
        drop(metrics);

        if let Some(mut hist) = self.cycle_latencies.try_write() {
            let _ = hist.record(duration_ms);
        }
        if let Some(mut hist) = self.request_latencies.try_write() {
            for check in &report.checks {
                let _ = hist.record(check.duration.as_millis() as u64);
            }
        }
    }

    /// Update system metrics (CPU, memory)
    pub fn update_system_metrics(&self) {
        let mut system = self.system.write();
        system.refresh_cpu_all();
        system.refresh_memory();

        let mut metrics = self.metrics.write();

        metrics.system.cpu_usage = system.global_cpu_usage();
        metrics.system.memory_used_mb = system.used_memory() / 1024 / 1024;
        metrics.system.memory_total_mb = system.total_memory() / 1024 / 1024;
    }

    pub fn get_snapshot(&self) -> TestMetrics {
        self.metrics.read().clone()
    }

    pub fn get_cycle_latency_percentiles(&self) -> LatencyStats {
        let hist = self.cycle_latencies.read();
        LatencyStats {
            min: hist.min(),
            p50: hist.value_at_quantile(0.50),
            p95: hist.value_at_quantile(0.95),
            p99: hist.value_at_quantile(0.99),
            max: hist.max(),
            mean: hist.mean(),
            count: hist.len(),
        }
    }

    pub fn get_request_latency_percentiles(&self) -> LatencyStats {
        let hist = self.request_latencies.read();
        LatencyStats {
            min: hist.min(),
            p50: hist.value_at_quantile(0.50),
            p95: hist.value_at_quantile(0.95),
            p99: hist.value_at_quantile(0.99),
            max: hist.max(),
            mean: hist.mean(),
            count: hist.len(),
        }
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct LatencyStats {
    pub min: u64,
    pub p50: u64,
    pub p95: u64,
    pub p99: u64,
    pub max: u64,
    pub mean: f64,
    pub count: u64,
}
