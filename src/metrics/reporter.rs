//! Console reporter for metrics with real-time updates

use std::io::{self, Write};

use tokio::time::{interval, Duration};

use super::collector::MetricsCollector;
use crate::checks::Operation;

/// Start periodic metrics reporting (every N seconds)
pub async fn start_periodic_reporter(collector: MetricsCollector, interval_secs: u64) {
    let mut ticker = interval(Duration::from_secs(interval_secs));

    loop {
        ticker.tick().await;

        // Update system metrics before printing
        collector.update_system_metrics();

        print_live_metrics(&collector);
    }
}

/// Print live metrics (clears screen and updates in place)
pub fn print_live_metrics(collector: &MetricsCollector) {
    // Clear screen and move cursor to top
    print!("\x1B[2J\x1B[1;1H");

    let metrics = collector.get_snapshot();
    let elapsed = collector.elapsed_seconds();
    let cycle_latency = collector.get_cycle_latency_percentiles();

    println!("╔════════════════════════════════════════════════════════════════╗");
    println!("║            Review Service Load Test - Live Metrics             ║");
    println!("╚════════════════════════════════════════════════════════════════╝");

    // Time elapsed
    println!(
        "\n⏱️  Elapsed Time: {:02}:{:02}:{:02}",
        elapsed / 3600,
        (elapsed % 3600) / 60,
        elapsed % 60
    );

    // Cycles
    println!("\n┌─ REVIEW CYCLES ─────────────────────────────────────────────┐");
    println!(
        "│  Started:      {:>8}    In-Flight:  {:>8}              │",
        metrics.cycles.started, metrics.cycles.in_flight
    );
    println!(
        "│  Passed:       {:>8}    Failed:     {:>8}              │",
        metrics.cycles.passed, metrics.cycles.failed
    );

    if metrics.cycles.completed > 0 {
        let pass_rate = (metrics.cycles.passed as f64 / metrics.cycles.completed as f64) * 100.0;
        let throughput = if elapsed > 0 {
            metrics.cycles.completed as f64 / elapsed as f64
        } else {
            0.0
        };
        println!(
            "│  Pass Rate:    {:>7.2}%    Throughput: {:>7.2}/sec        │",
            pass_rate, throughput
        );
    }
    println!("└─────────────────────────────────────────────────────────────┘");

    // Checks per operation
    if !metrics.checks.is_empty() {
        println!("\n┌─ CHECKS ────────────────────────────────────────────────────┐");
        for operation in Operation::ALL {
            if let Some(counts) = metrics.checks.get(&operation) {
                let rate = if counts.total() > 0 {
                    (counts.passed as f64 / counts.total() as f64) * 100.0
                } else {
                    0.0
                };
                println!(
                    "│  {:<12} passed: {:>8}  failed: {:>8}  {:>6.2}%  │",
                    operation.label(),
                    counts.passed,
                    counts.failed,
                    rate
                );
            }
        }
        println!("└─────────────────────────────────────────────────────────────┘");
    }

    // Cycle latencies
    if cycle_latency.count > 0 {
        println!("\n┌─ CYCLE LATENCY (ms) ────────────────────────────────────────┐");
        println!(
            "│  Min: {:>6}  P50: {:>6}  P95: {:>6}  P99: {:>6}  Max: {:>6}│",
            cycle_latency.min,
            cycle_latency.p50,
            cycle_latency.p95,
            cycle_latency.p99,
            cycle_latency.max
        );
        println!(
            "│  Mean: {:>8.2} ms    Count: {:>10}                    │",
            cycle_latency.mean, cycle_latency.count
        );
        println!("└─────────────────────────────────────────────────────────────┘");
    }

    // System metrics
    println!("\n┌─ SYSTEM ────────────────────────────────────────────────────┐");
    println!(
        "│  CPU Usage:    {:>6.1}%    Memory: {:>6} / {:>6} MB       │",
        metrics.system.cpu_usage, metrics.system.memory_used_mb, metrics.system.memory_total_mb
    );
    println!("└─────────────────────────────────────────────────────────────┘");

    println!("\n  [Press Ctrl+C to stop test]");

    // Flush stdout to ensure immediate display
    let _ = io::stdout().flush();
}

/// Print final summary report
pub fn print_final_report(collector: &MetricsCollector) {
    let metrics = collector.get_snapshot();
    let elapsed = collector.elapsed_seconds();
    let cycle_latency = collector.get_cycle_latency_percentiles();
    let request_latency = collector.get_request_latency_percentiles();

    println!("\n╔════════════════════════════════════════════════════════════════╗");
    println!("║                    FINAL TEST REPORT                           ║");
    println!("╚════════════════════════════════════════════════════════════════╝");

    println!("\n📊 REVIEW CYCLES");
    println!("   Total Started:        {:>10}", metrics.cycles.started);
    println!("   Total Completed:      {:>10}", metrics.cycles.completed);
    println!("   Passed:               {:>10}", metrics.cycles.passed);
    println!("   Failed:               {:>10}", metrics.cycles.failed);

    if elapsed > 0 {
        let throughput = metrics.cycles.completed as f64 / elapsed as f64;
        println!("   Throughput:           {:>10.2} cycles/sec", throughput);
    }

    if metrics.cycles.completed > 0 {
        let pass_rate = (metrics.cycles.passed as f64 / metrics.cycles.completed as f64) * 100.0;
        println!("   Pass Rate:            {:>10.2}%", pass_rate);
    }

    if !metrics.checks.is_empty() {
        println!("\n⚙️  CHECKS");
        for operation in Operation::ALL {
            if let Some(counts) = metrics.checks.get(&operation) {
                let rate = if counts.total() > 0 {
                    (counts.passed as f64 / counts.total() as f64) * 100.0
                } else {
                    0.0
                };
                println!(
                    "   {:<12} passed: {:>8}  failed: {:>8}  ({:.2}%)",
                    operation.label(),
                    counts.passed,
                    counts.failed,
                    rate
                );
            }
        }
    }

    if cycle_latency.count > 0 {
        println!("\n📈 CYCLE LATENCY");
        println!("   Min:                  {:>10} ms", cycle_latency.min);
        println!("   P50 (Median):         {:>10} ms", cycle_latency.p50);
        println!("   P95:                  {:>10} ms", cycle_latency.p95);
        println!("   P99:                  {:>10} ms", cycle_latency.p99);
        println!("   Max:                  {:>10} ms", cycle_latency.max);
        println!("   Mean:                 {:>10.2} ms", cycle_latency.mean);
    }

    if request_latency.count > 0 {
        println!("\n📈 REQUEST LATENCY");
        println!("   Min:                  {:>10} ms", request_latency.min);
        println!("   P50 (Median):         {:>10} ms", request_latency.p50);
        println!("   P95:                  {:>10} ms", request_latency.p95);
        println!("   P99:                  {:>10} ms", request_latency.p99);
        println!("   Max:                  {:>10} ms", request_latency.max);
        println!("   Mean:                 {:>10.2} ms", request_latency.mean);
    }

    println!("\n⏱️  Test Duration: {:.2} seconds", elapsed as f64);
    println!("════════════════════════════════════════════════════════════════\n");
}
