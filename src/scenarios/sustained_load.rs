//! Sustained load scenario - hold a constant cycle start rate over the run

use std::time::Duration;

use anyhow::Result;
use tokio::time::{interval, Instant};

use crate::checks::CheckMode;
use crate::cli::{Cli, SustainedLoadArgs};
use crate::config;
use crate::ids::ExecutionContext;
use crate::metrics::collector::MetricsCollector;
use crate::metrics::reporter;
use crate::scenarios;
use crate::service::HttpReviewService;
use crate::workflow;

pub async fn run(cli: Cli, args: SustainedLoadArgs) -> Result<()> {
    tracing::info!("Starting sustained load scenario");

    let profile = config::get_client_profile(&cli.client_profile);
    let service = HttpReviewService::new(&cli.base_url, &profile)?;
    let mode = if cli.strict {
        CheckMode::Strict
    } else {
        CheckMode::Tolerant
    };

    if !cli.skip_preflight {
        scenarios::preflight(&service).await;
    }

    // Setup metrics collector
    let collector = MetricsCollector::new();
    let collector_clone = collector.clone();
    let report_interval = cli.report_interval;

    // Start periodic metrics reporter
    tokio::spawn(async move {
        reporter::start_periodic_reporter(collector_clone, report_interval).await;
    });

    // Run load test
    let start_time = Instant::now();
    let duration = Duration::from_secs(cli.duration);
    let rate = args.rate;

    tracing::info!("Starting review cycles at {} cycles/sec", rate);

    let mut ticker = interval(Duration::from_secs(1));
    let mut cycle_counter = 0usize;
    let mut cycle_handles = Vec::new();

    loop {
        ticker.tick().await;

        // Check if we've exceeded duration
        if start_time.elapsed() >= duration {
            break;
        }

        // Spawn `rate` cycles this second; each owns its identifiers
        for _ in 0..(rate as usize) {
            cycle_counter += 1;
            let ctx = ExecutionContext::capture(cycle_counter);

            collector.cycle_started();

            let service_clone = service.clone();
            let collector_clone = collector.clone();

            let handle = tokio::spawn(async move {
                let start = Instant::now();
                let report = workflow::run_review_cycle(&service_clone, &ctx, mode).await;
                let duration_ms = start.elapsed().as_millis() as u64;
                collector_clone.cycle_finished(&report, duration_ms);
            });

            cycle_handles.push(handle);
        }
    }

    tracing::info!(
        "Load test duration completed, waiting for {} in-flight cycles...",
        cycle_handles.len()
    );

    // Wait for all spawned cycles to complete
    for (idx, handle) in cycle_handles.into_iter().enumerate() {
        if let Err(e) = handle.await {
            tracing::error!("Cycle task {} panicked: {}", idx, e);
        }

        // Log progress every 100 cycles
        if (idx + 1) % 100 == 0 {
            tracing::info!("Waited for {}/{} cycles to complete", idx + 1, cycle_counter);
        }
    }

    tracing::info!("All cycles completed");

    // Print final report
    reporter::print_final_report(&collector);
    scenarios::report_statistics(&service).await;

    Ok(())
}
