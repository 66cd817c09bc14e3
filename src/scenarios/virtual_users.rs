//! Virtual user scenario - a fixed pool of users looping cycles back to back

use std::time::Duration;

use anyhow::Result;
use tokio::time::Instant;

use crate::checks::CheckMode;
use crate::cli::{Cli, VirtualUsersArgs};
use crate::config;
use crate::ids::ExecutionContext;
use crate::metrics::collector::MetricsCollector;
use crate::metrics::reporter;
use crate::scenarios;
use crate::service::HttpReviewService;
use crate::workflow;

pub async fn run(cli: Cli, args: VirtualUsersArgs) -> Result<()> {
    tracing::info!("Starting virtual users scenario");

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
    let deadline = start_time + Duration::from_secs(cli.duration);
    let pacing = Duration::from_millis(args.pacing_ms);

    tracing::info!("Spawning {} virtual users", args.users);

    let mut user_handles = Vec::new();

    for user_index in 1..=args.users {
        let service_clone = service.clone();
        let collector_clone = collector.clone();

        // Each user runs cycles sequentially until the deadline; the cycle
        // timestamp makes consecutive iterations use fresh identifiers.
        let handle = tokio::spawn(async move {
            let mut completed = 0usize;

            while Instant::now() < deadline {
                let ctx = ExecutionContext::capture(user_index);

                collector_clone.cycle_started();
                let start = Instant::now();
                let report = workflow::run_review_cycle(&service_clone, &ctx, mode).await;
                let duration_ms = start.elapsed().as_millis() as u64;
                collector_clone.cycle_finished(&report, duration_ms);
                completed += 1;

                if !pacing.is_zero() {
                    tokio::time::sleep(pacing).await;
                }
            }

            completed
        });

        user_handles.push(handle);
    }

    // Wait for every user to run out the clock
    let mut total_cycles = 0usize;
    for (idx, handle) in user_handles.into_iter().enumerate() {
        match handle.await {
            Ok(completed) => total_cycles += completed,
            Err(e) => tracing::error!("Virtual user {} panicked: {}", idx + 1, e),
        }
    }

    tracing::info!("All virtual users finished, {} cycles total", total_cycles);

    // Print final report
    reporter::print_final_report(&collector);
    scenarios::report_statistics(&service).await;

    Ok(())
}
