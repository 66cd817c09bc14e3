// Scenarios module
// Contains load test scenario implementations

pub mod sustained_load;
pub mod virtual_users;

use crate::service::{ReviewService, StatusCode};

/// Probe the target's health endpoint before generating load.
///
/// Never fatal: an unhealthy or unreachable target is logged and the run
/// proceeds, so the checks report what the target actually does under load.
pub async fn preflight<S: ReviewService>(service: &S) {
    match service.health().await {
        Ok(response) if response.status == StatusCode::OK => {
            tracing::info!("Target health probe ok");
        }
        Ok(response) => {
            tracing::warn!(
                "Target health probe returned {}, continuing anyway",
                response.status
            );
        }
        Err(e) => {
            tracing::warn!("Target health probe failed ({}), continuing anyway", e);
        }
    }
}

/// Fetch service-wide review statistics after the run and log the aggregate.
/// Failures are tolerated like any other degraded answer from the target.
pub async fn report_statistics<S: ReviewService>(service: &S) {
    match service.get_statistics().await {
        Ok(response) if response.status == StatusCode::OK => {
            if let Some(stats) = response.body {
                let total_reviews: u64 = stats.user_stats.iter().map(|s| s.review_count).sum();
                tracing::info!(
                    "Target statistics: {} users with reviews, {} pull requests tracked, {} review assignments",
                    stats.user_stats.len(),
                    stats.pr_stats.len(),
                    total_reviews
                );
            }
        }
        Ok(response) => {
            tracing::warn!("Statistics fetch returned {}", response.status);
        }
        Err(e) => {
            tracing::warn!("Statistics fetch failed: {}", e);
        }
    }
}
