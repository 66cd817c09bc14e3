// Metrics module
// Contains collection and console reporting for load test runs

pub mod collector;
pub mod reporter;
pub mod types;

pub use collector::{LatencyStats, MetricsCollector};
pub use types::{CheckCounts, CycleMetrics, SystemMetrics, TestMetrics};
