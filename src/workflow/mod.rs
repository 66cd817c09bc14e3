// Workflow module
// Contains the review cycle driven against the target service

pub mod review_cycle;

pub use review_cycle::{run_review_cycle, CreateOutcome, CycleReport};
