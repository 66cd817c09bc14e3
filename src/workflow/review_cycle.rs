//! Review cycle - one full team/pull-request transaction per invocation.
//!
//! Five dependent HTTP calls in a fixed order with one conditional branch:
//! create team, create pull request, optionally reassign a reviewer, merge,
//! then read the second member's review queue. Each step records one check;
//! no step outcome, including a transport failure, stops the steps after it.

use std::time::Instant;

use crate::checks::{Check, CheckMode, Operation};
use crate::ids::{CycleIds, ExecutionContext, PULL_REQUEST_NAME};
use crate::service::types::{
    AddTeamRequest, ApiResponse, CreatePullRequestRequest, MergePullRequestRequest,
    PullRequestResponse, ReassignReviewerRequest,
};
use crate::service::{ReviewService, StatusCode};

/// Branch decision taken after the create call, from its status and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Create did not return 201; there is no pull request to reassign on.
    NotCreated,
    /// Created, and the service assigned at least one reviewer.
    CreatedWithReviewers(Vec<String>),
    /// Created, but the reviewer list came back empty or unreadable.
    CreatedWithoutReviewers,
}

impl CreateOutcome {
    /// Classify the create response.
    ///
    /// A missing or malformed body on a 201 means "no reviewers available",
    /// never a cycle failure.
    pub fn classify(response: &ApiResponse<PullRequestResponse>) -> Self {
        if response.status != StatusCode::CREATED {
            return CreateOutcome::NotCreated;
        }

        match response.body.as_ref() {
            Some(body) if !body.pr.assigned_reviewers.is_empty() => {
                CreateOutcome::CreatedWithReviewers(body.pr.assigned_reviewers.clone())
            }
            _ => CreateOutcome::CreatedWithoutReviewers,
        }
    }

    /// The reviewer the reassign step replaces, when the branch fires.
    pub fn first_reviewer(&self) -> Option<&str> {
        match self {
            CreateOutcome::CreatedWithReviewers(reviewers) => {
                reviewers.first().map(String::as_str)
            }
            _ => None,
        }
    }
}

/// Checks recorded by one cycle, in execution order. Skipped steps leave
/// no entry.
#[derive(Debug, Clone, Default)]
pub struct CycleReport {
    pub checks: Vec<Check>,
}

impl CycleReport {
    /// True when every recorded check passed.
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|check| check.passed)
    }

    /// The check recorded for `operation`, if that step ran.
    pub fn check_for(&self, operation: Operation) -> Option<&Check> {
        self.checks.iter().find(|check| check.operation == operation)
    }

    fn record(&mut self, check: Check) {
        if !check.passed {
            match check.status {
                Some(status) => tracing::debug!(
                    "{} returned unexpected status {}",
                    check.operation.label(),
                    status
                ),
                None => tracing::debug!("{} request failed in transport", check.operation.label()),
            }
        }
        self.checks.push(check);
    }
}

/// Judge one step's result, whatever the response body type was.
fn check_step<T, E>(
    operation: Operation,
    result: &Result<ApiResponse<T>, E>,
    mode: CheckMode,
    started: Instant,
) -> Check
where
    E: std::error::Error,
{
    let duration = started.elapsed();
    match result {
        Ok(response) => Check::from_status(operation, response.status, mode, duration),
        Err(err) => {
            tracing::debug!("{} transport error: {}", operation.label(), err);
            Check::transport_failure(operation, duration)
        }
    }
}

/// Run one complete review cycle against the target service.
///
/// Steps execute strictly sequentially; the create response is parsed in
/// full before the reassign branch is considered. Merge and the review
/// query always run, even when everything before them failed.
pub async fn run_review_cycle<S: ReviewService>(
    service: &S,
    ctx: &ExecutionContext,
    mode: CheckMode,
) -> CycleReport {
    let ids = CycleIds::derive(ctx);
    let mut report = CycleReport::default();

    // Step 1: create the team the rest of the cycle works against. A 400
    // here usually means the identifiers already exist; either way the
    // cycle moves on.
    let started = Instant::now();
    let team = service
        .add_team(AddTeamRequest {
            team_name: ids.team_name.clone(),
            members: ids.members.to_vec(),
        })
        .await;
    report.record(check_step(Operation::TeamAdd, &team, mode, started));

    // Step 2: create the pull request. Its body is the one piece of server
    // state the cycle consumes.
    let started = Instant::now();
    let create = service
        .create_pull_request(CreatePullRequestRequest {
            pull_request_id: ids.pull_request_id.clone(),
            pull_request_name: PULL_REQUEST_NAME.to_string(),
            author_id: ids.author().user_id.clone(),
        })
        .await;
    report.record(check_step(Operation::PullRequestCreate, &create, mode, started));

    let outcome = match &create {
        Ok(response) => CreateOutcome::classify(response),
        Err(_) => CreateOutcome::NotCreated,
    };

    // Step 3: reassign only when the service actually assigned reviewers.
    // A skipped branch records no check.
    if let Some(old_reviewer) = outcome.first_reviewer() {
        let started = Instant::now();
        let reassign = service
            .reassign_reviewer(ReassignReviewerRequest {
                pull_request_id: ids.pull_request_id.clone(),
                old_user_id: old_reviewer.to_string(),
            })
            .await;
        report.record(check_step(
            Operation::PullRequestReassign,
            &reassign,
            mode,
            started,
        ));
    }

    // Step 4: merge fires unconditionally, so the not-found path stays
    // exercised even when the pull request was never created.
    let started = Instant::now();
    let merge = service
        .merge_pull_request(MergePullRequestRequest {
            pull_request_id: ids.pull_request_id.clone(),
        })
        .await;
    report.record(check_step(Operation::PullRequestMerge, &merge, mode, started));

    // Step 5: read the second member's review queue.
    let started = Instant::now();
    let review = service.get_review(&ids.review_target().user_id).await;
    report.record(check_step(Operation::GetReview, &review, mode, started));

    report
}
