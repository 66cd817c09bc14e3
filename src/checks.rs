//! Acceptable-outcome policy per operation, and the checks recorded
//! against observed responses.
//!
//! Status checking is deliberately tolerant: the target is expected to
//! answer duplicate identifiers and already-merged pull requests with
//! client errors, and those answers count as healthy. The exact set of
//! acceptable codes is a named predicate here so it can be tested without
//! touching the network.

use std::time::Duration;

use crate::service::StatusCode;

/// Remote operations exercised by the review cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    TeamAdd,
    PullRequestCreate,
    PullRequestReassign,
    PullRequestMerge,
    GetReview,
}

impl Operation {
    /// All operations, in cycle order.
    pub const ALL: [Operation; 5] = [
        Operation::TeamAdd,
        Operation::PullRequestCreate,
        Operation::PullRequestReassign,
        Operation::PullRequestMerge,
        Operation::GetReview,
    ];

    /// Label used in check names, logs, and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Operation::TeamAdd => "TEAM ADD",
            Operation::PullRequestCreate => "PR CREATE",
            Operation::PullRequestReassign => "PR REASSIGN",
            Operation::PullRequestMerge => "PR MERGE",
            Operation::GetReview => "GET REVIEW",
        }
    }

    /// Response codes the target may legitimately return for this operation
    /// under the given mode.
    pub fn acceptable_statuses(&self, mode: CheckMode) -> &'static [StatusCode] {
        match self {
            Operation::TeamAdd => match mode {
                CheckMode::Tolerant => &[StatusCode::CREATED, StatusCode::BAD_REQUEST],
                CheckMode::Strict => &[StatusCode::CREATED],
            },
            Operation::PullRequestCreate => &[
                StatusCode::CREATED,
                StatusCode::NOT_FOUND,
                StatusCode::CONFLICT,
            ],
            Operation::PullRequestReassign => {
                &[StatusCode::OK, StatusCode::NOT_FOUND, StatusCode::CONFLICT]
            }
            Operation::PullRequestMerge => &[StatusCode::OK, StatusCode::NOT_FOUND],
            Operation::GetReview => &[StatusCode::OK],
        }
    }

    /// Set-membership predicate: is `status` a healthy answer for this
    /// operation?
    pub fn accepts(&self, status: StatusCode, mode: CheckMode) -> bool {
        self.acceptable_statuses(mode).contains(&status)
    }
}

/// How strictly observed statuses are judged.
///
/// `Tolerant` is the load-generation default: a 400 on team creation is
/// indistinguishable from a duplicate-team rejection and counts as healthy.
/// `Strict` narrows team creation to 201 only, for correctness-leaning runs
/// where identifier collisions should surface as failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckMode {
    #[default]
    Tolerant,
    Strict,
}

/// One recorded assertion against an observed response.
///
/// A failed check never aborts anything; it only counts against the run in
/// the final report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub operation: Operation,
    /// Observed status line; `None` when the request never produced one.
    pub status: Option<StatusCode>,
    pub passed: bool,
    /// Wall time spent on the request, including body parsing.
    pub duration: Duration,
}

impl Check {
    /// Judge an observed status against the operation's acceptable set.
    pub fn from_status(
        operation: Operation,
        status: StatusCode,
        mode: CheckMode,
        duration: Duration,
    ) -> Self {
        Self {
            operation,
            status: Some(status),
            passed: operation.accepts(status, mode),
            duration,
        }
    }

    /// A request that never reached a status line (connection refused,
    /// timeout). Always a failure.
    pub fn transport_failure(operation: Operation, duration: Duration) -> Self {
        Self {
            operation,
            status: None,
            passed: false,
            duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> StatusCode {
        StatusCode::from_u16(code).unwrap()
    }

    #[test]
    fn tolerant_sets_match_the_service_contract() {
        let cases: &[(Operation, &[u16])] = &[
            (Operation::TeamAdd, &[201, 400]),
            (Operation::PullRequestCreate, &[201, 404, 409]),
            (Operation::PullRequestReassign, &[200, 404, 409]),
            (Operation::PullRequestMerge, &[200, 404]),
            (Operation::GetReview, &[200]),
        ];

        for (operation, accepted) in cases {
            for code in *accepted {
                assert!(
                    operation.accepts(status(*code), CheckMode::Tolerant),
                    "{} should accept {}",
                    operation.label(),
                    code
                );
            }
            for code in [200u16, 201, 204, 400, 404, 409, 500, 503] {
                if !accepted.contains(&code) {
                    assert!(
                        !operation.accepts(status(code), CheckMode::Tolerant),
                        "{} should reject {}",
                        operation.label(),
                        code
                    );
                }
            }
        }
    }

    #[test]
    fn strict_mode_rejects_duplicate_team_answer() {
        assert!(Operation::TeamAdd.accepts(StatusCode::BAD_REQUEST, CheckMode::Tolerant));
        assert!(!Operation::TeamAdd.accepts(StatusCode::BAD_REQUEST, CheckMode::Strict));
        assert!(Operation::TeamAdd.accepts(StatusCode::CREATED, CheckMode::Strict));
    }

    #[test]
    fn strict_mode_leaves_other_operations_alone() {
        for operation in [
            Operation::PullRequestCreate,
            Operation::PullRequestReassign,
            Operation::PullRequestMerge,
            Operation::GetReview,
        ] {
            assert_eq!(
                operation.acceptable_statuses(CheckMode::Tolerant),
                operation.acceptable_statuses(CheckMode::Strict)
            );
        }
    }

    #[test]
    fn transport_failure_always_fails() {
        let check = Check::transport_failure(Operation::GetReview, Duration::from_millis(5));
        assert!(!check.passed);
        assert_eq!(check.status, None);
    }

    #[test]
    fn from_status_records_the_observed_code() {
        let check = Check::from_status(
            Operation::PullRequestMerge,
            StatusCode::NOT_FOUND,
            CheckMode::Tolerant,
            Duration::from_millis(12),
        );
        assert!(check.passed);
        assert_eq!(check.status, Some(StatusCode::NOT_FOUND));

        let check = Check::from_status(
            Operation::PullRequestMerge,
            StatusCode::INTERNAL_SERVER_ERROR,
            CheckMode::Tolerant,
            Duration::from_millis(12),
        );
        assert!(!check.passed);
    }
}
