//! Request and response types for the review service HTTP API.

use serde::{Deserialize, Serialize};

use crate::service::StatusCode;

/// One member of a team, as the service expects it on team creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub user_id: String,
    pub username: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddTeamRequest {
    pub team_name: String,
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePullRequestRequest {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReassignReviewerRequest {
    pub pull_request_id: String,
    pub old_user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergePullRequestRequest {
    pub pull_request_id: String,
}

/// Pull request state as the service reports it.
///
/// Only `assigned_reviewers` is consumed by the workflow driver; the other
/// fields default to empty when the service omits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub pull_request_id: String,
    #[serde(default)]
    pub pull_request_name: String,
    #[serde(default)]
    pub author_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub assigned_reviewers: Vec<String>,
}

/// Envelope around the pull request object in create/merge/reassign responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestResponse {
    pub pr: PullRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub team_name: String,
    pub members: Vec<TeamMember>,
}

/// Envelope around the team object in the team-add response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamResponse {
    pub team: Team,
}

/// Abbreviated pull request entry in a user's review queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestSummary {
    pub pull_request_id: String,
    #[serde(default)]
    pub pull_request_name: String,
    #[serde(default)]
    pub author_id: String,
    #[serde(default)]
    pub status: String,
}

/// Response of the review queue query for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub user_id: String,
    #[serde(default)]
    pub pull_requests: Vec<PullRequestSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserReviewStats {
    pub user_id: String,
    pub username: String,
    pub review_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestReviewStats {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub reviewer_count: u64,
}

/// Service-wide review statistics, fetched once after a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsResponse {
    #[serde(default)]
    pub user_stats: Vec<UserReviewStats>,
    #[serde(default)]
    pub pr_stats: Vec<PullRequestReviewStats>,
}

/// Raw outcome of one HTTP call: the status line plus the decoded body when
/// the service returned one this client understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub body: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(status: StatusCode, body: Option<T>) -> Self {
        Self { status, body }
    }

    /// A response with a status line but no usable body.
    pub fn status_only(status: StatusCode) -> Self {
        Self { status, body: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_response_envelope_decodes() {
        let body = r#"{"pr":{"pull_request_id":"pr_1_1","pull_request_name":"test_pr","author_id":"user1_1_1","status":"OPEN","assigned_reviewers":["user2_1_1","user3_1_1"]}}"#;
        let decoded: PullRequestResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.pr.pull_request_id, "pr_1_1");
        assert_eq!(
            decoded.pr.assigned_reviewers,
            vec!["user2_1_1", "user3_1_1"]
        );
    }

    #[test]
    fn missing_optional_fields_default_to_empty() {
        // The service omits fields on some answers; the driver must still
        // see a decodable body with an empty reviewer list.
        let body = r#"{"pr":{"pull_request_id":"pr_1_1"}}"#;
        let decoded: PullRequestResponse = serde_json::from_str(body).unwrap();
        assert!(decoded.pr.assigned_reviewers.is_empty());
        assert!(decoded.pr.status.is_empty());
    }

    #[test]
    fn team_member_uses_service_field_names() {
        let member = TeamMember {
            user_id: "user1_1_1".to_string(),
            username: "user1".to_string(),
            is_active: true,
        };
        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["user_id"], "user1_1_1");
        assert_eq!(json["username"], "user1");
        assert_eq!(json["is_active"], true);
    }

    #[test]
    fn review_response_decodes() {
        let body = r#"{"user_id":"user2_1_1","pull_requests":[{"pull_request_id":"pr_1_1","pull_request_name":"test_pr","author_id":"user1_1_1","status":"MERGED"}]}"#;
        let decoded: ReviewResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.user_id, "user2_1_1");
        assert_eq!(decoded.pull_requests.len(), 1);
        assert_eq!(decoded.pull_requests[0].status, "MERGED");
    }
}
