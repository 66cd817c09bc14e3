//! Client for the review assignment service.
//!
//! The service contract is expressed as the [`ReviewService`] trait so the
//! workflow driver can run against any transport; [`HttpReviewService`] is
//! the production implementation backed by reqwest.

pub mod error;
pub mod http;
pub mod types;

pub use error::ServiceError;
pub use http::HttpReviewService;
pub use reqwest::StatusCode;
pub use types::*;

use async_trait::async_trait;

/// Review service operations exercised by the load test.
#[async_trait]
pub trait ReviewService: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn add_team(
        &self,
        request: AddTeamRequest,
    ) -> Result<ApiResponse<TeamResponse>, Self::Error>;

    async fn create_pull_request(
        &self,
        request: CreatePullRequestRequest,
    ) -> Result<ApiResponse<PullRequestResponse>, Self::Error>;

    async fn reassign_reviewer(
        &self,
        request: ReassignReviewerRequest,
    ) -> Result<ApiResponse<PullRequestResponse>, Self::Error>;

    async fn merge_pull_request(
        &self,
        request: MergePullRequestRequest,
    ) -> Result<ApiResponse<PullRequestResponse>, Self::Error>;

    async fn get_review(&self, user_id: &str) -> Result<ApiResponse<ReviewResponse>, Self::Error>;

    async fn health(&self) -> Result<ApiResponse<HealthResponse>, Self::Error>;

    async fn get_statistics(&self) -> Result<ApiResponse<StatisticsResponse>, Self::Error>;
}
