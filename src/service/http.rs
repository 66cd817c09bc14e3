//! HTTP implementation of the review service client.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientProfile;
use crate::service::error::ServiceError;
use crate::service::types::*;
use crate::service::ReviewService;

/// reqwest-backed client for the review assignment service.
///
/// Cheap to clone; all clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpReviewService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpReviewService {
    /// Create a client for the given base URL, tuned by the profile.
    pub fn new(base_url: impl Into<String>, profile: &ClientProfile) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(profile.request_timeout)
            .connect_timeout(profile.connect_timeout)
            .pool_max_idle_per_host(profile.pool_max_idle_per_host)
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Base URL this client is configured for.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ServiceError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Ok(decode(response).await)
    }
}

/// Split a response into status line and optional decoded body.
///
/// A body that fails to decode is reported as absent rather than as an
/// error; callers treat missing state the same way as an empty response.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResponse<T> {
    let status = response.status();
    let body = if status.is_success() {
        response.json::<T>().await.ok()
    } else {
        None
    };
    ApiResponse::new(status, body)
}

#[async_trait]
impl ReviewService for HttpReviewService {
    type Error = ServiceError;

    async fn add_team(
        &self,
        request: AddTeamRequest,
    ) -> Result<ApiResponse<TeamResponse>, Self::Error> {
        self.post_json("/team/add", &request).await
    }

    async fn create_pull_request(
        &self,
        request: CreatePullRequestRequest,
    ) -> Result<ApiResponse<PullRequestResponse>, Self::Error> {
        self.post_json("/pullRequest/create", &request).await
    }

    async fn reassign_reviewer(
        &self,
        request: ReassignReviewerRequest,
    ) -> Result<ApiResponse<PullRequestResponse>, Self::Error> {
        self.post_json("/pullRequest/reassign", &request).await
    }

    async fn merge_pull_request(
        &self,
        request: MergePullRequestRequest,
    ) -> Result<ApiResponse<PullRequestResponse>, Self::Error> {
        self.post_json("/pullRequest/merge", &request).await
    }

    async fn get_review(&self, user_id: &str) -> Result<ApiResponse<ReviewResponse>, Self::Error> {
        let response = self
            .client
            .get(self.url("/users/getReview"))
            .query(&[("user_id", user_id)])
            .send()
            .await?;
        Ok(decode(response).await)
    }

    async fn health(&self) -> Result<ApiResponse<HealthResponse>, Self::Error> {
        let response = self.client.get(self.url("/health")).send().await?;
        Ok(decode(response).await)
    }

    async fn get_statistics(&self) -> Result<ApiResponse<StatisticsResponse>, Self::Error> {
        let response = self.client.get(self.url("/statistics")).send().await?;
        Ok(decode(response).await)
    }
}
