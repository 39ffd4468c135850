//! Job listing and application operations for the jobmatch backend.

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{ApplyRequest, ApplyResponse, JobListParams};
use jobmatch_core::{Job, JobApplication, JobId, Page};
use tracing::debug;

/// Jobs client for the jobmatch backend.
pub struct JobsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> JobsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List postings; unset parameters are left out of the query string.
    pub async fn list(&self, params: &JobListParams) -> Result<Page<Job>> {
        let page: Page<Job> = self.client.get_with_query("/jobs/", params).await?;
        debug!(
            returned = page.results.len(),
            total = page.total(),
            "Fetched jobs"
        );
        Ok(page)
    }

    /// Fetch one posting.
    pub async fn get(&self, id: &JobId) -> Result<Job> {
        self.client.get(&format!("/jobs/{}/", id)).await
    }

    /// Apply to a posting.
    pub async fn apply(&self, id: &JobId, request: &ApplyRequest) -> Result<ApplyResponse> {
        debug!(job_id = %id, with_resume = request.resume_id.is_some(), "Submitting application");
        self.client
            .post(&format!("/jobs/{}/apply/", id), request)
            .await
    }

    /// The current user's applications.
    pub async fn applications(&self) -> Result<Page<JobApplication>> {
        self.client.get("/jobs/applications/").await
    }
}
