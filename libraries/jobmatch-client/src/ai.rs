//! AI service operations for the jobmatch backend.

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{
    AnalyzeResumeRequest, AnalyzeResumeResponse, CareerAdviceRequest, CareerAdviceResponse,
    CollectJobsRequest, CollectJobsResponse, CompanyResearchRequest, CompanyResearchResponse,
    MarketResearchRequest, MarketResearchResponse, MatchJobsRequest, MatchJobsResponse,
    ServiceStatus,
};
use tracing::{debug, info};

/// AI client for the jobmatch backend.
pub struct AiApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AiApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Analyze resume text.
    pub async fn analyze_resume(
        &self,
        request: &AnalyzeResumeRequest,
    ) -> Result<AnalyzeResumeResponse> {
        debug!(
            chars = request.resume_text.len(),
            analysis_type = ?request.analysis_type,
            target_role = ?request.target_role,
            "Requesting resume analysis"
        );
        self.client.post("/ai/analyze-resume/", request).await
    }

    /// Rank jobs against resume text and preferences.
    pub async fn match_jobs(&self, request: &MatchJobsRequest) -> Result<MatchJobsResponse> {
        debug!(
            limit = ?request.limit,
            use_perplexity = ?request.use_perplexity,
            "Requesting job matches"
        );
        self.client.post("/ai/match-jobs/", request).await
    }

    /// Career guidance for a resume.
    pub async fn career_advice(&self, request: &CareerAdviceRequest) -> Result<CareerAdviceResponse> {
        self.client.post("/ai/career-advice/", request).await
    }

    /// Market research for an industry.
    pub async fn research_market(
        &self,
        request: &MarketResearchRequest,
    ) -> Result<MarketResearchResponse> {
        debug!(industry = %request.industry, "Requesting market research");
        self.client.post("/ai/research-market/", request).await
    }

    /// Research a company.
    pub async fn research_company(
        &self,
        request: &CompanyResearchRequest,
    ) -> Result<CompanyResearchResponse> {
        debug!(company = %request.company_name, "Requesting company research");
        self.client.post("/ai/research-company/", request).await
    }

    /// Trigger collection of external job postings.
    pub async fn collect_linkedin_jobs(
        &self,
        request: &CollectJobsRequest,
    ) -> Result<CollectJobsResponse> {
        debug!(
            queries = ?request.queries,
            locations = ?request.locations,
            limit = ?request.limit,
            "Collecting external jobs"
        );
        let response: CollectJobsResponse =
            self.client.post("/ai/collect-linkedin-jobs/", request).await?;
        info!(
            collected = response.total_collected,
            source = ?response.source,
            "Job collection finished"
        );
        Ok(response)
    }

    /// Health of the AI providers.
    pub async fn status(&self) -> Result<ServiceStatus> {
        self.client.get("/ai/status/").await
    }
}
