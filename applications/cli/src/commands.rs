//! One-shot commands outside the four pages: account, resumes, single jobs,
//! applications and the AI research tools.
//!
//! Every command returns the text to print so it can be checked in tests.

use crate::error::{AppError, Result};
use crate::pages::home::render_status;
use crate::pages::jobs::render_job;
use crate::pages::upload::{analysis_or_error, render_analysis};
use chrono::{DateTime, Utc};
use jobmatch_client::{
    AnalyzeResumeRequest, ApiClient, ApplyRequest, CareerAdviceRequest, CompanyResearchRequest,
    LoginRequest, MarketResearchRequest, MatchJobsRequest, ProfileUpdate, RegisterRequest,
};
use jobmatch_core::{JobId, ResumeId};
use serde_json::Value;
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

/// Where the resume text for an AI request comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeSource<'a> {
    /// A resume already stored by the backend
    Stored(ResumeId),
    /// A plain-text file on disk
    TextFile(&'a Path),
    /// Text given inline
    Inline(&'a str),
}

/// Resolve resume text, fetching it from the backend when needed.
pub async fn resume_text(client: &ApiClient, source: ResumeSource<'_>) -> Result<String> {
    let text = match source {
        ResumeSource::Stored(id) => client.resumes().get(&id).await?.text_content,
        ResumeSource::TextFile(path) => tokio::fs::read_to_string(path).await?,
        ResumeSource::Inline(text) => text.to_string(),
    };
    if text.trim().is_empty() {
        return Err(AppError::InvalidArgument("Resume text is empty".to_string()));
    }
    Ok(text)
}

// =============================================================================
// Account
// =============================================================================

pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<String> {
    let response = client
        .auth()
        .login(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await?;
    info!(email = %email, "Logged in");
    let who = response.username.as_deref().unwrap_or(email);
    Ok(format!("Logged in as {}\n", who))
}

pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<String> {
    let response = client.auth().register(request).await?;
    if response.access_token.is_some() {
        Ok(format!("Registered and logged in as {}\n", request.email))
    } else {
        Ok(format!(
            "Registered {}. Run `jobmatch login` to sign in.\n",
            request.email
        ))
    }
}

/// The local session is cleared even when the backend call fails. A session
/// that is still on disk afterwards is an error.
pub async fn logout(client: &ApiClient) -> Result<String> {
    match client.auth().logout().await {
        Ok(_) => Ok("Logged out\n".to_string()),
        Err(e) => match client.is_authenticated().await {
            Ok(false) => {
                tracing::warn!(error = %e, "Backend logout failed; local session cleared");
                Ok("Logged out locally\n".to_string())
            }
            _ => Err(e.into()),
        },
    }
}

pub async fn profile(client: &ApiClient, update: Option<ProfileUpdate>) -> Result<String> {
    let profile = match update {
        Some(update) => client.auth().update_profile(&update).await?,
        None => client.auth().profile().await?,
    };

    let mut out = String::from("Profile\n");
    let name = [profile.first_name.as_deref(), profile.last_name.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    if !name.is_empty() {
        let _ = writeln!(out, "  Name:     {}", name);
    }
    if let Some(username) = &profile.username {
        let _ = writeln!(out, "  Username: {}", username);
    }
    if let Some(email) = &profile.email {
        let _ = writeln!(out, "  Email:    {}", email);
    }
    for (key, value) in &profile.extra {
        let _ = writeln!(out, "  {}: {}", key, display_value(value));
    }
    Ok(out)
}

// =============================================================================
// Resumes
// =============================================================================

pub async fn list_resumes(client: &ApiClient) -> Result<String> {
    let page = client.resumes().list().await?;
    if page.results.is_empty() {
        return Ok("No resumes uploaded yet\n".to_string());
    }

    let mut out = String::new();
    for resume in &page.results {
        let name = resume
            .filename
            .as_deref()
            .or(resume.file.as_deref())
            .unwrap_or("(unnamed)");
        let _ = write!(out, "{}  {}", resume.id, name);
        if let Some(at) = &resume.uploaded_at {
            let _ = write!(out, "  {}", at);
        }
        out.push('\n');
    }
    Ok(out)
}

pub async fn show_resume(client: &ApiClient, id: &ResumeId) -> Result<String> {
    let resume = client.resumes().get(id).await?;
    let mut out = format!("Resume {}\n", resume.id);
    if let Some(name) = resume.filename.as_deref().or(resume.file.as_deref()) {
        let _ = writeln!(out, "  File: {}", name);
    }
    let _ = writeln!(out, "\n{}", resume.text_content.trim_end());
    Ok(out)
}

pub async fn delete_resume(client: &ApiClient, id: &ResumeId) -> Result<String> {
    client.resumes().delete(id).await?;
    Ok(format!("Deleted resume {}\n", id))
}

/// Analyze already-extracted text without uploading a file.
pub async fn analyze(
    client: &ApiClient,
    source: ResumeSource<'_>,
    target_role: Option<String>,
) -> Result<String> {
    let mut request = AnalyzeResumeRequest::new(resume_text(client, source).await?);
    request.analysis_type = Some(crate::pages::upload::ANALYSIS_TYPE.to_string());
    request.target_role = target_role;
    let response = client.ai().analyze_resume(&request).await?;
    Ok(render_analysis(&analysis_or_error(response)?))
}

// =============================================================================
// Jobs
// =============================================================================

pub async fn show_job(client: &ApiClient, id: &JobId, now: DateTime<Utc>) -> Result<String> {
    let job = client.jobs().get(id).await?;
    Ok(render_job(&job, now))
}

pub async fn apply(client: &ApiClient, id: &JobId, request: &ApplyRequest) -> Result<String> {
    let response = client.jobs().apply(id, request).await?;
    Ok(format!(
        "{}\n",
        response
            .message
            .unwrap_or_else(|| format!("Applied to job {}", id))
    ))
}

pub async fn applications(client: &ApiClient) -> Result<String> {
    let page = client.jobs().applications().await?;
    if page.results.is_empty() {
        return Ok("No applications yet\n".to_string());
    }

    let mut out = String::new();
    for application in &page.results {
        let title = match (&application.job_title, &application.company) {
            (Some(title), Some(company)) => format!("{} at {}", title, company),
            (Some(title), None) => title.clone(),
            _ => application
                .job
                .as_ref()
                .map(|job| format!("Job {}", job))
                .unwrap_or_else(|| "Unknown job".to_string()),
        };
        let _ = write!(out, "{}  {}  [{}]", application.id, title, application.status);
        if let Some(date) = &application.applied_date {
            let _ = write!(out, "  {}", date);
        }
        out.push('\n');
    }
    Ok(out)
}

// =============================================================================
// AI tools
// =============================================================================

pub async fn match_jobs(client: &ApiClient, request: &MatchJobsRequest) -> Result<String> {
    let response = client.ai().match_jobs(request).await?;
    let mut out = String::from("Job Matches\n");
    if let Some(total) = response.matches.total_found {
        let _ = writeln!(out, "  Found: {}", total);
    }
    let _ = writeln!(out, "\n{}", display_value(&response.matches.jobs));
    Ok(out)
}

pub async fn career_advice(client: &ApiClient, request: &CareerAdviceRequest) -> Result<String> {
    let response = client.ai().career_advice(request).await?;
    Ok(format!("Career Advice\n\n{}\n", display_value(&response.advice)))
}

pub async fn market_research(
    client: &ApiClient,
    request: &MarketResearchRequest,
) -> Result<String> {
    let response = client.ai().research_market(request).await?;
    Ok(format!(
        "Market Research: {}\n\n{}\n",
        request.industry,
        display_value(&response.research)
    ))
}

pub async fn company_research(
    client: &ApiClient,
    request: &CompanyResearchRequest,
) -> Result<String> {
    let response = client.ai().research_company(request).await?;
    Ok(format!(
        "Company Research: {}\n\n{}\n",
        request.company_name,
        display_value(&response.company_research)
    ))
}

pub async fn status(client: &ApiClient) -> Result<String> {
    let status = client.ai().status().await?;
    Ok(format!("AI Services\n{}", render_status(&status)))
}

/// AI payloads are free text or arbitrary JSON; print text as-is.
fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "(no content)".to_string(),
        Value::String(text) => text.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}
