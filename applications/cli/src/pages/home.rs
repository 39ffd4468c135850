//! Landing screen with the backend's AI service availability.

use jobmatch_client::{ApiClient, ServiceStatus};
use std::fmt::Write as _;
use tracing::warn;

const FEATURES: [(&str, &str); 4] = [
    (
        "AI Resume Analysis",
        "Upload your resume and get a detailed analysis of skills, experience and career potential.",
    ),
    (
        "Smart Job Matching",
        "Find job opportunities collected from LinkedIn and other legal job sources.",
    ),
    (
        "Market Insights",
        "Get market research, salary insights and company analysis.",
    ),
    (
        "Career Guidance",
        "Receive personalized career advice based on your profile and market trends.",
    ),
];

pub struct HomePage {
    client: ApiClient,
    status: Option<ServiceStatus>,
    status_error: Option<String>,
}

impl HomePage {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            status: None,
            status_error: None,
        }
    }

    /// Query AI service status. Failure is shown inline rather than notified.
    pub async fn load(&mut self) {
        match self.client.ai().status().await {
            Ok(status) => {
                self.status = Some(status);
                self.status_error = None;
            }
            Err(e) => {
                warn!(error = %e, "AI status unavailable");
                self.status = None;
                self.status_error = Some(e.to_string());
            }
        }
    }

    pub fn status(&self) -> Option<&ServiceStatus> {
        self.status.as_ref()
    }

    pub fn render(&self) -> String {
        let mut out = String::from("AI-Powered Resume to Jobs Platform\n\n");
        out.push_str(
            "Upload your resume, get an AI analysis, and discover job matches from\n\
             LinkedIn and top job boards.\n\n",
        );

        for (title, description) in FEATURES {
            let _ = writeln!(out, "  {}\n    {}", title, description);
        }

        out.push_str("\nAI Services\n");
        match (&self.status, &self.status_error) {
            (Some(status), _) => out.push_str(&render_status(status)),
            (None, Some(err)) => {
                let _ = writeln!(out, "  Unavailable: {}", err);
            }
            (None, None) => out.push_str("  Not checked\n"),
        }

        out.push_str("\nGet started: jobmatch upload <resume.pdf>\n");
        out
    }
}

/// Provider availability lines.
pub fn render_status(status: &ServiceStatus) -> String {
    let services = &status.ai_services;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "  Gemini:     {}",
        services.gemini.as_deref().unwrap_or("unknown")
    );
    let _ = writeln!(
        out,
        "  Perplexity: {}",
        services.perplexity.as_deref().unwrap_or("unknown")
    );
    if !services.available_endpoints.is_empty() {
        let _ = writeln!(
            out,
            "  Endpoints:  {}",
            services.available_endpoints.join(", ")
        );
    }
    out
}
