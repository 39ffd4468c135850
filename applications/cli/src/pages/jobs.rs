//! Job board: listing, client-side filtering and on-demand collection.

use crate::notify::Notifier;
use chrono::{DateTime, Utc};
use jobmatch_client::{ApiClient, CollectJobsRequest, JobListParams};
use jobmatch_core::{format_posted_date, format_salary, parse_timestamp, Job, JobFilter};
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Search terms sent when collecting jobs from external sources.
pub const DEFAULT_COLLECT_QUERIES: [&str; 3] =
    ["Software Engineer", "Python Developer", "Data Scientist"];

/// Locations sent when collecting jobs from external sources.
pub const DEFAULT_COLLECT_LOCATIONS: [&str; 3] = ["Remote", "San Francisco", "New York"];

pub const DEFAULT_COLLECT_LIMIT: u32 = 50;

/// Skills listed per job before the rest collapse into "+N more".
pub const MAX_SKILLS_SHOWN: usize = 8;

/// Length of the job id prefix shown in listings.
pub const SHORT_ID_LEN: usize = 8;

pub const LOAD_FAILURE: &str = "Failed to load jobs";
pub const COLLECT_FAILURE: &str = "Failed to collect jobs";

pub struct JobsPage {
    client: ApiClient,
    notifier: Arc<dyn Notifier>,
    jobs: Vec<Job>,
    filter: JobFilter,
    loading: bool,
    is_collecting: bool,
}

impl JobsPage {
    pub fn new(client: ApiClient, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            notifier,
            jobs: Vec::new(),
            filter: JobFilter::default(),
            loading: true,
            is_collecting: false,
        }
    }

    pub fn with_filter(mut self, filter: JobFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn set_filter(&mut self, filter: JobFilter) {
        self.filter = filter;
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_collecting(&self) -> bool {
        self.is_collecting
    }

    /// Jobs passing the current search and location filter, in listing order.
    pub fn visible(&self) -> Vec<&Job> {
        self.filter.apply(&self.jobs)
    }

    /// Fetch the job list; on failure the previous list is kept.
    ///
    /// Returns `false` when the fetch failed.
    pub async fn load(&mut self) -> bool {
        self.loading = true;
        let loaded = match self.client.jobs().list(&JobListParams::default()).await {
            Ok(page) => {
                self.jobs = page.into_items();
                debug!(count = self.jobs.len(), "Jobs loaded");
                true
            }
            Err(e) => {
                error!(error = %e, "Error fetching jobs");
                self.notifier.error(LOAD_FAILURE);
                false
            }
        };
        self.loading = false;
        loaded
    }

    /// Ask the backend to collect fresh jobs with the default queries, then
    /// reload the list whether or not collection worked.
    ///
    /// Returns `true` only when both the collection and the reload succeed.
    pub async fn collect(&mut self) -> bool {
        self.is_collecting = true;
        let request = CollectJobsRequest {
            queries: DEFAULT_COLLECT_QUERIES.iter().map(|q| q.to_string()).collect(),
            locations: DEFAULT_COLLECT_LOCATIONS
                .iter()
                .map(|l| l.to_string())
                .collect(),
            limit: Some(DEFAULT_COLLECT_LIMIT),
        };

        let collected = match self.client.ai().collect_linkedin_jobs(&request).await {
            Ok(response) => {
                info!(total = response.total_collected, "Job collection finished");
                self.notifier.success(&format!(
                    "Collected {} new jobs!",
                    response.total_collected
                ));
                true
            }
            Err(e) => {
                error!(error = %e, "Error collecting jobs");
                self.notifier.error(COLLECT_FAILURE);
                false
            }
        };
        self.is_collecting = false;

        let loaded = self.load().await;
        collected && loaded
    }

    /// Render the listing as of `now`.
    pub fn render(&self, now: DateTime<Utc>) -> String {
        if self.loading {
            return "Loading jobs...\n".to_string();
        }

        let visible = self.visible();
        let mut out = String::from("Job Opportunities\n\n");
        let _ = writeln!(
            out,
            "Showing {} of {} jobs\n",
            visible.len(),
            self.jobs.len()
        );

        if visible.is_empty() {
            out.push_str("No jobs found\n");
            out.push_str("Try adjusting your search criteria or collect new jobs.\n");
            return out;
        }

        for job in visible {
            out.push_str(&render_job(job, now));
            out.push('\n');
        }
        out
    }
}

/// Badge text: upper-cased with underscores as spaces.
pub fn badge(value: &str) -> String {
    value.replace('_', " ").to_uppercase()
}

/// Skills line: at most eight names, then "+N more".
pub fn skills_line(skills: &[String]) -> String {
    let mut line = skills
        .iter()
        .take(MAX_SKILLS_SHOWN)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if skills.len() > MAX_SKILLS_SHOWN {
        let _ = write!(line, "  +{} more", skills.len() - MAX_SKILLS_SHOWN);
    }
    line
}

/// Posting date relative to `now`; unparseable dates are shown verbatim.
pub fn posted_label(posted_date: &str, now: DateTime<Utc>) -> String {
    match parse_timestamp(posted_date) {
        Ok(posted) => format_posted_date(posted, now),
        Err(_) => posted_date.to_string(),
    }
}

/// Render a single job card.
pub fn render_job(job: &Job, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", job.title);
    let _ = writeln!(out, "{}", job.company);

    let place = if job.is_remote {
        "Remote"
    } else {
        job.location.as_str()
    };
    let _ = writeln!(
        out,
        "  {} | {} | {}",
        place,
        format_salary(job.salary_min, job.salary_max),
        posted_label(&job.posted_date, now)
    );

    let badges = [&job.job_type, &job.experience_level, &job.source]
        .into_iter()
        .filter(|b| !b.is_empty())
        .map(|b| format!("[{}]", badge(b)))
        .collect::<Vec<_>>();
    if !badges.is_empty() {
        let _ = writeln!(out, "  {}", badges.join(" "));
    }

    if !job.description.is_empty() {
        let _ = writeln!(out, "  {}", job.description);
    }

    if !job.skills_required.is_empty() {
        let _ = writeln!(out, "  Required Skills: {}", skills_line(&job.skills_required));
    }

    let _ = writeln!(out, "  Job ID: {}", job.id.short(SHORT_ID_LEN));
    out
}
