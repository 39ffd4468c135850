/// Job posting and application types
use super::ids::{ApplicationId, JobId, ResumeId};
use serde::{Deserialize, Serialize};

/// A job posting as listed by the backend.
///
/// Fetched in bulk and filtered locally; never mutated by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub salary_min: Option<u64>,
    #[serde(default)]
    pub salary_max: Option<u64>,
    /// e.g. `full_time`, `Full-time`, `Remote`
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "requirements")]
    pub skills_required: Vec<String>,
    /// ISO-8601 date or datetime
    #[serde(default)]
    pub posted_date: String,
    /// Where the posting was collected from
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub is_remote: bool,
}

/// An application the current user submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: ApplicationId,
    #[serde(default)]
    pub job: Option<JobId>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub cover_letter: Option<String>,
    #[serde(default)]
    pub resume_id: Option<ResumeId>,
    #[serde(default)]
    pub applied_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_accepts_requirements_key() {
        let json = serde_json::json!({
            "id": "a1b2c3d4-e5f6-7890-abcd-ef1234567890",
            "title": "Senior Software Engineer",
            "company": "TechCorp Inc.",
            "location": "San Francisco, CA",
            "job_type": "Full-time",
            "experience_level": "Senior",
            "salary_min": 150000,
            "salary_max": 200000,
            "description": "We are looking for a senior software engineer...",
            "requirements": ["Python", "Django"],
            "posted_date": "2025-09-01"
        });

        let job: Job = serde_json::from_value(json).unwrap();
        assert_eq!(job.skills_required, vec!["Python", "Django"]);
        assert_eq!(job.salary_min, Some(150_000));
        assert!(!job.is_remote);
        assert!(job.source.is_empty());
    }

    #[test]
    fn test_application_minimal() {
        let json = serde_json::json!({ "id": 3, "job": 12, "status": "submitted" });
        let app: JobApplication = serde_json::from_value(json).unwrap();
        assert_eq!(app.id.as_str(), "3");
        assert_eq!(app.job.unwrap().as_str(), "12");
        assert!(app.cover_letter.is_none());
    }
}
