//! Command-level tests against a mocked backend.

use jobmatch_cli::commands::{self, ResumeSource};
use jobmatch_cli::{AppError, JobsPage, Notifier};
use jobmatch_client::{
    ApiClient, ClientConfig, ClientError, FileSessionStore, MarketResearchRequest,
    MatchJobsRequest, ProfileUpdate, SessionContext, SessionStore,
};
use jobmatch_core::{JobFilter, JobId, ResumeId};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Helpers
// =============================================================================

#[derive(Default)]
struct RecordingNotifier {
    messages: Mutex<Vec<(bool, String)>>,
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.messages.lock().unwrap().push((true, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push((false, message.to_string()));
    }
}

struct Fixture {
    server: MockServer,
    client: ApiClient,
    session: SessionContext,
    _dir: TempDir,
}

async fn fixture() -> Fixture {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let session = FileSessionStore::new(dir.path().join("session.json")).into_context();
    let client = ApiClient::builder(
        ClientConfig::new(format!("{}/api", server.uri())),
        session.clone(),
    )
    .build()
    .unwrap();

    Fixture {
        server,
        client,
        session,
        _dir: dir,
    }
}

async fn logged_in_fixture() -> Fixture {
    let f = fixture().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user_id": 1,
            "username": "ada",
            "access": "cli_access",
            "refresh": "cli_refresh"
        })))
        .mount(&f.server)
        .await;

    let out = commands::login(&f.client, "ada@example.com", "secret")
        .await
        .unwrap();
    assert_eq!(out, "Logged in as ada\n");
    f
}

// =============================================================================
// Account Commands
// =============================================================================

mod account {
    use super::*;

    #[tokio::test]
    async fn test_login_then_profile_uses_stored_token() {
        let f = logged_in_fixture().await;

        Mock::given(method("GET"))
            .and(path("/api/auth/profile/"))
            .and(header("Authorization", "Bearer cli_access"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "username": "ada",
                "email": "ada@example.com",
                "first_name": "Ada",
                "last_name": "Lovelace"
            })))
            .expect(1)
            .mount(&f.server)
            .await;

        let out = commands::profile(&f.client, None).await.unwrap();
        assert!(out.contains("Name:     Ada Lovelace"));
        assert!(out.contains("Email:    ada@example.com"));
    }

    #[tokio::test]
    async fn test_profile_update() {
        let f = logged_in_fixture().await;

        Mock::given(method("PATCH"))
            .and(path("/api/auth/profile/"))
            .and(body_json(serde_json::json!({ "last_name": "King" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "first_name": "Ada",
                "last_name": "King"
            })))
            .expect(1)
            .mount(&f.server)
            .await;

        let update = ProfileUpdate {
            last_name: Some("King".into()),
            ..ProfileUpdate::default()
        };
        let out = commands::profile(&f.client, Some(update)).await.unwrap();
        assert!(out.contains("Ada King"));
    }

    #[tokio::test]
    async fn test_logout_clears_session_even_when_backend_fails() {
        let f = logged_in_fixture().await;

        Mock::given(method("POST"))
            .and(path("/api/auth/logout/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&f.server)
            .await;

        let out = commands::logout(&f.client).await.unwrap();
        assert_eq!(out, "Logged out locally\n");
        assert!(f.session.credentials().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_logout_reports_session_that_cannot_be_removed() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        // A directory where the token file should be: reads and removal both fail.
        let session = FileSessionStore::new(dir.path()).into_context();
        let client = ApiClient::builder(
            ClientConfig::new(format!("{}/api", server.uri())),
            session,
        )
        .build()
        .unwrap();

        Mock::given(method("POST"))
            .and(path("/api/auth/logout/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let result = commands::logout(&client).await;
        assert!(
            matches!(result, Err(AppError::Client(ClientError::Io(_)))),
            "Expected Io error, got: {:?}",
            result
        );
        assert!(dir.path().is_dir());
    }

    #[tokio::test]
    async fn test_expired_session_is_cleared_on_401() {
        let f = logged_in_fixture().await;

        Mock::given(method("GET"))
            .and(path("/api/jobs/applications/"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "detail": "Given token not valid for any token type"
            })))
            .mount(&f.server)
            .await;

        match commands::applications(&f.client).await {
            Err(AppError::Client(ClientError::Unauthorized { message })) => {
                assert_eq!(message, "Given token not valid for any token type");
            }
            other => panic!("Expected Unauthorized, got: {:?}", other),
        }
        assert!(!f.client.is_authenticated().await.unwrap());
    }
}

// =============================================================================
// Resume and Job Commands
// =============================================================================

mod resumes_and_jobs {
    use super::*;

    #[tokio::test]
    async fn test_list_and_delete_resumes() {
        let f = fixture().await;

        Mock::given(method("GET"))
            .and(path("/api/resumes/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 2,
                "results": [
                    { "id": 1, "filename": "cv.pdf", "uploaded_at": "2025-09-01T10:00:00Z" },
                    { "id": 2, "file": "/media/resumes/old.docx" }
                ]
            })))
            .mount(&f.server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/api/resumes/2/"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&f.server)
            .await;

        let out = commands::list_resumes(&f.client).await.unwrap();
        assert_eq!(
            out,
            "1  cv.pdf  2025-09-01T10:00:00Z\n2  /media/resumes/old.docx\n"
        );

        let out = commands::delete_resume(&f.client, &ResumeId::new("2"))
            .await
            .unwrap();
        assert_eq!(out, "Deleted resume 2\n");
    }

    #[tokio::test]
    async fn test_stored_resume_feeds_match_request() {
        let f = fixture().await;

        Mock::given(method("GET"))
            .and(path("/api/resumes/7/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 7,
                "text_content": "Rust and Python engineer"
            })))
            .mount(&f.server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/ai/match-jobs/"))
            .and(body_json(serde_json::json!({
                "resume_text": "Rust and Python engineer",
                "limit": 3
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "success",
                "matches": { "total_found": 3, "jobs": "1. Backend Engineer" }
            })))
            .expect(1)
            .mount(&f.server)
            .await;

        let text = commands::resume_text(&f.client, ResumeSource::Stored(ResumeId::new("7")))
            .await
            .unwrap();
        let mut request = MatchJobsRequest::new(text);
        request.limit = Some(3);

        let out = commands::match_jobs(&f.client, &request).await.unwrap();
        assert!(out.contains("Found: 3"));
        assert!(out.contains("1. Backend Engineer"));
    }

    #[tokio::test]
    async fn test_empty_resume_text_rejected() {
        let f = fixture().await;
        let result = commands::resume_text(&f.client, ResumeSource::Inline("   ")).await;
        assert!(matches!(result, Err(AppError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_show_job_and_apply() {
        let f = fixture().await;

        Mock::given(method("GET"))
            .and(path("/api/jobs/9f8e7d6c5b4a/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "9f8e7d6c5b4a",
                "title": "Platform Engineer",
                "company": "Ferrous Systems",
                "location": "Berlin",
                "salary_max": 90000,
                "skills_required": ["Rust", "Kubernetes"]
            })))
            .mount(&f.server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/jobs/9f8e7d6c5b4a/apply/"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&f.server)
            .await;

        let id = JobId::new("9f8e7d6c5b4a");
        let out = commands::show_job(&f.client, &id, chrono::Utc::now())
            .await
            .unwrap();
        assert!(out.contains("Platform Engineer"));
        assert!(out.contains("Up to $90,000"));
        assert!(out.contains("Required Skills: Rust, Kubernetes"));
        assert!(out.contains("Job ID: 9f8e7d6c"));

        let out = commands::apply(&f.client, &id, &Default::default())
            .await
            .unwrap();
        assert_eq!(out, "Applied to job 9f8e7d6c5b4a\n");
    }

    #[tokio::test]
    async fn test_market_research_prints_free_text() {
        let f = fixture().await;

        Mock::given(method("POST"))
            .and(path("/api/ai/research-market/"))
            .and(body_json(serde_json::json!({
                "industry": "fintech",
                "location": "London"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "success",
                "research": "Demand for Rust engineers is growing."
            })))
            .mount(&f.server)
            .await;

        let request = MarketResearchRequest {
            industry: "fintech".into(),
            location: Some("London".into()),
            role: None,
            timeframe: None,
        };
        let out = commands::market_research(&f.client, &request).await.unwrap();
        assert_eq!(
            out,
            "Market Research: fintech\n\nDemand for Rust engineers is growing.\n"
        );
    }
}

// =============================================================================
// Jobs Page Over A Real Client
// =============================================================================

mod jobs_page {
    use super::*;

    #[tokio::test]
    async fn test_search_is_case_insensitive_over_skills() {
        let f = fixture().await;

        Mock::given(method("GET"))
            .and(path("/api/jobs/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "id": "1", "title": "Backend Engineer", "company": "Acme", "skills_required": ["RUST"] },
                { "id": "2", "title": "Designer", "company": "Acme", "skills_required": ["Figma"] }
            ])))
            .mount(&f.server)
            .await;

        let notifier = Arc::new(RecordingNotifier::default());
        let mut page = JobsPage::new(f.client.clone(), notifier.clone())
            .with_filter(JobFilter::search("rust"));
        assert!(page.load().await);

        let visible = page.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Backend Engineer");
        assert!(notifier.messages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unexpected_payload_shows_empty_list() {
        let f = fixture().await;

        Mock::given(method("GET"))
            .and(path("/api/jobs/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "detail": "ok" })),
            )
            .mount(&f.server)
            .await;

        let notifier = Arc::new(RecordingNotifier::default());
        let mut page = JobsPage::new(f.client.clone(), notifier.clone());
        page.load().await;

        assert!(page.jobs().is_empty());
        assert!(page
            .render(chrono::Utc::now())
            .contains("Showing 0 of 0 jobs"));
        assert!(notifier.messages.lock().unwrap().is_empty());
    }
}
