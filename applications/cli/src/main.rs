/// jobmatch - resume upload, AI analysis and job search from the terminal
use clap::{Args, Parser, Subcommand};
use jobmatch_cli::commands::{self, ResumeSource};
use jobmatch_cli::{
    AppConfig, AppError, ConsoleNavigator, ConsoleNotifier, DashboardPage, HomePage, JobsPage,
    Notifier, UploadPage,
};
use jobmatch_client::{
    ApiClient, ApplyRequest, CareerAdviceRequest, CompanyResearchRequest, FileSessionStore,
    MarketResearchRequest, MatchJobsRequest, ProfileUpdate, RegisterRequest,
};
use jobmatch_core::{JobFilter, JobId, ResumeId};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jobmatch")]
#[command(about = "AI-powered resume analysis and job matching", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./jobmatch.toml when present)
    #[arg(short, long, global = true, env = "JOBMATCH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the welcome screen and AI service status
    Home,
    /// Sign in and store the session tokens
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "JOBMATCH_PASSWORD")]
        password: String,
    },
    /// Create an account
    Register {
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "JOBMATCH_PASSWORD")]
        password: String,
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
    },
    /// Sign out and forget the session tokens
    Logout,
    /// Show or update the current user's profile
    Profile {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
    },
    /// Upload a resume (PDF, DOC or DOCX up to 5MB) and analyze it
    Upload {
        file: PathBuf,
        /// Role to tailor the analysis to
        #[arg(long)]
        target_role: Option<String>,
    },
    /// Analyze resume text without uploading a file
    Analyze {
        #[command(flatten)]
        resume: ResumeArgs,
        #[arg(long)]
        target_role: Option<String>,
    },
    /// Manage uploaded resumes
    Resumes {
        #[command(subcommand)]
        action: ResumeAction,
    },
    /// Browse jobs
    Jobs {
        /// Search titles, companies and skills
        #[arg(short, long, default_value = "")]
        search: String,
        /// Location, or "remote" for remote jobs
        #[arg(short, long, default_value = "")]
        location: String,
        /// Collect the latest jobs before listing
        #[arg(long)]
        collect: bool,
    },
    /// Show a single job
    Job { id: String },
    /// Apply to a job
    Apply {
        id: String,
        #[arg(long)]
        cover_letter: Option<String>,
        #[arg(long)]
        resume_id: Option<String>,
    },
    /// List your job applications
    Applications,
    /// Show the dashboard
    Dashboard,
    /// Find jobs matching a resume
    Match {
        #[command(flatten)]
        resume: ResumeArgs,
        /// Preference as key=value (repeatable)
        #[arg(long = "pref", value_parser = parse_preference)]
        preferences: Vec<(String, String)>,
        #[arg(long)]
        use_perplexity: bool,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get career advice for a resume
    Advice {
        #[command(flatten)]
        resume: ResumeArgs,
        #[arg(long)]
        goals: Option<String>,
        #[arg(long)]
        challenges: Option<String>,
        /// Preferred industry (repeatable)
        #[arg(long = "industry")]
        industries: Vec<String>,
    },
    /// Research a job market
    Market {
        industry: String,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        timeframe: Option<String>,
    },
    /// Research a company
    Company {
        name: String,
        #[arg(long)]
        detailed: bool,
    },
    /// Collect the latest jobs from external sources
    Collect,
    /// Show AI service status
    Status,
}

#[derive(Subcommand)]
enum ResumeAction {
    /// List uploaded resumes
    List,
    /// Show a resume's extracted text
    Get { id: String },
    /// Delete a resume
    Delete { id: String },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct ResumeArgs {
    /// Id of a resume stored by the backend
    #[arg(long)]
    resume_id: Option<String>,
    /// Plain-text resume file
    #[arg(long)]
    text_file: Option<PathBuf>,
    /// Resume text given inline
    #[arg(long)]
    text: Option<String>,
}

fn parse_preference(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected key=value, got {}", raw))
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(base_url = %config.api.base_url, "Configuration loaded");

    let session = FileSessionStore::new(&config.session.path).into_context();
    let client = ApiClient::new(config.client_config(), session, Arc::new(ConsoleNavigator))?;
    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);

    let ok = run(cli.command, client, notifier).await;
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Run one command. Errors are logged and reported, never propagated.
async fn run(command: Commands, client: ApiClient, notifier: Arc<dyn Notifier>) -> bool {
    let now = chrono::Utc::now();

    let output = match command {
        Commands::Home => {
            let mut page = HomePage::new(client);
            page.load().await;
            Ok(page.render())
        }
        Commands::Upload { file, target_role } => {
            let mut page = UploadPage::new(client, notifier).with_target_role(target_role);
            let analyzed = page.submit(&file).await;
            print!("{}", page.render());
            return analyzed;
        }
        Commands::Jobs {
            search,
            location,
            collect,
        } => {
            let mut page = JobsPage::new(client, notifier)
                .with_filter(JobFilter::new(&search, &location));
            let ok = if collect {
                page.collect().await
            } else {
                page.load().await
            };
            print!("{}", page.render(now));
            return ok;
        }
        Commands::Collect => {
            let mut page = JobsPage::new(client, notifier);
            let ok = page.collect().await;
            print!("{}", page.render(now));
            return ok;
        }
        Commands::Dashboard => {
            let mut page = DashboardPage::new();
            page.load(now).await;
            Ok(page.render(now))
        }
        Commands::Login { email, password } => commands::login(&client, &email, &password).await,
        Commands::Register {
            email,
            password,
            first_name,
            last_name,
        } => {
            let request = RegisterRequest {
                email,
                password,
                first_name,
                last_name,
            };
            commands::register(&client, &request).await
        }
        Commands::Logout => commands::logout(&client).await,
        Commands::Profile {
            email,
            first_name,
            last_name,
        } => {
            let update = (email.is_some() || first_name.is_some() || last_name.is_some()).then(
                || ProfileUpdate {
                    email,
                    first_name,
                    last_name,
                    ..ProfileUpdate::default()
                },
            );
            commands::profile(&client, update).await
        }
        Commands::Analyze {
            resume,
            target_role,
        } => match resume_source(&resume) {
            Ok(source) => commands::analyze(&client, source, target_role).await,
            Err(e) => Err(e),
        },
        Commands::Resumes { action } => match action {
            ResumeAction::List => commands::list_resumes(&client).await,
            ResumeAction::Get { id } => commands::show_resume(&client, &ResumeId::new(id)).await,
            ResumeAction::Delete { id } => {
                commands::delete_resume(&client, &ResumeId::new(id)).await
            }
        },
        Commands::Job { id } => commands::show_job(&client, &JobId::new(id), now).await,
        Commands::Apply {
            id,
            cover_letter,
            resume_id,
        } => {
            let request = ApplyRequest {
                cover_letter,
                resume_id: resume_id.map(ResumeId::new),
            };
            commands::apply(&client, &JobId::new(id), &request).await
        }
        Commands::Applications => commands::applications(&client).await,
        Commands::Match {
            resume,
            preferences,
            use_perplexity,
            limit,
        } => match resume_text(&client, &resume).await {
            Ok(text) => {
                let mut request = MatchJobsRequest::new(text);
                for (key, value) in preferences {
                    request.preferences.insert(key, preference_value(&value));
                }
                request.use_perplexity = use_perplexity.then_some(true);
                request.limit = limit;
                commands::match_jobs(&client, &request).await
            }
            Err(e) => Err(e),
        },
        Commands::Advice {
            resume,
            goals,
            challenges,
            industries,
        } => match resume_text(&client, &resume).await {
            Ok(text) => {
                let request = CareerAdviceRequest {
                    resume_text: text,
                    career_goals: goals,
                    current_challenges: challenges,
                    preferred_industries: industries,
                };
                commands::career_advice(&client, &request).await
            }
            Err(e) => Err(e),
        },
        Commands::Market {
            industry,
            location,
            role,
            timeframe,
        } => {
            let request = MarketResearchRequest {
                industry,
                location,
                role,
                timeframe,
            };
            commands::market_research(&client, &request).await
        }
        Commands::Company { name, detailed } => {
            let request = CompanyResearchRequest {
                company_name: name,
                detailed: detailed.then_some(true),
            };
            commands::company_research(&client, &request).await
        }
        Commands::Status => commands::status(&client).await,
    };

    match output {
        Ok(text) => {
            print!("{}", text);
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            notifier.error(&e.to_string());
            false
        }
    }
}

fn resume_source(args: &ResumeArgs) -> jobmatch_cli::Result<ResumeSource<'_>> {
    if let Some(id) = &args.resume_id {
        Ok(ResumeSource::Stored(ResumeId::new(id.as_str())))
    } else if let Some(path) = &args.text_file {
        Ok(ResumeSource::TextFile(path))
    } else if let Some(text) = &args.text {
        Ok(ResumeSource::Inline(text))
    } else {
        Err(AppError::InvalidArgument(
            "one of --resume-id, --text-file or --text is required".to_string(),
        ))
    }
}

async fn resume_text(client: &ApiClient, args: &ResumeArgs) -> jobmatch_cli::Result<String> {
    commands::resume_text(client, resume_source(args)?).await
}

/// Preference values that look like JSON scalars are sent typed.
fn preference_value(raw: &str) -> serde_json::Value {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value @ (serde_json::Value::Bool(_) | serde_json::Value::Number(_))) => value,
        _ => serde_json::Value::String(raw.to_string()),
    }
}
