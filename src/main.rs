use std::sync::Arc;

use tracing::{error, info};
use validator::Validate;

use rankitech_engine::config::Settings;
use rankitech_engine::models::{ConsultantProfile, JobDescription, MatchRequest};
use rankitech_engine::services::EmailSimulationNotifier;
use rankitech_engine::{MatchDispatcher, MatchSession};

/// Demo walkthrough: rank a small consultant batch against one JD and
/// push the digest through the simulated email notifier.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration ({}), using defaults", e);
        Settings::default()
    });

    // Initialize logging
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.logging.level)),
        )
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting RankItech matching engine...");

    let request = demo_request();
    if let Err(e) = request.validate() {
        error!("Invalid match request: {}", e);
        return Err(e.into());
    }

    let mut match_config = settings.matching.to_match_config();
    if let Some(k) = request.top_k {
        match_config.top_k = k;
    }

    let session = MatchSession::new(match_config);
    let dispatcher = MatchDispatcher::spawn(
        session,
        Arc::new(EmailSimulationNotifier),
        settings.dispatch.queue_depth,
    );

    let result = dispatcher
        .submit(
            request.job,
            request.profiles,
            Some(request.notify_email),
        )
        .await?;

    println!("\nMatching Job Description: {}\n", result.job_title);
    println!("Top {} Consultant Matches:\n", result.ranked.len());
    for (i, score) in result.ranked.iter().enumerate() {
        println!("{}. {} (ID: {})", i + 1, score.consultant_name, score.consultant_id);
        println!("   Matched: {}", score.matched_skills.join(", "));
        if !score.missing_skills.is_empty() {
            println!("   Missing: {}", score.missing_skills.join(", "));
        }
        println!(
            "   Match Score: {:.2} (skills {:.2}, experience {:.2})\n",
            score.overall, score.breakdown.skill_overlap, score.breakdown.experience
        );
    }

    dispatcher.shutdown().await;
    Ok(())
}

fn demo_request() -> MatchRequest {
    let job = JobDescription {
        id: "jd-demo".to_string(),
        title: "Senior Python Developer".to_string(),
        body: "We are looking for a senior Python developer to build \
               FastAPI services, containerized with Docker, backed by \
               PostgreSQL, with disciplined Git workflows."
            .to_string(),
        required_skills: ["python", "fastapi", "docker", "postgresql", "git"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        min_experience_years: Some(4.0),
    };

    let profiles = vec![
        consultant("C101", "Alice", &["python", "flask", "docker"], 5.0),
        consultant("C102", "Bob", &["java", "spring"], 3.0),
        consultant("C103", "Charlie", &["python", "fastapi", "docker", "git"], 4.0),
        consultant("C104", "David", &["python", "fastapi"], 2.0),
        consultant("C105", "Eva", &["python", "fastapi", "docker", "postgresql", "git"], 6.0),
    ];

    MatchRequest {
        job,
        profiles,
        notify_email: std::env::var("RANKITECH_NOTIFY_EMAIL")
            .unwrap_or_else(|_| "ar-requestor@example.com".to_string()),
        top_k: None,
    }
}

fn consultant(id: &str, name: &str, skills: &[&str], experience_years: f64) -> ConsultantProfile {
    ConsultantProfile {
        id: id.to_string(),
        name: name.to_string(),
        summary: String::new(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        experience_years,
    }
}
