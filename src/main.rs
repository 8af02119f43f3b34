use mingle_algo::config::Settings;
use mingle_algo::core::{PartyEngine, PartyError};
use mingle_algo::models::{PartyConfig, Profile, Report, ReportType, ScoringWeights};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{error, info};
use validator::Validate;

/// Party fixture read from disk: one config plus the participant roster
#[derive(Debug, Deserialize)]
struct PartyFixture {
    config: PartyConfig,
    participants: Vec<Profile>,
}

fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_level));

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Mingle pairing engine...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    let mut args = std::env::args().skip(1);
    let Some(fixture_path) = args.next() else {
        error!("usage: mingle-algo <party.json> [profile-id]");
        std::process::exit(2);
    };
    let subject_id = args.next();

    if let Err(e) = run(&settings, &fixture_path, subject_id.as_deref()) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(
    settings: &Settings,
    fixture_path: &str,
    subject_id: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(fixture_path)?;
    let fixture: PartyFixture = serde_json::from_str(&raw)?;
    fixture.config.validate()?;

    let weights = ScoringWeights {
        values: settings.scoring.weights.values,
        lifestyle: settings.scoring.weights.lifestyle,
        communication: settings.scoring.weights.communication,
        chemistry: settings.scoring.weights.chemistry,
        goal_bonus: settings.scoring.weights.goal_bonus,
    };
    let engine = PartyEngine::new(weights, settings.topics.to_pool());

    info!(
        party_id = %fixture.config.party_id,
        participants = fixture.participants.len(),
        rounds = fixture.config.round_count,
        "running party"
    );

    let results = engine.run_party(&fixture.config, &fixture.participants)?;

    let roster: HashMap<String, Profile> = fixture
        .participants
        .iter()
        .map(|p| (p.profile_id.clone(), p.clone()))
        .collect();
    let lookup = |id: &str| roster.get(id).cloned();

    let reports: Vec<Report> = match subject_id {
        Some(id) => {
            let profile = fixture
                .participants
                .iter()
                .find(|p| p.profile_id == id)
                .ok_or_else(|| PartyError::ProfileNotParticipant(id.to_string()))?;
            vec![engine.generate_report(profile, Some(&results), ReportType::Detailed, &lookup)?]
        }
        None => fixture
            .participants
            .iter()
            .map(|p| engine.generate_report(p, Some(&results), ReportType::Detailed, &lookup))
            .collect::<Result<Vec<_>, _>>()?,
    };

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}
