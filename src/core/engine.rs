use crate::core::context::build_context;
use crate::core::pairing::assign_tables;
use crate::core::report::assemble;
use crate::core::scoring::CompatibilityScorer;
use crate::core::signals::extract_signals;
use crate::core::topics::TopicPool;
use crate::models::{
    PartyConfig, PartyResults, Profile, Report, ReportType, RoundResult, ScoringWeights,
};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info};

/// Validation errors surfaced to the engine's callers
///
/// All are non-retryable: the engine performs no I/O and never retries.
#[derive(Debug, Error)]
pub enum PartyError {
    #[error("at least 2 participants are required to run a party, got {0}")]
    InsufficientParticipants(usize),

    #[error("party results are not available; the party has not completed")]
    PartyIncomplete,

    #[error("profile {0} did not participate in this party")]
    ProfileNotParticipant(String),
}

/// The pairing and compatibility engine
///
/// Pure and single-threaded: both entry points are functions over
/// in-memory values. The owning service is responsible for at-most-once
/// execution of a party run; the engine performs no idempotency
/// checking of its own.
#[derive(Debug, Clone)]
pub struct PartyEngine {
    scorer: CompatibilityScorer,
    topic_pool: TopicPool,
}

impl PartyEngine {
    pub fn new(weights: ScoringWeights, topic_pool: TopicPool) -> Self {
        Self {
            scorer: CompatibilityScorer::new(weights),
            topic_pool,
        }
    }

    pub fn with_defaults() -> Self {
        Self {
            scorer: CompatibilityScorer::with_default_weights(),
            topic_pool: TopicPool::default(),
        }
    }

    /// Run every round of a party and accumulate the results
    ///
    /// Each round assigns tables, builds per-table conversation
    /// contexts, and extracts pairwise interaction signals. Signals are
    /// accumulated in round order, so reruns over identical inputs
    /// produce identical results.
    pub fn run_party(
        &self,
        config: &PartyConfig,
        participants: &[Profile],
    ) -> Result<PartyResults, PartyError> {
        if participants.len() < 2 {
            return Err(PartyError::InsufficientParticipants(participants.len()));
        }

        let profiles: HashMap<String, Profile> = participants
            .iter()
            .map(|p| (p.profile_id.clone(), p.clone()))
            .collect();
        let theme = config.theme.as_deref();

        let mut rounds = Vec::with_capacity(config.round_count as usize);
        let mut interaction_signals = Vec::new();

        for round_number in 1..=config.round_count {
            let tables = assign_tables(participants, round_number);

            let mut contexts = Vec::with_capacity(tables.len());
            for table in &tables {
                contexts.push(build_context(
                    table,
                    &profiles,
                    theme,
                    round_number,
                    &self.topic_pool,
                ));
                interaction_signals.extend(extract_signals(table, &profiles));
            }

            debug!(
                round = round_number,
                tables = tables.len(),
                signals = interaction_signals.len(),
                "round complete"
            );
            rounds.push(RoundResult {
                round_number,
                tables,
                contexts,
            });
        }

        info!(
            party_id = %config.party_id,
            rounds = rounds.len(),
            signals = interaction_signals.len(),
            "party run complete"
        );

        Ok(PartyResults {
            party_id: config.party_id.clone(),
            rounds,
            interaction_signals,
            completed_at: chrono::Utc::now(),
        })
    }

    /// Generate the post-party compatibility report for one participant
    ///
    /// `results` being `None` means the party has not completed, which
    /// is a caller error. A participant whom no signal ever touched
    /// gets a valid empty report rather than an error; asserting actual
    /// participation is the caller's concern.
    pub fn generate_report<F>(
        &self,
        profile: &Profile,
        results: Option<&PartyResults>,
        report_type: ReportType,
        partner_lookup: F,
    ) -> Result<Report, PartyError>
    where
        F: Fn(&str) -> Option<Profile>,
    {
        let results = results.ok_or(PartyError::PartyIncomplete)?;

        let report = assemble(
            profile,
            &results.interaction_signals,
            report_type,
            &self.scorer,
            partner_lookup,
        );
        debug!(
            profile_id = %profile.profile_id,
            matches = report.matches.len(),
            "report generated"
        );
        Ok(report)
    }
}

impl Default for PartyEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CommunicationStyle, ProfileValues, RelationshipGoal, Tone};

    fn create_participant(id: usize) -> Profile {
        Profile {
            profile_id: format!("p{}", id),
            name: format!("Guest {}", id),
            values: ProfileValues {
                relationship_goal: if id % 2 == 0 {
                    RelationshipGoal::Serious
                } else {
                    RelationshipGoal::Dating
                },
                lifestyle: vec!["reading".to_string()],
                important_values: vec!["honesty".to_string()],
            },
            communication_style: CommunicationStyle {
                tone: Tone::Warm,
                topics: vec!["travel".to_string()],
            },
        }
    }

    fn create_config(round_count: u32, participant_count: usize) -> PartyConfig {
        PartyConfig {
            party_id: "party-1".to_string(),
            theme: None,
            round_count,
            participant_ids: (0..participant_count).map(|i| format!("p{}", i)).collect(),
        }
    }

    #[test]
    fn test_run_party_produces_one_result_per_round() {
        let engine = PartyEngine::with_defaults();
        let participants: Vec<Profile> = (0..6).map(create_participant).collect();

        let results = engine
            .run_party(&create_config(3, 6), &participants)
            .unwrap();

        assert_eq!(results.rounds.len(), 3);
        for (i, round) in results.rounds.iter().enumerate() {
            assert_eq!(round.round_number, i as u32 + 1);
            assert_eq!(round.tables.len(), round.contexts.len());
        }
        assert!(!results.interaction_signals.is_empty());
    }

    #[test]
    fn test_run_party_rejects_too_few_participants() {
        let engine = PartyEngine::with_defaults();
        let participants = vec![create_participant(0)];

        let err = engine
            .run_party(&create_config(1, 1), &participants)
            .unwrap_err();
        assert!(matches!(err, PartyError::InsufficientParticipants(1)));
    }

    #[test]
    fn test_run_party_is_deterministic() {
        let engine = PartyEngine::with_defaults();
        let participants: Vec<Profile> = (0..7).map(create_participant).collect();
        let config = create_config(4, 7);

        let first = engine.run_party(&config, &participants).unwrap();
        let second = engine.run_party(&config, &participants).unwrap();

        assert_eq!(
            serde_json::to_value(&first.rounds).unwrap(),
            serde_json::to_value(&second.rounds).unwrap()
        );
        assert_eq!(
            first.interaction_signals.len(),
            second.interaction_signals.len()
        );
    }

    #[test]
    fn test_generate_report_requires_results() {
        let engine = PartyEngine::with_defaults();
        let profile = create_participant(0);

        let err = engine
            .generate_report(&profile, None, ReportType::Detailed, |_| None)
            .unwrap_err();
        assert!(matches!(err, PartyError::PartyIncomplete));
    }

    #[test]
    fn test_untouched_profile_gets_empty_report() {
        let engine = PartyEngine::with_defaults();
        let participants: Vec<Profile> = (0..4).map(create_participant).collect();
        let results = engine
            .run_party(&create_config(1, 4), &participants)
            .unwrap();

        // A profile outside the party has no signals; still a valid report
        let outsider = create_participant(99);
        let report = engine
            .generate_report(&outsider, Some(&results), ReportType::Detailed, |_| None)
            .unwrap();

        assert!(report.matches.is_empty());
    }
}
