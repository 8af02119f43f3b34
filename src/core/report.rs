use crate::core::scoring::CompatibilityScorer;
use crate::core::signals::intersect;
use crate::models::{
    ActionRecommendation, ActionType, ConversationHighlight, InteractionSignal, MatchScore,
    Profile, RecommendedAction, Report, ReportType,
};

/// Signals at or above this strength are called out as notable exchanges
pub const NOTABLE_EXCHANGE_THRESHOLD: f64 = 0.6;

/// Minimum strength for a signal to seed a message opener
const MESSAGE_SIGNAL_THRESHOLD: f64 = 0.5;

// Recommendation tier boundaries. Evaluated independently: a score of 75
// triggers both the date suggestion and the message nudge.
const SUGGEST_DATE_SCORE: u8 = 70;
const SEND_MESSAGE_SCORE: u8 = 50;
const LEARN_MORE_SCORE: u8 = 30;

/// Assemble the post-party report for one participant
///
/// Walks every distinct partner touched by a signal involving the
/// subject. A partner the lookup cannot resolve is omitted silently;
/// the rest of the report still assembles. The match list is sorted by
/// overall score descending, partner id ascending on ties, and the
/// highlight and recommendation lists stay parallel to it.
pub fn assemble<F>(
    profile: &Profile,
    signals: &[InteractionSignal],
    report_type: ReportType,
    scorer: &CompatibilityScorer,
    partner_lookup: F,
) -> Report
where
    F: Fn(&str) -> Option<Profile>,
{
    let own: Vec<&InteractionSignal> = signals
        .iter()
        .filter(|s| s.involves(&profile.profile_id))
        .collect();

    // Distinct partners in order of first appearance.
    let mut partner_ids: Vec<&str> = Vec::new();
    for signal in &own {
        if let Some(partner_id) = signal.partner_of(&profile.profile_id) {
            if !partner_ids.contains(&partner_id) {
                partner_ids.push(partner_id);
            }
        }
    }

    let mut entries: Vec<(MatchScore, ConversationHighlight, ActionRecommendation)> = Vec::new();
    for partner_id in partner_ids {
        let Some(partner) = partner_lookup(partner_id) else {
            tracing::debug!(partner_id, "partner profile unavailable, omitting from report");
            continue;
        };

        let between: Vec<InteractionSignal> = own
            .iter()
            .filter(|s| s.involves(partner_id))
            .map(|s| (*s).clone())
            .collect();

        let match_score = scorer.score(profile, &partner, &between);
        let highlight = build_highlight(profile, &partner, &between);
        let recommendation = recommend(&partner, &match_score, &between);
        entries.push((match_score, highlight, recommendation));
    }

    entries.sort_by(|a, b| {
        b.0.overall_score
            .cmp(&a.0.overall_score)
            .then_with(|| a.0.partner_id.cmp(&b.0.partner_id))
    });

    let mut matches = Vec::with_capacity(entries.len());
    let mut highlights = Vec::new();
    let mut recommendations = Vec::new();
    for (match_score, highlight, recommendation) in entries {
        matches.push(match_score);
        if report_type == ReportType::Detailed {
            highlights.push(highlight);
            recommendations.push(recommendation);
        }
    }

    Report {
        report_id: uuid::Uuid::new_v4(),
        profile_id: profile.profile_id.clone(),
        report_type,
        matches,
        highlights,
        recommendations,
        generated_at: chrono::Utc::now(),
    }
}

fn build_highlight(
    profile: &Profile,
    partner: &Profile,
    between: &[InteractionSignal],
) -> ConversationHighlight {
    // Deduplicated union of shared topics and shared lifestyle entries.
    let mut shared_interests = intersect(profile.topics(), partner.topics());
    for item in intersect(&profile.values.lifestyle, &partner.values.lifestyle) {
        if !shared_interests.contains(&item) {
            shared_interests.push(item);
        }
    }

    ConversationHighlight {
        partner_id: partner.profile_id.clone(),
        highlights: between.iter().map(|s| s.context.clone()).collect(),
        shared_interests,
        notable_exchanges: between
            .iter()
            .filter(|s| s.strength >= NOTABLE_EXCHANGE_THRESHOLD)
            .map(|s| format!("{}: {}", s.signal_type, s.context))
            .collect(),
    }
}

fn recommend(
    partner: &Profile,
    match_score: &MatchScore,
    between: &[InteractionSignal],
) -> ActionRecommendation {
    let overall = match_score.overall_score;
    let mut actions = Vec::new();

    if overall >= SUGGEST_DATE_SCORE {
        actions.push(RecommendedAction {
            action_type: ActionType::SuggestDate,
            content: format!("Ask {} out on a proper date", partner.name),
            rationale: format!("A compatibility score of {} is a strong signal", overall),
        });
    }
    if overall >= SEND_MESSAGE_SCORE {
        let content = between
            .iter()
            .filter(|s| s.strength >= MESSAGE_SIGNAL_THRESHOLD)
            .max_by(|a, b| {
                a.strength
                    .partial_cmp(&b.strength)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|s| {
                format!(
                    "Message {} and pick up where you left off: {}",
                    partner.name, s.context
                )
            })
            .unwrap_or_else(|| format!("Send {} a message to keep the conversation going", partner.name));

        actions.push(RecommendedAction {
            action_type: ActionType::SendMessage,
            content,
            rationale: "You found enough common ground to keep talking".to_string(),
        });
    }
    if (LEARN_MORE_SCORE..SEND_MESSAGE_SCORE).contains(&overall) {
        actions.push(RecommendedAction {
            action_type: ActionType::LearnMore,
            content: format!("Spend more time getting to know {}", partner.name),
            rationale: "Some overlap showed up, but not enough to call it yet".to_string(),
        });
    }
    if overall < LEARN_MORE_SCORE {
        actions.push(RecommendedAction {
            action_type: ActionType::Pass,
            content: "This one does not look like a fit".to_string(),
            rationale: format!("A score of {} suggests little common ground", overall),
        });
    }

    ActionRecommendation {
        partner_id: partner.profile_id.clone(),
        actions,
    }
}
