use crate::core::signals::intersect;
use crate::models::{InteractionSignal, MatchScore, Profile, ScoreBreakdown, ScoringWeights};

/// Flat bonus on communication fit when tones match, capped at 100
const TONE_MATCH_BONUS: u8 = 20;

/// Explanation used when two profiles share nothing at all
const NO_OVERLAP_EXPLANATION: &str =
    "You did not find much common ground on paper, but chemistry is not always on paper.";

/// Weighted pairwise compatibility scorer
///
/// Scoring formula:
/// ```text
/// overall = round(
///     values_alignment        * 0.30 +   # shared important values
///     lifestyle_compatibility * 0.20 +   # shared lifestyle entries
///     communication_fit       * 0.25 +   # shared topics, +20 on tone match
///     interest_chemistry      * 0.25 +   # mean signal strength
///     goal_bonus                         # 10 when relationship goals match
/// ).min(100)
/// ```
/// Every sub-score comes from set intersections and equality checks, so
/// the result is symmetric in its two profile arguments (only the
/// explanation wording depends on which side is the report subject).
#[derive(Debug, Clone)]
pub struct CompatibilityScorer {
    weights: ScoringWeights,
}

impl CompatibilityScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Score one partner against the report subject
    ///
    /// `signals_between` are the signals touching this pair (either
    /// direction) accumulated over all rounds.
    pub fn score(
        &self,
        user: &Profile,
        partner: &Profile,
        signals_between: &[InteractionSignal],
    ) -> MatchScore {
        let shared_values = intersect(&user.values.important_values, &partner.values.important_values);
        let values_alignment = ratio_score(
            shared_values.len(),
            user.values.important_values.len(),
            partner.values.important_values.len(),
        );

        let shared_lifestyle = intersect(&user.values.lifestyle, &partner.values.lifestyle);
        let lifestyle_compatibility = ratio_score(
            shared_lifestyle.len(),
            user.values.lifestyle.len(),
            partner.values.lifestyle.len(),
        );

        let shared_topics = intersect(user.topics(), partner.topics());
        let mut communication_fit =
            ratio_score(shared_topics.len(), user.topics().len(), partner.topics().len());
        if user.communication_style.tone == partner.communication_style.tone {
            communication_fit = communication_fit.saturating_add(TONE_MATCH_BONUS).min(100);
        }

        let interest_chemistry = if signals_between.is_empty() {
            0
        } else {
            let mean = signals_between.iter().map(|s| s.strength).sum::<f64>()
                / signals_between.len() as f64;
            (mean * 100.0).round() as u8
        };

        let goal_match = user.goal() == partner.goal();
        let goal_bonus = if goal_match { self.weights.goal_bonus } else { 0.0 };

        let weighted = values_alignment as f64 * self.weights.values
            + lifestyle_compatibility as f64 * self.weights.lifestyle
            + communication_fit as f64 * self.weights.communication
            + interest_chemistry as f64 * self.weights.chemistry
            + goal_bonus;
        let overall_score = weighted.round().min(100.0) as u8;

        MatchScore {
            partner_id: partner.profile_id.clone(),
            partner_name: partner.name.clone(),
            overall_score,
            breakdown: ScoreBreakdown {
                values_alignment,
                lifestyle_compatibility,
                communication_fit,
                interest_chemistry,
            },
            explanation: build_explanation(
                &shared_values,
                &shared_lifestyle,
                &shared_topics,
                goal_match.then(|| user.goal().label()),
            ),
        }
    }
}

impl Default for CompatibilityScorer {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Percentage of shared items over the larger of the two lists
///
/// The denominator is guarded with `max(.., 1)` so empty lists score 0
/// instead of faulting.
#[inline]
fn ratio_score(shared: usize, user_total: usize, partner_total: usize) -> u8 {
    let denominator = user_total.max(partner_total).max(1) as f64;
    (100.0 * shared as f64 / denominator).round() as u8
}

fn build_explanation(
    shared_values: &[String],
    shared_lifestyle: &[String],
    shared_topics: &[String],
    matched_goal: Option<&str>,
) -> String {
    let mut clauses = Vec::new();
    if !shared_values.is_empty() {
        clauses.push(format!("You both value {}.", shared_values.join(", ")));
    }
    if !shared_lifestyle.is_empty() {
        clauses.push(format!(
            "Your lifestyles overlap on {}.",
            shared_lifestyle.join(", ")
        ));
    }
    if !shared_topics.is_empty() {
        clauses.push(format!(
            "You both enjoy talking about {}.",
            shared_topics.join(", ")
        ));
    }
    if let Some(goal) = matched_goal {
        clauses.push(format!("You are both looking for a {} relationship.", goal));
    }

    if clauses.is_empty() {
        NO_OVERLAP_EXPLANATION.to_string()
    } else {
        clauses.join(" ")
    }
}
