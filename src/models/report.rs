use serde::{Deserialize, Serialize};

/// The four weighted sub-scores behind an overall compatibility score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(rename = "valuesAlignment")]
    pub values_alignment: u8,
    #[serde(rename = "lifestyleCompatibility")]
    pub lifestyle_compatibility: u8,
    #[serde(rename = "communicationFit")]
    pub communication_fit: u8,
    #[serde(rename = "interestChemistry")]
    pub interest_chemistry: u8,
}

/// Scored compatibility with one partner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchScore {
    #[serde(rename = "partnerId")]
    pub partner_id: String,
    #[serde(rename = "partnerName")]
    pub partner_name: String,
    #[serde(rename = "overallScore")]
    pub overall_score: u8,
    pub breakdown: ScoreBreakdown,
    pub explanation: String,
}

/// What actually came up between the report subject and one partner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationHighlight {
    #[serde(rename = "partnerId")]
    pub partner_id: String,
    pub highlights: Vec<String>,
    #[serde(rename = "sharedInterests")]
    pub shared_interests: Vec<String>,
    #[serde(rename = "notableExchanges")]
    pub notable_exchanges: Vec<String>,
}

/// Kind of follow-up a recommendation suggests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    SuggestDate,
    SendMessage,
    LearnMore,
    Pass,
}

/// A single suggested follow-up action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedAction {
    #[serde(rename = "type")]
    pub action_type: ActionType,
    pub content: String,
    pub rationale: String,
}

/// Follow-up actions recommended for one partner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRecommendation {
    #[serde(rename = "partnerId")]
    pub partner_id: String,
    pub actions: Vec<RecommendedAction>,
}

/// Depth of a generated report
///
/// A summary report carries match scores only; a detailed report also
/// carries the per-partner highlight and recommendation lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Summary,
    Detailed,
}

/// Post-party compatibility report for one participant
///
/// `matches`, `highlights`, and `recommendations` are parallel lists,
/// one entry per partner that produced at least one signal, sorted by
/// `overall_score` descending (partner id ascending on ties).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "reportId")]
    pub report_id: uuid::Uuid,
    #[serde(rename = "profileId")]
    pub profile_id: String,
    #[serde(rename = "reportType")]
    pub report_type: ReportType,
    pub matches: Vec<MatchScore>,
    pub highlights: Vec<ConversationHighlight>,
    pub recommendations: Vec<ActionRecommendation>,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
}
