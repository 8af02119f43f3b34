use serde::{Deserialize, Serialize};
use validator::Validate;

/// What a participant is ultimately looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipGoal {
    Casual,
    Dating,
    Serious,
    Marriage,
}

impl RelationshipGoal {
    /// Human-readable label used in signal contexts and explanations
    pub fn label(&self) -> &'static str {
        match self {
            RelationshipGoal::Casual => "casual",
            RelationshipGoal::Dating => "dating",
            RelationshipGoal::Serious => "serious",
            RelationshipGoal::Marriage => "marriage-minded",
        }
    }
}

/// Conversational tone of a participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Warm,
    Thoughtful,
    Playful,
    Direct,
    Calm,
}

/// A participant's stated values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileValues {
    #[serde(rename = "relationshipGoal")]
    pub relationship_goal: RelationshipGoal,
    #[serde(default)]
    pub lifestyle: Vec<String>,
    #[serde(rename = "importantValues", default)]
    pub important_values: Vec<String>,
}

/// How a participant likes to talk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunicationStyle {
    pub tone: Tone,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// Participant profile with the attributes used as scoring input
///
/// Profiles are treated as immutable for the duration of a party run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "profileId")]
    pub profile_id: String,
    pub name: String,
    pub values: ProfileValues,
    #[serde(rename = "communicationStyle")]
    pub communication_style: CommunicationStyle,
}

impl Profile {
    /// Helper to get the participant's conversation topics
    pub fn topics(&self) -> &[String] {
        &self.communication_style.topics
    }

    /// Helper to get the participant's relationship goal
    pub fn goal(&self) -> RelationshipGoal {
        self.values.relationship_goal
    }
}

/// Configuration of a single party run
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PartyConfig {
    #[serde(rename = "partyId")]
    pub party_id: String,
    #[serde(default)]
    pub theme: Option<String>,
    #[validate(range(min = 1))]
    #[serde(rename = "roundCount")]
    pub round_count: u32,
    #[validate(length(min = 2))]
    #[serde(rename = "participantIds")]
    pub participant_ids: Vec<String>,
}

/// One table of 2 (or 3, for the odd remainder) participants in a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableAssignment {
    #[serde(rename = "tableId")]
    pub table_id: String,
    #[serde(rename = "profileIds")]
    pub profile_ids: Vec<String>,
}

/// Conversation material generated for one table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationContext {
    #[serde(rename = "tableId")]
    pub table_id: String,
    #[serde(rename = "participantSummaries")]
    pub participant_summaries: Vec<String>,
    #[serde(rename = "suggestedTopics")]
    pub suggested_topics: Vec<String>,
    pub icebreaker: String,
}

/// Everything that happened in one round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundResult {
    #[serde(rename = "roundNumber")]
    pub round_number: u32,
    pub tables: Vec<TableAssignment>,
    pub contexts: Vec<ConversationContext>,
}

/// Kind of attribute overlap observed between two participants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalType {
    SharedValue,
    Rapport,
    Interest,
    DeepConversation,
}

impl std::fmt::Display for SignalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SignalType::SharedValue => "shared_value",
            SignalType::Rapport => "rapport",
            SignalType::Interest => "interest",
            SignalType::DeepConversation => "deep_conversation",
        };
        f.write_str(name)
    }
}

/// A directed, typed, strength-weighted observation that two profiles
/// share some attribute. Never mirrored: `from` is the earlier profile
/// in table order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionSignal {
    #[serde(rename = "fromProfileId")]
    pub from_profile_id: String,
    #[serde(rename = "toProfileId")]
    pub to_profile_id: String,
    #[serde(rename = "signalType")]
    pub signal_type: SignalType,
    pub strength: f64,
    pub context: String,
}

impl InteractionSignal {
    /// Whether this signal touches the given profile on either end
    pub fn involves(&self, profile_id: &str) -> bool {
        self.from_profile_id == profile_id || self.to_profile_id == profile_id
    }

    /// The other end of the signal, if the given profile is one end
    pub fn partner_of(&self, profile_id: &str) -> Option<&str> {
        if self.from_profile_id == profile_id {
            Some(&self.to_profile_id)
        } else if self.to_profile_id == profile_id {
            Some(&self.from_profile_id)
        } else {
            None
        }
    }
}

/// Immutable outcome of a full party run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyResults {
    #[serde(rename = "partyId")]
    pub party_id: String,
    pub rounds: Vec<RoundResult>,
    #[serde(rename = "interactionSignals")]
    pub interaction_signals: Vec<InteractionSignal>,
    #[serde(rename = "completedAt")]
    pub completed_at: chrono::DateTime<chrono::Utc>,
}

/// Scoring weights
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub values: f64,
    pub lifestyle: f64,
    pub communication: f64,
    pub chemistry: f64,
    pub goal_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            values: 0.30,
            lifestyle: 0.20,
            communication: 0.25,
            chemistry: 0.25,
            goal_bonus: 10.0,
        }
    }
}
