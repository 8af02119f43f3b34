// Model exports
pub mod domain;
pub mod report;

pub use domain::{
    CommunicationStyle, ConversationContext, InteractionSignal, PartyConfig, PartyResults,
    Profile, ProfileValues, RelationshipGoal, RoundResult, ScoringWeights, SignalType,
    TableAssignment, Tone,
};
pub use report::{
    ActionRecommendation, ActionType, ConversationHighlight, MatchScore, RecommendedAction,
    Report, ReportType, ScoreBreakdown,
};
