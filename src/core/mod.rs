// Core algorithm exports
pub mod context;
pub mod engine;
pub mod pairing;
pub mod report;
pub mod scoring;
pub mod signals;
pub mod topics;

pub use context::{build_context, MAX_SUGGESTED_TOPICS, TOPIC_PAD_TARGET};
pub use engine::{PartyEngine, PartyError};
pub use pairing::{assign_tables, seeded_permutation};
pub use report::{assemble, NOTABLE_EXCHANGE_THRESHOLD};
pub use scoring::CompatibilityScorer;
pub use signals::extract_signals;
pub use topics::TopicPool;
