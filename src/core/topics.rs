/// Default topic vocabulary used to pad thin suggestion lists
const DEFAULT_TOPICS: &[&str] = &[
    "travel",
    "food",
    "music",
    "movies",
    "books",
    "fitness",
    "art",
    "career dreams",
    "pets",
    "hidden talents",
];

/// Default icebreakers, rotated by round index
const DEFAULT_ICEBREAKERS: &[&str] = &[
    "What is the best trip you have ever taken?",
    "What small thing made you happy this week?",
    "If you could master any skill overnight, what would it be?",
    "What is a food you could eat every day?",
    "What did you want to be when you were ten?",
    "What is something you have changed your mind about recently?",
];

/// Static conversation vocabularies: the global topic pool and the
/// ordered icebreaker list
///
/// Immutable reference data, built once and passed by reference into
/// context building. Both lists can be overridden through `Settings`.
#[derive(Debug, Clone)]
pub struct TopicPool {
    pub topics: Vec<String>,
    pub icebreakers: Vec<String>,
}

impl TopicPool {
    /// Build a pool from custom vocabularies; empty lists fall back to
    /// the built-in defaults
    pub fn new(topics: Vec<String>, icebreakers: Vec<String>) -> Self {
        let defaults = Self::default();
        Self {
            topics: if topics.is_empty() { defaults.topics } else { topics },
            icebreakers: if icebreakers.is_empty() {
                defaults.icebreakers
            } else {
                icebreakers
            },
        }
    }

    /// Pick the icebreaker for a round
    ///
    /// Indexes the list by `(round - 1) mod len`, so the full list
    /// rotates through before any icebreaker repeats.
    pub fn icebreaker_for_round(&self, round_number: u32) -> &str {
        if self.icebreakers.is_empty() {
            return "";
        }
        let idx = round_number.saturating_sub(1) as usize % self.icebreakers.len();
        &self.icebreakers[idx]
    }
}

impl Default for TopicPool {
    fn default() -> Self {
        Self {
            topics: DEFAULT_TOPICS.iter().map(|t| t.to_string()).collect(),
            icebreakers: DEFAULT_ICEBREAKERS.iter().map(|i| i.to_string()).collect(),
        }
    }
}
