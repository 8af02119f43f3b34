use crate::core::topics::TopicPool;
use crate::models::{ConversationContext, Profile, TableAssignment};
use std::collections::HashMap;

/// Suggested topic lists are cut to this length, theme included
pub const MAX_SUGGESTED_TOPICS: usize = 5;

/// When fewer than 2 topics are shared across a table, pad from the
/// global pool up to this many
pub const TOPIC_PAD_TARGET: usize = 3;

/// Build the conversation context for one table
///
/// Topic selection keeps any topic named by more than one participant
/// at the table, in first-mention order, pads from the global pool when
/// the table shares too little, prepends the party theme when set, and
/// truncates to [`MAX_SUGGESTED_TOPICS`].
pub fn build_context(
    table: &TableAssignment,
    profiles: &HashMap<String, Profile>,
    theme: Option<&str>,
    round_number: u32,
    pool: &TopicPool,
) -> ConversationContext {
    let members: Vec<&Profile> = table
        .profile_ids
        .iter()
        .filter_map(|id| profiles.get(id))
        .collect();

    // Count topic mentions across the table, preserving first-mention order.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for member in &members {
        for topic in member.topics() {
            match counts.iter().position(|(t, _)| *t == topic.as_str()) {
                Some(idx) => counts[idx].1 += 1,
                None => counts.push((topic.as_str(), 1)),
            }
        }
    }

    let mut suggested: Vec<String> = counts
        .iter()
        .filter(|(_, n)| *n > 1)
        .map(|(topic, _)| topic.to_string())
        .collect();

    if suggested.len() < 2 {
        for topic in &pool.topics {
            if suggested.len() >= TOPIC_PAD_TARGET {
                break;
            }
            if !suggested.iter().any(|t| t == topic) {
                suggested.push(topic.clone());
            }
        }
    }

    if let Some(theme) = theme {
        // Theme always leads, even when a table already shares it.
        suggested.insert(0, theme.to_string());
    }
    suggested.truncate(MAX_SUGGESTED_TOPICS);

    ConversationContext {
        table_id: table.table_id.clone(),
        participant_summaries: members.iter().map(|m| summarize(m)).collect(),
        suggested_topics: suggested,
        icebreaker: pool.icebreaker_for_round(round_number).to_string(),
    }
}

fn summarize(profile: &Profile) -> String {
    if profile.topics().is_empty() {
        format!("{} (goal: {})", profile.name, profile.goal().label())
    } else {
        format!(
            "{} (goal: {}) likes talking about {}",
            profile.name,
            profile.goal().label(),
            profile.topics().join(", ")
        )
    }
}
