use crate::models::{InteractionSignal, Profile, SignalType, TableAssignment};
use std::collections::HashMap;

/// Fixed strength of a matching relationship goal
const GOAL_MATCH_STRENGTH: f64 = 0.8;

/// Overlap strengths saturate at this many shared items
const OVERLAP_SATURATION: f64 = 3.0;

/// Derive interaction signals for one table
///
/// Considers every pair at the table (a 3-person table yields 3 pairs),
/// directed from the earlier profile in table order. A signal is only
/// emitted when its triggering overlap exists, so a table whose members
/// share nothing produces an empty list.
pub fn extract_signals(
    table: &TableAssignment,
    profiles: &HashMap<String, Profile>,
) -> Vec<InteractionSignal> {
    let mut signals = Vec::new();
    let ids = &table.profile_ids;

    for i in 0..ids.len() {
        for j in (i + 1)..ids.len() {
            let (Some(a), Some(b)) = (profiles.get(&ids[i]), profiles.get(&ids[j])) else {
                continue;
            };
            extract_pair(a, b, &mut signals);
        }
    }

    signals
}

fn extract_pair(a: &Profile, b: &Profile, out: &mut Vec<InteractionSignal>) {
    let shared_values = intersect(&a.values.important_values, &b.values.important_values);
    if !shared_values.is_empty() {
        out.push(signal(
            a,
            b,
            SignalType::SharedValue,
            overlap_strength(shared_values.len()),
            format!("Both value {}", shared_values.join(", ")),
        ));
    }

    let shared_lifestyle = intersect(&a.values.lifestyle, &b.values.lifestyle);
    if !shared_lifestyle.is_empty() {
        out.push(signal(
            a,
            b,
            SignalType::Rapport,
            overlap_strength(shared_lifestyle.len()),
            format!("Shared lifestyle: {}", shared_lifestyle.join(", ")),
        ));
    }

    let shared_topics = intersect(a.topics(), b.topics());
    if !shared_topics.is_empty() {
        out.push(signal(
            a,
            b,
            SignalType::Interest,
            overlap_strength(shared_topics.len()),
            format!("Lively conversation about {}", shared_topics.join(", ")),
        ));
    }

    if a.goal() == b.goal() {
        out.push(signal(
            a,
            b,
            SignalType::DeepConversation,
            GOAL_MATCH_STRENGTH,
            format!("Both are looking for a {} relationship", a.goal().label()),
        ));
    }
}

fn signal(
    a: &Profile,
    b: &Profile,
    signal_type: SignalType,
    strength: f64,
    context: String,
) -> InteractionSignal {
    InteractionSignal {
        from_profile_id: a.profile_id.clone(),
        to_profile_id: b.profile_id.clone(),
        signal_type,
        strength,
        context,
    }
}

/// Items of `left` also present in `right`, in `left` order
#[inline]
pub fn intersect(left: &[String], right: &[String]) -> Vec<String> {
    left.iter()
        .filter(|item| right.contains(*item))
        .cloned()
        .collect()
}

#[inline]
fn overlap_strength(shared_count: usize) -> f64 {
    (shared_count as f64 / OVERLAP_SATURATION).min(1.0)
}
