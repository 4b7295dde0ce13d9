//! Greedy consolidation of near-duplicate thoughts.
//!
//! One pass over the thought sequence in its current order: each
//! unprocessed thought seeds a group, every other unprocessed thought with
//! the same category and a word-set Jaccard similarity at or above the
//! threshold joins it. Groups of two or more collapse into a single
//! thought. The grouping is greedy and non-transitive: when A~B and B~C but
//! not A~C, the outcome depends on scan order. That matches the recorded
//! behavior of the engine and is kept as-is rather than replaced with
//! connected-component clustering.

use std::collections::{HashSet, VecDeque};

use psyche_types::thought::Thought;
use uuid::Uuid;

/// Factor applied to the group's average confidence, capped at 1.0.
const CONSOLIDATION_BOOST: f64 = 1.1;

/// Run one consolidation pass. Returns the number of groups merged.
///
/// The output holds one thought per group, in group-seed scan order;
/// single-member groups pass through unchanged.
pub fn run(thoughts: &mut VecDeque<Thought>, threshold: f64) -> usize {
    let originals: Vec<Thought> = thoughts.drain(..).collect();
    let mut processed = vec![false; originals.len()];
    let mut merged_groups = 0;

    let mut result: Vec<Thought> = Vec::with_capacity(originals.len());
    for i in 0..originals.len() {
        if processed[i] {
            continue;
        }
        processed[i] = true;

        let mut group = vec![i];
        for j in 0..originals.len() {
            if processed[j] {
                continue;
            }
            if similar(&originals[i], &originals[j], threshold) {
                processed[j] = true;
                group.push(j);
            }
        }

        if group.len() < 2 {
            result.push(originals[i].clone());
        } else {
            result.push(merge(&originals, &group));
            merged_groups += 1;
        }
    }

    thoughts.extend(result);
    merged_groups
}

/// Same category and word-set Jaccard similarity at or above the threshold.
fn similar(a: &Thought, b: &Thought, threshold: f64) -> bool {
    a.category == b.category && jaccard(&a.content, &b.content) >= threshold
}

/// Jaccard similarity of the lowercase whitespace-tokenized word sets.
fn jaccard(a: &str, b: &str) -> f64 {
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();
    let set_a: HashSet<&str> = a_lower.split_whitespace().collect();
    let set_b: HashSet<&str> = b_lower.split_whitespace().collect();
    if set_a.is_empty() && set_b.is_empty() {
        return 0.0;
    }
    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();
    intersection as f64 / union as f64
}

/// Collapse a group into one thought.
///
/// Content joins the member contents with `" | "` in discovery order;
/// confidence is the boosted average, clamped to 1.0; the timestamp is the
/// newest in the group; category and specialization come from the seed.
fn merge(originals: &[Thought], group: &[usize]) -> Thought {
    let seed = &originals[group[0]];
    let content = group
        .iter()
        .map(|&i| originals[i].content.as_str())
        .collect::<Vec<_>>()
        .join(" | ");
    let avg_confidence =
        group.iter().map(|&i| originals[i].confidence).sum::<f64>() / group.len() as f64;
    let timestamp = group
        .iter()
        .map(|&i| originals[i].timestamp)
        .max()
        .unwrap_or(seed.timestamp);

    Thought {
        id: Uuid::now_v7(),
        timestamp,
        content,
        category: seed.category.clone(),
        specialization: seed.specialization,
        confidence: (avg_confidence * CONSOLIDATION_BOOST).min(1.0),
    }
}
