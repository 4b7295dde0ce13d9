//! Sentence-level thought extraction.
//!
//! At record time, each agent output is split into candidate sentences and
//! every sentence longer than ten characters becomes one thought, owned by
//! the output's specialization and tagged with that specialization's first
//! category. This is the word-heuristic extractor; there is no model call.

use psyche_types::event::AgentOutput;
use psyche_types::thought::Thought;

/// Minimum sentence length (in chars, after trimming) worth keeping.
const MIN_SENTENCE_CHARS: usize = 10;

/// Confidence assigned to freshly extracted thoughts. Consolidation later
/// adjusts it through the boosted-average path.
const EXTRACTION_CONFIDENCE: f64 = 0.7;

/// Extract thoughts from every agent output of an exchange.
pub fn extract_thoughts(outputs: &[AgentOutput]) -> Vec<Thought> {
    outputs
        .iter()
        .flat_map(|output| {
            let category = output.specialization.categories()[0];
            sentences(&output.content).map(move |sentence| {
                Thought::new(
                    sentence,
                    category,
                    Some(output.specialization),
                    EXTRACTION_CONFIDENCE,
                )
            })
        })
        .collect()
}

/// Split on sentence terminators, trim, and keep sentences longer than
/// [`MIN_SENTENCE_CHARS`].
fn sentences(content: &str) -> impl Iterator<Item = &str> {
    content
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use psyche_types::specialization::Specialization;

    #[test]
    fn test_extracts_one_thought_per_qualifying_sentence() {
        let outputs = vec![AgentOutput::new(
            Specialization::Cortex,
            "I sense curiosity. This is a thoughtful response about emotions and context awareness indeed.",
        )];
        let thoughts = extract_thoughts(&outputs);
        assert_eq!(thoughts.len(), 2);
        assert_eq!(thoughts[0].content, "I sense curiosity");
        assert!(thoughts[1].content.starts_with("This is a thoughtful"));
    }

    #[test]
    fn test_short_sentences_are_dropped() {
        let outputs = vec![AgentOutput::new(
            Specialization::Seer,
            "Yes. No! A noticeable upward trend?",
        )];
        let thoughts = extract_thoughts(&outputs);
        assert_eq!(thoughts.len(), 1);
        assert_eq!(thoughts[0].content, "A noticeable upward trend");
    }

    #[test]
    fn test_category_is_owners_first_tag() {
        let outputs = vec![AgentOutput::new(
            Specialization::Prudence,
            "That plan carries real downside exposure.",
        )];
        let thoughts = extract_thoughts(&outputs);
        assert_eq!(thoughts[0].category, "risk");
        assert_eq!(thoughts[0].specialization, Some(Specialization::Prudence));
        assert_eq!(thoughts[0].confidence, 0.7);
    }

    #[test]
    fn test_multiple_outputs_preserve_order() {
        let outputs = vec![
            AgentOutput::new(Specialization::Cortex, "A first analytical point."),
            AgentOutput::new(Specialization::DayDream, "A wilder associative leap."),
        ];
        let thoughts = extract_thoughts(&outputs);
        assert_eq!(thoughts.len(), 2);
        assert_eq!(thoughts[0].specialization, Some(Specialization::Cortex));
        assert_eq!(thoughts[1].specialization, Some(Specialization::DayDream));
    }

    #[test]
    fn test_empty_output_yields_no_thoughts() {
        let outputs = vec![AgentOutput::new(Specialization::House, "")];
        assert!(extract_thoughts(&outputs).is_empty());
    }
}
