use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::models::Priority;

/// Labelled request texts the classifier is trained on
const TRAINING_DATA: [(&str, Priority); 18] = [
    ("I need blood urgently", Priority::High),
    ("Patient is in critical condition", Priority::High),
    ("Please help quickly", Priority::High),
    ("Urgent requirement for O+ blood", Priority::High),
    ("Blood needed immediately due to accident", Priority::High),
    ("Emergency case, please respond fast", Priority::High),
    ("Blood required within 24 hours", Priority::Medium),
    ("Can arrange tomorrow", Priority::Medium),
    ("Surgery scheduled tomorrow, need blood", Priority::Medium),
    ("Required for planned operation", Priority::Medium),
    ("Can donate next morning", Priority::Medium),
    ("Blood needed by tomorrow noon", Priority::Medium),
    ("Not an emergency", Priority::Low),
    ("Need blood after 2 days", Priority::Low),
    ("Blood required for health check next week", Priority::Low),
    ("No urgency in donation", Priority::Low),
    ("Routine request, no emergency", Priority::Low),
    ("Low priority for blood needed", Priority::Low),
];

/// Tokens that force a High classification regardless of the Bayes scores
const EMERGENCY_KEYWORDS: [&str; 9] = [
    "emergency",
    "urgent",
    "accident",
    "heavy",
    "bleed",
    "bleeding",
    "critical",
    "surgery",
    "immediately",
];

/// Fixed evaluation order; the first label wins score ties
const LABELS: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

/// Multinomial naive Bayes over the training set, with Laplace smoothing
///
/// Trained once at first use; the model is immutable afterwards and safe to
/// share across request handlers.
struct PriorityModel {
    priors: HashMap<Priority, f64>,
    word_probs: HashMap<Priority, HashMap<String, f64>>,
    vocab: HashSet<String>,
}

static MODEL: LazyLock<PriorityModel> = LazyLock::new(PriorityModel::train);

impl PriorityModel {
    fn train() -> Self {
        let mut class_word_counts: HashMap<Priority, HashMap<String, usize>> = HashMap::new();
        let mut class_doc_counts: HashMap<Priority, usize> = HashMap::new();
        let mut vocab: HashSet<String> = HashSet::new();

        for (text, label) in TRAINING_DATA {
            let counts = class_word_counts.entry(label).or_default();
            for token in tokenize(text) {
                *counts.entry(token.clone()).or_insert(0) += 1;
                vocab.insert(token);
            }
            *class_doc_counts.entry(label).or_insert(0) += 1;
        }

        let total_docs = TRAINING_DATA.len() as f64;
        let priors = class_doc_counts
            .iter()
            .map(|(&label, &count)| (label, count as f64 / total_docs))
            .collect();

        let word_probs = LABELS
            .iter()
            .map(|&label| {
                let counts = &class_word_counts[&label];
                let total_words: usize = counts.values().sum();
                let denominator = (total_words + vocab.len()) as f64;
                let probs = vocab
                    .iter()
                    .map(|word| {
                        let count = counts.get(word).copied().unwrap_or(0);
                        (word.clone(), (count + 1) as f64 / denominator)
                    })
                    .collect();
                (label, probs)
            })
            .collect();

        Self {
            priors,
            word_probs,
            vocab,
        }
    }

    fn score(&self, label: Priority, tokens: &[String]) -> f64 {
        let mut score = self.priors[&label].ln();
        for token in tokens {
            if self.vocab.contains(token) {
                score += self.word_probs[&label][token].ln();
            }
        }
        score
    }
}

/// Lowercase alphanumeric tokens; punctuation splits words
pub fn tokenize(text: &str) -> Vec<String> {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Classify the urgency of a blood request text
///
/// A clear emergency keyword short-circuits to High; otherwise the naive
/// Bayes scores decide, with ties broken toward the higher urgency.
pub fn classify_priority(text: &str) -> Priority {
    let tokens = tokenize(text);

    if tokens
        .iter()
        .any(|t| EMERGENCY_KEYWORDS.contains(&t.as_str()))
    {
        return Priority::High;
    }

    let model = &*MODEL;
    let mut best = LABELS[0];
    let mut best_score = f64::NEG_INFINITY;
    for label in LABELS {
        let score = model.score(label, &tokens);
        if score > best_score {
            best = label;
            best_score = score;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizer_strips_punctuation_and_case() {
        assert_eq!(
            tokenize("Emergency case, please respond FAST!"),
            vec!["emergency", "case", "please", "respond", "fast"]
        );
        assert!(tokenize("").is_empty());
        assert!(tokenize("!?!").is_empty());
    }

    #[test]
    fn emergency_keywords_override() {
        assert_eq!(classify_priority("Heavy bleeding after accident"), Priority::High);
        assert_eq!(classify_priority("scheduled surgery next month"), Priority::High);
        assert_eq!(classify_priority("URGENT: respond fast"), Priority::High);
    }

    #[test]
    fn training_sentences_recover_their_labels() {
        assert_eq!(classify_priority("I need blood urgently"), Priority::High);
        assert_eq!(classify_priority("Can arrange tomorrow"), Priority::Medium);
        assert_eq!(
            classify_priority("Blood required for health check next week"),
            Priority::Low
        );
    }

    #[test]
    fn routine_requests_score_low() {
        assert_eq!(
            classify_priority("Routine request, no rush at all"),
            Priority::Low
        );
    }

    #[test]
    fn empty_text_defaults_to_high() {
        // With no usable tokens only the priors remain, and the tie breaks
        // toward the higher urgency
        assert_eq!(classify_priority(""), Priority::High);
    }
}
