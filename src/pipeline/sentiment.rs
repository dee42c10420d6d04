//! Lexical sentiment annotation.
//!
//! Scores a statement's polarity in [-1, 1] from a static weighted
//! lexicon, with a small negator set (flips the sign of the next
//! polarity word) and intensifier set (scales it). The final score is
//! the clamped mean weight of matched polarity words; no matches score
//! zero. Deterministic for a given statement and lexicon version.

use std::sync::LazyLock;

use regex::Regex;

use super::types::Sentiment;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z']+").expect("word pattern is valid"));

/// Weighted polarity words. Weights in [-1, 1].
static POLARITY: &[(&str, f64)] = &[
    // Positive
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("amazing", 0.9),
    ("wonderful", 0.9),
    ("best", 0.9),
    ("better", 0.5),
    ("love", 0.8),
    ("happy", 0.8),
    ("safe", 0.5),
    ("true", 0.4),
    ("accurate", 0.6),
    ("reliable", 0.6),
    ("honest", 0.7),
    ("trustworthy", 0.8),
    ("correct", 0.5),
    ("beneficial", 0.7),
    ("effective", 0.6),
    ("success", 0.7),
    ("successful", 0.7),
    ("win", 0.6),
    ("improve", 0.5),
    ("improved", 0.5),
    ("clean", 0.4),
    ("fair", 0.5),
    // Negative
    ("bad", -0.7),
    ("terrible", -1.0),
    ("awful", -0.9),
    ("horrible", -0.9),
    ("worst", -1.0),
    ("worse", -0.5),
    ("hate", -0.8),
    ("sad", -0.6),
    ("dangerous", -0.7),
    ("false", -0.4),
    ("fake", -0.7),
    ("hoax", -0.8),
    ("lie", -0.8),
    ("lies", -0.8),
    ("liar", -0.9),
    ("fraud", -0.9),
    ("scam", -0.9),
    ("misleading", -0.7),
    ("wrong", -0.5),
    ("harmful", -0.7),
    ("toxic", -0.7),
    ("corrupt", -0.8),
    ("fail", -0.6),
    ("failed", -0.6),
    ("failure", -0.7),
    ("crisis", -0.6),
    ("disaster", -0.8),
    ("threat", -0.6),
    ("dirty", -0.4),
    ("unfair", -0.5),
];

/// Words that flip the sign of the next polarity word.
static NEGATORS: &[&str] = &["not", "no", "never", "nobody", "nothing", "neither", "nor", "cannot", "isn't", "aren't", "wasn't", "don't", "doesn't", "didn't", "won't"];

/// Words that scale the next polarity word.
static INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.5),
    ("extremely", 2.0),
    ("really", 1.3),
    ("highly", 1.4),
    ("totally", 1.5),
    ("completely", 1.5),
    ("somewhat", 0.6),
    ("slightly", 0.5),
    ("barely", 0.4),
];

fn polarity_weight(word: &str) -> Option<f64> {
    POLARITY
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, weight)| *weight)
}

fn intensifier_factor(word: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, factor)| *factor)
}

/// Scalar polarity score for a statement, in [-1, 1].
pub fn polarity(statement: &str) -> f64 {
    let mut matched: Vec<f64> = Vec::new();
    let mut negated = false;
    let mut scale = 1.0;

    for token in WORD.find_iter(statement) {
        let word = token.as_str().to_lowercase();

        if NEGATORS.contains(&word.as_str()) {
            negated = !negated;
            continue;
        }
        if let Some(factor) = intensifier_factor(&word) {
            scale *= factor;
            continue;
        }
        if let Some(weight) = polarity_weight(&word) {
            let signed = if negated { -weight } else { weight };
            matched.push((signed * scale).clamp(-1.0, 1.0));
        }
        // Any non-modifier word ends a pending negation/intensifier run.
        negated = false;
        scale = 1.0;
    }

    if matched.is_empty() {
        return 0.0;
    }
    let mean = matched.iter().sum::<f64>() / matched.len() as f64;
    mean.clamp(-1.0, 1.0)
}

/// Map a statement to its coarse polarity label.
///
/// Score > 0 → Positive, score < 0 → Negative, score == 0 → Neutral.
/// Never fails; unrecognized text defaults to Neutral.
pub fn annotate(statement: &str) -> Sentiment {
    let score = polarity(statement);
    if score > 0.0 {
        Sentiment::Positive
    } else if score < 0.0 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
