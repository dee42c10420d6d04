use serde::{Deserialize, Serialize};

/// Sentinel provenance value for verdicts with no backing URL.
pub const NOT_APPLICABLE: &str = "N/A";

/// Status label emitted when a statement fails outside the fallback path.
pub const ERROR_STATUS: &str = "Error processing sentence";

/// At most this many candidates from one backend response become records.
/// Fixed policy to cap presentation volume; not configurable.
pub const MAX_CANDIDATES_PER_STATEMENT: usize = 3;

/// One checkable unit of text produced by segmentation.
///
/// `position` is the index among the raw split pieces, so dropped empty
/// pieces leave gaps and positions still reflect the input layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub text: String,
    pub position: usize,
}

/// Coarse polarity label for a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Uniform output unit: one statement checked against one source
/// (or the fallback classifier).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictRecord {
    pub statement: String,
    pub status: String,
    pub source: String,
    pub sentiment: Sentiment,
}

/// Labeled, scored output of the fallback classifier. Score in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    pub score: f64,
}

/// Backend-specific verdict shape, prior to normalization.
///
/// Each verification backend decodes its wire format into one of these
/// variants; `normalize::to_record` maps them to the uniform record.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCandidate {
    /// Google Fact Check: a reviewed claim with a textual rating.
    ReviewedClaim { rating: String, url: String },
    /// Wikipedia: a matching topic summary.
    TopicSummary { extract: String, page_url: String },
    /// News feed: a related article headline.
    Headline { title: String, url: String },
    /// Claim scorer: a check-worthiness score, no provenance URL.
    ClaimScore { score: f64 },
    /// Fallback classifier output.
    Classified { label: String, score: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_record_serializes_to_plain_json() {
        let record = VerdictRecord {
            statement: "The earth is round".to_string(),
            status: "True".to_string(),
            source: "http://x".to_string(),
            sentiment: Sentiment::Neutral,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"statement\":\"The earth is round\""));
        assert!(json.contains("\"sentiment\":\"Neutral\""));

        let back: VerdictRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn sentiment_labels_round_trip() {
        for s in [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral] {
            let json = serde_json::to_string(&s).unwrap();
            let back: Sentiment = serde_json::from_str(&json).unwrap();
            assert_eq!(back, s);
        }
    }
}
