//! Mapping from backend-specific candidates to uniform verdict records.

use super::types::{RawCandidate, Sentiment, VerdictRecord, ERROR_STATUS, NOT_APPLICABLE};

/// Normalize one raw candidate into a verdict record.
pub fn to_record(statement: &str, candidate: &RawCandidate, sentiment: Sentiment) -> VerdictRecord {
    let (status, source) = match candidate {
        RawCandidate::ReviewedClaim { rating, url } => (rating.clone(), url.clone()),
        RawCandidate::TopicSummary { page_url, .. } => {
            ("Verified by Wikipedia".to_string(), page_url.clone())
        }
        RawCandidate::Headline { title, url } => {
            (format!("Related news: {title}"), url.clone())
        }
        RawCandidate::ClaimScore { score } => (
            format!("Potential misinformation (Score: {score})"),
            NOT_APPLICABLE.to_string(),
        ),
        RawCandidate::Classified { label, score } => (
            format!("Fallback: {label} (Score: {score:.2})"),
            NOT_APPLICABLE.to_string(),
        ),
    };

    VerdictRecord {
        statement: statement.to_string(),
        status,
        source,
        sentiment,
    }
}

/// Record emitted when a statement fails outside the fallback path.
pub fn error_record(statement: &str, sentiment: Sentiment) -> VerdictRecord {
    VerdictRecord {
        statement: statement.to_string(),
        status: ERROR_STATUS.to_string(),
        source: NOT_APPLICABLE.to_string(),
        sentiment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reviewed_claim_maps_rating_and_url() {
        let record = to_record(
            "The earth is round",
            &RawCandidate::ReviewedClaim {
                rating: "True".to_string(),
                url: "http://x".to_string(),
            },
            Sentiment::Neutral,
        );
        assert_eq!(record.statement, "The earth is round");
        assert_eq!(record.status, "True");
        assert_eq!(record.source, "http://x");
        assert_eq!(record.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn topic_summary_maps_to_verified_label() {
        let record = to_record(
            "Water boils at 100C",
            &RawCandidate::TopicSummary {
                extract: "Boiling point...".to_string(),
                page_url: "https://en.wikipedia.org/wiki/Boiling_point".to_string(),
            },
            Sentiment::Neutral,
        );
        assert_eq!(record.status, "Verified by Wikipedia");
        assert_eq!(record.source, "https://en.wikipedia.org/wiki/Boiling_point");
    }

    #[test]
    fn headline_prefixes_related_news() {
        let record = to_record(
            "s",
            &RawCandidate::Headline {
                title: "Fact checkers respond".to_string(),
                url: "https://news.example/a".to_string(),
            },
            Sentiment::Positive,
        );
        assert_eq!(record.status, "Related news: Fact checkers respond");
        assert_eq!(record.source, "https://news.example/a");
        assert_eq!(record.sentiment, Sentiment::Positive);
    }

    #[test]
    fn claim_score_has_no_source() {
        let record = to_record(
            "s",
            &RawCandidate::ClaimScore { score: 0.92 },
            Sentiment::Neutral,
        );
        assert_eq!(record.status, "Potential misinformation (Score: 0.92)");
        assert_eq!(record.source, NOT_APPLICABLE);
    }

    #[test]
    fn classified_formats_score_to_two_decimals() {
        let record = to_record(
            "s",
            &RawCandidate::Classified {
                label: "LABEL_0".to_string(),
                score: 0.8712,
            },
            Sentiment::Negative,
        );
        assert_eq!(record.status, "Fallback: LABEL_0 (Score: 0.87)");
        assert_eq!(record.source, NOT_APPLICABLE);
    }

    #[test]
    fn classified_pads_short_scores() {
        let record = to_record(
            "s",
            &RawCandidate::Classified {
                label: "LABEL_1".to_string(),
                score: 0.5,
            },
            Sentiment::Neutral,
        );
        assert_eq!(record.status, "Fallback: LABEL_1 (Score: 0.50)");
    }

    #[test]
    fn error_record_shape() {
        let record = error_record("s", Sentiment::Negative);
        assert_eq!(record.status, ERROR_STATUS);
        assert_eq!(record.source, NOT_APPLICABLE);
        assert_eq!(record.sentiment, Sentiment::Negative);
    }
}
