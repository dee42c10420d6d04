use serde::Deserialize;

use super::{build_http_client, map_transport, BackendError, CheckOutcome, FactCheckBackend, HTTP_TIMEOUT_SECS};
use crate::pipeline::types::RawCandidate;

const DEFAULT_BASE_URL: &str = "https://factchecktools.googleapis.com";

/// Google Fact Check Tools client (`claims:search` endpoint).
pub struct GoogleFactCheckClient {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl GoogleFactCheckClient {
    pub fn new(base_url: &str, api_key: Option<String>, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client: build_http_client(timeout_secs),
        }
    }

    /// Client for the hosted Google endpoint with the default timeout.
    pub fn hosted(api_key: Option<String>) -> Self {
        Self::new(DEFAULT_BASE_URL, api_key, HTTP_TIMEOUT_SECS)
    }

    fn fetch(&self, statement: &str) -> Result<CheckOutcome, BackendError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(BackendError::MissingCredential("GOOGLE_FACT_API_KEY"))?;

        let url = format!("{}/v1alpha1/claims:search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("query", statement), ("key", key)])
            .send()
            .map_err(|e| map_transport(&self.base_url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(BackendError::Status { status: status.as_u16(), body });
        }

        let body = response
            .text()
            .map_err(|e| map_transport(&self.base_url, e))?;
        decode(&body)
    }
}

impl FactCheckBackend for GoogleFactCheckClient {
    fn name(&self) -> &'static str {
        "google-fact-check"
    }

    fn check(&self, statement: &str) -> CheckOutcome {
        match self.fetch(statement) {
            Ok(outcome) => outcome,
            Err(e) => CheckOutcome::Failed(e),
        }
    }
}

// ── Wire models ──────────────────────────────────────────────

#[derive(Deserialize)]
struct ClaimsSearchResponse {
    #[serde(default)]
    claims: Vec<Claim>,
}

#[derive(Deserialize)]
struct Claim {
    #[serde(rename = "claimReview")]
    claim_review: Vec<ClaimReview>,
}

#[derive(Deserialize)]
struct ClaimReview {
    #[serde(rename = "textualRating")]
    textual_rating: String,
    url: String,
}

/// Decode a `claims:search` body. Absent `claims` is a clean empty
/// result; a claim without a review is a malformed response.
fn decode(body: &str) -> Result<CheckOutcome, BackendError> {
    let parsed: ClaimsSearchResponse =
        serde_json::from_str(body).map_err(|e| BackendError::Malformed(e.to_string()))?;

    if parsed.claims.is_empty() {
        return Ok(CheckOutcome::Empty);
    }

    let candidates = parsed
        .claims
        .into_iter()
        .map(|claim| {
            let review = claim
                .claim_review
                .into_iter()
                .next()
                .ok_or_else(|| BackendError::Malformed("claim without claimReview".to_string()))?;
            Ok(RawCandidate::ReviewedClaim {
                rating: review.textual_rating,
                url: review.url,
            })
        })
        .collect::<Result<Vec<_>, BackendError>>()?;

    Ok(CheckOutcome::Candidates(candidates))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_claims_into_reviewed_claims() {
        let body = r#"{
            "claims": [
                {"claimReview": [{"textualRating": "True", "url": "http://x"}]},
                {"claimReview": [
                    {"textualRating": "False", "url": "http://y"},
                    {"textualRating": "Mostly false", "url": "http://z"}
                ]}
            ]
        }"#;
        match decode(body).unwrap() {
            CheckOutcome::Candidates(candidates) => {
                assert_eq!(candidates.len(), 2);
                assert_eq!(
                    candidates[0],
                    RawCandidate::ReviewedClaim {
                        rating: "True".to_string(),
                        url: "http://x".to_string()
                    }
                );
                // Only the first review of each claim is used.
                assert_eq!(
                    candidates[1],
                    RawCandidate::ReviewedClaim {
                        rating: "False".to_string(),
                        url: "http://y".to_string()
                    }
                );
            }
            other => panic!("Expected candidates, got: {other:?}"),
        }
    }

    #[test]
    fn absent_claims_is_empty() {
        assert!(matches!(decode("{}").unwrap(), CheckOutcome::Empty));
        assert!(matches!(decode(r#"{"claims": []}"#).unwrap(), CheckOutcome::Empty));
    }

    #[test]
    fn claim_without_review_is_malformed() {
        let body = r#"{"claims": [{"claimReview": []}]}"#;
        match decode(body) {
            Err(BackendError::Malformed(_)) => {}
            other => panic!("Expected malformed, got: {other:?}"),
        }
    }

    #[test]
    fn review_missing_fields_is_malformed() {
        let body = r#"{"claims": [{"claimReview": [{"textualRating": "True"}]}]}"#;
        assert!(matches!(decode(body), Err(BackendError::Malformed(_))));
    }

    #[test]
    fn non_json_body_is_malformed() {
        assert!(matches!(decode("<html>"), Err(BackendError::Malformed(_))));
    }

    #[test]
    fn missing_key_fails_without_http_call() {
        let client = GoogleFactCheckClient::hosted(None);
        match client.check("anything") {
            CheckOutcome::Failed(BackendError::MissingCredential(var)) => {
                assert_eq!(var, "GOOGLE_FACT_API_KEY");
            }
            other => panic!("Expected missing credential, got: {other:?}"),
        }
    }

    #[test]
    fn constructor_trims_trailing_slash() {
        let client = GoogleFactCheckClient::new("http://localhost:9000/", None, 5);
        assert_eq!(client.base_url, "http://localhost:9000");
    }
}
