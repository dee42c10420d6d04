use serde::Deserialize;

use super::{build_http_client, map_transport, BackendError, CheckOutcome, FactCheckBackend, HTTP_TIMEOUT_SECS};
use crate::pipeline::types::RawCandidate;

const DEFAULT_BASE_URL: &str = "https://idir.uta.edu/claimbuster";

/// ClaimBuster client: check-worthiness scoring (`score/text` endpoint).
/// The statement travels in the URL path; the key in a header.
pub struct ClaimScorerClient {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl ClaimScorerClient {
    pub fn new(base_url: &str, api_key: Option<String>, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client: build_http_client(timeout_secs),
        }
    }

    /// Client for the hosted ClaimBuster endpoint with the default timeout.
    pub fn hosted(api_key: Option<String>) -> Self {
        Self::new(DEFAULT_BASE_URL, api_key, HTTP_TIMEOUT_SECS)
    }

    fn fetch(&self, statement: &str) -> Result<CheckOutcome, BackendError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(BackendError::MissingCredential("CLAIM_BUSTER_API_KEY"))?;

        // Path-segment encoding via Url, so statements with slashes or
        // spaces stay a single segment.
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| BackendError::Http(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| BackendError::Http("base URL cannot hold a path".to_string()))?
            .pop_if_empty()
            .extend(["api", "v2", "score", "text", statement]);

        let response = self
            .client
            .get(url)
            .header("x-api-key", key)
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

impl FactCheckBackend for ClaimScorerClient {
    fn name(&self) -> &'static str {
        "claim-scorer"
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
struct ScoreResponse {
    #[serde(default)]
    results: Vec<ScoredResult>,
}

#[derive(Deserialize)]
struct ScoredResult {
    score: f64,
}

/// Decode a `score/text` body. Absent `results` is a clean empty result.
fn decode(body: &str) -> Result<CheckOutcome, BackendError> {
    let parsed: ScoreResponse =
        serde_json::from_str(body).map_err(|e| BackendError::Malformed(e.to_string()))?;

    if parsed.results.is_empty() {
        return Ok(CheckOutcome::Empty);
    }

    let candidates = parsed
        .results
        .into_iter()
        .map(|result| RawCandidate::ClaimScore { score: result.score })
        .collect();

    Ok(CheckOutcome::Candidates(candidates))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_scored_results() {
        let body = r#"{"results": [{"text": "s", "score": 0.92}, {"score": 0.4}]}"#;
        match decode(body).unwrap() {
            CheckOutcome::Candidates(candidates) => {
                assert_eq!(candidates.len(), 2);
                assert_eq!(candidates[0], RawCandidate::ClaimScore { score: 0.92 });
                assert_eq!(candidates[1], RawCandidate::ClaimScore { score: 0.4 });
            }
            other => panic!("Expected candidates, got: {other:?}"),
        }
    }

    #[test]
    fn absent_results_is_empty() {
        assert!(matches!(decode("{}").unwrap(), CheckOutcome::Empty));
        assert!(matches!(decode(r#"{"results": []}"#).unwrap(), CheckOutcome::Empty));
    }

    #[test]
    fn result_missing_score_is_malformed() {
        let body = r#"{"results": [{"text": "no score"}]}"#;
        assert!(matches!(decode(body), Err(BackendError::Malformed(_))));
    }

    #[test]
    fn missing_key_fails_without_http_call() {
        let client = ClaimScorerClient::hosted(None);
        match client.check("anything") {
            CheckOutcome::Failed(BackendError::MissingCredential(var)) => {
                assert_eq!(var, "CLAIM_BUSTER_API_KEY");
            }
            other => panic!("Expected missing credential, got: {other:?}"),
        }
    }
}
