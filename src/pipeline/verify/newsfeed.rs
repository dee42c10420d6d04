use serde::Deserialize;

use super::{build_http_client, map_transport, BackendError, CheckOutcome, FactCheckBackend, HTTP_TIMEOUT_SECS};
use crate::pipeline::types::RawCandidate;

const DEFAULT_BASE_URL: &str = "https://newsdata.io";

/// newsdata.io client: related-coverage headlines for a statement.
pub struct NewsFeedClient {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl NewsFeedClient {
    pub fn new(base_url: &str, api_key: Option<String>, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client: build_http_client(timeout_secs),
        }
    }

    /// Client for the hosted newsdata.io endpoint with the default timeout.
    pub fn hosted(api_key: Option<String>) -> Self {
        Self::new(DEFAULT_BASE_URL, api_key, HTTP_TIMEOUT_SECS)
    }

    fn fetch(&self, statement: &str) -> Result<CheckOutcome, BackendError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(BackendError::MissingCredential("NEWS_DATA_API_KEY"))?;

        let url = format!("{}/api/1/news", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("apikey", key), ("q", statement)])
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

impl FactCheckBackend for NewsFeedClient {
    fn name(&self) -> &'static str {
        "news-feed"
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
struct NewsResponse {
    #[serde(default)]
    results: Vec<Article>,
}

#[derive(Deserialize)]
struct Article {
    title: String,
    link: String,
}

/// Decode a `news` body. Absent `results` is a clean empty result; an
/// article without a title or link is a malformed response.
fn decode(body: &str) -> Result<CheckOutcome, BackendError> {
    let parsed: NewsResponse =
        serde_json::from_str(body).map_err(|e| BackendError::Malformed(e.to_string()))?;

    if parsed.results.is_empty() {
        return Ok(CheckOutcome::Empty);
    }

    let candidates = parsed
        .results
        .into_iter()
        .map(|article| RawCandidate::Headline {
            title: article.title,
            url: article.link,
        })
        .collect();

    Ok(CheckOutcome::Candidates(candidates))
}
