use serde::Deserialize;

use super::{build_http_client, map_transport, BackendError, CheckOutcome, FactCheckBackend, HTTP_TIMEOUT_SECS};
use crate::pipeline::types::RawCandidate;

const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org";

/// Wikipedia client: MediaWiki search, then REST summary of the top hit.
/// No credential required.
pub struct WikipediaClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl WikipediaClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: build_http_client(timeout_secs),
        }
    }

    /// Client for English Wikipedia with the default timeout.
    pub fn hosted() -> Self {
        Self::new(DEFAULT_BASE_URL, HTTP_TIMEOUT_SECS)
    }

    fn fetch(&self, statement: &str) -> Result<CheckOutcome, BackendError> {
        let title = match self.search(statement)? {
            Some(title) => title,
            None => return Ok(CheckOutcome::Empty),
        };

        // A summary miss for a found title is a clean empty result, not
        // an error: the top hit may have no REST summary.
        match self.summary(&title)? {
            Some(candidate) => Ok(CheckOutcome::Candidates(vec![candidate])),
            None => Ok(CheckOutcome::Empty),
        }
    }

    /// MediaWiki full-text search; returns the top hit's title.
    fn search(&self, statement: &str) -> Result<Option<String>, BackendError> {
        let url = format!("{}/w/api.php", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", statement),
                ("format", "json"),
            ])
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
        decode_search(&body)
    }

    /// REST page summary for a title. `None` when the page has none.
    fn summary(&self, title: &str) -> Result<Option<RawCandidate>, BackendError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| BackendError::Http(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| BackendError::Http("base URL cannot hold a path".to_string()))?
            .pop_if_empty()
            .extend(["api", "rest_v1", "page", "summary", title]);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| map_transport(&self.base_url, e))?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(BackendError::Status { status: status.as_u16(), body });
        }

        let body = response
            .text()
            .map_err(|e| map_transport(&self.base_url, e))?;
        decode_summary(&body).map(Some)
    }
}

impl FactCheckBackend for WikipediaClient {
    fn name(&self) -> &'static str {
        "wikipedia"
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
struct SearchResponse {
    #[serde(default)]
    query: SearchQuery,
}

#[derive(Deserialize, Default)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Deserialize)]
struct SummaryResponse {
    extract: String,
    content_urls: ContentUrls,
}

#[derive(Deserialize)]
struct ContentUrls {
    desktop: PlatformUrls,
}

#[derive(Deserialize)]
struct PlatformUrls {
    page: String,
}

fn decode_search(body: &str) -> Result<Option<String>, BackendError> {
    let parsed: SearchResponse =
        serde_json::from_str(body).map_err(|e| BackendError::Malformed(e.to_string()))?;
    Ok(parsed.query.search.into_iter().next().map(|hit| hit.title))
}

fn decode_summary(body: &str) -> Result<RawCandidate, BackendError> {
    let parsed: SummaryResponse =
        serde_json::from_str(body).map_err(|e| BackendError::Malformed(e.to_string()))?;
    Ok(RawCandidate::TopicSummary {
        extract: parsed.extract,
        page_url: parsed.content_urls.desktop.page,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_top_search_hit() {
        let body = r#"{"query": {"search": [
            {"title": "Earth"},
            {"title": "Flat Earth"}
        ]}}"#;
        assert_eq!(decode_search(body).unwrap(), Some("Earth".to_string()));
    }

    #[test]
    fn no_hits_is_none() {
        assert_eq!(decode_search(r#"{"query": {"search": []}}"#).unwrap(), None);
        assert_eq!(decode_search("{}").unwrap(), None);
    }

    #[test]
    fn decodes_summary_extract_and_page_url() {
        let body = r#"{
            "extract": "Earth is the third planet from the Sun.",
            "content_urls": {"desktop": {"page": "https://en.wikipedia.org/wiki/Earth"}}
        }"#;
        assert_eq!(
            decode_summary(body).unwrap(),
            RawCandidate::TopicSummary {
                extract: "Earth is the third planet from the Sun.".to_string(),
                page_url: "https://en.wikipedia.org/wiki/Earth".to_string(),
            }
        );
    }

    #[test]
    fn summary_missing_urls_is_malformed() {
        let body = r#"{"extract": "Earth..."}"#;
        assert!(matches!(decode_summary(body), Err(BackendError::Malformed(_))));
    }

    #[test]
    fn non_json_search_body_is_malformed() {
        assert!(matches!(decode_search("<html>"), Err(BackendError::Malformed(_))));
    }

    #[test]
    fn constructor_trims_trailing_slash() {
        let client = WikipediaClient::new("https://en.wikipedia.org/", 5);
        assert_eq!(client.base_url, "https://en.wikipedia.org");
    }
}
