//! Pluggable fact-verification backends.
//!
//! One trait, one client per external source. Each client decodes its
//! wire format into [`RawCandidate`]s; the orchestrator never sees a
//! variant-specific field.

pub mod cache;
pub mod claimscorer;
pub mod google;
pub mod newsfeed;
pub mod wikipedia;

pub use cache::*;
pub use claimscorer::*;
pub use google::*;
pub use newsfeed::*;
pub use wikipedia::*;

use std::collections::VecDeque;
use std::str::FromStr;
use std::sync::Mutex;

use thiserror::Error;

use super::types::RawCandidate;
use crate::config::Credentials;

/// Default request timeout for backend HTTP calls.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Cannot reach {0}")]
    Connection(String),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("Backend returned error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("Malformed backend response: {0}")]
    Malformed(String),

    #[error("Missing API credential: {0}")]
    MissingCredential(&'static str),
}

impl BackendError {
    /// Whether the fallback classifier can recover this failure.
    ///
    /// Everything transport- or credential-shaped is recoverable; a
    /// malformed response body is not and yields an error record.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, BackendError::Malformed(_))
    }
}

/// Outcome of checking one statement against one backend.
#[derive(Debug)]
pub enum CheckOutcome {
    /// One or more usable candidates, in backend order.
    Candidates(Vec<RawCandidate>),
    /// The backend answered but found nothing for this statement.
    Empty,
    /// The call failed; recoverable failures route to the fallback.
    Failed(BackendError),
}

/// Common contract for all verification backends.
pub trait FactCheckBackend {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    /// Check one statement. Never panics; every failure mode is folded
    /// into the returned outcome.
    fn check(&self, statement: &str) -> CheckOutcome;
}

/// Which verification backend a run uses. Chosen once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    GoogleFactCheck,
    Wikipedia,
    NewsFeed,
    ClaimScorer,
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "google-fact-check" | "google" => Ok(BackendKind::GoogleFactCheck),
            "wikipedia" | "wiki" => Ok(BackendKind::Wikipedia),
            "news-feed" | "news" | "newsdata" => Ok(BackendKind::NewsFeed),
            "claim-scorer" | "claimbuster" => Ok(BackendKind::ClaimScorer),
            other => Err(format!("Unknown backend: {other}")),
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BackendKind::GoogleFactCheck => "google-fact-check",
            BackendKind::Wikipedia => "wikipedia",
            BackendKind::NewsFeed => "news-feed",
            BackendKind::ClaimScorer => "claim-scorer",
        };
        write!(f, "{name}")
    }
}

/// The backend selected for a run, dispatching to its concrete client.
pub enum SelectedBackend {
    GoogleFactCheck(GoogleFactCheckClient),
    Wikipedia(WikipediaClient),
    NewsFeed(NewsFeedClient),
    ClaimScorer(ClaimScorerClient),
}

impl SelectedBackend {
    /// Build the hosted client for a backend kind from run credentials.
    pub fn for_kind(kind: BackendKind, credentials: &Credentials) -> Self {
        match kind {
            BackendKind::GoogleFactCheck => SelectedBackend::GoogleFactCheck(
                GoogleFactCheckClient::hosted(credentials.google_fact_api_key.clone()),
            ),
            BackendKind::Wikipedia => SelectedBackend::Wikipedia(WikipediaClient::hosted()),
            BackendKind::NewsFeed => SelectedBackend::NewsFeed(NewsFeedClient::hosted(
                credentials.news_data_api_key.clone(),
            )),
            BackendKind::ClaimScorer => SelectedBackend::ClaimScorer(ClaimScorerClient::hosted(
                credentials.claim_buster_api_key.clone(),
            )),
        }
    }
}

impl FactCheckBackend for SelectedBackend {
    fn name(&self) -> &'static str {
        match self {
            SelectedBackend::GoogleFactCheck(c) => c.name(),
            SelectedBackend::Wikipedia(c) => c.name(),
            SelectedBackend::NewsFeed(c) => c.name(),
            SelectedBackend::ClaimScorer(c) => c.name(),
        }
    }

    fn check(&self, statement: &str) -> CheckOutcome {
        match self {
            SelectedBackend::GoogleFactCheck(c) => c.check(statement),
            SelectedBackend::Wikipedia(c) => c.check(statement),
            SelectedBackend::NewsFeed(c) => c.check(statement),
            SelectedBackend::ClaimScorer(c) => c.check(statement),
        }
    }
}

/// Shared blocking HTTP client with a request timeout.
pub(crate) fn build_http_client(timeout_secs: u64) -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()
        .expect("Failed to create HTTP client")
}

/// Map a transport-level reqwest failure into a backend error.
pub(crate) fn map_transport(base_url: &str, err: reqwest::Error) -> BackendError {
    if err.is_connect() {
        BackendError::Connection(base_url.to_string())
    } else if err.is_timeout() {
        BackendError::Http(format!("Request to {base_url} timed out"))
    } else {
        BackendError::Http(err.to_string())
    }
}

/// Mock backend for testing — replays a queue of outcomes and records
/// how many times it was called. Once the queue is exhausted it answers
/// `Empty`.
pub struct MockBackend {
    outcomes: Mutex<VecDeque<CheckOutcome>>,
    calls: Mutex<usize>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::returning(Vec::new())
    }

    pub fn returning(outcomes: Vec<CheckOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Mutex::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().expect("mock lock poisoned")
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl FactCheckBackend for MockBackend {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn check(&self, _statement: &str) -> CheckOutcome {
        *self.calls.lock().expect("mock lock poisoned") += 1;
        self.outcomes
            .lock()
            .expect("mock lock poisoned")
            .pop_front()
            .unwrap_or(CheckOutcome::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_kind_parses_names_and_aliases() {
        assert_eq!(
            "google-fact-check".parse::<BackendKind>().unwrap(),
            BackendKind::GoogleFactCheck
        );
        assert_eq!("google".parse::<BackendKind>().unwrap(), BackendKind::GoogleFactCheck);
        assert_eq!("Wikipedia".parse::<BackendKind>().unwrap(), BackendKind::Wikipedia);
        assert_eq!("wiki".parse::<BackendKind>().unwrap(), BackendKind::Wikipedia);
        assert_eq!("news-feed".parse::<BackendKind>().unwrap(), BackendKind::NewsFeed);
        assert_eq!("newsdata".parse::<BackendKind>().unwrap(), BackendKind::NewsFeed);
        assert_eq!("claimbuster".parse::<BackendKind>().unwrap(), BackendKind::ClaimScorer);
        assert!("rumor-mill".parse::<BackendKind>().is_err());
    }

    #[test]
    fn backend_kind_display_round_trips() {
        for kind in [
            BackendKind::GoogleFactCheck,
            BackendKind::Wikipedia,
            BackendKind::NewsFeed,
            BackendKind::ClaimScorer,
        ] {
            assert_eq!(kind.to_string().parse::<BackendKind>().unwrap(), kind);
        }
    }

    #[test]
    fn malformed_is_not_recoverable() {
        assert!(!BackendError::Malformed("bad shape".into()).is_recoverable());
        assert!(BackendError::Connection("http://x".into()).is_recoverable());
        assert!(BackendError::Status { status: 500, body: String::new() }.is_recoverable());
        assert!(BackendError::MissingCredential("KEY").is_recoverable());
    }

    #[test]
    fn selected_backend_builds_each_variant() {
        let credentials = Credentials::default();
        let names: Vec<&str> = [
            BackendKind::GoogleFactCheck,
            BackendKind::Wikipedia,
            BackendKind::NewsFeed,
            BackendKind::ClaimScorer,
        ]
        .into_iter()
        .map(|kind| SelectedBackend::for_kind(kind, &credentials).name())
        .collect();
        assert_eq!(names, vec!["google-fact-check", "wikipedia", "news-feed", "claim-scorer"]);
    }

    #[test]
    fn mock_backend_replays_queue_then_empty() {
        let mock = MockBackend::returning(vec![CheckOutcome::Failed(
            BackendError::Connection("http://x".into()),
        )]);
        assert!(matches!(mock.check("a"), CheckOutcome::Failed(_)));
        assert!(matches!(mock.check("b"), CheckOutcome::Empty));
        assert_eq!(mock.call_count(), 2);
    }
}
