//! Fallback text classifier.
//!
//! Invoked only when the selected backend yields no usable result for a
//! statement — the call is comparatively expensive, so the orchestrator
//! reaches it lazily, never preemptively.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::Classification;
use super::verify::build_http_client;

const DEFAULT_BASE_URL: &str =
    "https://api-inference.huggingface.co/models/distilbert-base-uncased";

/// Default request timeout. Higher than the backend timeout: a cold
/// endpoint may load the model on first call.
const TIMEOUT_SECS: u64 = 120;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Cannot reach classifier at {0}")]
    Connection(String),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("Classifier returned error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("Malformed classifier response: {0}")]
    Malformed(String),

    #[error("Classifier returned no classification")]
    EmptyResponse,
}

/// Always-available classifier consulted when a backend is inconclusive.
pub trait TextClassifier {
    /// Classify one statement into a label with a confidence in [0, 1].
    fn classify(&self, statement: &str) -> Result<Classification, ClassifierError>;
}

/// HTTP client for a Hugging Face-style text-classification endpoint.
pub struct InferenceClassifier {
    base_url: String,
    token: Option<String>,
    client: reqwest::blocking::Client,
}

impl InferenceClassifier {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client: build_http_client(TIMEOUT_SECS),
        }
    }

    /// Client for the hosted distilbert endpoint.
    pub fn hosted(token: Option<String>) -> Self {
        Self::new(DEFAULT_BASE_URL, token)
    }
}

/// Request body for the inference endpoint.
#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Deserialize)]
struct ScoredLabel {
    label: String,
    score: f64,
}

/// The endpoint answers `[[{label, score}, …]]` for single inputs on
/// some deployments and a flat `[{label, score}, …]` on others.
#[derive(Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Nested(Vec<Vec<ScoredLabel>>),
    Flat(Vec<ScoredLabel>),
}

/// Decode an inference body into the top-ranked classification.
fn decode(body: &str) -> Result<Classification, ClassifierError> {
    let parsed: InferenceResponse =
        serde_json::from_str(body).map_err(|e| ClassifierError::Malformed(e.to_string()))?;

    let top = match parsed {
        InferenceResponse::Nested(groups) => groups.into_iter().flatten().next(),
        InferenceResponse::Flat(labels) => labels.into_iter().next(),
    };

    top.map(|entry| Classification {
        label: entry.label,
        score: entry.score,
    })
    .ok_or(ClassifierError::EmptyResponse)
}

impl TextClassifier for InferenceClassifier {
    fn classify(&self, statement: &str) -> Result<Classification, ClassifierError> {
        let mut request = self
            .client
            .post(&self.base_url)
            .json(&InferenceRequest { inputs: statement });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|e| {
            if e.is_connect() {
                ClassifierError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                ClassifierError::Http(format!("Request to {} timed out", self.base_url))
            } else {
                ClassifierError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ClassifierError::Status { status: status.as_u16(), body });
        }

        let body = response
            .text()
            .map_err(|e| ClassifierError::Http(e.to_string()))?;
        decode(&body)
    }
}

/// Mock classifier for testing — returns a configurable result and
/// records how many times it was called.
pub struct MockClassifier {
    label: String,
    score: f64,
    fail: bool,
    calls: Mutex<usize>,
}

impl MockClassifier {
    pub fn new(label: &str, score: f64) -> Self {
        Self {
            label: label.to_string(),
            score,
            fail: false,
            calls: Mutex::new(0),
        }
    }

    /// Mock that fails every call.
    pub fn failing() -> Self {
        Self {
            label: String::new(),
            score: 0.0,
            fail: true,
            calls: Mutex::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().expect("mock lock poisoned")
    }
}

impl TextClassifier for MockClassifier {
    fn classify(&self, _statement: &str) -> Result<Classification, ClassifierError> {
        *self.calls.lock().expect("mock lock poisoned") += 1;
        if self.fail {
            return Err(ClassifierError::EmptyResponse);
        }
        Ok(Classification {
            label: self.label.clone(),
            score: self.score,
        })
    }
}
