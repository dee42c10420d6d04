/// Application-level constants
pub const APP_NAME: &str = "EchoLens";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "echolens=info"
}

/// API credentials for the verification backends and the fallback
/// classifier, read from the process environment. Unset or blank
/// variables become `None`; a backend missing its credential fails that
/// call and routes to the fallback, it never aborts a run.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub google_fact_api_key: Option<String>,
    pub news_data_api_key: Option<String>,
    pub claim_buster_api_key: Option<String>,
    /// Override for the classifier endpoint (e.g. a local server).
    pub classifier_url: Option<String>,
    pub hf_api_token: Option<String>,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self {
            google_fact_api_key: non_blank_env("GOOGLE_FACT_API_KEY"),
            news_data_api_key: non_blank_env("NEWS_DATA_API_KEY"),
            claim_buster_api_key: non_blank_env("CLAIM_BUSTER_API_KEY"),
            classifier_url: non_blank_env("ECHOLENS_CLASSIFIER_URL"),
            hf_api_token: non_blank_env("HF_API_TOKEN"),
        }
    }
}

fn non_blank_env(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}
