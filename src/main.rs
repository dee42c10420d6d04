//! Development driver at the presentation boundary: runs the pipeline
//! over argument or stdin text and prints the verdict list and status
//! aggregate as JSON.

use std::collections::BTreeMap;
use std::io::Read;

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use echolens::config::{self, Credentials};
use echolens::pipeline::{
    aggregate, BackendKind, CachedBackend, FactCheckPipeline, InferenceClassifier,
    SelectedBackend, VerdictRecord,
};

/// What the presentation layer receives.
#[derive(Serialize)]
struct RunReport {
    records: Vec<VerdictRecord>,
    aggregate: BTreeMap<String, usize>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let mut args = std::env::args().skip(1);
    let kind: BackendKind = match args.next() {
        Some(arg) => match arg.parse() {
            Ok(kind) => kind,
            Err(e) => {
                eprintln!("{e}");
                eprintln!("Usage: echolens <google-fact-check|wikipedia|news-feed|claim-scorer> [text...]");
                std::process::exit(2);
            }
        },
        None => {
            eprintln!("Usage: echolens <google-fact-check|wikipedia|news-feed|claim-scorer> [text...]");
            std::process::exit(2);
        }
    };

    // Remaining arguments are the text; with none, read stdin. A read
    // failure is an unavailable source: empty text, zero records.
    let rest: Vec<String> = args.collect();
    let text = if rest.is_empty() {
        let mut buffer = String::new();
        if std::io::stdin().read_to_string(&mut buffer).is_err() {
            tracing::warn!("Could not read stdin; treating input as empty");
            buffer.clear();
        }
        buffer
    } else {
        rest.join(" ")
    };

    let credentials = Credentials::from_env();
    let backend = CachedBackend::new(SelectedBackend::for_kind(kind, &credentials));
    let classifier = match &credentials.classifier_url {
        Some(url) => InferenceClassifier::new(url, credentials.hf_api_token.clone()),
        None => InferenceClassifier::hosted(credentials.hf_api_token.clone()),
    };

    let pipeline = FactCheckPipeline::new(&backend, &classifier);
    let records = pipeline.run(&text);
    let report = RunReport {
        aggregate: aggregate(&records),
        records,
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to encode report: {e}");
            std::process::exit(1);
        }
    }
}
