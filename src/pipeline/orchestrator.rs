use thiserror::Error;

use super::fallback::{ClassifierError, TextClassifier};
use super::normalize::{error_record, to_record};
use super::segment::segment;
use super::sentiment::annotate;
use super::types::{RawCandidate, Sentiment, Statement, VerdictRecord, MAX_CANDIDATES_PER_STATEMENT};
use super::verify::{BackendError, CheckOutcome, FactCheckBackend};
use crate::source::TextSource;

/// Failure of a single statement outside the fallback path.
///
/// These never abort the run: the loop converts each into one
/// error record and continues.
#[derive(Error, Debug)]
enum StatementError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

/// Fact-verification pipeline over one backend and one fallback
/// classifier.
///
/// Coordinates: segment → per statement (annotate → check → normalize
/// or fall back) → ordered verdict list. The backend selection is fixed
/// for the pipeline's lifetime; statements are processed sequentially.
pub struct FactCheckPipeline<'a, B: FactCheckBackend, C: TextClassifier> {
    backend: &'a B,
    classifier: &'a C,
}

impl<'a, B: FactCheckBackend, C: TextClassifier> FactCheckPipeline<'a, B, C> {
    pub fn new(backend: &'a B, classifier: &'a C) -> Self {
        Self { backend, classifier }
    }

    /// Run the pipeline over a block of raw text.
    ///
    /// Every non-empty statement yields at least one record: up to
    /// three from a conclusive backend, exactly one from the fallback,
    /// or exactly one error record. Empty input yields no records.
    pub fn run(&self, text: &str) -> Vec<VerdictRecord> {
        let statements = segment(text);
        tracing::info!(
            backend = self.backend.name(),
            statements = statements.len(),
            "Fact-check run started"
        );

        let mut records = Vec::new();
        for statement in &statements {
            let sentiment = annotate(&statement.text);
            match self.resolve(statement, sentiment) {
                Ok(resolved) => records.extend(resolved),
                Err(e) => {
                    tracing::warn!(
                        position = statement.position,
                        error = %e,
                        "Statement failed outside the fallback path"
                    );
                    records.push(error_record(&statement.text, sentiment));
                }
            }
        }

        tracing::info!(records = records.len(), "Fact-check run finished");
        records
    }

    /// Fetch text from a source and run the pipeline over it.
    ///
    /// Acquisition failures surface as empty text, so a dead source
    /// produces zero records rather than an error.
    pub fn run_source(&self, source: &dyn TextSource) -> Vec<VerdictRecord> {
        self.run(&source.fetch_text())
    }

    /// Resolve one statement into its verdict records.
    ///
    /// An `Err` here means the statement failed outside the fallback
    /// path (malformed backend response, classifier failure); the
    /// caller converts it into a single error record.
    fn resolve(
        &self,
        statement: &Statement,
        sentiment: Sentiment,
    ) -> Result<Vec<VerdictRecord>, StatementError> {
        match self.backend.check(&statement.text) {
            CheckOutcome::Candidates(candidates) if !candidates.is_empty() => {
                tracing::debug!(
                    position = statement.position,
                    candidates = candidates.len(),
                    "Backend answered"
                );
                Ok(candidates
                    .iter()
                    .take(MAX_CANDIDATES_PER_STATEMENT)
                    .map(|candidate| to_record(&statement.text, candidate, sentiment))
                    .collect())
            }
            CheckOutcome::Candidates(_) | CheckOutcome::Empty => {
                tracing::debug!(position = statement.position, "Backend inconclusive, falling back");
                self.fall_back(statement, sentiment)
            }
            CheckOutcome::Failed(e) if e.is_recoverable() => {
                tracing::debug!(
                    position = statement.position,
                    error = %e,
                    "Backend unusable, falling back"
                );
                self.fall_back(statement, sentiment)
            }
            CheckOutcome::Failed(e) => Err(e.into()),
        }
    }

    fn fall_back(
        &self,
        statement: &Statement,
        sentiment: Sentiment,
    ) -> Result<Vec<VerdictRecord>, StatementError> {
        let classification = self.classifier.classify(&statement.text)?;
        let candidate = RawCandidate::Classified {
            label: classification.label,
            score: classification.score,
        };
        Ok(vec![to_record(&statement.text, &candidate, sentiment)])
    }
}
