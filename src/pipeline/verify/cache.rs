//! TTL cache decorator around a verification backend.
//!
//! Wraps any [`FactCheckBackend`] in a memoizing layer keyed by
//! statement text (the backend is fixed per wrapper, completing the
//! backend+query key). Only conclusive outcomes — candidates or a clean
//! empty answer — are stored; transport failures pass through uncached
//! so the next call retries. The pipeline behaves identically whether
//! served from cache or a fresh call.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use super::{CheckOutcome, FactCheckBackend};
use crate::pipeline::types::RawCandidate;

/// Default entry lifetime: one hour.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// A cached conclusive outcome. Failures are never stored.
enum CachedOutcome {
    Candidates(Vec<RawCandidate>),
    Empty,
}

impl CachedOutcome {
    fn to_outcome(&self) -> CheckOutcome {
        match self {
            CachedOutcome::Candidates(candidates) => {
                CheckOutcome::Candidates(candidates.clone())
            }
            CachedOutcome::Empty => CheckOutcome::Empty,
        }
    }
}

struct Entry {
    outcome: CachedOutcome,
    inserted: Instant,
}

/// Memoizing wrapper around a verification backend.
pub struct CachedBackend<B: FactCheckBackend> {
    inner: B,
    ttl: Duration,
    entries: Mutex<HashMap<String, Entry>>,
}

impl<B: FactCheckBackend> CachedBackend<B> {
    /// Wrap a backend with the default one-hour TTL.
    pub fn new(inner: B) -> Self {
        Self::with_ttl(inner, DEFAULT_TTL)
    }

    pub fn with_ttl(inner: B, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Number of live (stored) entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<B: FactCheckBackend> FactCheckBackend for CachedBackend<B> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn check(&self, statement: &str) -> CheckOutcome {
        {
            let entries = self.entries.lock().expect("cache lock poisoned");
            if let Some(entry) = entries.get(statement) {
                if entry.inserted.elapsed() < self.ttl {
                    tracing::debug!(backend = self.inner.name(), "Cache hit");
                    return entry.outcome.to_outcome();
                }
            }
        }

        let outcome = self.inner.check(statement);

        let cached = match &outcome {
            CheckOutcome::Candidates(candidates) => {
                Some(CachedOutcome::Candidates(candidates.clone()))
            }
            CheckOutcome::Empty => Some(CachedOutcome::Empty),
            CheckOutcome::Failed(_) => None,
        };
        if let Some(cached) = cached {
            self.entries
                .lock()
                .expect("cache lock poisoned")
                .insert(statement.to_string(), Entry { outcome: cached, inserted: Instant::now() });
        }

        outcome
    }
}
