//! EchoLens: multi-source fact screening for broadcast text.
//!
//! Ingests a block of text, splits it into checkable statements, checks
//! each against a pluggable verification backend (Google Fact Check,
//! Wikipedia, newsdata.io, or ClaimBuster), falls back to a local
//! classifier when the backend is inconclusive, annotates sentiment,
//! and aggregates verdicts by status for presentation.

pub mod config;
pub mod pipeline;
pub mod source;
