//! The fact-verification pipeline.
//!
//! Raw text → segment → per statement: annotate sentiment, check
//! against the selected backend, normalize or fall back → ordered
//! verdict records → aggregate.

pub mod aggregate;
pub mod fallback;
pub mod normalize;
pub mod orchestrator;
pub mod segment;
pub mod sentiment;
pub mod types;
pub mod verify;

pub use aggregate::*;
pub use fallback::*;
pub use normalize::*;
pub use orchestrator::*;
pub use segment::*;
pub use sentiment::*;
pub use types::*;
pub use verify::*;
