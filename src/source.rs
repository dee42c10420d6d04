//! Text acquisition seam.
//!
//! The pipeline consumes text through this trait; how the text was
//! obtained (direct entry, a video transcript, a scraped page) is the
//! caller's concern. Acquisition failures surface as empty text, which
//! segments to zero statements.

/// A source of raw input text for one pipeline run.
pub trait TextSource {
    /// Fetch the text to analyze. Returns an empty string on failure.
    fn fetch_text(&self) -> String;
}

/// Directly supplied text, already in hand.
pub struct DirectText {
    text: String,
}

impl DirectText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextSource for DirectText {
    fn fetch_text(&self) -> String {
        self.text.clone()
    }
}
