use super::types::Statement;

/// Sentence delimiter: literal period-space.
const DELIMITER: &str = ". ";

/// Split raw input text into an ordered sequence of checkable statements.
///
/// Splits on the literal `". "` delimiter, trims each piece, and drops
/// pieces that are empty after trimming. Preserves input order; does not
/// deduplicate. Input with no delimiter yields a single statement equal
/// to the whole trimmed input; blank input yields an empty sequence.
pub fn segment(text: &str) -> Vec<Statement> {
    text.split(DELIMITER)
        .enumerate()
        .filter_map(|(position, piece)| {
            let trimmed = piece.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(Statement {
                    text: trimmed.to_string(),
                    position,
                })
            }
        })
        .collect()
}
