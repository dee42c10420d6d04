use std::collections::BTreeMap;

use super::types::VerdictRecord;

/// Status-label frequency table for a run's verdict records.
///
/// Groups by exact string equality of `status`. Pure function;
/// order-independent over its input. The BTreeMap gives deterministic
/// iteration for display, but group order is presentation-defined.
pub fn aggregate(records: &[VerdictRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.status.clone()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::types::Sentiment;

    fn record(status: &str) -> VerdictRecord {
        VerdictRecord {
            statement: "s".to_string(),
            status: status.to_string(),
            source: "N/A".to_string(),
            sentiment: Sentiment::Neutral,
        }
    }

    #[test]
    fn counts_by_exact_status() {
        let records = vec![record("True"), record("False"), record("True")];
        let counts = aggregate(&records);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["True"], 2);
        assert_eq!(counts["False"], 1);
    }

    #[test]
    fn empty_input_yields_empty_aggregate() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn permutation_invariant() {
        let a = vec![record("X"), record("Y"), record("X"), record("Z")];
        let mut b = a.clone();
        b.reverse();
        b.swap(0, 2);
        assert_eq!(aggregate(&a), aggregate(&b));
    }

    #[test]
    fn statuses_differing_in_case_are_distinct_groups() {
        let records = vec![record("true"), record("True")];
        let counts = aggregate(&records);
        assert_eq!(counts.len(), 2);
    }
}
