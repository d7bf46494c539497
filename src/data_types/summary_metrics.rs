
use serde::Serialize;

/// High-level summary counters from benchmarking a call set against a truth set.
/// The buckets are disjoint: `fn_filtered` is never added to `fn_missed`, while
/// `fp_filtered` and `fn_in_sv` are tagged subsets of `fp` and `fn_missed`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct SummaryMetrics {
    /// Number of passing calls that exactly match a truth SNV
    pub tp: u64,
    /// Number of SNV calls without a truth-set match
    pub fp: u64,
    /// Subset of `fp` with an exact match in the relaxed truth set
    pub fp_filtered: u64,
    /// Number of truth SNVs without a matching call
    pub fn_missed: u64,
    /// Number of truth SNVs whose exact match was rejected by the caller's filter
    pub fn_filtered: u64,
    /// Subset of `fn_missed` covered by the reference span of an indel/SV call
    pub fn_in_sv: u64
}

impl SummaryMetrics {
    /// Total false negatives as reported: missed truth SNVs plus filtered-out exact matches.
    pub fn total_fn(&self) -> u64 {
        self.fn_missed + self.fn_filtered
    }

    /// Calculates precision if it can, which is relative to the call set
    pub fn precision(&self) -> Option<f64> {
        let denom = self.tp + self.fp;
        if denom > 0 {
            Some(self.tp as f64 / denom as f64)
        } else {
            None
        }
    }

    /// Calculates recall if it can, which is relative to the truth set
    pub fn recall(&self) -> Option<f64> {
        let denom = self.tp + self.total_fn();
        if denom > 0 {
            Some(self.tp as f64 / denom as f64)
        } else {
            None
        }
    }

    /// Calculates recall with the truth SNVs hidden inside SV call spans removed from the denominator
    pub fn recall_excluding_sv_fn(&self) -> Option<f64> {
        // fn_in_sv is a subset of fn_missed, so this cannot underflow
        let denom = self.tp + self.total_fn() - self.fn_in_sv;
        if denom > 0 {
            Some(self.tp as f64 / denom as f64)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx_eq::assert_approx_eq;

    #[test]
    fn test_scores() {
        let summary = SummaryMetrics {
            tp: 10, fp: 5, fp_filtered: 2,
            fn_missed: 3, fn_filtered: 1, fn_in_sv: 2
        };
        assert_eq!(summary.total_fn(), 4);
        assert_approx_eq!(summary.precision().unwrap(), 10.0 / 15.0);
        assert_approx_eq!(summary.recall().unwrap(), 10.0 / 14.0);
        assert_approx_eq!(summary.recall_excluding_sv_fn().unwrap(), 10.0 / 12.0);
    }

    #[test]
    fn test_filtered_match_recall() {
        // a filtered exact match counts against recall but stays out of fn_missed
        let summary = SummaryMetrics {
            fn_filtered: 1,
            ..Default::default()
        };
        assert_eq!(summary.recall(), Some(0.0));
        assert_eq!(summary.precision(), None);
    }

    #[test]
    fn test_zero_denominators() {
        let summary = SummaryMetrics::default();
        assert_eq!(summary.precision(), None);
        assert_eq!(summary.recall(), None);
        assert_eq!(summary.recall_excluding_sv_fn(), None);
    }

    #[test]
    fn test_sv_only_recall() {
        // every FN is inside an SV span: plain recall is 0.0, the SV-excluded form is undefined
        let summary = SummaryMetrics {
            fn_missed: 1, fn_in_sv: 1,
            ..Default::default()
        };
        assert_eq!(summary.recall(), Some(0.0));
        assert_eq!(summary.recall_excluding_sv_fn(), None);
    }
}
