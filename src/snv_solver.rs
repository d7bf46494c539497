
use log::debug;
use rustc_hash::FxHashMap as HashMap;

use crate::data_types::summary_metrics::SummaryMetrics;
use crate::data_types::variants::Variant;

#[derive(thiserror::Error, Debug, Eq, PartialEq)]
pub enum CompareError {
    #[error("{label} is not position-sorted: record {index} at position {current} follows position {previous}")]
    UnsortedInput {
        label: &'static str,
        index: usize,
        previous: u64,
        current: u64
    }
}

/// Collapses the relaxed truth set into its position lookup.
/// The relaxed set is only ever probed by position, never walked, so this is the
/// form the comparator consumes. Later entries at a duplicate position overwrite
/// earlier ones.
/// # Arguments
/// * `relaxed_truth_set` - the loaded relaxed truth variants
pub fn build_relaxed_lookup(relaxed_truth_set: Vec<Variant>) -> HashMap<u64, Variant> {
    relaxed_truth_set.into_iter()
        .map(|variant| (variant.position(), variant))
        .collect()
}

/// Entry point for comparing a call set against a truth set.
/// Both sequences must be sorted ascending by position; this is validated up front.
/// The walk is a single forward merge over two cursors with no backtracking,
/// followed by cleanup passes over whichever sequence has leftovers.
/// # Arguments
/// * `call_set` - ordered variant calls, SNV and non-SNV records interleaved
/// * `truth_set` - ordered SNV-only truth variants, no duplicate positions
/// * `relaxed_lookup` - position lookup over the relaxed truth set, used only to explain false positives
/// # Errors
/// * if either input sequence is not sorted ascending by position
pub fn solve_snv_compare(
    call_set: &[Variant], truth_set: &[Variant], relaxed_lookup: &HashMap<u64, Variant>
) -> Result<SummaryMetrics, CompareError> {
    check_position_sorted("Call set", call_set)?;
    check_position_sorted("Truth set", truth_set)?;

    let mut metrics = SummaryMetrics::default();

    // cursors into the two sequences; these only ever advance
    let mut call_idx = 0;
    let mut truth_idx = 0;

    while call_idx < call_set.len() && truth_idx < truth_set.len() {
        let call = &call_set[call_idx];
        let truth = &truth_set[truth_idx];

        if !call.is_snv() {
            // an indel/SV call is never scored itself, but it may explain truth SNVs
            // that fall inside its reference span; check the non-SNV branch first so
            // the call stays current until the truth cursor walks past its span
            let call_end = call.ref_end();

            if truth.position() < call.position() {
                // truth variants before this call are plain FNs
                metrics.fn_missed += 1;
                truth_idx += 1;
            } else if truth.position() <= call_end {
                // truth variants covered by this call are FNs hidden in an SV
                metrics.fn_in_sv += 1;
                metrics.fn_missed += 1;
                truth_idx += 1;
            } else {
                // this call cannot explain anything further, move to the next call
                call_idx += 1;
            }
        } else if call.position() < truth.position() {
            // SNV call not in the truth set, a FP; check for a near-miss in the relaxed set
            if is_relaxed_match(relaxed_lookup, call) {
                metrics.fp_filtered += 1;
            }
            metrics.fp += 1;
            call_idx += 1;
        } else if call.position() > truth.position() {
            // truth variant not in the call set
            metrics.fn_missed += 1;
            truth_idx += 1;
        } else {
            if truth.same_variant(call) {
                // match found; either TP or a filtered-out FN
                if call.is_filtered() {
                    metrics.fn_filtered += 1;
                } else {
                    metrics.tp += 1;
                }
            } else {
                // positions match but alleles do not; count as FN + FP
                metrics.fn_missed += 1;
                metrics.fp += 1;
            }
            call_idx += 1;
            truth_idx += 1;
        }
    }

    // any remaining SNV calls are FPs; non-SNV leftovers have no truth left to explain
    for call in &call_set[call_idx..] {
        if call.is_snv() {
            if is_relaxed_match(relaxed_lookup, call) {
                metrics.fp_filtered += 1;
            }
            metrics.fp += 1;
        }
    }

    // any remaining truth variants are FNs
    metrics.fn_missed += (truth_set.len() - truth_idx) as u64;

    debug!("Comparison counters: {metrics:?}");
    Ok(metrics)
}

/// True if the relaxed truth set contains this exact variant at this position.
fn is_relaxed_match(relaxed_lookup: &HashMap<u64, Variant>, call: &Variant) -> bool {
    relaxed_lookup.get(&call.position())
        .is_some_and(|relaxed| relaxed.same_variant(call))
}

/// Verifies that positions are non-decreasing across the sequence.
/// # Arguments
/// * `label` - the sequence name to use in error messages
/// * `variants` - the sequence to check
fn check_position_sorted(label: &'static str, variants: &[Variant]) -> Result<(), CompareError> {
    for (index, pair) in variants.windows(2).enumerate() {
        if pair[1].position() < pair[0].position() {
            return Err(CompareError::UnsortedInput {
                label,
                index: index + 1,
                previous: pair[0].position(),
                current: pair[1].position()
            });
        }
    }
    Ok(())
}
