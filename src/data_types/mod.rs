
/// Contains tracker for TP, FP, FN and derived metrics
pub mod summary_metrics;
/// Contains variant definition functionality and checks
pub mod variants;
