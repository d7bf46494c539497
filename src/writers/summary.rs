
use anyhow::Context;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::data_types::summary_metrics::SummaryMetrics;

/// Sentinel printed in place of a ratio whose denominator is zero
const UNDEFINED_RATIO: &str = "undefined";

/// Formats an optional ratio to 4 decimal places, with a sentinel for undefined values
fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(value) => format!("{value:.4}"),
        None => UNDEFINED_RATIO.to_string()
    }
}

/// Writes the human-readable comparison summary, which is the primary program output.
/// The reported FN total folds the filtered matches in; the parenthesized values are sub-counts of their line.
/// # Arguments
/// * `writer` - destination, typically stdout
/// * `metrics` - the counters from the comparison
/// # Errors
/// * if writing to the destination fails
pub fn write_text_summary(writer: &mut impl Write, metrics: &SummaryMetrics) -> std::io::Result<()> {
    writeln!(writer, "True Positives (TP): {}", metrics.tp)?;
    writeln!(writer, "False Positives (FP): {} (Filtered: {})", metrics.fp, metrics.fp_filtered)?;
    writeln!(writer, "False Negatives (FN): {} (Filtered: {}, In SVs: {})",
        metrics.total_fn(), metrics.fn_filtered, metrics.fn_in_sv)?;
    writeln!(writer, "Precision: {}", format_ratio(metrics.precision()))?;
    writeln!(writer, "Recall: {}", format_ratio(metrics.recall()))?;
    writeln!(writer, "Recall excluding FNs in SVs: {}", format_ratio(metrics.recall_excluding_sv_fn()))?;
    Ok(())
}

/// Contains all the data written to the JSON summary
#[derive(Serialize)]
struct SummaryReport<'a> {
    /// The raw counters
    counters: &'a SummaryMetrics,
    /// Precision; null when the denominator is zero
    precision: Option<f64>,
    /// Recall; null when the denominator is zero
    recall: Option<f64>,
    /// Recall with in-SV FNs removed from the denominator; null when the denominator is zero
    recall_excluding_sv_fn: Option<f64>
}

/// Saves the machine-readable summary to JSON, gzip-compressed when the filename ends with .gz.
/// # Arguments
/// * `metrics` - the counters from the comparison
/// * `out_filename` - user provided path to write to
/// # Errors
/// * if opening or writing to the file throw errors
/// * if JSON serialization throws errors
pub fn save_json_summary(metrics: &SummaryMetrics, out_filename: &Path) -> anyhow::Result<()> {
    let report = SummaryReport {
        counters: metrics,
        precision: metrics.precision(),
        recall: metrics.recall(),
        recall_excluding_sv_fn: metrics.recall_excluding_sv_fn()
    };

    let file: Box<dyn Write> = if out_filename.extension().unwrap_or_default() == "gz" {
        Box::new(
            flate2::write::GzEncoder::new(
                File::create(out_filename)?,
                flate2::Compression::best()
            )
        )
    } else {
        Box::new(File::create(out_filename)?)
    };
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &report)
        .with_context(|| format!("Error while serializing {out_filename:?}:"))?;
    writer.flush()
        .with_context(|| format!("Error while flushing output to {out_filename:?}:"))?;
    Ok(())
}
