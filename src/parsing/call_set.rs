
use anyhow::{anyhow, Context};
use std::path::Path;

use crate::data_types::variants::Variant;
use crate::parsing::open_text_reader;

/// Canonical passing value of the FILTER field; any other value flags the call as filtered
const PASS_FILTER: &str = "PASS";

/// Fixed shift from the native 1-based VCF coordinate to our 0-based system.
/// The upstream consensus sequences carry a synthetic leading base, so the
/// conversion is the usual -1 plus one more for that dummy base.
const COORDINATE_OFFSET: u64 = 2;

// Fields of interest by column index in a VCF data line
const POS_COL: usize = 1;
const REF_COL: usize = 3;
const ALT_COL: usize = 4;
const FILTER_COL: usize = 6;

/// Loads the ordered call set from a single-sample haploid VCF file (.gz allowed).
/// Multi-allelic records are split into one `Variant` per alternate allele, all sharing
/// the record's position, reference allele, and filter status. Record order is preserved;
/// the source is expected to be position-sorted.
/// # Arguments
/// * `filename` - path to the VCF
/// # Errors
/// * if the file cannot be opened
/// * if a record is malformed: missing fields, a non-numeric position, or a position below the coordinate offset
pub fn load_call_set(filename: &Path) -> anyhow::Result<Vec<Variant>> {
    let reader = open_text_reader(filename)?;
    parse_call_set(reader)
        .with_context(|| format!("Error while parsing call set {filename:?}:"))
}

/// Record-level parsing, split out from the file handling so tests can feed byte buffers.
fn parse_call_set(reader: impl std::io::Read) -> anyhow::Result<Vec<Variant>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false) // VCF headers are '#' comment lines, not a CSV header row
        .comment(Some(b'#'))
        .flexible(true) // trailing column counts differ across callers; we check the fields we need
        .from_reader(reader);

    let mut call_set = vec![];
    for result in csv_reader.records() {
        let row = result.context("Error while reading record")?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        let raw_pos = row.get(POS_COL)
            .ok_or(anyhow!("Missing position (column {}) on line {line}", POS_COL + 1))?;
        let native_pos: u64 = raw_pos.parse()
            .with_context(|| format!("Invalid position {raw_pos:?} on line {line}"))?;
        let ref_pos = native_pos.checked_sub(COORDINATE_OFFSET)
            .ok_or(anyhow!("Position {native_pos} on line {line} is below the leading dummy base"))?;

        let ref_allele = row.get(REF_COL)
            .ok_or(anyhow!("Missing reference allele (column {}) on line {line}", REF_COL + 1))?;
        let alt_field = row.get(ALT_COL)
            .ok_or(anyhow!("Missing alternate alleles (column {}) on line {line}", ALT_COL + 1))?;
        let filter = row.get(FILTER_COL)
            .ok_or(anyhow!("Missing filter status (column {}) on line {line}", FILTER_COL + 1))?;
        let is_filtered = filter != PASS_FILTER;

        // one entry per alternate allele, all sharing position, REF, and filter status
        for alt_allele in alt_field.split(',') {
            let variant = Variant::new_call(ref_pos, ref_allele.as_bytes().to_vec(), alt_allele.as_bytes().to_vec(), is_filtered)
                .with_context(|| format!("Invalid variant record on line {line}"))?;
            call_set.push(variant);
        }
    }

    Ok(call_set)
}
