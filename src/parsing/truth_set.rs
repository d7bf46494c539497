
use anyhow::{anyhow, Context};
use std::path::Path;

use crate::data_types::variants::Variant;
use crate::parsing::open_text_reader;

/// The variant-type tag marking the rows we consume; truth-set SVs and other types are not scored
const SNV_TYPE_TAG: &str = "SNV";

// Fields of interest by column index; the full row layout is:
// ref_id,qry_id,var_type,ref_pos,qry_pos,ref_base,qry_base
const VAR_TYPE_COL: usize = 2;
const REF_POS_COL: usize = 3;
const REF_BASE_COL: usize = 5;
const QRY_BASE_COL: usize = 6;

/// Loads an ordered, SNV-only truth set from a CSV file (.gz allowed).
/// Positions in this format are already 0-based, so no coordinate conversion happens here.
/// Row order is preserved; the source is expected to be position-sorted.
/// # Arguments
/// * `filename` - path to the truth CSV
/// # Errors
/// * if the file cannot be opened
/// * if a row is malformed: missing fields, a non-numeric position, or non-SNV alleles on an SNV row
pub fn load_truth_set(filename: &Path) -> anyhow::Result<Vec<Variant>> {
    let reader = open_text_reader(filename)?;
    parse_truth_set(reader)
        .with_context(|| format!("Error while parsing truth set {filename:?}:"))
}

/// Row-level parsing, split out from the file handling so tests can feed byte buffers.
fn parse_truth_set(reader: impl std::io::Read) -> anyhow::Result<Vec<Variant>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true) // the first row is the column header
        .from_reader(reader);

    let mut truth_set = vec![];
    for result in csv_reader.records() {
        let row = result.context("Error while reading row")?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        let var_type = row.get(VAR_TYPE_COL)
            .ok_or(anyhow!("Missing variant type (column {}) on line {line}", VAR_TYPE_COL + 1))?;
        if var_type != SNV_TYPE_TAG {
            continue;
        }

        let raw_pos = row.get(REF_POS_COL)
            .ok_or(anyhow!("Missing reference position (column {}) on line {line}", REF_POS_COL + 1))?;
        let ref_pos: u64 = raw_pos.parse()
            .with_context(|| format!("Invalid reference position {raw_pos:?} on line {line}"))?;

        let ref_base = row.get(REF_BASE_COL)
            .ok_or(anyhow!("Missing reference base (column {}) on line {line}", REF_BASE_COL + 1))?;
        let qry_base = row.get(QRY_BASE_COL)
            .ok_or(anyhow!("Missing query base (column {}) on line {line}", QRY_BASE_COL + 1))?;

        let variant = Variant::new_truth_snv(ref_pos, ref_base.as_bytes().to_vec(), qry_base.as_bytes().to_vec())
            .with_context(|| format!("Invalid SNV row on line {line}"))?;
        truth_set.push(variant);
    }

    Ok(truth_set)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "ref_id,qry_id,var_type,ref_pos,qry_pos,ref_base,qry_base\n";

    #[test]
    fn test_snv_rows() {
        let data = format!("{HEADER}\
            chr1,hap1,SNV,100,98,A,G\n\
            chr1,hap1,SNV,250,248,C,T\n");
        let truth_set = parse_truth_set(data.as_bytes()).unwrap();

        assert_eq!(truth_set, vec![
            Variant::new_truth_snv(100, b"A".to_vec(), b"G".to_vec()).unwrap(),
            Variant::new_truth_snv(250, b"C".to_vec(), b"T".to_vec()).unwrap(),
        ]);
    }

    #[test]
    fn test_non_snv_rows_dropped() {
        let data = format!("{HEADER}\
            chr1,hap1,SV,50,48,A,G\n\
            chr1,hap1,SNV,100,98,A,G\n\
            chr1,hap1,INDEL,150,148,T,C\n");
        let truth_set = parse_truth_set(data.as_bytes()).unwrap();

        assert_eq!(truth_set.len(), 1);
        assert_eq!(truth_set[0].position(), 100);
    }

    #[test]
    fn test_empty_truth_set() {
        let truth_set = parse_truth_set(HEADER.as_bytes()).unwrap();
        assert!(truth_set.is_empty());
    }

    #[test]
    fn test_bad_position() {
        let data = format!("{HEADER}chr1,hap1,SNV,xyz,98,A,G\n");
        let error = parse_truth_set(data.as_bytes()).unwrap_err();
        assert!(format!("{error:#}").contains("Invalid reference position"));
    }

    #[test]
    fn test_missing_fields() {
        let data = format!("{HEADER}chr1,hap1\n");
        let error = parse_truth_set(data.as_bytes()).unwrap_err();
        // the csv reader rejects the short row before our field checks run
        assert!(format!("{error:#}").contains("Error while reading row"));
    }

    #[test]
    fn test_non_snv_alleles_on_snv_row() {
        let data = format!("{HEADER}chr1,hap1,SNV,100,98,AG,G\n");
        let error = parse_truth_set(data.as_bytes()).unwrap_err();
        assert!(format!("{error:#}").contains("Invalid SNV row on line 2"));
    }
}
