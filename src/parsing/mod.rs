/*!
# Parsing module
Contains the logic for parsing input files into meaningful structs / data.
*/
/// Loader for the VCF-formatted call set
pub mod call_set;
/// Loader for the truth-set CSV format
pub mod truth_set;

use anyhow::Context;
use std::fs::File;
use std::path::Path;

/// Opens a text input for reading, transparently decoding gzip when the filename ends with .gz
/// # Arguments
/// * `filename` - path to the file to open
/// # Errors
/// * if the file cannot be opened
pub fn open_text_reader(filename: &Path) -> anyhow::Result<Box<dyn std::io::Read>> {
    let handle = File::open(filename)
        .with_context(|| format!("Error while opening {filename:?}:"))?;
    let reader: Box<dyn std::io::Read> = if filename.extension().unwrap_or_default() == "gz" {
        Box::new(flate2::read::MultiGzDecoder::new(handle))
    } else {
        Box::new(handle)
    };
    Ok(reader)
}
