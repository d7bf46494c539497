
use clap::Args;
use log::info;
use std::path::PathBuf;

use crate::cli::core::{check_required_filename, AFTER_HELP, FULL_VERSION};

#[derive(Args, Clone, Default)]
#[clap(author, about,
    after_help = &**AFTER_HELP
)]
pub struct CompareSettings {
    #[clap(default_value = "")]
    #[clap(hide = true)]
    snvbench_version: String,

    /// Haploid variant call file (VCF)
    #[clap(required = true)]
    #[clap(short = 'c')]
    #[clap(long = "vcf")]
    #[clap(value_name = "VCF")]
    #[clap(help_heading = Some("Input/Output"))]
    pub vcf_filename: PathBuf,

    /// Truth set file (CSV)
    #[clap(required = true)]
    #[clap(short = 't')]
    #[clap(long = "truth-csv")]
    #[clap(value_name = "CSV")]
    #[clap(help_heading = Some("Input/Output"))]
    pub truth_filename: PathBuf,

    /// Relaxed truth set file (CSV), used only to explain near-miss false positives
    #[clap(required = true)]
    #[clap(short = 'r')]
    #[clap(long = "relaxed-truth-csv")]
    #[clap(value_name = "CSV")]
    #[clap(help_heading = Some("Input/Output"))]
    pub relaxed_truth_filename: PathBuf,

    /// Optional JSON output with the counters and derived ratios
    #[clap(long = "output-json")]
    #[clap(value_name = "JSON")]
    #[clap(help_heading = Some("Input/Output"))]
    pub output_json_filename: Option<PathBuf>,

    /// Enable verbose output.
    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

pub fn check_compare_settings(mut settings: CompareSettings) -> anyhow::Result<CompareSettings> {
    // hard code the version in
    settings.snvbench_version = FULL_VERSION.clone();
    info!("snvbench version: {:?}", &settings.snvbench_version);
    info!("Sub-command: compare");
    info!("Inputs:");

    // check for all the required input files
    check_required_filename(&settings.vcf_filename, "Call VCF")?;
    check_required_filename(&settings.truth_filename, "Truth CSV")?;
    check_required_filename(&settings.relaxed_truth_filename, "Relaxed truth CSV")?;

    // dump stuff to the logger
    info!("\tCall VCF: {:?}", &settings.vcf_filename);
    info!("\tTruth CSV: {:?}", &settings.truth_filename);
    info!("\tRelaxed truth CSV: {:?}", &settings.relaxed_truth_filename);

    // outputs
    info!("Outputs:");
    info!("\tText summary: stdout");
    if let Some(json_fn) = settings.output_json_filename.as_deref() {
        info!("\tJSON summary: {json_fn:?}");
    } else {
        info!("\tJSON summary: None");
    }

    Ok(settings)
}
