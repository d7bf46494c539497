
use log::{LevelFilter, error, info};
use std::time::Instant;

use snvbench::cli::compare::{CompareSettings, check_compare_settings};
use snvbench::cli::core::{Commands, get_cli};
use snvbench::parsing::call_set::load_call_set;
use snvbench::parsing::truth_set::load_truth_set;
use snvbench::snv_solver::{build_relaxed_lookup, solve_snv_compare};
use snvbench::writers::summary::{save_json_summary, write_text_summary};

fn run_compare(settings: CompareSettings) {
    // start the timer
    let start_time = Instant::now();

    // set up logging before we check the other settings
    let filter_level: LevelFilter = match settings.verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace
    };
    env_logger::builder()
        .format_timestamp_millis()
        .filter_level(filter_level)
        .init();

    let settings = match check_compare_settings(settings) {
        Ok(s) => s,
        Err(e) => {
            error!("Error while verifying settings: {e:#}");
            std::process::exit(exitcode::CONFIG);
        }
    };

    // load both truth sets first, they are the smaller inputs
    let truth_set = match load_truth_set(&settings.truth_filename) {
        Ok(ts) => ts,
        Err(e) => {
            error!("Error while loading truth set: {e:#}");
            std::process::exit(exitcode::DATAERR);
        }
    };
    info!("Loaded {} SNVs from truth set.", truth_set.len());

    let relaxed_truth_set = match load_truth_set(&settings.relaxed_truth_filename) {
        Ok(ts) => ts,
        Err(e) => {
            error!("Error while loading relaxed truth set: {e:#}");
            std::process::exit(exitcode::DATAERR);
        }
    };
    info!("Loaded {} SNVs from relaxed truth set.", relaxed_truth_set.len());

    let call_set = match load_call_set(&settings.vcf_filename) {
        Ok(cs) => cs,
        Err(e) => {
            error!("Error while loading call set: {e:#}");
            std::process::exit(exitcode::DATAERR);
        }
    };
    info!("Loaded {} variant calls from VCF.", call_set.len());

    // the relaxed set is only ever probed by position, so collapse it to a lookup
    let relaxed_lookup = build_relaxed_lookup(relaxed_truth_set);

    info!("Comparing call set against truth set...");
    let metrics = match solve_snv_compare(&call_set, &truth_set, &relaxed_lookup) {
        Ok(m) => m,
        Err(e) => {
            error!("Error while comparing variants: {e}");
            std::process::exit(exitcode::DATAERR);
        }
    };

    // the summary itself goes to stdout
    let stdout = std::io::stdout();
    if let Err(e) = write_text_summary(&mut stdout.lock(), &metrics) {
        error!("Error while writing summary: {e}");
        std::process::exit(exitcode::IOERR);
    }

    if let Some(json_fn) = settings.output_json_filename.as_deref() {
        info!("Saving JSON summary to {json_fn:?}...");
        if let Err(e) = save_json_summary(&metrics, json_fn) {
            error!("Error while saving JSON summary: {e:#}");
            std::process::exit(exitcode::IOERR);
        }
    }

    info!("Comparison completed in {} seconds.", start_time.elapsed().as_secs_f64());
}

fn main() {
    let cli = get_cli();
    match cli.command {
        Commands::Compare(settings) => {
            run_compare(*settings);
        }
    }

    info!("Process finished successfully.");
}
