//! `slipway check` command

use anyhow::Result;

use crate::cli::CheckArgs;
use slipway::core::config::assemble;
use slipway::core::feature::FeatureSet;
use slipway::ops::check::{check_prerequisites, report_problems};

pub fn execute(args: CheckArgs) -> Result<()> {
    let feature = FeatureSet::from_full_flag(args.full);
    let cfg = assemble(feature, &args.paths.to_paths());

    let problems = check_prerequisites(&cfg);
    report_problems("CHECK WARNINGS", &problems);

    if problems.is_empty() {
        eprintln!("All checks passed ({} feature set).", feature);
        return Ok(());
    }

    eprintln!("{} problem(s) found.", problems.len());
    std::process::exit(1);
}
