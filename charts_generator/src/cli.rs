use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Directory holding one sub-directory per run, each with an `app-metrics.csv`.
    ///
    /// The report is written into this directory.
    #[arg(default_value = ".")]
    pub root: PathBuf,
}
