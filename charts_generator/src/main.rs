#[macro_use]
extern crate log;

use clap::Parser as _;
use metrics_charts_generator::{
    generate_report, LogProgress, NoViewer, ReportOptions, SystemBrowser, Viewer,
};

mod cli;

const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Set to skip opening the report, e.g. in CI
const NO_BROWSER_ENV: &str = "CHARTS_NO_BROWSER";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()?;

    let args = cli::CliArgs::parse();
    debug!("{CRATE_NAME} {CRATE_VERSION}");

    let viewer: Box<dyn Viewer> = if std::env::var_os(NO_BROWSER_ENV).is_some() {
        Box::new(NoViewer)
    } else {
        Box::new(SystemBrowser)
    };

    generate_report(
        &args.root,
        &ReportOptions::default(),
        &mut LogProgress,
        viewer.as_ref(),
    )?;

    Ok(())
}
