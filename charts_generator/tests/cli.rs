use std::fs;
use std::process::Command;

use metrics_charts_generator::{METRICS_FILE_NAME, REPORT_FILE_NAME};

fn charts_generator() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_charts-generator"));
    command.env("CHARTS_NO_BROWSER", "1");
    command
}

#[test]
fn missing_root_exits_with_failure() -> anyhow::Result<()> {
    let root = tempfile::tempdir()?;

    let status = charts_generator()
        .arg(root.path().join("missing"))
        .status()?;

    assert_eq!(Some(1), status.code());
    Ok(())
}

#[test]
fn root_without_runs_exits_with_failure() -> anyhow::Result<()> {
    let root = tempfile::tempdir()?;
    fs::create_dir_all(root.path().join("empty_20240101-120000"))?;

    let status = charts_generator().arg(root.path()).status()?;

    assert_eq!(Some(1), status.code());
    assert!(!root.path().join(REPORT_FILE_NAME).exists());
    Ok(())
}

#[test]
fn report_is_generated_with_success_status() -> anyhow::Result<()> {
    let root = tempfile::tempdir()?;
    let run = root.path().join("A_20240101-120000");
    fs::create_dir_all(&run)?;
    fs::write(
        run.join(METRICS_FILE_NAME),
        "timestamp,cpu_percent_per_core,rss_kb,threads\n1,12.5,204800,31\n2,13.0,204900,32\n",
    )?;

    let status = charts_generator().arg(root.path()).status()?;

    assert!(status.success());
    assert!(root.path().join(REPORT_FILE_NAME).is_file());
    Ok(())
}
