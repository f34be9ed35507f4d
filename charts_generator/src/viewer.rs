use std::path::Path;
use std::process::Command;

/// Opens a finished report for the user.
///
/// Opening is best effort, a failure never fails report generation.
pub trait Viewer {
    fn open(&self, path: &Path) -> anyhow::Result<()>;
}

/// Opens reports with the platform's default handler for `file://` URLs.
#[derive(Debug, Default)]
pub struct SystemBrowser;

impl SystemBrowser {
    #[cfg(target_os = "macos")]
    fn opener() -> (&'static str, &'static [&'static str]) {
        ("open", &[])
    }

    #[cfg(target_os = "windows")]
    fn opener() -> (&'static str, &'static [&'static str]) {
        ("cmd", &["/C", "start", ""])
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    fn opener() -> (&'static str, &'static [&'static str]) {
        ("xdg-open", &[])
    }
}

impl Viewer for SystemBrowser {
    fn open(&self, path: &Path) -> anyhow::Result<()> {
        let (program, args) = Self::opener();
        let program = which::which(program)?;
        let url = format!("file://{}", path.display());

        let mut process = Command::new(&program).args(args).arg(&url).spawn()?;
        debug!(
            "Opening {url} with {} (PID {pid})",
            program.display(),
            pid = process.id()
        );

        let status = process.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(anyhow::anyhow!(
                "{} exited with status: {status}",
                program.display()
            ))
        }
    }
}

/// Leaves reports closed.
#[derive(Debug, Default)]
pub struct NoViewer;

impl Viewer for NoViewer {
    fn open(&self, path: &Path) -> anyhow::Result<()> {
        debug!("Not opening {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_viewer_always_succeeds() {
        assert!(NoViewer.open(Path::new("/does/not/exist.html")).is_ok());
    }
}
