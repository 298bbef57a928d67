use crate::error::ExportError;
use std::path::Path;
use std::process::Command;

/// Opens a written report for the user.
pub trait Viewer {
    fn open(&self, path: &Path) -> Result<(), ExportError>;
}

/// Hands the file to the platform's default application.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemViewer;

impl Viewer for SystemViewer {
    fn open(&self, path: &Path) -> Result<(), ExportError> {
        opener_command(path)
            .spawn()
            .map(|_| tracing::info!(path = %path.display(), "opened in default viewer"))
            .map_err(|source| ExportError::ViewerLaunch {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Leaves the file closed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoViewer;

impl Viewer for NoViewer {
    fn open(&self, _path: &Path) -> Result<(), ExportError> {
        Ok(())
    }
}

fn opener_command(path: &Path) -> Command {
    if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]).arg(path);
        command
    } else if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(path);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(path);
        command
    }
}
