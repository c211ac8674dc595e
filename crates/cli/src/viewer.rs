//! Open a written image with the platform's default viewer.

use std::path::Path;
use std::process::Command;

fn opener(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

/// Best effort; a missing viewer only logs a warning.
pub fn open(path: &Path) {
    match opener(path).spawn() {
        Ok(_) => tracing::debug!(path = %path.display(), "viewer launched"),
        Err(err) => tracing::warn!(path = %path.display(), error = %err, "could not open viewer"),
    }
}
