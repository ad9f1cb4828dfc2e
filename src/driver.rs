//! Process-level entry point used by the `remove-logo` binary.

use std::io;
use std::path::{Path, PathBuf};

use crate::eraser::remove_bottom_text;

/// Directory the tool runs from: the canonical parent of the running
/// executable.
///
/// Under `cargo run` the executable sits in `target/<profile>/`, so when cargo
/// launched the process (it sets `CARGO_MANIFEST_DIR` at run time) the crate
/// directory is used instead.
///
/// # Errors
///
/// Returns an error if the executable path cannot be determined or
/// canonicalized.
pub fn tool_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    tool_dir_for(&exe, std::env::var_os("CARGO_MANIFEST_DIR").map(PathBuf::from))
}

/// Resolve the tool directory for the executable at `exe`, preferring
/// `cargo_manifest_dir` when the process was started by cargo.
///
/// # Errors
///
/// Returns an error if `exe` cannot be canonicalized or has no parent.
pub fn tool_dir_for(exe: &Path, cargo_manifest_dir: Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(dir) = cargo_manifest_dir {
        return Ok(dir);
    }

    let exe = exe.canonicalize()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        )
    })
}

/// Change into `tool_dir`, erase the template strip and return the process
/// exit status: 0 on success, 1 on any failure.
#[must_use]
pub fn run(tool_dir: &Path) -> i32 {
    if let Err(e) = std::env::set_current_dir(tool_dir) {
        log::error!("Cannot change to {}: {e}", tool_dir.display());
        return 1;
    }
    log::debug!("Working directory: {}", tool_dir.display());

    log::info!("Removing logo/URL from template...");
    if remove_bottom_text() {
        log::info!("Logo/URL removed successfully");
        0
    } else {
        log::error!("Failed to remove logo/URL");
        1
    }
}
