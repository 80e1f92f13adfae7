//! Locating the delegated installer script

use std::path::{Path, PathBuf};

use crate::error::LauncherError;

/// File name of the installer script shipped next to the launcher
pub const DEFAULT_SCRIPT_NAME: &str = "install_su2.py";

/// Directory containing the running launcher executable
pub fn launcher_dir() -> Result<PathBuf, LauncherError> {
    let exe = std::env::current_exe().map_err(LauncherError::LauncherDir)?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        LauncherError::LauncherDir(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        ))
    })
}

/// Absolute path of `name` inside `dir`, which must be an existing file
pub fn locate(dir: &Path, name: &str) -> Result<PathBuf, LauncherError> {
    let candidate = dir.join(name);
    let path = std::path::absolute(&candidate).unwrap_or(candidate);

    if path.is_file() {
        Ok(path)
    } else {
        Err(LauncherError::ScriptNotFound { path })
    }
}

/// Absolute path of an explicitly given script, which must exist
pub fn locate_file(path: &Path) -> Result<PathBuf, LauncherError> {
    let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    if path.is_file() {
        Ok(path)
    } else {
        Err(LauncherError::ScriptNotFound { path })
    }
}
