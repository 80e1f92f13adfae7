//! Interpreter probe
//!
//! Finds the Python runtime that will execute the installer script. The first
//! candidate that resolves wins; later candidates are only fallbacks.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::LauncherError;

/// Resolves an interpreter from an ordered list of names
pub trait InterpreterProbe {
    fn resolve(&self, candidates: &[String]) -> Result<PathBuf, LauncherError>;
}

/// Probe backed by `which`, searching `PATH` or an explicit search path
#[derive(Debug, Clone, Default)]
pub struct PathProbe {
    search_path: Option<OsString>,
}

impl PathProbe {
    /// Probe the process `PATH`
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe a fixed search path instead of `PATH`
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    fn lookup(&self, name: &str) -> which::Result<PathBuf> {
        match &self.search_path {
            Some(paths) => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                which::which_in(name, Some(paths), cwd)
            }
            None => which::which(name),
        }
    }
}

impl InterpreterProbe for PathProbe {
    fn resolve(&self, candidates: &[String]) -> Result<PathBuf, LauncherError> {
        for name in candidates {
            match self.lookup(name) {
                Ok(path) => {
                    log::debug!("Interpreter '{}' resolved to {}", name, path.display());
                    return Ok(path);
                }
                Err(e) => log::debug!("Interpreter '{}' not usable: {}", name, e),
            }
        }

        Err(LauncherError::InterpreterNotFound {
            candidates: candidates.to_vec(),
        })
    }
}
