//! Running the installer script
//!
//! The child inherits the launcher's stdin/stdout/stderr so the installer can
//! talk to the user directly. The launcher blocks until it exits.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::LauncherError;
use crate::platform;

/// A fully resolved command line for the installer script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: PathBuf,
    script: PathBuf,
    flags: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>, script: impl Into<PathBuf>, flags: &[&str]) -> Self {
        Self {
            program: program.into(),
            script: script.into(),
            flags: flags.iter().map(|f| f.to_string()).collect(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn script(&self) -> &Path {
        &self.script
    }

    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    /// Arguments passed to the interpreter: the script, then its flags
    pub fn args(&self) -> Vec<OsString> {
        std::iter::once(self.script.clone().into_os_string())
            .chain(self.flags.iter().map(OsString::from))
            .collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            quote(&self.program.to_string_lossy()),
            quote(&self.script.to_string_lossy())
        )?;
        for flag in &self.flags {
            write!(f, " {flag}")?;
        }
        Ok(())
    }
}

fn quote(s: &str) -> String {
    if s.contains(char::is_whitespace) {
        format!("\"{s}\"")
    } else {
        s.to_string()
    }
}

/// Performs an invocation and reports the child's exit code
pub trait Launcher {
    fn launch(&mut self, invocation: &Invocation) -> Result<i32, LauncherError>;
}

/// Launcher that spawns a real child process
#[derive(Debug, Default)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&mut self, invocation: &Invocation) -> Result<i32, LauncherError> {
        log::info!("Running: {invocation}");

        let spawn_error = |source| LauncherError::Spawn {
            program: invocation.program().display().to_string(),
            source,
        };
        let mut child = Command::new(invocation.program())
            .args(invocation.args())
            .spawn()
            .map_err(spawn_error)?;
        let status = platform::wait_child(&mut child).map_err(spawn_error)?;

        let code = platform::exit_code(status);
        log::info!("Installer exited with code {code}");
        Ok(code)
    }
}
