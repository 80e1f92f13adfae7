use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::Args;
use crate::platform;
use crate::script;

/// On‑disk TOML launcher configuration. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    /// Interpreter names or paths probed in order
    pub interpreters: Option<Vec<String>>,
    /// Directory holding the installer script (defaults to the launcher's own)
    pub script_dir: Option<PathBuf>,
    /// Installer script file name
    pub script_name: Option<String>,
    /// Wait for Enter before exiting
    pub pause_on_exit: Option<bool>,
}

/// Default config location: `<config_dir>/su2-launcher/launcher.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("su2-launcher").join("launcher.toml"))
}

impl LauncherConfig {
    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Load the explicit config if given, else the default one when present
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                log::debug!("Using config from: {}", path.display());
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// Where the installer script comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptLocation {
    /// `name` inside the launcher's own directory
    LauncherDir { name: String },
    /// `name` inside a configured directory
    Dir { dir: PathBuf, name: String },
    /// An exact file given on the command line
    File(PathBuf),
}

/// Runtime settings after merging CLI flags, config file, and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub interpreters: Vec<String>,
    pub script: ScriptLocation,
    pub pause_on_exit: bool,
    pub dry_run: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interpreters: platform::DEFAULT_INTERPRETERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            script: ScriptLocation::LauncherDir {
                name: script::DEFAULT_SCRIPT_NAME.to_string(),
            },
            pause_on_exit: true,
            dry_run: false,
        }
    }
}

impl Settings {
    /// CLI flag > config file > platform default
    pub fn resolve(args: &Args, config: LauncherConfig) -> Self {
        let defaults = Self::default();

        let interpreters = if !args.interpreter.is_empty() {
            args.interpreter.clone()
        } else {
            config
                .interpreters
                .filter(|list| !list.is_empty())
                .unwrap_or(defaults.interpreters)
        };

        let name = config
            .script_name
            .unwrap_or_else(|| script::DEFAULT_SCRIPT_NAME.to_string());
        let script = match (&args.script, config.script_dir) {
            (Some(file), _) => ScriptLocation::File(file.clone()),
            (None, Some(dir)) => ScriptLocation::Dir { dir, name },
            (None, None) => ScriptLocation::LauncherDir { name },
        };

        let pause_on_exit = !args.no_pause && config.pause_on_exit.unwrap_or(defaults.pause_on_exit);

        Self {
            interpreters,
            script,
            pause_on_exit,
            dry_run: args.dry_run,
        }
    }
}
