use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for su2-launcher
///
/// With no flags the launcher shows the installer menu and waits for a choice.
#[derive(Parser, Debug, Clone)]
#[command(name = "su2-launcher")]
#[command(version, about = "Menu front-end for the SU2 installer script")]
pub struct Args {
    /// Installer script to run (default: install_su2.py next to this binary)
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Python interpreter name or path to use; repeat to give fallbacks
    #[arg(long, value_name = "NAME")]
    pub interpreter: Vec<String>,

    /// Path to configuration file
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Exit without waiting for Enter
    #[arg(long)]
    pub no_pause: bool,

    /// Show the installer command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Log debug output to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn interpreter_is_repeatable() {
        let args = Args::parse_from([
            "su2-launcher",
            "--interpreter",
            "python3.12",
            "--interpreter",
            "python3",
        ]);
        assert_eq!(args.interpreter, ["python3.12", "python3"]);
    }

    #[test]
    fn no_flags_means_interactive_defaults() {
        let args = Args::parse_from(["su2-launcher"]);
        assert!(args.script.is_none());
        assert!(args.interpreter.is_empty());
        assert!(!args.no_pause && !args.dry_run && !args.verbose);
    }
}
