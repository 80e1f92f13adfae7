use anyhow::Result;
use clap::Parser;
use termcolor::{ColorChoice, StandardStream};

use su2_launcher::cli::Args;
use su2_launcher::interpreter::PathProbe;
use su2_launcher::launcher::ProcessLauncher;
use su2_launcher::prompt::stdin_prompter;
use su2_launcher::{Dispatcher, LauncherConfig, Settings};

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    // RUST_LOG still wins over the default level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{} {} {}:{}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

fn load_settings(args: &Args) -> Result<Settings> {
    let config = LauncherConfig::load(args.config.as_deref())?;
    Ok(Settings::resolve(args, config))
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    };
    log::debug!("Settings: {settings:?}");

    let mut dispatcher = Dispatcher::new(
        settings,
        PathProbe::new(),
        stdin_prompter(),
        ProcessLauncher,
        StandardStream::stdout(ColorChoice::Auto),
    );

    std::process::exit(dispatcher.run_to_exit());
}
