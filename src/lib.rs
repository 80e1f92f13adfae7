//! SU2 installer launcher
//!
//! Presents the installer menu, finds a Python interpreter, and forwards the
//! chosen operation to `install_su2.py`, relaying its exit status.

pub mod cli;
pub mod config;
pub mod decision;
pub mod dispatcher;
pub mod error;
pub mod interpreter;
pub mod launcher;
pub mod menu;
pub mod platform;
pub mod prompt;
pub mod script;
pub mod ui;

pub use config::{LauncherConfig, Settings};
pub use dispatcher::{Dispatcher, Outcome};
pub use error::LauncherError;
pub use menu::{MENU, MenuChoice};
