//! CLI module for Genjutsu.
//!
//! Handles flags that exit before the TUI starts (`--version`, `--help`)
//! and collects options for the dashboard run.
//!
//! ```ignore
//! use genjutsu::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args());
//! if let Some(code) = run_cli_command(&command) {
//!     std::process::exit(code);
//! }
//! ```

pub mod args;

pub use args::{parse_args, CliCommand, RunOptions, USAGE};

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a command that does not need the TUI.
///
/// Returns the exit code, or `None` for [`CliCommand::RunTui`].
pub fn run_cli_command(command: &CliCommand) -> Option<i32> {
    match command {
        CliCommand::Version => {
            println!("genjutsu {}", VERSION);
            Some(0)
        }
        CliCommand::Help => {
            print!("{}", USAGE);
            Some(0)
        }
        CliCommand::RunTui(_) => None,
    }
}
