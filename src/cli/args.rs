//! Command-line argument parsing for Genjutsu.

use std::path::PathBuf;

/// Options for running the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunOptions {
    /// Append logs to this file
    pub log_file: Option<PathBuf>,
    /// Disable the simulated threat feed, jitter and welcome toast
    pub no_simulation: bool,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI dashboard (default)
    RunTui(RunOptions),
}

pub const USAGE: &str = "\
Usage: genjutsu [OPTIONS]

Options:
  --log-file <PATH>   Append logs to PATH (filter via GENJUTSU_LOG)
  --no-simulation     Disable the simulated threat feed and stat jitter
  -V, --version       Print version
  -h, --help          Print this help
";

/// Parse command-line arguments and return the appropriate command.
///
/// Unknown flags are ignored.
///
/// # Examples
///
/// ```
/// use genjutsu::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["genjutsu".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--no-simulation" => options.no_simulation = true,
            "--log-file" => {
                if let Some(path) = args.next() {
                    options.log_file = Some(PathBuf::from(path));
                }
            }
            other => {
                if let Some(path) = other.strip_prefix("--log-file=") {
                    options.log_file = Some(PathBuf::from(path));
                }
            }
        }
    }
    CliCommand::RunTui(options)
}
