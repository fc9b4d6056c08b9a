//! bedctl - 3/4-point bed compensation CLI
//!
//! Replays a probe session file through the bed probe point registry, fits
//! the correction surface and reports heights, height errors and status.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod error;
mod output;
mod session;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::SessionArgs;
use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "bedctl")]
#[command(about = "Fit and inspect 3/4-point bed compensation from manually probed points")]
#[command(version)]
#[command(long_about = "
bedctl loads a probe session (the XY coordinates and measured heights of up to
32 manually probed bed points) and derives a plane (3 points) or bilinear
surface (4 points) correcting the bed height.

Points must be listed clockwise starting near minimum X and Y.
Use --json flag for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fit the bed correction surface and print the points it fits
    Fit(SessionArgs),

    /// Print the probed heights with their mean and deviation
    Heights(SessionArgs),

    /// Fit, then print the height error at the session's query points
    Eval {
        #[command(flatten)]
        session: SessionArgs,
        /// Extra query X coordinate
        #[arg(long, requires = "y", allow_negative_numbers = true)]
        x: Option<f32>,
        /// Extra query Y coordinate
        #[arg(long, requires = "x", allow_negative_numbers = true)]
        y: Option<f32>,
    },

    /// Show which points are probed and whether they can be fitted
    Status(SessionArgs),

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("bedctl={log_level},bedcomp_probe={log_level}").into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Fit(args) => commands::fit::execute(args, cli.json),
        Commands::Heights(args) => commands::heights::execute(args, cli.json),
        Commands::Eval { session, x, y } => commands::eval::execute(session, *x, *y, cli.json),
        Commands::Status(args) => commands::status::execute(args, cli.json),
        Commands::Completion { shell } => {
            completion::generate_completion(*shell);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn parse_fit_defaults() -> TestResult {
        let cli = Cli::try_parse_from(["bedctl", "fit", "bed.yaml"])?;
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
        assert!(matches!(
            cli.command,
            Commands::Fit(SessionArgs { points: None, .. })
        ));
        Ok(())
    }

    #[test]
    fn parse_global_json_flag_after_subcommand() -> TestResult {
        let cli = Cli::try_parse_from(["bedctl", "heights", "bed.yaml", "--json"])?;
        assert!(cli.json);
        Ok(())
    }

    #[test]
    fn parse_point_count() -> TestResult {
        let cli = Cli::try_parse_from(["bedctl", "fit", "bed.yaml", "-n", "3"])?;
        assert!(matches!(
            cli.command,
            Commands::Fit(SessionArgs { points: Some(3), .. })
        ));
        Ok(())
    }

    #[test]
    fn parse_verbose_levels() -> TestResult {
        let cli = Cli::try_parse_from(["bedctl", "-vv", "status", "bed.yaml"])?;
        assert_eq!(cli.verbose, 2);
        Ok(())
    }

    #[test]
    fn parse_eval_negative_query() -> TestResult {
        let cli = Cli::try_parse_from(["bedctl", "eval", "bed.yaml", "--x", "-5", "--y", "12.5"])?;
        match cli.command {
            Commands::Eval { x, y, .. } => {
                assert_eq!(x, Some(-5.0));
                assert_eq!(y, Some(12.5));
            }
            other => return Err(format!("unexpected command {other:?}").into()),
        }
        Ok(())
    }

    #[test]
    fn eval_query_needs_both_coordinates() {
        assert!(Cli::try_parse_from(["bedctl", "eval", "bed.yaml", "--x", "1"]).is_err());
    }
}
