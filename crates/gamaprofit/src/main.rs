// ABOUTME: Entry point for the gamaprofit command line tool
// ABOUTME: Parses arguments, loads configuration, initializes logging and dispatches commands

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use gamaprofit_logging::{debug, init_logging_with_config};
use gamaprofit_theme::Mode;

use crate::commands::BuildOptions;
use crate::config::Config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to <config dir>/gamaprofit/gamaprofit.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Treat this run as a production build; the self-check does not run
    #[arg(long, global = true)]
    production: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the accessibility self-check against the theme tokens
    Check {
        /// Mode to check; defaults to the configured theme mode
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,

        /// Check the custom properties declared in this stylesheet instead
        #[arg(long)]
        stylesheet: Option<PathBuf>,

        /// Exit with a failure status when any check fails
        #[arg(long)]
        strict: bool,
    },
    /// Print the global stylesheet
    Css {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// List every color token with its luminance and contrast against white
    Tokens {
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,

        /// Print only this role (name or custom property)
        #[arg(short, long)]
        role: Option<String>,
    },
    /// Render index.html and the stylesheet into the output directory
    Build {
        /// Output directory; defaults to build.out_dir from the configuration
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ModeArg {
    Light,
    Dark,
    All,
}

impl ModeArg {
    fn modes(arg: Option<ModeArg>, configured: Mode) -> Vec<Mode> {
        match arg {
            Some(ModeArg::Light) => vec![Mode::Light],
            Some(ModeArg::Dark) => vec![Mode::Dark],
            Some(ModeArg::All) => Mode::ALL.to_vec(),
            None => vec![configured],
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let _logging = init_logging_with_config(config.logging.clone())?;

    let runtime = config.runtime_mode(cli.production);
    debug!(?runtime, theme = %config.theme.mode, "Starting gamaprofit");

    let mut stdout = io::stdout().lock();
    match cli.command {
        Command::Check {
            mode,
            stylesheet,
            strict,
        } => {
            let modes = ModeArg::modes(mode, config.theme.mode);
            let healthy = commands::check(
                &mut stdout,
                &config.self_check()?,
                &modes,
                stylesheet.as_deref(),
                runtime,
            )?;
            if strict && !healthy {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Css { out } => commands::css(&mut stdout, out.as_deref())?,
        Command::Tokens { mode, role } => {
            let modes = ModeArg::modes(mode, config.theme.mode);
            commands::tokens(&mut stdout, &modes, role.as_deref())?;
        }
        Command::Build { out } => {
            let out_dir = out.unwrap_or_else(|| config.build.out_dir.clone());
            let options = BuildOptions::new(out_dir, config.theme.mode, runtime);
            commands::build(&mut stdout, config.self_check()?, &options)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["gamaprofit", "check", "--mode", "all", "--production"]);
        assert!(cli.production);
        match cli.command {
            Command::Check { mode, strict, .. } => {
                assert_eq!(mode, Some(ModeArg::All));
                assert!(!strict);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_build_out_dir() {
        let cli = Cli::parse_from(["gamaprofit", "-c", "site.toml", "build", "--out", "public"]);
        assert_eq!(cli.config, Some(PathBuf::from("site.toml")));
        assert!(matches!(cli.command, Command::Build { out: Some(ref p) } if p == &PathBuf::from("public")));
    }

    #[test]
    fn test_mode_selection() {
        assert_eq!(ModeArg::modes(None, Mode::Dark), vec![Mode::Dark]);
        assert_eq!(ModeArg::modes(Some(ModeArg::All), Mode::Dark), Mode::ALL.to_vec());
        assert_eq!(ModeArg::modes(Some(ModeArg::Light), Mode::Dark), vec![Mode::Light]);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Cli::try_parse_from(["gamaprofit", "tokens", "--mode", "sepia"]).is_err());
    }
}
