mod commands;

use clap::Parser;
use shellconst_core::domain::{Invocation, ShellConstError};
use std::ffi::OsString;

const PROGRAM_NAME: &str = "gen-shellconstants";

pub fn run_from_env() -> i32 {
    match run(std::env::args_os()) {
        Ok(code) => code,
        Err(error) => {
            let shared_error = error.as_shell_const_error();
            for line in shared_error.report_lines() {
                eprintln!("{line}");
            }
            shared_error.exit_code()
        }
    }
}

/// Runs the generator for a full argument vector, program name first.
pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }
    parse_and_dispatch(args)
}

fn parse_and_dispatch(args: Vec<OsString>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => {
            commands::run_generate_command(cli.generate, Invocation::from_os_args(&args))
        }
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = PROGRAM_NAME,
    version,
    about = "Generate shell normalization prefactor tables as C source"
)]
struct Cli {
    #[command(flatten)]
    generate: commands::GenerateArgs,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(ShellConstError),
    /// Writing the options banner to stdout failed.
    #[error(transparent)]
    Output(#[from] anyhow::Error),
}

impl CliError {
    fn as_shell_const_error(&self) -> ShellConstError {
        match self {
            Self::Usage(message) => {
                ShellConstError::usage("INPUT.CLI_USAGE", message.trim_end().to_string())
            }
            Self::Compute(error) => error.clone(),
            Self::Output(error) => ShellConstError::io("IO.STDOUT", format!("{error:#}")),
        }
    }
}
