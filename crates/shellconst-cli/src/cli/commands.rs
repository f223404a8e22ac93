use super::CliError;
use anyhow::Context;
use shellconst_core::domain::{DEFAULT_DPS, GeneratorOptions, Invocation, MAX_AM_LIMIT};
use shellconst_core::modules::normfac::{generate_shell_constants, render_options_banner};
use std::io::Write;
use std::path::PathBuf;

#[derive(clap::Args)]
pub(super) struct GenerateArgs {
    /// Output file name base (no extension)
    #[arg(long, value_name = "stem")]
    filename: PathBuf,

    /// Maximum angular momentum value to go to (at most 4096)
    #[arg(
        long = "max-am",
        value_name = "int",
        value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_AM_LIMIT))
    )]
    max_am: u32,

    /// Decimal precision/significant figures to use and calculate
    #[arg(
        long,
        value_name = "int",
        default_value_t = DEFAULT_DPS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    dps: u32,
}

impl GenerateArgs {
    fn into_options(self) -> GeneratorOptions {
        GeneratorOptions::new(self.filename, self.max_am).with_dps(self.dps)
    }
}

pub(super) fn run_generate_command(
    args: GenerateArgs,
    invocation: Invocation,
) -> Result<i32, CliError> {
    let options = args.into_options();
    tracing::debug!(
        stem = %options.filename_stem.display(),
        max_am = options.max_am,
        dps = options.dps,
        "resolved generator options"
    );

    print_options_banner(&options)?;

    let output = generate_shell_constants(&options, &invocation).map_err(CliError::Compute)?;
    tracing::debug!(entries = output.table.len(), "computed normalization table");
    for artifact in &output.artifacts {
        tracing::info!(
            kind = %artifact.kind,
            path = %artifact.path.display(),
            "wrote artifact"
        );
    }

    Ok(0)
}

fn print_options_banner(options: &GeneratorOptions) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(render_options_banner(options).as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write options banner to stdout")
}
