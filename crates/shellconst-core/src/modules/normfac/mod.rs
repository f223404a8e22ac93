mod model;
mod writer;

pub use model::{NormalizationTable, closed_form_prefactor, odd_double_factorial};
pub use writer::{
    MAXL_MACRO, TABLE_NAME, VALUE_DIGITS, render_header, render_options_banner, render_source,
    render_table_entry,
};

use super::serialization::write_generated_artifact;
use crate::domain::{
    ArtifactKind, ComputeResult, GeneratedArtifact, GeneratorOptions, Invocation,
};
use crate::numerics::PrecisionContext;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutput {
    pub table: NormalizationTable,
    pub artifacts: Vec<GeneratedArtifact>,
}

pub fn compute_table(options: &GeneratorOptions) -> ComputeResult<NormalizationTable> {
    let context = PrecisionContext::new(options.dps)?;
    Ok(NormalizationTable::compute(context, options.max_am)?)
}

pub fn render_artifact(
    kind: ArtifactKind,
    options: &GeneratorOptions,
    invocation: &Invocation,
    table: &NormalizationTable,
) -> String {
    match kind {
        ArtifactKind::Source => render_source(options, invocation, table),
        ArtifactKind::Header => render_header(options),
    }
}

/// Computes the prefactor table and writes `<stem>.c` and `<stem>.h`,
/// replacing any existing files.
pub fn generate_shell_constants(
    options: &GeneratorOptions,
    invocation: &Invocation,
) -> ComputeResult<GenerationOutput> {
    let table = compute_table(options)?;

    let mut artifacts = Vec::with_capacity(ArtifactKind::ALL.len());
    for kind in ArtifactKind::ALL {
        let path = options.artifact_path(kind);
        let content = render_artifact(kind, options, invocation, &table);
        write_generated_artifact(kind, &path, &content)?;
        artifacts.push(GeneratedArtifact::new(kind, path));
    }

    Ok(GenerationOutput { table, artifacts })
}
