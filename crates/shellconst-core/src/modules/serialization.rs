use crate::domain::{ArtifactKind, ComputeResult, ShellConstError};
use std::fs;
use std::path::Path;

/// Writes rendered artifact text as-is, replacing any existing file.
pub fn write_generated_artifact(
    kind: ArtifactKind,
    path: &Path,
    content: &str,
) -> ComputeResult<()> {
    fs::write(path, content).map_err(|source| {
        let code = match kind {
            ArtifactKind::Source => "IO.SOURCE_WRITE",
            ArtifactKind::Header => "IO.HEADER_WRITE",
        };
        ShellConstError::io(
            code,
            format!(
                "failed to write {} artifact '{}': {}",
                kind,
                path.display(),
                source
            ),
        )
    })
}
