pub mod errors;

pub use errors::{ComputeResult, ErrorCategory, ShellConstError};

use std::ffi::{OsStr, OsString};
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const DEFAULT_DPS: u32 = 256;
pub const SOURCE_EXTENSION: &str = ".c";
pub const HEADER_EXTENSION: &str = ".h";

/// Largest `--max-am` accepted on the command line. The table length is
/// `max_am + 1` arbitrary-precision values, so the bound keeps a typo from
/// turning into an unbounded computation.
pub const MAX_AM_LIMIT: u32 = 4096;

/// Resolved options for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub filename_stem: PathBuf,
    pub max_am: u32,
    pub dps: u32,
}

impl GeneratorOptions {
    pub fn new(filename_stem: impl Into<PathBuf>, max_am: u32) -> Self {
        Self {
            filename_stem: filename_stem.into(),
            max_am,
            dps: DEFAULT_DPS,
        }
    }

    pub fn with_dps(mut self, dps: u32) -> Self {
        self.dps = dps;
        self
    }

    pub fn entry_count(&self) -> usize {
        self.max_am as usize + 1
    }

    pub fn source_path(&self) -> PathBuf {
        append_extension(&self.filename_stem, SOURCE_EXTENSION)
    }

    pub fn header_path(&self) -> PathBuf {
        append_extension(&self.filename_stem, HEADER_EXTENSION)
    }

    pub fn artifact_path(&self, kind: ArtifactKind) -> PathBuf {
        match kind {
            ArtifactKind::Source => self.source_path(),
            ArtifactKind::Header => self.header_path(),
        }
    }
}

// `Path::with_extension` would replace a dotted suffix already in the stem.
fn append_extension(stem: &Path, extension: &str) -> PathBuf {
    let mut path: OsString = stem.as_os_str().to_owned();
    path.push(extension);
    PathBuf::from(path)
}

/// Command line echoed into the generated source header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Argument vectors from the OS may hold non-UTF-8 paths; those bytes are
    /// echoed with replacement characters.
    pub fn from_os_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Self::new(
            args.into_iter()
                .map(|arg| arg.as_ref().to_string_lossy().into_owned()),
        )
    }

    pub fn command_line(&self) -> String {
        self.args.join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Source,
    Header,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 2] = [ArtifactKind::Source, ArtifactKind::Header];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Header => "header",
        }
    }
}

impl Display for ArtifactKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
}

impl GeneratedArtifact {
    pub fn new(kind: ArtifactKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }
}
