pub mod normfac;
pub mod serialization;

pub use normfac::{GenerationOutput, NormalizationTable, generate_shell_constants};
