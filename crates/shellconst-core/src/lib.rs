//! Generator for the shell normalization prefactor tables consumed by C
//! integral code.
//!
//! The pipeline is `GeneratorOptions` -> [`numerics::PrecisionContext`] ->
//! [`modules::NormalizationTable`] -> `<stem>.c` / `<stem>.h`.

pub mod domain;
pub mod modules;
pub mod numerics;
