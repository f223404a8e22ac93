use super::model::NormalizationTable;
use crate::domain::{GeneratorOptions, Invocation};
use crate::numerics::format_significant;
use std::fmt::Write as _;

pub const TABLE_NAME: &str = "norm_fac";
pub const MAXL_MACRO: &str = "SHELL_PRIM_NORMFAC_MAXL";
pub const VALUE_DIGITS: usize = 18;
const VALUE_WIDTH: usize = 32;
const RULE: &str = "------------------------------------";

/// Options summary printed on stdout and repeated in the source header.
pub fn render_options_banner(options: &GeneratorOptions) -> String {
    let mut banner = String::new();
    let _ = writeln!(banner, "{RULE}");
    let _ = writeln!(banner, "Options for gen_shellconstants:");
    let _ = writeln!(banner, "   Max am: {}", options.max_am);
    let _ = writeln!(banner, "      DPS: {}", options.dps);
    let _ = writeln!(banner, "{RULE}");
    banner
}

pub fn render_table_entry(l: u32, value: &str) -> String {
    format!("/* l = {l:4} */  {value:<width$},", width = VALUE_WIDTH)
}

pub fn render_source(
    options: &GeneratorOptions,
    invocation: &Invocation,
    table: &NormalizationTable,
) -> String {
    let mut source = String::new();
    source.push_str("/*\n");
    source.push_str(" Generated with:\n");
    let _ = writeln!(source, "   {}", invocation.command_line());
    source.push_str(&render_options_banner(options));
    source.push_str("*/\n\n");

    source.push_str("/* A prefactor for normalization. c = pi**(3/2) * (2l-1)!! / 2**l\n");
    source.push_str("   where l is the angular momentum\n");
    source.push_str("*/\n");
    let _ = writeln!(source, "const double {TABLE_NAME}[{}] = ", table.len());
    source.push_str("{\n");
    for (l, value) in table.iter() {
        let rendered = format_significant(value, VALUE_DIGITS);
        source.push_str(&render_table_entry(l, &rendered));
        source.push('\n');
    }
    source.push_str("};\n");
    source
}

pub fn render_header(options: &GeneratorOptions) -> String {
    let mut header = String::new();
    header.push_str("#pragma once\n");
    header.push('\n');
    header.push_str("/*! The maximum value of L for which we have precomputed a\n");
    header.push_str("*  part of the normalization\n");
    header.push_str("*/\n");
    let _ = writeln!(header, "#define {MAXL_MACRO} {}", options.max_am);
    header.push('\n');
    header
}
