//! Significant-digit rendering of [`Decimal`] values.
//!
//! The layout follows the `nstr` convention used by the historical constant
//! tables: values near unit magnitude are printed in fixed notation, trailing
//! zeros are stripped (keeping at least one fractional digit), and very large
//! or very small values switch to `1.5e+20` / `1.5e-7` notation.

use super::decimal::{Decimal, decimal_digit_count, pow10, round_half_even_div};

/// Renders `value` with at most `digits` significant digits.
pub fn format_significant(value: &Decimal, digits: usize) -> String {
    let digits = digits.max(1);
    if value.is_zero() {
        return "0.0".to_string();
    }

    let sign = if value.is_negative() { "-" } else { "" };
    let (mut text, mut exponent) = leading_digits(value, digits + 3);

    if matches!(text.as_bytes()[digits], b'5'..=b'9') {
        text.truncate(digits);
        match text.rfind(|c: char| c != '9') {
            Some(index) => {
                let bumped = (text.as_bytes()[index] + 1) as char;
                text.truncate(index);
                text.push(bumped);
                text.extend(std::iter::repeat_n('0', digits - index - 1));
            }
            None => {
                text = format!("1{}", "0".repeat(digits - 1));
                exponent += 1;
            }
        }
    } else {
        text.truncate(digits);
    }

    let min_fixed = (-((digits / 3) as i64)).min(-5);
    let max_fixed = digits as i64;
    let fixed = min_fixed < exponent && exponent < max_fixed;

    let split = if fixed && exponent < 0 {
        text.insert_str(0, &"0".repeat(exponent.unsigned_abs() as usize));
        1
    } else if fixed {
        exponent as usize + 1
    } else {
        1
    };

    let mut body = format!("{}.{}", &text[..split], &text[split..]);
    let trimmed = body.trim_end_matches('0').len();
    body.truncate(trimmed);
    if body.ends_with('.') {
        body.push('0');
    }

    if fixed {
        format!("{sign}{body}")
    } else if exponent >= 0 {
        format!("{sign}{body}e+{exponent}")
    } else {
        format!("{sign}{body}e{exponent}")
    }
}

/// First `count` digits of `|value|`, correctly rounded and zero padded,
/// together with the power of ten of the first digit.
fn leading_digits(value: &Decimal, count: usize) -> (String, i64) {
    let magnitude = value.mantissa().magnitude();
    let total = decimal_digit_count(magnitude) as usize;
    let mut exponent = value.leading_exponent();

    let mut text = if total > count {
        round_half_even_div(magnitude, &pow10((total - count) as u32)).to_str_radix(10)
    } else {
        magnitude.to_str_radix(10)
    };

    if text.len() > count {
        text.truncate(count);
        exponent += 1;
    }
    while text.len() < count {
        text.push('0');
    }

    (text, exponent)
}
