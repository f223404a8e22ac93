use super::render::format_significant;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::Zero;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Arbitrary precision decimal `mantissa * 10^exponent`.
///
/// Values are kept canonical (no trailing zero digits in the mantissa, zero
/// stored as `0e0`) so structural equality is numeric equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    mantissa: BigInt,
    exponent: i64,
}

impl Decimal {
    pub fn new(mantissa: impl Into<BigInt>, exponent: i64) -> Self {
        let mut mantissa = mantissa.into();
        if mantissa.is_zero() {
            return Self::zero();
        }

        let ten = BigInt::from(10u32);
        let mut exponent = exponent;
        loop {
            let (quotient, remainder) = mantissa.div_rem(&ten);
            if !remainder.is_zero() {
                break;
            }
            mantissa = quotient;
            exponent += 1;
        }

        Self { mantissa, exponent }
    }

    pub fn zero() -> Self {
        Self {
            mantissa: BigInt::zero(),
            exponent: 0,
        }
    }

    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self::new(value, 0)
    }

    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.mantissa.sign() == Sign::Minus
    }

    pub fn significant_digits(&self) -> u32 {
        decimal_digit_count(self.mantissa.magnitude())
    }

    /// Power of ten of the leading significant digit.
    pub fn leading_exponent(&self) -> i64 {
        self.exponent + i64::from(self.significant_digits()) - 1
    }

    /// Rounds half-to-even so that at most `digits` significant digits remain.
    pub fn round_to(&self, digits: u32) -> Self {
        let digits = digits.max(1);
        let count = self.significant_digits();
        if count <= digits {
            return self.clone();
        }

        let dropped = count - digits;
        let magnitude = round_half_even_div(self.mantissa.magnitude(), &pow10(dropped));
        Self::new(
            BigInt::from_biguint(self.mantissa.sign(), magnitude),
            self.exponent + i64::from(dropped),
        )
    }

    /// True when `|self - other| <= 10^-digits * max(|self|, |other|)`.
    pub fn agrees_to(&self, other: &Self, digits: u32) -> bool {
        if self.is_zero() || other.is_zero() {
            return self.is_zero() && other.is_zero();
        }
        if self.is_negative() != other.is_negative() {
            return false;
        }
        if (self.leading_exponent() - other.leading_exponent()).abs() > 1 {
            return false;
        }

        let exponent = self.exponent.min(other.exponent);
        let lhs = scaled_magnitude(self, exponent);
        let rhs = scaled_magnitude(other, exponent);
        let (larger, difference) = match lhs.cmp(&rhs) {
            Ordering::Less => (&rhs, &rhs - &lhs),
            _ => (&lhs, &lhs - &rhs),
        };

        difference * pow10(digits) <= *larger
    }
}

impl Display for Decimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_significant(self, self.significant_digits() as usize))
    }
}

fn scaled_magnitude(value: &Decimal, exponent: i64) -> BigUint {
    // Callers bound the exponent gap by the operands' digit counts.
    let shift = u32::try_from(value.exponent - exponent).unwrap_or(u32::MAX);
    value.mantissa.magnitude() * pow10(shift)
}

pub(crate) fn pow10(exponent: u32) -> BigUint {
    BigUint::from(10u32).pow(exponent)
}

pub(crate) fn decimal_digit_count(value: &BigUint) -> u32 {
    if value.is_zero() {
        return 1;
    }
    value.to_str_radix(10).len() as u32
}

pub(crate) fn round_half_even_div(numerator: &BigUint, denominator: &BigUint) -> BigUint {
    let (quotient, remainder) = numerator.div_rem(denominator);
    let twice_remainder = remainder * 2u32;
    match twice_remainder.cmp(denominator) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1u32,
        Ordering::Equal if quotient.is_odd() => quotient + 1u32,
        Ordering::Equal => quotient,
    }
}

#[cfg(test)]
mod tests {
    use super::{Decimal, round_half_even_div};
    use num_bigint::{BigInt, BigUint};

    #[test]
    fn construction_strips_trailing_zero_digits() {
        let value = Decimal::new(12_300, -2);
        assert_eq!(value.mantissa(), &BigInt::from(123));
        assert_eq!(value.exponent(), 0);
        assert_eq!(value, Decimal::from_integer(123));
        assert_eq!(Decimal::new(0, 17), Decimal::zero());
    }

    #[test]
    fn leading_exponent_tracks_magnitude() {
        assert_eq!(Decimal::new(556_832, -5).leading_exponent(), 0);
        assert_eq!(Decimal::new(17, 16).leading_exponent(), 17);
        assert_eq!(Decimal::new(25, -4).leading_exponent(), -3);
    }

    #[test]
    fn rounding_is_half_to_even() {
        assert_eq!(Decimal::new(125, -2).round_to(2), Decimal::new(12, -1));
        assert_eq!(Decimal::new(135, -2).round_to(2), Decimal::new(14, -1));
        assert_eq!(Decimal::new(1251, -3).round_to(2), Decimal::new(13, -1));
        assert_eq!(Decimal::new(-1251, -3).round_to(2), Decimal::new(-13, -1));
        assert_eq!(Decimal::new(9996, -3).round_to(3), Decimal::from_integer(10));
    }

    #[test]
    fn agreement_is_relative_to_magnitude() {
        let a = Decimal::new(1_000_000_001, -9);
        let b = Decimal::from_integer(1);
        assert!(a.agrees_to(&b, 8));
        assert!(!a.agrees_to(&b, 10));
        assert!(!a.agrees_to(&Decimal::new(-1, 0), 1));
        assert!(Decimal::zero().agrees_to(&Decimal::zero(), 50));
    }

    #[test]
    fn half_even_division_rounds_ties_to_even_quotient() {
        let four = BigUint::from(4u32);
        assert_eq!(round_half_even_div(&BigUint::from(10u32), &four), BigUint::from(2u32));
        assert_eq!(round_half_even_div(&BigUint::from(14u32), &four), BigUint::from(4u32));
        assert_eq!(round_half_even_div(&BigUint::from(11u32), &four), BigUint::from(3u32));
    }
}
