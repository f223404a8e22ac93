use super::decimal::{Decimal, pow10, round_half_even_div};
use super::{NumericError, NumericResult};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

/// Extra digits carried beyond the requested precision by every operation.
pub const GUARD_DIGITS: u32 = 10;

/// Additional digits used while summing the arctangent series for pi.
const PI_SERIES_GUARD_DIGITS: u32 = 10;

/// Working precision for arbitrary precision arithmetic.
///
/// Every operation rounds its result to [`PrecisionContext::working_digits`]
/// significant digits, so the requested digit count survives a long chain of
/// multiplications and divisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrecisionContext {
    digits: u32,
}

impl PrecisionContext {
    pub fn new(digits: u32) -> NumericResult<Self> {
        if digits == 0 {
            return Err(NumericError::ZeroPrecision);
        }
        Ok(Self { digits })
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }

    pub fn working_digits(&self) -> u32 {
        self.digits.saturating_add(GUARD_DIGITS)
    }

    pub fn round(&self, value: Decimal) -> Decimal {
        value.round_to(self.working_digits())
    }

    pub fn integer(&self, value: impl Into<BigInt>) -> Decimal {
        self.round(Decimal::from_integer(value))
    }

    pub fn rational(
        &self,
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> NumericResult<Decimal> {
        self.div(
            &Decimal::from_integer(numerator),
            &Decimal::from_integer(denominator),
        )
    }

    pub fn mul(&self, lhs: &Decimal, rhs: &Decimal) -> Decimal {
        self.round(Decimal::new(
            lhs.mantissa() * rhs.mantissa(),
            lhs.exponent() + rhs.exponent(),
        ))
    }

    pub fn div(&self, numerator: &Decimal, denominator: &Decimal) -> NumericResult<Decimal> {
        if denominator.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        if numerator.is_zero() {
            return Ok(Decimal::zero());
        }

        // Scale the numerator so the quotient carries two digits past the
        // working precision before the final rounding.
        let target = self.working_digits() + 2;
        let shift =
            (target + denominator.significant_digits()).saturating_sub(numerator.significant_digits());
        let scaled = numerator.mantissa().magnitude() * pow10(shift);
        let magnitude = round_half_even_div(&scaled, denominator.mantissa().magnitude());

        let sign = if numerator.is_negative() == denominator.is_negative() {
            Sign::Plus
        } else {
            Sign::Minus
        };
        let exponent = numerator.exponent() - i64::from(shift) - denominator.exponent();
        Ok(self.round(Decimal::new(
            BigInt::from_biguint(sign, magnitude),
            exponent,
        )))
    }

    pub fn sqrt(&self, value: &Decimal) -> NumericResult<Decimal> {
        if value.is_negative() {
            return Err(NumericError::NegativeSquareRoot);
        }
        if value.is_zero() {
            return Ok(Decimal::zero());
        }

        let target = 2 * (self.working_digits() + 2);
        let mut shift = target.saturating_sub(value.significant_digits());
        if (value.exponent() - i64::from(shift)).rem_euclid(2) != 0 {
            shift += 1;
        }

        let scaled = value.mantissa().magnitude() * pow10(shift);
        let root = scaled.sqrt();
        let exponent = (value.exponent() - i64::from(shift)) / 2;
        Ok(self.round(Decimal::new(BigInt::from(root), exponent)))
    }

    /// `base^(3/2)` evaluated as `base * sqrt(base)`.
    pub fn pow_three_halves(&self, base: &Decimal) -> NumericResult<Decimal> {
        let root = self.sqrt(base)?;
        Ok(self.mul(base, &root))
    }

    /// Pi from Machin's formula `16 atan(1/5) - 4 atan(1/239)`.
    pub fn pi(&self) -> Decimal {
        let digits = self.working_digits() + PI_SERIES_GUARD_DIGITS;
        let scale = pow10(digits);
        let pi = arctan_inverse(5, &scale) * 16u32 - arctan_inverse(239, &scale) * 4u32;
        self.round(Decimal::new(BigInt::from(pi), -i64::from(digits)))
    }
}

/// `atan(1/x) * scale` by its alternating Taylor series in fixed point.
fn arctan_inverse(x: u32, scale: &BigUint) -> BigUint {
    let x_squared = BigUint::from(x) * x;
    let mut power = scale / BigUint::from(x);
    let mut sum = power.clone();
    let mut index: u32 = 1;
    let mut subtract = true;

    loop {
        power /= &x_squared;
        if power.is_zero() {
            break;
        }
        let term = &power / BigUint::from(2 * index + 1);
        if subtract {
            sum -= term;
        } else {
            sum += term;
        }
        subtract = !subtract;
        index += 1;
    }

    sum
}
