use crate::numerics::{Decimal, NumericResult, PrecisionContext};
use num_bigint::BigUint;
use num_traits::One;

/// Shell normalization prefactors `c_l = pi^(3/2) (2l-1)!! / 2^l` for
/// `l = 0..=max_am`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationTable {
    values: Vec<Decimal>,
}

impl NormalizationTable {
    /// Builds the table with the two-term recurrence
    /// `c_0 = pi^(3/2)`, `c_1 = c_0 / 2`, `c_l = c_{l-1} (2l-1) / 2`.
    pub fn compute(context: PrecisionContext, max_am: u32) -> NumericResult<Self> {
        let mut values = Vec::new();
        let two = context.integer(2u32);

        let base = context.pow_three_halves(&context.pi())?;
        values.push(base);

        if max_am >= 1 {
            let first = context.div(&values[0], &two)?;
            values.push(first);
        }

        for l in 2..=max_am {
            let odd = context.integer(2 * u64::from(l) - 1);
            let scaled = context.mul(&values[l as usize - 1], &odd);
            values.push(context.div(&scaled, &two)?);
        }

        Ok(Self { values })
    }

    pub fn max_am(&self) -> u32 {
        (self.values.len() - 1) as u32
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, l: u32) -> Option<&Decimal> {
        self.values.get(l as usize)
    }

    pub fn values(&self) -> &[Decimal] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &Decimal)> {
        self.values
            .iter()
            .enumerate()
            .map(|(l, value)| (l as u32, value))
    }
}

/// `(2l-1)!!` with the convention `(-1)!! = 1`.
pub fn odd_double_factorial(l: u32) -> BigUint {
    (1..=u64::from(l)).fold(BigUint::one(), |product, k| product * (2 * k - 1))
}

/// `pi^(3/2) (2l-1)!! / 2^l` evaluated directly rather than by recurrence.
pub fn closed_form_prefactor(context: PrecisionContext, l: u32) -> NumericResult<Decimal> {
    let base = context.pow_three_halves(&context.pi())?;
    let numerator = context.mul(&base, &context.integer(odd_double_factorial(l)));
    let denominator = context.integer(BigUint::from(2u32).pow(l));
    context.div(&numerator, &denominator)
}

#[cfg(test)]
mod tests {
    use super::{NormalizationTable, closed_form_prefactor, odd_double_factorial};
    use crate::numerics::{PrecisionContext, format_significant};
    use num_bigint::BigUint;

    fn context(digits: u32) -> PrecisionContext {
        PrecisionContext::new(digits).expect("context should build")
    }

    #[test]
    fn double_factorial_follows_odd_product_convention() {
        assert_eq!(odd_double_factorial(0), BigUint::from(1u32));
        assert_eq!(odd_double_factorial(1), BigUint::from(1u32));
        assert_eq!(odd_double_factorial(2), BigUint::from(3u32));
        assert_eq!(odd_double_factorial(5), BigUint::from(945u32));
    }

    #[test]
    fn max_am_zero_yields_single_entry() {
        let table = NormalizationTable::compute(context(30), 0).expect("table should compute");
        assert_eq!(table.len(), 1);
        assert_eq!(table.max_am(), 0);
        assert_eq!(
            format_significant(&table.values()[0], 18),
            "5.56832799683170785"
        );
    }

    #[test]
    fn max_am_one_yields_the_two_seeds() {
        let table = NormalizationTable::compute(context(30), 1).expect("table should compute");
        assert_eq!(table.len(), 2);
        assert_eq!(
            format_significant(&table.values()[1], 18),
            "2.78416399841585392"
        );
    }

    #[test]
    fn table_has_one_entry_per_angular_momentum() {
        for max_am in [0, 1, 2, 7, 32] {
            let table =
                NormalizationTable::compute(context(40), max_am).expect("table should compute");
            assert_eq!(table.len(), max_am as usize + 1);
            assert_eq!(table.iter().last().map(|(l, _)| l), Some(max_am));
        }
    }

    #[test]
    fn first_entry_is_half_of_base() {
        let ctx = context(64);
        let table = NormalizationTable::compute(ctx, 1).expect("table should compute");
        let doubled = ctx.mul(&table.values()[1], &ctx.integer(2u32));
        assert!(doubled.agrees_to(&table.values()[0], ctx.digits()));
    }

    #[test]
    fn recurrence_matches_closed_form() {
        let ctx = context(80);
        let table = NormalizationTable::compute(ctx, 24).expect("table should compute");

        for (l, value) in table.iter() {
            let expected = closed_form_prefactor(ctx, l).expect("closed form should compute");
            assert!(
                value.agrees_to(&expected, ctx.digits()),
                "l = {l}: recurrence {value} disagrees with closed form {expected}"
            );
        }
    }

    #[test]
    fn consecutive_entries_follow_the_recurrence_ratio() {
        let ctx = context(50);
        let table = NormalizationTable::compute(ctx, 12).expect("table should compute");

        for l in 2..=12u32 {
            let previous = table.get(l - 1).expect("previous entry should exist");
            let ratio = ctx
                .rational(2 * l - 1, 2)
                .expect("ratio should compute");
            let expected = ctx.mul(previous, &ratio);
            let actual = table.get(l).expect("entry should exist");
            assert!(actual.agrees_to(&expected, ctx.digits()), "l = {l}");
        }
    }

    #[test]
    fn base_entry_squared_is_pi_cubed() {
        let ctx = context(120);
        let table = NormalizationTable::compute(ctx, 0).expect("table should compute");
        let base = &table.values()[0];
        let pi = ctx.pi();
        let pi_cubed = ctx.mul(&ctx.mul(&pi, &pi), &pi);
        assert!(ctx.mul(base, base).agrees_to(&pi_cubed, ctx.digits()));
    }

    #[test]
    fn more_digits_only_refine_trailing_digits() {
        let coarse = NormalizationTable::compute(context(20), 30).expect("table should compute");
        let fine = NormalizationTable::compute(context(256), 30).expect("table should compute");

        for ((l, low), (_, high)) in coarse.iter().zip(fine.iter()) {
            assert_eq!(
                format_significant(low, 18),
                format_significant(high, 18),
                "l = {l}"
            );
            let low_digits = format_significant(low, 20);
            let high_digits = format_significant(high, 40);
            let mantissa_prefix = |text: &str| {
                text.split('e')
                    .next()
                    .unwrap_or_default()
                    .replace('.', "")
                    .chars()
                    .take(15)
                    .collect::<String>()
            };
            assert_eq!(
                mantissa_prefix(low_digits.as_str()),
                mantissa_prefix(high_digits.as_str())
            );
        }
    }
}
