//! Value objects: equality by value, not identity.

use serde::{Deserialize, Serialize};

/// Marker trait for value objects.
///
/// Value objects have no identity; two instances with the same attribute values
/// are the same value. They are cheap to copy and never mutated in place.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Amount of money in the smallest currency unit (e.g. cents).
///
/// Negative amounts are representable; rejecting them is the caller's job.
/// Stored as `i128` so any `i64` price times any `i64` quantity is exact.
/// Arithmetic wraps at the `i128` bounds, which keeps a total maintained by
/// deltas equal to the same total summed from scratch.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i128);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_minor(minor: i64) -> Self {
        Self(minor as i128)
    }

    pub const fn minor(self) -> i128 {
        self.0
    }

    /// `self × quantity`.
    pub fn times(self, quantity: i64) -> Money {
        Money(self.0.wrapping_mul(i128::from(quantity)))
    }

    /// `self × (to − from)`: the value change when a quantity moves from
    /// `from` to `to`.
    pub fn times_change(self, from: i64, to: i64) -> Money {
        Money(self.0.wrapping_mul(i128::from(to) - i128::from(from)))
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Share of `total` as a percentage; 0 when `total` is zero.
    pub fn percent_of(self, total: Money) -> f64 {
        if total.is_zero() {
            0.0
        } else {
            self.0 as f64 / total.0 as f64 * 100.0
        }
    }
}

impl core::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.wrapping_add(rhs.0))
    }
}

impl core::ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.wrapping_sub(rhs.0))
    }
}

impl core::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

impl core::ops::SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

/// Renders as a two-decimal amount, e.g. `12.50`.
impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(Money::from_minor(1250).to_string(), "12.50");
        assert_eq!(Money::from_minor(7).to_string(), "0.07");
        assert_eq!(Money::from_minor(-305).to_string(), "-3.05");
    }

    #[test]
    fn times_multiplies_by_quantity() {
        assert_eq!(Money::from_minor(250).times(4), Money::from_minor(1000));
        assert_eq!(Money::from_minor(250).times(-2), Money::from_minor(-500));
    }

    #[test]
    fn extreme_price_times_quantity_is_exact() {
        let value = Money::from_minor(i64::MAX).times(i64::MAX);
        assert_eq!(value.minor(), i128::from(i64::MAX) * i128::from(i64::MAX));
    }

    #[test]
    fn times_change_matches_difference_of_values() {
        let price = Money::from_minor(i64::MAX);
        let delta = price.times_change(i64::MIN, i64::MAX);
        assert_eq!(delta, price.times(i64::MAX) - price.times(i64::MIN));
        assert_eq!(Money::from_minor(3).times_change(5, 2), Money::from_minor(-9));
    }

    #[test]
    fn percent_of_zero_total_is_zero() {
        assert_eq!(Money::from_minor(500).percent_of(Money::ZERO), 0.0);
    }

    #[test]
    fn percent_of_total() {
        let pct = Money::from_minor(250).percent_of(Money::from_minor(1000));
        assert!((pct - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sum_folds_amounts() {
        let total: Money = [100, 200, -50].into_iter().map(Money::from_minor).sum();
        assert_eq!(total, Money::from_minor(250));
    }
}
