//! Fixed-point money: an integer count of minor units (cents) at a 2 decimal
//! place scale. Avoids the float drift the data model explicitly rules out
//! for `Order.total_amount` and `OrderItem.total_price`.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

const SCALE: i64 = 100;

/// A non-negative, 2-decimal-place monetary amount.
///
/// Serializes as a plain decimal string (`"12.34"`), matching the external
/// interface contract ("Money: string decimals with 2 dp").
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub const ZERO: Money = Money { cents: 0 };

    /// Build from a whole-cents integer (no rounding involved).
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Parse a decimal string with at most 2 fractional digits.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let s = s.trim();
        let negative = s.starts_with('-');
        let unsigned = s.strip_prefix('-').unwrap_or(s);
        let mut parts = unsigned.splitn(2, '.');
        let whole = parts.next().unwrap_or("0");
        let frac = parts.next().unwrap_or("");
        if frac.len() > 2 || !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(DomainError::validation(format!("not a valid amount: {s}")));
        }
        let whole: i64 = whole.parse().map_err(|_| DomainError::validation(format!("not a valid amount: {s}")))?;
        let frac_padded = format!("{frac:0<2}");
        let frac: i64 = frac_padded.parse().map_err(|_| DomainError::validation(format!("not a valid amount: {s}")))?;
        let mut cents = whole * SCALE + frac;
        if negative {
            cents = -cents;
        }
        Ok(Self { cents })
    }

    /// Multiply by a rational factor expressed as `numerator/denominator`,
    /// rounding the result half-to-even at 2 decimal places.
    ///
    /// Used for `unit_price = round_half_even(base_price * 1.30, 2)`.
    pub fn scaled_by(&self, numerator: i64, denominator: i64) -> Self {
        let product = self.cents as i128 * numerator as i128;
        let cents = round_half_even_div(product, denominator as i128);
        Self { cents: cents as i64 }
    }

    /// Multiply by a non-negative integer quantity (exact, no rounding).
    pub fn times_quantity(&self, quantity: u32) -> Self {
        Self {
            cents: self.cents * quantity as i64,
        }
    }

    /// Whether `self` equals `other` within a tolerance of one cent, i.e.
    /// the `±0.01` slack the data model allows for `total_price` checks.
    pub fn approx_eq(&self, other: Money) -> bool {
        (self.cents - other.cents).abs() <= 1
    }
}

/// Half-to-even ("banker's rounding") division of `numerator/denominator`,
/// both already scaled so the quotient lands at the target precision.
fn round_half_even_div(numerator: i128, denominator: i128) -> i128 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    let twice = remainder.abs() * 2;
    match twice.cmp(&denominator.abs()) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + numerator.signum(),
        std::cmp::Ordering::Equal => {
            if quotient % 2 == 0 {
                quotient
            } else {
                quotient + numerator.signum()
            }
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money {
            cents: self.cents + rhs.cents,
        }
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let negative = self.cents < 0;
        let abs = self.cents.unsigned_abs();
        write!(
            f,
            "{}{}.{:02}",
            if negative { "-" } else { "" },
            abs / SCALE as u64,
            abs % SCALE as u64
        )
    }
}

impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Money::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays_round_trip() {
        let m = Money::parse("1234.50").unwrap();
        assert_eq!(m.to_string(), "1234.50");
    }

    #[test]
    fn pads_single_fractional_digit() {
        assert_eq!(Money::parse("10.5").unwrap().to_string(), "10.50");
    }

    #[test]
    fn unit_price_matches_base_times_1_30() {
        // base_price = 10.00 -> unit_price = 13.00
        let base = Money::parse("10.00").unwrap();
        let unit = base.scaled_by(130, 100);
        assert_eq!(unit.to_string(), "13.00");
    }

    #[test]
    fn half_to_even_rounds_ties_to_nearest_even_cent() {
        // 0.005 rounds to 0.00 (even), 0.015 rounds to 0.02 (even)
        let a = Money::from_cents(5).scaled_by(1, 10); // 0.05 / 10 = 0.005
        assert_eq!(a.cents(), 0);
        let b = Money::from_cents(15).scaled_by(1, 10); // 0.15 / 10 = 0.015
        assert_eq!(b.cents(), 2);
    }

    #[test]
    fn total_price_within_tolerance_of_quantity_times_unit_price() {
        let unit = Money::parse("3.33").unwrap();
        let total = unit.times_quantity(3); // 9.99
        assert!(total.approx_eq(Money::parse("10.00").unwrap()) == false);
        assert!(total.approx_eq(Money::parse("9.99").unwrap()));
    }

    #[test]
    fn rejects_more_than_two_fractional_digits() {
        assert!(Money::parse("1.234").is_err());
    }
}
