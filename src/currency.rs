use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::RegisterError;

/// A monetary value with two decimal places, stored as integer cents.
/// All register arithmetic happens on the integer representation so that
/// equality comparisons are exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Amount(cents)
    }

    #[inline]
    pub const fn cents(self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Amount(0)
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

/// Parse a decimal string into cents, rounding half-up at the second
/// fractional digit. Going through the digits directly (rather than an
/// intermediate float) keeps amounts like `0.1` exact.
impl FromStr for Amount {
    type Err = RegisterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let invalid = || RegisterError::InvalidAmount { raw: s.to_string() };

        let (negative, unsigned) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };

        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (unsigned, ""),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let whole: i64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| invalid())?
        };

        let mut frac_digits = frac_part.bytes().map(|b| i64::from(b - b'0'));
        let tenths = frac_digits.next().unwrap_or(0);
        let hundredths = frac_digits.next().unwrap_or(0);

        // Anything past the second fractional digit decides the rounding:
        // a third digit >= 5 means the dropped tail is at least half a cent.
        let round_up = match frac_digits.next() {
            Some(digit) => digit >= 5,
            None => false,
        };

        let mut cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(tenths * 10 + hundredths))
            .ok_or_else(invalid)?;
        if round_up {
            cents += 1;
        }

        Ok(Amount(if negative { -cents } else { cents }))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AmountVisitor;

        impl<'de> de::Visitor<'de> for AmountVisitor {
            type Value = Amount;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a decimal amount such as \"19.50\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(AmountVisitor)
    }
}

impl Add for Amount {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Amount(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Amount(self.0 - other.0)
    }
}

impl SubAssign for Amount {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

#[cfg(test)]
mod tests {
    use super::Amount;

    #[test]
    fn test_parse_amount() {
        assert_eq!("19.50".parse(), Ok(Amount::from_cents(1950)));
        assert_eq!("20".parse(), Ok(Amount::from_cents(2000)));
        assert_eq!("0.01".parse(), Ok(Amount::from_cents(1)));
        assert_eq!(".5".parse(), Ok(Amount::from_cents(50)));
        assert_eq!("100.00".parse(), Ok(Amount::from_cents(10000)));
        assert_eq!("-5.25".parse(), Ok(Amount::from_cents(-525)));
    }

    #[test]
    fn test_parse_rounds_half_up() {
        assert_eq!("1.005".parse(), Ok(Amount::from_cents(101)));
        assert_eq!("1.004".parse(), Ok(Amount::from_cents(100)));
        assert_eq!("1.0049".parse(), Ok(Amount::from_cents(100)));
        assert_eq!("0.999".parse(), Ok(Amount::from_cents(100)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Amount>().is_err());
        assert!("-".parse::<Amount>().is_err());
        assert!("abc".parse::<Amount>().is_err());
        assert!("1.2.3".parse::<Amount>().is_err());
        assert!("NaN".parse::<Amount>().is_err());
        assert!("1e3".parse::<Amount>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::from_cents(1950).to_string(), "19.50");
        assert_eq!(Amount::from_cents(4).to_string(), "0.04");
        assert_eq!(Amount::from_cents(10000).to_string(), "100.00");
        assert_eq!(Amount::from_cents(-525).to_string(), "-5.25");
    }

    #[test]
    fn test_arithmetic_is_exact() {
        // 0.1 + 0.2 is exactly 0.3 in cents, unlike in binary floats
        let sum: Amount = "0.1".parse::<Amount>().unwrap() + "0.2".parse::<Amount>().unwrap();
        assert_eq!(sum, Amount::from_cents(30));
    }
}
