use serde::{Deserialize, Serialize};

use crate::currency::Amount;
use crate::types::RegisterError;

/// The canonical drawer denominations, declared lowest value first so that
/// the discriminant doubles as the slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum Denomination {
    #[serde(rename = "PENNY")]
    Penny,
    #[serde(rename = "NICKEL")]
    Nickel,
    #[serde(rename = "DIME")]
    Dime,
    #[serde(rename = "QUARTER")]
    Quarter,
    #[serde(rename = "ONE")]
    One,
    #[serde(rename = "FIVE")]
    Five,
    #[serde(rename = "TEN")]
    Ten,
    #[serde(rename = "TWENTY")]
    Twenty,
    #[serde(rename = "ONE HUNDRED")]
    OneHundred,
}

/// All denominations in ascending order of unit value.
pub const DENOMINATIONS: [Denomination; 9] = [
    Denomination::Penny,
    Denomination::Nickel,
    Denomination::Dime,
    Denomination::Quarter,
    Denomination::One,
    Denomination::Five,
    Denomination::Ten,
    Denomination::Twenty,
    Denomination::OneHundred,
];

impl Denomination {
    /// Value of a single unit of this denomination.
    pub const fn unit_value(self) -> Amount {
        Amount::from_cents(match self {
            Denomination::Penny => 1,
            Denomination::Nickel => 5,
            Denomination::Dime => 10,
            Denomination::Quarter => 25,
            Denomination::One => 100,
            Denomination::Five => 500,
            Denomination::Ten => 1_000,
            Denomination::Twenty => 2_000,
            Denomination::OneHundred => 10_000,
        })
    }

    /// Canonical display name, as it appears in drawer listings.
    pub const fn name(self) -> &'static str {
        match self {
            Denomination::Penny => "PENNY",
            Denomination::Nickel => "NICKEL",
            Denomination::Dime => "DIME",
            Denomination::Quarter => "QUARTER",
            Denomination::One => "ONE",
            Denomination::Five => "FIVE",
            Denomination::Ten => "TEN",
            Denomination::Twenty => "TWENTY",
            Denomination::OneHundred => "ONE HUNDRED",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, RegisterError> {
        DENOMINATIONS
            .iter()
            .copied()
            .find(|denomination| denomination.name() == name)
            .ok_or_else(|| RegisterError::UnknownDenomination {
                name: name.to_string(),
            })
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

/// Total monetary value held per denomination, one slot per canonical
/// denomination in fixed ascending order.
///
/// The engine never mutates a caller's snapshot; `take` exists for the
/// working copy the allocator owns during a single computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerSnapshot {
    amounts: [Amount; 9],
}

impl DrawerSnapshot {
    /// Build a snapshot from per-denomination totals in ascending order
    /// (penny first, one-hundred last).
    pub const fn from_amounts(amounts: [Amount; 9]) -> Self {
        DrawerSnapshot { amounts }
    }

    pub const fn empty() -> Self {
        DrawerSnapshot {
            amounts: [Amount::zero(); 9],
        }
    }

    /// Build a snapshot from `(name, value)` pairs, enforcing that every
    /// canonical denomination appears exactly once in ascending order.
    pub fn from_pairs(pairs: &[(&str, Amount)]) -> Result<Self, RegisterError> {
        let mut amounts = [Amount::zero(); 9];
        let mut seen = [false; 9];

        for (position, &(name, value)) in pairs.iter().enumerate() {
            let denomination = Denomination::from_name(name)?;
            if seen[denomination.index()] {
                return Err(RegisterError::DuplicateDenomination { denomination });
            }
            if denomination.index() != position {
                return Err(RegisterError::DenominationOutOfOrder { denomination });
            }
            seen[denomination.index()] = true;
            amounts[denomination.index()] = value;
        }

        for denomination in DENOMINATIONS.iter() {
            if !seen[denomination.index()] {
                return Err(RegisterError::MissingDenomination {
                    denomination: *denomination,
                });
            }
        }

        Ok(DrawerSnapshot { amounts })
    }

    /// Sum of all denomination values in the drawer.
    pub fn total(&self) -> Amount {
        Amount::from_cents(self.amounts.iter().map(|amount| amount.cents()).sum())
    }

    /// Value held for a single denomination.
    #[inline]
    pub fn available(&self, denomination: Denomination) -> Amount {
        self.amounts[denomination.index()]
    }

    /// Remove value from a denomination slot.
    /// Callers are responsible for never taking more than is available.
    pub fn take(&mut self, denomination: Denomination, amount: Amount) {
        self.amounts[denomination.index()] -= amount;
    }

    /// The nine `(denomination, value)` entries, lowest denomination first.
    pub fn entries(&self) -> impl Iterator<Item = (Denomination, Amount)> + '_ {
        DENOMINATIONS
            .iter()
            .map(move |&denomination| (denomination, self.available(denomination)))
    }
}
