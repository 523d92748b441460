use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Debug, Display};

use crate::currency::Amount;
use crate::drawer::{Denomination, DrawerSnapshot};

pub type TransactionId = u32;

/// Malformed caller input. Surfaced immediately, before any allocation is
/// attempted; an unsatisfiable exact amount is a `DrawerStatus`, not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    UnknownDenomination {
        name: String,
    },
    InvalidAmount {
        raw: String,
    },
    NegativePrice {
        price: Amount,
    },
    NegativePayment {
        payment: Amount,
    },
    NegativeDrawerValue {
        denomination: Denomination,
        value: Amount,
    },
    DuplicateDenomination {
        denomination: Denomination,
    },
    MissingDenomination {
        denomination: Denomination,
    },
    DenominationOutOfOrder {
        denomination: Denomination,
    },
}

impl Display for RegisterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self, f)
    }
}

impl Error for RegisterError {}

/// Drawer status after a change computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum DrawerStatus {
    /// Exact change was made and currency remains in the drawer.
    #[serde(rename = "OPEN")]
    Open,
    /// Making change hands over the entire drawer.
    #[serde(rename = "CLOSED")]
    Closed,
    /// The drawer cannot cover the owed amount, or cannot express it
    /// exactly with the denominations on hand.
    #[serde(rename = "INSUFFICIENT_FUNDS")]
    InsufficientFunds,
}

/// Outcome of a change computation.
///
/// For `Open` the breakdown is ordered highest denomination first with
/// zero-value entries omitted; for `Closed` it is the drawer snapshot
/// verbatim (ascending, zero entries included); for `InsufficientFunds`
/// it is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeResult {
    pub status: DrawerStatus,
    pub change: Vec<(Denomination, Amount)>,
}

impl ChangeResult {
    pub fn open(change: Vec<(Denomination, Amount)>) -> Self {
        ChangeResult {
            status: DrawerStatus::Open,
            change,
        }
    }

    pub fn closed(drawer: &DrawerSnapshot) -> Self {
        ChangeResult {
            status: DrawerStatus::Closed,
            change: drawer.entries().collect(),
        }
    }

    pub fn insufficient_funds() -> Self {
        ChangeResult {
            status: DrawerStatus::InsufficientFunds,
            change: Vec::new(),
        }
    }
}

/// A single row in the register feed CSV: the purchase, the cash tendered,
/// and the drawer contents at the moment of sale, one column per
/// denomination.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RegisterRecord {
    #[serde(rename = "tx")]
    pub tx_id: TransactionId,
    pub price: Amount,
    pub payment: Amount,
    pub penny: Amount,
    pub nickel: Amount,
    pub dime: Amount,
    pub quarter: Amount,
    pub one: Amount,
    pub five: Amount,
    pub ten: Amount,
    pub twenty: Amount,
    pub one_hundred: Amount,
}

/// A single row in the final output CSV
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct OutputRecord {
    /// Id of the register transaction this result answers
    pub tx: TransactionId,
    /// Drawer status after computing change
    pub status: DrawerStatus,
    /// Change breakdown as `NAME value` pairs joined by `;`,
    /// empty when no change is handed back
    pub change: String,
}

impl OutputRecord {
    pub fn new(tx: TransactionId, result: &ChangeResult) -> Self {
        OutputRecord {
            tx,
            status: result.status,
            change: format_change(&result.change),
        }
    }
}

/// Render a change breakdown in the output encoding.
pub fn format_change(change: &[(Denomination, Amount)]) -> String {
    change
        .iter()
        .map(|&(denomination, value)| format!("{} {}", denomination.name(), value))
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
mod tests {
    use super::{format_change, ChangeResult, DrawerStatus, OutputRecord};
    use crate::currency::Amount;
    use crate::drawer::Denomination;

    #[test]
    fn test_format_change() {
        let change = vec![
            (Denomination::Twenty, Amount::from_cents(6000)),
            (Denomination::Quarter, Amount::from_cents(50)),
            (Denomination::Penny, Amount::from_cents(4)),
        ];
        assert_eq!(format_change(&change), "TWENTY 60.00;QUARTER 0.50;PENNY 0.04");
        assert_eq!(format_change(&[]), "");
    }

    #[test]
    fn test_output_record_from_result() {
        let result = ChangeResult::open(vec![(Denomination::Quarter, Amount::from_cents(50))]);
        let record = OutputRecord::new(7, &result);
        assert_eq!(
            record,
            OutputRecord {
                tx: 7,
                status: DrawerStatus::Open,
                change: "QUARTER 0.50".to_string(),
            }
        );
    }
}
