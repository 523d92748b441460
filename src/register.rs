use crate::currency::Amount;
use crate::drawer::{DrawerSnapshot, DENOMINATIONS};
use crate::types::{ChangeResult, RegisterError};
use crate::validate;

/// Compute exact change for a transaction against the given drawer.
///
/// Returns `Open` with a highest-denomination-first breakdown when exact
/// change can be made and currency remains behind, `Closed` with the drawer
/// handed over verbatim when making change empties it exactly, and
/// `InsufficientFunds` when the drawer cannot cover the owed amount or
/// cannot express it exactly with the denominations on hand.
///
/// The caller's snapshot is never mutated; the same inputs always produce
/// the same result.
pub fn compute_change(
    price: Amount,
    payment: Amount,
    drawer: &DrawerSnapshot,
) -> Result<ChangeResult, RegisterError> {
    validate::validate_amounts(price, payment, drawer)?;

    let change_owed = payment - price;

    // Nothing owed is trivially satisfied, even by an empty drawer.
    // This wins over the closed-drawer comparison below, so an all-zero
    // drawer with zero owed stays open.
    if change_owed <= Amount::zero() {
        return Ok(ChangeResult::open(Vec::new()));
    }

    let drawer_total = drawer.total();

    if drawer_total < change_owed {
        return Ok(ChangeResult::insufficient_funds());
    }

    // The whole drawer is handed over, unfiltered and in its original
    // low-to-high order. Total value alone decides this, regardless of
    // the denomination mix.
    if drawer_total == change_owed {
        return Ok(ChangeResult::closed(drawer));
    }

    Ok(allocate_greedy(change_owed, drawer))
}

/// Greedy highest-denomination-first allocation against a working copy of
/// the drawer. Each step takes whole units capped by both the amount still
/// owed and the value available for that denomination.
fn allocate_greedy(change_owed: Amount, drawer: &DrawerSnapshot) -> ChangeResult {
    let mut working = drawer.clone();
    let mut remaining = change_owed;
    let mut change = Vec::new();

    for &denomination in DENOMINATIONS.iter().rev() {
        if remaining.is_zero() {
            break;
        }

        let unit = denomination.unit_value();
        let available = working.available(denomination);
        if unit > remaining || available.is_zero() {
            continue;
        }

        let cap = remaining.min(available);
        let units = cap.cents() / unit.cents();
        let taken = Amount::from_cents(units * unit.cents());
        if taken.is_zero() {
            // Some value is present but less than one whole unit
            // (e.g. a 0.05 remnant in the quarter slot).
            continue;
        }

        working.take(denomination, taken);
        remaining -= taken;
        change.push((denomination, taken));
    }

    if remaining.is_zero() {
        ChangeResult::open(change)
    } else {
        // Enough total value, but the mix cannot express the exact amount.
        ChangeResult::insufficient_funds()
    }
}

#[cfg(test)]
mod tests {
    use super::compute_change;
    use crate::currency::Amount;
    use crate::drawer::{Denomination, DrawerSnapshot};
    use crate::types::{ChangeResult, RegisterError};

    fn drawer_with(entries: &[(Denomination, i64)]) -> DrawerSnapshot {
        let mut amounts = [Amount::zero(); 9];
        for &(denomination, cents) in entries {
            amounts[denomination as usize] = Amount::from_cents(cents);
        }
        DrawerSnapshot::from_amounts(amounts)
    }

    #[test]
    fn exact_amount_unreachable_despite_surplus() {
        // Owing 0.03 against a drawer of two quarters: plenty of value,
        // no way to express three cents.
        let drawer = drawer_with(&[(Denomination::Quarter, 50)]);
        let result = compute_change(
            Amount::from_cents(3),
            Amount::from_cents(6),
            &drawer,
        );
        assert_eq!(result, Ok(ChangeResult::insufficient_funds()));
    }

    #[test]
    fn sub_unit_remnant_is_stranded() {
        // A 0.30 quarter slot yields one quarter; the 0.05 remnant is not
        // a whole unit and must not be taken.
        let drawer = drawer_with(&[(Denomination::Quarter, 30), (Denomination::Nickel, 25)]);
        let result = compute_change(
            Amount::from_cents(0),
            Amount::from_cents(35),
            &drawer,
        )
        .unwrap();
        assert_eq!(
            result,
            ChangeResult::open(vec![
                (Denomination::Quarter, Amount::from_cents(25)),
                (Denomination::Nickel, Amount::from_cents(10)),
            ])
        );
    }

    #[test]
    fn allocation_capped_by_amount_owed() {
        // The drawer holds three twenties but only one may be taken.
        let drawer = drawer_with(&[(Denomination::Twenty, 6000), (Denomination::One, 500)]);
        let result = compute_change(
            Amount::from_cents(0),
            Amount::from_cents(2100),
            &drawer,
        )
        .unwrap();
        assert_eq!(
            result,
            ChangeResult::open(vec![
                (Denomination::Twenty, Amount::from_cents(2000)),
                (Denomination::One, Amount::from_cents(100)),
            ])
        );
    }

    #[test]
    fn negative_price_is_rejected() {
        let drawer = drawer_with(&[]);
        let result = compute_change(
            Amount::from_cents(-100),
            Amount::from_cents(100),
            &drawer,
        );
        assert_eq!(
            result,
            Err(RegisterError::NegativePrice {
                price: Amount::from_cents(-100)
            })
        );
    }

    #[test]
    fn negative_drawer_value_is_rejected() {
        let drawer = drawer_with(&[(Denomination::Dime, -10)]);
        let result = compute_change(Amount::zero(), Amount::zero(), &drawer);
        assert_eq!(
            result,
            Err(RegisterError::NegativeDrawerValue {
                denomination: Denomination::Dime,
                value: Amount::from_cents(-10),
            })
        );
    }
}
