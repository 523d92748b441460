use crate::currency::Amount;
use crate::drawer::DrawerSnapshot;
use crate::register::compute_change;
use crate::types::{ChangeResult, RegisterError};

/// Parse an amount literal, panicking on bad input. Test-only convenience.
pub fn amount(raw: &str) -> Amount {
    raw.parse().expect("bad amount literal")
}

/// Given a single transaction and a drawer, test that the computed change
/// matches the expected result and that the caller's snapshot is untouched.
pub fn run_change_scenario(
    price: Amount,
    payment: Amount,
    drawer: &DrawerSnapshot,
    expected: &ChangeResult,
) -> Result<(), RegisterError> {
    let before = drawer.clone();

    let actual = compute_change(price, payment, drawer)?;

    assert_eq!(expected, &actual);
    assert_eq!(&before, drawer);

    // Same inputs, same outputs
    let again = compute_change(price, payment, drawer)?;
    assert_eq!(actual, again);

    Ok(())
}
