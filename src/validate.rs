use crate::currency::Amount;
use crate::drawer::DrawerSnapshot;
use crate::types::RegisterError;

/// Reject negative monetary inputs before any computation is attempted.
///
/// NOTE: `payment < price` is not rejected here; the engine treats
/// non-positive change owed as zero change due.
pub fn validate_amounts(
    price: Amount,
    payment: Amount,
    drawer: &DrawerSnapshot,
) -> Result<(), RegisterError> {
    if price.is_negative() {
        return Err(RegisterError::NegativePrice { price });
    }

    if payment.is_negative() {
        return Err(RegisterError::NegativePayment { payment });
    }

    for (denomination, value) in drawer.entries() {
        if value.is_negative() {
            return Err(RegisterError::NegativeDrawerValue {
                denomination,
                value,
            });
        }
    }

    Ok(())
}
