use crate::drawer::DrawerSnapshot;
use crate::register;
use crate::types::{OutputRecord, RegisterError, RegisterRecord};

/// Compute change for one register feed record.
pub fn handle_record(record: &RegisterRecord) -> Result<OutputRecord, RegisterError> {
    let drawer = DrawerSnapshot::from(record);
    let result = register::compute_change(record.price, record.payment, &drawer)?;
    Ok(OutputRecord::new(record.tx_id, &result))
}
