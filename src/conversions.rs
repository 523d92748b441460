use crate::drawer::DrawerSnapshot;
use crate::types::RegisterRecord;

// Convert the flat CSV record into the engine's drawer type.
// The record's columns are already in canonical ascending order.

impl From<&RegisterRecord> for DrawerSnapshot {
    fn from(record: &RegisterRecord) -> Self {
        DrawerSnapshot::from_amounts([
            record.penny,
            record.nickel,
            record.dime,
            record.quarter,
            record.one,
            record.five,
            record.ten,
            record.twenty,
            record.one_hundred,
        ])
    }
}
