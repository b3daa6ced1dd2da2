//! Scalar metric summary over the filtered table

use crate::record::RentalTable;

/// The three headline totals shown above the chart panels, computed from
/// the filtered table directly rather than from any aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RentalSummary {
    pub total_casual: u64,
    pub total_registered: u64,
    pub total_users: u64,
}

/// Sum the casual, registered, and total columns of the filtered table.
///
/// `total_users` equals `total_casual + total_registered` whenever the
/// source data satisfies its per-record consistency invariant; a mismatch
/// in the input passes through unchanged.
pub fn summarize(table: &RentalTable) -> RentalSummary {
    let mut summary = RentalSummary::default();
    for record in table.records() {
        summary.total_casual += u64::from(record.casual);
        summary.total_registered += u64::from(record.registered);
        summary.total_users += u64::from(record.total);
    }
    summary
}
