//! Range filtering over the loaded table

use crate::range::DateRange;
use crate::record::RentalTable;
use tracing::debug;

impl RentalTable {
    /// Rows whose date falls within the range, both bounds inclusive.
    ///
    /// An empty result is a value, not an error; downstream aggregations
    /// degrade to empty or zero-filled results.
    pub fn between(&self, range: &DateRange) -> RentalTable {
        let records: Vec<_> = self
            .records()
            .iter()
            .filter(|r| range.contains(r.date))
            .cloned()
            .collect();
        debug!(selected = records.len(), of = self.len(), %range, "range filter applied");
        RentalTable::new(records)
    }
}
