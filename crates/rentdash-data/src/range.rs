//! Date range selection against the loaded dataset bounds

use crate::record::RentalTable;
use chrono::NaiveDate;
use rentdash_common::{RentDashError, Result};
use tracing::debug;

/// An inclusive date range with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting a reversed pair.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(RentDashError::range(format!(
                "start date {start} is after end date {end}"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether a date falls inside the range, both bounds inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Presents the selectable date span of the loaded table and turns user
/// input into a validated [`DateRange`]. The default selection, before any
/// interaction, is the full span.
#[derive(Debug, Clone, Copy)]
pub struct RangeSelector {
    min_date: NaiveDate,
    max_date: NaiveDate,
}

impl RangeSelector {
    /// Derive the selectable bounds from the loaded table.
    pub fn from_table(table: &RentalTable) -> Result<Self> {
        match (table.min_date(), table.max_date()) {
            (Some(min_date), Some(max_date)) => Ok(Self { min_date, max_date }),
            _ => Err(RentDashError::data_load(
                "cannot select a range over an empty dataset",
            )),
        }
    }

    pub fn min_date(&self) -> NaiveDate {
        self.min_date
    }

    pub fn max_date(&self) -> NaiveDate {
        self.max_date
    }

    /// The default selection covering every loaded record.
    pub fn full_span(&self) -> DateRange {
        DateRange {
            start: self.min_date,
            end: self.max_date,
        }
    }

    /// Resolve a user-supplied pair into a range.
    ///
    /// A missing endpoint defaults to the matching dataset bound, and an
    /// out-of-bounds endpoint is clamped into the selectable span. A
    /// reversed pair is rejected so the caller can keep its previous valid
    /// selection.
    pub fn select(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<DateRange> {
        let start = start.unwrap_or(self.min_date).clamp(self.min_date, self.max_date);
        let end = end.unwrap_or(self.max_date).clamp(self.min_date, self.max_date);
        let range = DateRange::new(start, end)?;
        debug!(%range, "date range selected");
        Ok(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RentalRecord;
    use chrono::{Month, Weekday};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn table(dates: &[&str]) -> RentalTable {
        RentalTable::new(
            dates
                .iter()
                .map(|d| RentalRecord {
                    date: date(d),
                    season: "Spring".to_string(),
                    month: Month::January,
                    weekday: Weekday::Sun,
                    holiday: false,
                    weather: "Clear".to_string(),
                    casual: 1,
                    registered: 1,
                    total: 2,
                })
                .collect(),
        )
    }

    #[test]
    fn test_range_rejects_reversed_pair() {
        assert!(DateRange::new(date("2023-02-01"), date("2023-01-01")).is_err());
        assert!(DateRange::new(date("2023-01-01"), date("2023-01-01")).is_ok());
    }

    #[test]
    fn test_selector_bounds_and_default() {
        let selector =
            RangeSelector::from_table(&table(&["2023-03-05", "2023-01-01", "2023-02-10"])).unwrap();

        assert_eq!(selector.min_date(), date("2023-01-01"));
        assert_eq!(selector.max_date(), date("2023-03-05"));

        let full = selector.full_span();
        assert_eq!(full.start(), date("2023-01-01"));
        assert_eq!(full.end(), date("2023-03-05"));
    }

    #[test]
    fn test_selector_rejects_empty_table() {
        assert!(RangeSelector::from_table(&RentalTable::default()).is_err());
    }

    #[test]
    fn test_select_defaults_missing_endpoints() {
        let selector = RangeSelector::from_table(&table(&["2023-01-01", "2023-03-05"])).unwrap();

        let range = selector.select(None, Some(date("2023-02-01"))).unwrap();
        assert_eq!(range.start(), date("2023-01-01"));
        assert_eq!(range.end(), date("2023-02-01"));

        let range = selector.select(Some(date("2023-02-01")), None).unwrap();
        assert_eq!(range.end(), date("2023-03-05"));
    }

    #[test]
    fn test_select_clamps_out_of_bounds() {
        let selector = RangeSelector::from_table(&table(&["2023-01-01", "2023-03-05"])).unwrap();

        let range = selector
            .select(Some(date("2022-06-01")), Some(date("2024-01-01")))
            .unwrap();
        assert_eq!(range.start(), date("2023-01-01"));
        assert_eq!(range.end(), date("2023-03-05"));
    }

    #[test]
    fn test_select_rejects_reversed_pair() {
        let selector = RangeSelector::from_table(&table(&["2023-01-01", "2023-03-05"])).unwrap();
        let err = selector
            .select(Some(date("2023-03-01")), Some(date("2023-02-01")))
            .unwrap_err();
        assert!(err.to_string().contains("Range error"));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = DateRange::new(date("2023-01-01"), date("2023-01-31")).unwrap();
        assert!(range.contains(date("2023-01-01")));
        assert!(range.contains(date("2023-01-31")));
        assert!(!range.contains(date("2023-02-01")));
    }
}
