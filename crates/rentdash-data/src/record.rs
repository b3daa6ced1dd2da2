//! Rental record and table types

use chrono::{Month, NaiveDate, Weekday};
use rentdash_common::{RentDashError, Result};

/// One row of the source table: the rentals observed on a single calendar day.
///
/// `total` is carried through from the source file, which guarantees
/// `total == casual + registered`; it is not re-derived here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalRecord {
    pub date: NaiveDate,
    pub season: String,
    pub month: Month,
    pub weekday: Weekday,
    pub holiday: bool,
    pub weather: String,
    pub casual: u32,
    pub registered: u32,
    pub total: u32,
}

/// An ordered collection of rental records, sorted by date ascending after
/// load. Read-only for the lifetime of the process once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RentalTable {
    records: Vec<RentalRecord>,
}

impl RentalTable {
    /// Build a table from records, sorting chronologically.
    pub fn new(mut records: Vec<RentalRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        Self { records }
    }

    /// The records in date order.
    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest date in the table, `None` when empty.
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.records.first().map(|r| r.date)
    }

    /// Latest date in the table, `None` when empty.
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.records.last().map(|r| r.date)
    }
}

/// Parse a month cell: a 3-letter abbreviation or a full month name.
pub(crate) fn parse_month(value: &str) -> Result<Month> {
    value
        .trim()
        .parse::<Month>()
        .map_err(|_| RentDashError::data_load(format!("unrecognized month {value:?}")))
}

/// Parse a weekday cell: a name, or a digit 0-6 with 0 = Sunday (the
/// encoding used by the upstream bike-sharing dataset).
pub(crate) fn parse_weekday(value: &str) -> Result<Weekday> {
    let value = value.trim();
    if let Ok(n) = value.parse::<u8>() {
        return match n {
            0 => Ok(Weekday::Sun),
            1 => Ok(Weekday::Mon),
            2 => Ok(Weekday::Tue),
            3 => Ok(Weekday::Wed),
            4 => Ok(Weekday::Thu),
            5 => Ok(Weekday::Fri),
            6 => Ok(Weekday::Sat),
            _ => Err(RentDashError::data_load(format!(
                "weekday digit out of range: {n}"
            ))),
        };
    }
    value
        .parse::<Weekday>()
        .map_err(|_| RentDashError::data_load(format!("unrecognized weekday {value:?}")))
}

/// Parse a holiday flag cell: 0/1, yes/no, true/false, or the literal
/// holiday labels some exports use.
pub(crate) fn parse_holiday(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "holiday" => Ok(true),
        "0" | "false" | "no" | "not holiday" | "non-holiday" | "workingday" => Ok(false),
        other => Err(RentDashError::data_load(format!(
            "unrecognized holiday flag {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str) -> RentalRecord {
        RentalRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            season: "Spring".to_string(),
            month: Month::January,
            weekday: Weekday::Sun,
            holiday: false,
            weather: "Clear".to_string(),
            casual: 1,
            registered: 2,
            total: 3,
        }
    }

    #[test]
    fn test_table_sorts_on_construction() {
        let table = RentalTable::new(vec![
            record("2023-02-01"),
            record("2023-01-01"),
            record("2023-01-15"),
        ]);

        let dates: Vec<_> = table.records().iter().map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
                NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
            ]
        );
        assert_eq!(table.min_date(), dates.first().copied());
        assert_eq!(table.max_date(), dates.last().copied());
    }

    #[test]
    fn test_empty_table_has_no_bounds() {
        let table = RentalTable::default();
        assert!(table.is_empty());
        assert_eq!(table.min_date(), None);
        assert_eq!(table.max_date(), None);
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("Jan").unwrap(), Month::January);
        assert_eq!(parse_month("december").unwrap(), Month::December);
        assert!(parse_month("Smarch").is_err());
    }

    #[test]
    fn test_parse_weekday_names_and_digits() {
        assert_eq!(parse_weekday("Mon").unwrap(), Weekday::Mon);
        assert_eq!(parse_weekday("saturday").unwrap(), Weekday::Sat);
        assert_eq!(parse_weekday("0").unwrap(), Weekday::Sun);
        assert_eq!(parse_weekday("6").unwrap(), Weekday::Sat);
        assert!(parse_weekday("7").is_err());
        assert!(parse_weekday("Funday").is_err());
    }

    #[test]
    fn test_parse_holiday() {
        assert!(parse_holiday("1").unwrap());
        assert!(parse_holiday("Holiday").unwrap());
        assert!(!parse_holiday("0").unwrap());
        assert!(!parse_holiday("Not Holiday").unwrap());
        assert!(parse_holiday("maybe").is_err());
    }
}
