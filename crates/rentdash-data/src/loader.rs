//! Dataset loading from the rental records CSV

use crate::record::{parse_holiday, parse_month, parse_weekday, RentalRecord, RentalTable};
use chrono::NaiveDate;
use csv::StringRecord;
use rentdash_common::{RentDashError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Columns the dataset must carry. Extra columns are ignored.
const REQUIRED_COLUMNS: [&str; 9] = [
    "date",
    "season",
    "month",
    "weekday",
    "holiday",
    "weather_condition",
    "casual",
    "registered",
    "total_rent",
];

/// One CSV row before categorical parsing.
#[derive(Debug, Deserialize)]
struct RawRecord {
    date: String,
    season: String,
    month: String,
    weekday: String,
    holiday: String,
    weather_condition: String,
    casual: u32,
    registered: u32,
    total_rent: u32,
}

impl RawRecord {
    fn into_record(self) -> Result<RentalRecord> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").map_err(|e| {
            RentDashError::data_load_with_source(
                format!("unparseable date {:?}", self.date),
                e,
            )
        })?;

        Ok(RentalRecord {
            date,
            season: self.season.trim().to_string(),
            month: parse_month(&self.month)?,
            weekday: parse_weekday(&self.weekday)?,
            holiday: parse_holiday(&self.holiday)?,
            weather: self.weather_condition.trim().to_string(),
            casual: self.casual,
            registered: self.registered,
            total: self.total_rent,
        })
    }
}

fn validate_headers(headers: &StringRecord) -> Result<()> {
    for &expected in &REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h.trim() == expected) {
            return Err(RentDashError::data_load(format!(
                "missing required column: {expected}"
            )));
        }
    }
    Ok(())
}

/// Load the rental records table from a CSV file.
///
/// Parses the `date` column, sorts rows chronologically, and returns the
/// process-wide immutable table. Any missing file, missing column, or
/// unparseable cell is a fatal [`RentDashError::DataLoad`].
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<RentalTable> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| {
            RentDashError::data_load_with_source(
                format!("cannot open dataset {}", path.display()),
                e,
            )
        })?;

    validate_headers(reader.headers()?)?;

    let mut records = Vec::new();
    for row in reader.deserialize::<RawRecord>() {
        records.push(row?.into_record()?);
    }

    if records.is_empty() {
        return Err(RentDashError::data_load(format!(
            "dataset {} contains no rows",
            path.display()
        )));
    }

    let table = RentalTable::new(records);
    if let (Some(from), Some(to)) = (table.min_date(), table.max_date()) {
        info!(rows = table.len(), %from, %to, "dataset loaded");
    }
    debug!(path = %path.display(), "dataset source");

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Month, Weekday};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "date,season,month,weekday,holiday,weather_condition,casual,registered,total_rent";

    fn write_csv(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file
    }

    #[test]
    fn test_load_and_sort() {
        let file = write_csv(&[
            HEADER,
            "2023-01-02,Spring,Jan,Mon,0,Clear,5,15,20",
            "2023-01-01,Spring,Jan,Sun,1,Misty,10,20,30",
        ]);

        let table = load_dataset(file.path()).unwrap();
        assert_eq!(table.len(), 2);

        let first = &table.records()[0];
        assert_eq!(first.date, chrono::NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(first.month, Month::January);
        assert_eq!(first.weekday, Weekday::Sun);
        assert!(first.holiday);
        assert_eq!(first.weather, "Misty");
        assert_eq!(first.total, 30);
    }

    #[test]
    fn test_missing_file() {
        let err = load_dataset("/no/such/file.csv").unwrap_err();
        assert!(err.to_string().contains("Data load error"));
    }

    #[test]
    fn test_missing_column() {
        let file = write_csv(&[
            "date,season,month,weekday,holiday,casual,registered,total_rent",
            "2023-01-01,Spring,Jan,Sun,0,10,20,30",
        ]);

        let err = load_dataset(file.path()).unwrap_err();
        assert!(err.to_string().contains("weather_condition"));
    }

    #[test]
    fn test_unparseable_date() {
        let file = write_csv(&[HEADER, "01/02/2023,Spring,Jan,Mon,0,Clear,5,15,20"]);

        let err = load_dataset(file.path()).unwrap_err();
        assert!(err.to_string().contains("unparseable date"));
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let file = write_csv(&[HEADER]);

        let err = load_dataset(file.path()).unwrap_err();
        assert!(err.to_string().contains("no rows"));
    }

    #[test]
    fn test_extra_columns_ignored() {
        let file = write_csv(&[
            "date,season,month,weekday,holiday,weather_condition,casual,registered,total_rent,humidity",
            "2023-01-01,Spring,Jan,Sun,0,Clear,10,20,30,0.5",
        ]);

        let table = load_dataset(file.path()).unwrap();
        assert_eq!(table.len(), 1);
    }
}
