//! Grouped-sum aggregation over a filtered rental table
//!
//! Each function is a pure partition-and-sum over the rows it is given;
//! nothing is cached between calls, and an empty input table yields an
//! empty (or, for the monthly aggregate, zero-filled) result.

use crate::record::{RentalRecord, RentalTable};
use chrono::{Month, NaiveDate, Weekday};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Canonical month ordering used to reindex the monthly aggregate. Charts
/// depend on months appearing in calendar order even when the selected
/// range covers only part of the year.
pub const MONTH_ORDER: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// One date with a summed metric, used by the three daily aggregates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub value: u64,
}

/// Registered and casual totals for one season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonTotals {
    pub season: String,
    pub registered: u64,
    pub casual: u64,
}

/// Summed rentals for one calendar month slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotal {
    pub month: Month,
    pub total: u64,
}

/// Summed rentals for one weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayTotal {
    pub weekday: Weekday,
    pub total: u64,
}

/// Casual and registered totals for one holiday flag value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayTotals {
    pub holiday: bool,
    pub casual: u64,
    pub registered: u64,
}

/// Summed rentals for one weather condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherTotal {
    pub condition: String,
    pub total: u64,
}

fn sum_by_date(table: &RentalTable, metric: fn(&RentalRecord) -> u32) -> Vec<DailyPoint> {
    let mut by_date: HashMap<NaiveDate, u64> = HashMap::new();
    for record in table.records() {
        *by_date.entry(record.date).or_insert(0) += u64::from(metric(record));
    }

    let mut result: Vec<DailyPoint> = by_date
        .into_iter()
        .map(|(date, value)| DailyPoint { date, value })
        .collect();
    result.sort_by_key(|point| point.date);
    result
}

/// Total rentals per date.
pub fn daily_rent(table: &RentalTable) -> Vec<DailyPoint> {
    let result = sum_by_date(table, |r| r.total);
    debug!(groups = result.len(), "daily rental totals aggregated");
    result
}

/// Casual rentals per date.
pub fn daily_casual(table: &RentalTable) -> Vec<DailyPoint> {
    sum_by_date(table, |r| r.casual)
}

/// Registered rentals per date.
pub fn daily_registered(table: &RentalTable) -> Vec<DailyPoint> {
    sum_by_date(table, |r| r.registered)
}

/// Registered and casual totals per season.
pub fn season_rent(table: &RentalTable) -> Vec<SeasonTotals> {
    let mut by_season: BTreeMap<String, (u64, u64)> = BTreeMap::new();
    for record in table.records() {
        let entry = by_season.entry(record.season.clone()).or_insert((0, 0));
        entry.0 += u64::from(record.registered);
        entry.1 += u64::from(record.casual);
    }

    by_season
        .into_iter()
        .map(|(season, (registered, casual))| SeasonTotals {
            season,
            registered,
            casual,
        })
        .collect()
}

/// Total rentals per calendar month, reindexed onto [`MONTH_ORDER`].
///
/// Always yields exactly 12 rows, Jan through Dec; a month absent from the
/// filtered table appears with a zero total.
pub fn monthly_rent(table: &RentalTable) -> Vec<MonthlyTotal> {
    let mut totals = [0u64; 12];
    for record in table.records() {
        totals[record.month.number_from_month() as usize - 1] += u64::from(record.total);
    }

    MONTH_ORDER
        .iter()
        .map(|&month| MonthlyTotal {
            month,
            total: totals[month.number_from_month() as usize - 1],
        })
        .collect()
}

/// Total rentals per weekday, ordered Monday through Sunday.
pub fn weekday_rent(table: &RentalTable) -> Vec<WeekdayTotal> {
    let mut by_weekday: HashMap<Weekday, u64> = HashMap::new();
    for record in table.records() {
        *by_weekday.entry(record.weekday).or_insert(0) += u64::from(record.total);
    }

    let mut result: Vec<WeekdayTotal> = by_weekday
        .into_iter()
        .map(|(weekday, total)| WeekdayTotal { weekday, total })
        .collect();
    result.sort_by_key(|point| point.weekday.num_days_from_monday());
    result
}

/// Casual and registered totals split by the holiday flag, workdays first.
pub fn holiday_rent(table: &RentalTable) -> Vec<HolidayTotals> {
    let mut by_flag: BTreeMap<bool, (u64, u64)> = BTreeMap::new();
    for record in table.records() {
        let entry = by_flag.entry(record.holiday).or_insert((0, 0));
        entry.0 += u64::from(record.casual);
        entry.1 += u64::from(record.registered);
    }

    by_flag
        .into_iter()
        .map(|(holiday, (casual, registered))| HolidayTotals {
            holiday,
            casual,
            registered,
        })
        .collect()
}

/// Total rentals per weather condition.
pub fn weather_rent(table: &RentalTable) -> Vec<WeatherTotal> {
    let mut by_condition: BTreeMap<String, u64> = BTreeMap::new();
    for record in table.records() {
        *by_condition.entry(record.weather.clone()).or_insert(0) += u64::from(record.total);
    }

    by_condition
        .into_iter()
        .map(|(condition, total)| WeatherTotal { condition, total })
        .collect()
}
