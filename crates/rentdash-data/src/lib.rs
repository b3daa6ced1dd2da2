//! # rentdash-data
//!
//! Dataset model and all pure computation for the rentdash dashboard:
//! loading the rental records CSV, selecting and filtering a date range,
//! and deriving the grouped-sum tables the chart panels are drawn from.
//!
//! Every function here is a single pass over an in-memory table with no
//! shared mutable state; a new result is computed from scratch on every
//! range change.

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod range;
pub mod record;
pub mod summary;

pub use aggregate::{
    daily_casual, daily_registered, daily_rent, holiday_rent, monthly_rent, season_rent,
    weather_rent, weekday_rent, DailyPoint, HolidayTotals, MonthlyTotal, SeasonTotals,
    WeatherTotal, WeekdayTotal, MONTH_ORDER,
};
pub use loader::load_dataset;
pub use range::{DateRange, RangeSelector};
pub use record::{RentalRecord, RentalTable};
pub use summary::{summarize, RentalSummary};
