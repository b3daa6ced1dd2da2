//! # rentdash-charts
//!
//! Chart panel rendering for the rentdash dashboard, drawn natively with
//! plotters. Each module renders one panel from an already-aggregated
//! table; nothing here re-filters or re-aggregates the data it is given,
//! and an empty input degrades to an empty-axes chart.

pub mod daily;
pub mod monthly;
pub mod seasonal;
pub mod style;
pub mod weather;
pub mod weekday_holiday;

pub use daily::render_daily_rentals;
pub use monthly::render_monthly_rentals;
pub use seasonal::render_seasonal_rentals;
pub use style::ChartStyle;
pub use weather::render_weather_rentals;
pub use weekday_holiday::render_weekday_holiday;
