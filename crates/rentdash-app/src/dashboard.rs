//! The recompute-and-render pass behind every range change

use rentdash_charts::{
    render_daily_rentals, render_monthly_rentals, render_seasonal_rentals, render_weather_rentals,
    render_weekday_holiday, ChartStyle,
};
use rentdash_common::Result;
use rentdash_config::Config;
use rentdash_data::{
    daily_casual, daily_registered, daily_rent, holiday_rent, monthly_rent, season_rent,
    summarize, weather_rent, weekday_rent, DailyPoint, DateRange, HolidayTotals, MonthlyTotal,
    RangeSelector, RentalSummary, RentalTable, SeasonTotals, WeatherTotal, WeekdayTotal,
};
use std::path::PathBuf;
use tracing::{info, warn};

/// Everything one pass derives from the filtered table: the eight
/// aggregate tables plus the metric summary. Recomputed from scratch on
/// every range change; nothing is cached across passes.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub daily: Vec<DailyPoint>,
    pub daily_casual: Vec<DailyPoint>,
    pub daily_registered: Vec<DailyPoint>,
    pub seasons: Vec<SeasonTotals>,
    pub monthly: Vec<MonthlyTotal>,
    pub weekdays: Vec<WeekdayTotal>,
    pub holidays: Vec<HolidayTotals>,
    pub weather: Vec<WeatherTotal>,
    pub summary: RentalSummary,
}

impl DashboardData {
    /// Derive all aggregate tables and the summary from a filtered table.
    pub fn compute(filtered: &RentalTable) -> Self {
        Self {
            daily: daily_rent(filtered),
            daily_casual: daily_casual(filtered),
            daily_registered: daily_registered(filtered),
            seasons: season_rent(filtered),
            monthly: monthly_rent(filtered),
            weekdays: weekday_rent(filtered),
            holidays: holiday_rent(filtered),
            weather: weather_rent(filtered),
            summary: summarize(filtered),
        }
    }
}

/// The dashboard: the process-wide immutable table, the selectable bounds,
/// and the output surface the chart panels are rendered into.
pub struct Dashboard {
    table: RentalTable,
    selector: RangeSelector,
    style: ChartStyle,
    output_dir: PathBuf,
}

impl Dashboard {
    /// Set up the dashboard over a loaded table, creating the output
    /// directory and copying the decorative sidebar image next to the
    /// chart panels.
    pub fn new(config: &Config, table: RentalTable) -> Result<Self> {
        let selector = RangeSelector::from_table(&table)?;

        let output_dir = config.output.directory.clone();
        std::fs::create_dir_all(&output_dir)?;

        if let Some(ref image) = config.data.sidebar_image {
            let target = output_dir.join(
                image
                    .file_name()
                    .unwrap_or_else(|| std::ffi::OsStr::new("sidebar.png")),
            );
            match std::fs::copy(image, &target) {
                Ok(_) => info!(image = %image.display(), "sidebar image copied"),
                Err(e) => warn!(image = %image.display(), error = %e, "sidebar image unavailable"),
            }
        }

        Ok(Self {
            table,
            selector,
            style: ChartStyle::new(
                config.chart.width,
                config.chart.height,
                &config.chart.background_color,
                &config.chart.font_family,
            ),
            output_dir,
        })
    }

    /// The selectable date bounds of the loaded dataset.
    pub fn selector(&self) -> &RangeSelector {
        &self.selector
    }

    /// Run one synchronous end-to-end pass for the given range: filter the
    /// table, derive every aggregate and the summary, and re-render all
    /// chart panels.
    pub fn render_pass(&self, range: &DateRange) -> Result<DashboardData> {
        let filtered = self.table.between(range);
        let data = DashboardData::compute(&filtered);

        render_daily_rentals(&data.daily, &self.style, &self.output_dir.join("daily.png"))?;
        render_monthly_rentals(
            &data.monthly,
            &self.style,
            &self.output_dir.join("monthly.png"),
        )?;
        render_seasonal_rentals(
            &data.seasons,
            &self.style,
            &self.output_dir.join("seasonal.png"),
        )?;
        render_weather_rentals(
            &data.weather,
            &self.style,
            &self.output_dir.join("weather.png"),
        )?;
        render_weekday_holiday(
            &data.weekdays,
            &data.holidays,
            &self.style,
            &self.output_dir.join("weekday_holiday.png"),
        )?;

        info!(%range, rows = filtered.len(), "dashboard pass complete");
        Ok(data)
    }
}
