//! Combined weekday and holiday panel: two stacked subplots in one image

use crate::style::{ChartStyle, TAB_PALETTE};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use rentdash_common::{format_count, Result};
use rentdash_data::{HolidayTotals, WeekdayTotal};
use std::path::Path;
use tracing::info;

const GROUP_OFFSET: f64 = 0.18;
const GROUP_BAR_HALF_WIDTH: f64 = 0.15;
const BAR_HALF_WIDTH: f64 = 0.35;

fn holiday_label(flag: bool) -> &'static str {
    if flag {
        "Holiday"
    } else {
        "Non-holiday"
    }
}

/// Render the weekday/holiday panel: holiday rentals grouped by user type
/// on top, total rentals per weekday below, all bars annotated.
pub fn render_weekday_holiday(
    weekdays: &[WeekdayTotal],
    holidays: &[HolidayTotals],
    style: &ChartStyle,
    path: &Path,
) -> Result<()> {
    let height = style.height.saturating_mul(3) / 2;
    let root = BitMapBackend::new(path, (style.width, height)).into_drawing_area();
    root.fill(&style.background)?;

    let areas = root.split_evenly((2, 1));
    draw_holiday_subplot(&areas[0], holidays, style)?;
    draw_weekday_subplot(&areas[1], weekdays, style)?;

    root.present()?;
    info!(panel = "weekday_holiday", path = %path.display(), "chart rendered");
    Ok(())
}

fn draw_holiday_subplot(
    area: &DrawingArea<BitMapBackend, Shift>,
    holidays: &[HolidayTotals],
    style: &ChartStyle,
) -> Result<()> {
    let y_max = holidays
        .iter()
        .map(|h| h.registered.max(h.casual))
        .max()
        .unwrap_or(0)
        .max(1) as f64
        * 1.2;
    let x_max = holidays.len().max(1) as f64 - 0.5;

    let font = style.font_family.as_str();
    let mut chart = ChartBuilder::on(area)
        .caption(
            "Number of Rents (Registered vs Casual) based on Holiday",
            (font, 22),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(-0.5f64..x_max, 0f64..y_max)?;

    let x_fmt = |x: &f64| {
        let slot = x.round();
        if (x - slot).abs() > 0.25 {
            return String::new();
        }
        holidays
            .get(slot as usize)
            .map(|h| holiday_label(h.holiday))
            .unwrap_or_default()
            .to_string()
    };
    chart
        .configure_mesh()
        .x_labels(holidays.len().max(2))
        .x_label_formatter(&x_fmt)
        .label_style((font, 16))
        .draw()?;

    if !holidays.is_empty() {
        let registered_color = TAB_PALETTE[0];
        let casual_color = TAB_PALETTE[1];

        chart
            .draw_series(holidays.iter().enumerate().map(|(i, h)| {
                let center = i as f64 - GROUP_OFFSET;
                Rectangle::new(
                    [
                        (center - GROUP_BAR_HALF_WIDTH, 0.0),
                        (center + GROUP_BAR_HALF_WIDTH, h.registered as f64),
                    ],
                    registered_color.filled(),
                )
            }))?
            .label("Registered")
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 12, y + 6)], registered_color.filled())
            });
        chart
            .draw_series(holidays.iter().enumerate().map(|(i, h)| {
                let center = i as f64 + GROUP_OFFSET;
                Rectangle::new(
                    [
                        (center - GROUP_BAR_HALF_WIDTH, 0.0),
                        (center + GROUP_BAR_HALF_WIDTH, h.casual as f64),
                    ],
                    casual_color.filled(),
                )
            }))?
            .label("Casual")
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 12, y + 6)], casual_color.filled())
            });

        let annotation = (font, 13)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(holidays.iter().enumerate().flat_map(|(i, h)| {
            [
                Text::new(
                    format_count(h.registered),
                    (i as f64 - GROUP_OFFSET, h.registered as f64 + y_max * 0.01),
                    annotation.clone(),
                ),
                Text::new(
                    format_count(h.casual),
                    (i as f64 + GROUP_OFFSET, h.casual as f64 + y_max * 0.01),
                    annotation.clone(),
                ),
            ]
        }))?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font((font, 15))
            .draw()?;
    }

    Ok(())
}

fn draw_weekday_subplot(
    area: &DrawingArea<BitMapBackend, Shift>,
    weekdays: &[WeekdayTotal],
    style: &ChartStyle,
) -> Result<()> {
    let y_max = weekdays.iter().map(|w| w.total).max().unwrap_or(0).max(1) as f64 * 1.2;
    let x_max = weekdays.len().max(1) as f64 - 0.5;

    let font = style.font_family.as_str();
    let mut chart = ChartBuilder::on(area)
        .caption("Number of Rents based on Weekday", (font, 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(-0.5f64..x_max, 0f64..y_max)?;

    let x_fmt = |x: &f64| {
        let slot = x.round();
        if (x - slot).abs() > 0.25 {
            return String::new();
        }
        weekdays
            .get(slot as usize)
            .map(|w| w.weekday.to_string())
            .unwrap_or_default()
    };
    chart
        .configure_mesh()
        .x_labels(weekdays.len().max(2))
        .x_label_formatter(&x_fmt)
        .label_style((font, 16))
        .draw()?;

    if !weekdays.is_empty() {
        // One distinct palette colour per weekday; styling only.
        chart.draw_series(weekdays.iter().enumerate().map(|(i, w)| {
            Rectangle::new(
                [
                    (i as f64 - BAR_HALF_WIDTH, 0.0),
                    (i as f64 + BAR_HALF_WIDTH, w.total as f64),
                ],
                ChartStyle::palette_color(i).filled(),
            )
        }))?;

        let annotation = (font, 13)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(weekdays.iter().enumerate().map(|(i, w)| {
            Text::new(
                format_count(w.total),
                (i as f64, w.total as f64 + y_max * 0.01),
                annotation.clone(),
            )
        }))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use tempfile::tempdir;

    fn weekdays() -> Vec<WeekdayTotal> {
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .into_iter()
        .enumerate()
        .map(|(i, weekday)| WeekdayTotal {
            weekday,
            total: (i as u64 + 1) * 50,
        })
        .collect()
    }

    #[test]
    fn test_render_to_file() {
        let holidays = vec![
            HolidayTotals {
                holiday: false,
                casual: 300,
                registered: 900,
            },
            HolidayTotals {
                holiday: true,
                casual: 80,
                registered: 120,
            },
        ];

        let dir = tempdir().unwrap();
        let path = dir.path().join("weekday_holiday.png");
        render_weekday_holiday(&weekdays(), &holidays, &ChartStyle::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_render_empty_data_degrades() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("weekday_holiday_empty.png");
        render_weekday_holiday(&[], &[], &ChartStyle::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_holiday_labels() {
        assert_eq!(holiday_label(true), "Holiday");
        assert_eq!(holiday_label(false), "Non-holiday");
    }
}
