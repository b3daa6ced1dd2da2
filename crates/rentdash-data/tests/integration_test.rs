//! End-to-end pipeline test: load -> select -> filter -> aggregate -> summarize

use chrono::{Month, NaiveDate};
use rentdash_data::{
    daily_rent, load_dataset, monthly_rent, summarize, RangeSelector, MONTH_ORDER,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn scenario_csv() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "date,season,month,weekday,holiday,weather_condition,casual,registered,total_rent"
    )
    .unwrap();
    writeln!(file, "2023-01-01,Spring,Jan,Sun,1,Clear,10,20,30").unwrap();
    writeln!(file, "2023-01-02,Spring,Jan,Mon,0,Misty,5,15,20").unwrap();
    writeln!(file, "2023-02-01,Spring,Feb,Wed,0,Clear,8,12,20").unwrap();
    file
}

#[test]
fn january_range_pass() {
    let file = scenario_csv();
    let table = load_dataset(file.path()).unwrap();

    let selector = RangeSelector::from_table(&table).unwrap();
    assert_eq!(selector.min_date(), date("2023-01-01"));
    assert_eq!(selector.max_date(), date("2023-02-01"));

    let range = selector
        .select(Some(date("2023-01-01")), Some(date("2023-01-31")))
        .unwrap();
    let filtered = table.between(&range);
    assert_eq!(filtered.len(), 2);

    let daily = daily_rent(&filtered);
    assert_eq!(daily.len(), 2);
    assert_eq!((daily[0].date, daily[0].value), (date("2023-01-01"), 30));
    assert_eq!((daily[1].date, daily[1].value), (date("2023-01-02"), 20));

    let monthly = monthly_rent(&filtered);
    assert_eq!(monthly.len(), 12);
    assert_eq!(monthly[0].month, Month::January);
    assert_eq!(monthly[0].total, 50);
    assert!(monthly[1..].iter().all(|m| m.total == 0));
    let order: Vec<Month> = monthly.iter().map(|m| m.month).collect();
    assert_eq!(order, MONTH_ORDER.to_vec());

    let summary = summarize(&filtered);
    assert_eq!(summary.total_casual, 15);
    assert_eq!(summary.total_registered, 35);
    assert_eq!(summary.total_users, 50);
}

#[test]
fn full_span_is_identity_and_recompute_is_stable() {
    let file = scenario_csv();
    let table = load_dataset(file.path()).unwrap();
    let selector = RangeSelector::from_table(&table).unwrap();

    let filtered = table.between(&selector.full_span());
    assert_eq!(filtered, table);

    // Two passes over the same filtered table must agree.
    assert_eq!(daily_rent(&filtered), daily_rent(&filtered));
    assert_eq!(monthly_rent(&filtered), monthly_rent(&filtered));
    assert_eq!(summarize(&filtered), summarize(&filtered));
}

#[test]
fn empty_selection_degrades_to_zeroes() {
    let file = scenario_csv();
    let table = load_dataset(file.path()).unwrap();
    let selector = RangeSelector::from_table(&table).unwrap();

    // An in-bounds window falling between record dates selects nothing.
    let range = selector
        .select(Some(date("2023-01-03")), Some(date("2023-01-31")))
        .unwrap();
    let filtered = table.between(&range);

    assert!(filtered.is_empty());
    assert!(daily_rent(&filtered).is_empty());
    assert_eq!(summarize(&filtered).total_users, 0);
    assert!(monthly_rent(&filtered).iter().all(|m| m.total == 0));
}
