//! Tests for the category default schedules and backfilling.

use chrono::{NaiveDate, Weekday};
use tripslot_engine::schedule::{QueryMoment, WEEK};
use tripslot_engine::templates::{backfill_opening_hours, default_schedule, Category};
use tripslot_engine::{is_open_at, HoursError, OpenResult, Place, WeeklySchedule};

// 2026-10-12 is a Monday.
fn on(weekday: Weekday, time: &str) -> QueryMoment {
    let day = 12 + weekday.num_days_from_monday();
    QueryMoment::new(
        NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
        time.parse().unwrap(),
    )
}

fn is_overnight(schedule: &WeeklySchedule) -> bool {
    WEEK.iter()
        .filter_map(|d| schedule.day(*d))
        .any(|hours| {
            let (open, close) = hours.window().unwrap();
            close < open
        })
}

#[test]
fn every_template_entry_parses() {
    for category in Category::ALL {
        let schedule = default_schedule(category);
        for weekday in WEEK {
            if let Some(hours) = schedule.day(weekday) {
                assert!(
                    hours.window().is_ok(),
                    "{} {:?} has malformed hours",
                    category,
                    weekday
                );
            }
        }
    }
}

#[test]
fn museums_close_on_mondays() {
    let museum = default_schedule(Category::Museum);
    assert!(museum.monday.is_none());
    assert_eq!(is_open_at(Some(museum), on(Weekday::Mon, "12:00")), OpenResult::Closed);
    assert_eq!(is_open_at(Some(museum), on(Weekday::Tue, "12:00")), OpenResult::Open);
}

#[test]
fn nightlife_has_no_monday_or_tuesday() {
    let nightlife = default_schedule(Category::Nightlife);
    assert!(nightlife.monday.is_none());
    assert!(nightlife.tuesday.is_none());
    assert_eq!(
        is_open_at(Some(nightlife), on(Weekday::Fri, "23:45")),
        OpenResult::Open
    );
    assert_eq!(
        is_open_at(Some(nightlife), on(Weekday::Tue, "23:45")),
        OpenResult::Closed
    );
}

#[test]
fn several_templates_run_past_midnight() {
    let overnight: Vec<Category> = Category::ALL
        .into_iter()
        .filter(|c| is_overnight(default_schedule(*c)))
        .collect();

    assert!(overnight.contains(&Category::Nightlife));
    assert!(overnight.contains(&Category::Restaurant));
    assert!(overnight.len() >= 2);
}

#[test]
fn template_table_is_shared() {
    let a = default_schedule(Category::Park) as *const WeeklySchedule;
    let b = default_schedule(Category::Park) as *const WeeklySchedule;
    assert_eq!(a, b);
}

#[test]
fn category_parsing() {
    assert_eq!("museum".parse::<Category>().unwrap(), Category::Museum);
    assert_eq!(" Nightlife ".parse::<Category>().unwrap(), Category::Nightlife);
    assert_eq!(
        "casino".parse::<Category>().unwrap_err(),
        HoursError::UnknownCategory("casino".to_string())
    );
    assert_eq!(serde_json::to_string(&Category::Cafe).unwrap(), "\"cafe\"");
}

#[test]
fn backfill_fills_only_missing_hours_with_known_category() {
    let real = WeeklySchedule::every_day("12:00", "13:00");
    let places = vec![
        Place::named("needs-hours").with_category("cafe"),
        Place::named("has-hours").with_category("cafe").with_hours(real.clone()),
        Place::named("odd-category").with_category("casino"),
        Place::named("no-category"),
    ];

    let filled = backfill_opening_hours(&places);

    assert_eq!(
        filled[0].opening_hours.as_ref(),
        Some(default_schedule(Category::Cafe))
    );
    assert_eq!(filled[1].opening_hours.as_ref(), Some(&real));
    assert!(filled[2].opening_hours.is_none());
    assert!(filled[3].opening_hours.is_none());
    assert!(places[0].opening_hours.is_none(), "input must be untouched");
}
