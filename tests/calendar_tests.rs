use chrono::NaiveDate;
use presence_tool::calendar::{Holiday, HolidayCalendar, HolidayKind};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn weekends_are_not_working_days() {
    let cal = HolidayCalendar::new();
    // 2025-06-21 is a Saturday, 2025-06-22 is a Sunday
    assert!(!cal.is_working_day(d(2025, 6, 21)));
    assert!(!cal.is_working_day(d(2025, 6, 22)));
    assert!(cal.is_working_day(d(2025, 6, 23)));
}

#[test]
fn holidays_are_not_working_days() {
    let mut cal = HolidayCalendar::new();
    cal.add_holiday(Holiday::new(
        d(2025, 6, 30),
        "Company Holiday",
        HolidayKind::Company,
    ));
    assert!(!cal.is_working_day(d(2025, 6, 30)));

    let found = cal.holiday_on(d(2025, 6, 30)).expect("holiday present");
    assert_eq!(found.name, "Company Holiday");
    assert_eq!(found.kind, HolidayKind::Company);
    assert!(cal.holiday_on(d(2025, 7, 1)).is_none());
}

#[test]
fn nearest_working_day_keeps_working_dates() {
    let cal = HolidayCalendar::new();
    let tue = d(2025, 6, 24);
    assert_eq!(cal.nearest_working_day(tue), tue);
}

#[test]
fn nearest_working_day_prefers_backward() {
    let mut cal = HolidayCalendar::new();
    // Holiday on Thursday; Wednesday and Friday are both free, backward wins.
    cal.add_holiday(Holiday::new(d(2025, 6, 26), "Offsite", HolidayKind::Company));
    assert_eq!(cal.nearest_working_day(d(2025, 6, 26)), d(2025, 6, 25));
}

#[test]
fn nearest_working_day_goes_forward_when_backward_is_blocked() {
    let mut cal = HolidayCalendar::new();
    // Monday through Thursday are all holidays; from Thursday only Friday is left.
    for day in 23..=26 {
        cal.add_holiday(Holiday::new(
            d(2025, 6, day),
            format!("Closure {day}"),
            HolidayKind::Company,
        ));
    }
    assert_eq!(cal.nearest_working_day(d(2025, 6, 26)), d(2025, 6, 27));
}

#[test]
fn nearest_working_day_falls_back_to_the_original_date() {
    let mut cal = HolidayCalendar::new();
    // The whole Mon-Fri week is holidays and weekends bound the search.
    for day in 23..=27 {
        cal.add_holiday(Holiday::new(
            d(2025, 6, day),
            format!("Closure {day}"),
            HolidayKind::Company,
        ));
    }
    let wed = d(2025, 6, 25);
    assert_eq!(cal.nearest_working_day(wed), wed);
}

#[test]
fn us_federal_2025_matches_known_dates() {
    let cal = HolidayCalendar::us_federal(2025);
    assert!(cal.is_holiday(d(2025, 5, 26))); // Memorial Day
    assert!(cal.is_holiday(d(2025, 7, 4)));
    assert!(cal.is_holiday(d(2025, 9, 1))); // Labor Day
    assert!(cal.is_holiday(d(2025, 11, 27))); // Thanksgiving
    assert!(cal.is_holiday(d(2025, 12, 25)));
    assert_eq!(cal.len(), 10);

    let memorial = cal.holiday_on(d(2025, 5, 26)).unwrap();
    assert_eq!(memorial.name, "Memorial Day");
    assert_eq!(memorial.kind, HolidayKind::Federal);
}

#[test]
fn us_federal_range_covers_every_year() {
    let cal = HolidayCalendar::us_federal_range(2025, 2026);
    assert!(cal.is_holiday(d(2025, 12, 25)));
    assert!(cal.is_holiday(d(2026, 12, 25)));
    assert_eq!(cal.len(), 20);
}

#[test]
fn holiday_listing_is_sorted_by_date() {
    let mut cal = HolidayCalendar::new();
    cal.add_holidays([
        Holiday::new(d(2025, 12, 25), "Christmas Day", HolidayKind::Federal),
        Holiday::new(d(2025, 1, 1), "New Year's Day", HolidayKind::Federal),
        Holiday::new(d(2025, 6, 30), "Company Holiday", HolidayKind::Company),
    ]);
    let dates: Vec<NaiveDate> = cal.holidays().iter().map(|h| h.date).collect();
    assert_eq!(dates, vec![d(2025, 1, 1), d(2025, 6, 30), d(2025, 12, 25)]);
}
